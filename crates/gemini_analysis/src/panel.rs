//! Analysis request lifecycle
//!
//! Every request gets a ticket with a strictly increasing token. A response
//! is applied only if its token is the latest one issued, so a slow reply
//! can never overwrite a newer one, and a reset discards whatever is still
//! in flight.

use crate::{AnalysisRequest, AnalysisResult};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Idle,
    Pending,
    Resolved,
}

/// Handle for one outbound analysis call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisTicket {
    pub token: u64,
    pub request: AnalysisRequest,
}

#[derive(Debug, Clone, Default)]
pub struct AnalysisPanel {
    lifecycle: Lifecycle,
    result: Option<AnalysisResult>,
    latest: u64,
}

impl AnalysisPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_pending(&self) -> bool {
        self.lifecycle == Lifecycle::Pending
    }

    /// Last applied result. Kept across moves until the next request resolves.
    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    /// Start a new request. Earlier tickets become stale.
    pub fn begin(&mut self, request: AnalysisRequest) -> AnalysisTicket {
        self.latest += 1;
        self.lifecycle = Lifecycle::Pending;
        debug!(token = self.latest, "analysis requested");
        AnalysisTicket {
            token: self.latest,
            request,
        }
    }

    /// Apply a response. Returns false when the ticket was superseded.
    pub fn resolve(&mut self, token: u64, result: AnalysisResult) -> bool {
        if token != self.latest || self.lifecycle != Lifecycle::Pending {
            debug!(token, latest = self.latest, "dropping stale analysis");
            return false;
        }
        self.result = Some(result);
        self.lifecycle = Lifecycle::Resolved;
        true
    }

    /// Clear the result and invalidate anything in flight.
    pub fn reset(&mut self) {
        self.latest += 1;
        self.result = None;
        self.lifecycle = Lifecycle::Idle;
    }
}

#[cfg(test)]
#[path = "panel_tests.rs"]
mod panel_tests;
