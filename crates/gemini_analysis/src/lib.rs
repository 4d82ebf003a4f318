//! Position analysis for ExcelChess
//!
//! This crate provides:
//! - The [`AnalysisService`] seam and its Gemini implementation
//! - The request lifecycle behind the analysis panel
//!
//! Failures never escape to the caller as errors the UI must handle:
//! [`analyze_or_fallback`] turns them into [`AnalysisResult::unavailable`].

mod config;
mod gemini;
mod panel;

pub use config::*;
pub use gemini::*;
pub use panel::*;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// What is sent for analysis: the position and the moves that led to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub fen: String,
    /// SAN of every move played, oldest first
    pub history: Vec<String>,
}

/// Structured reply from the analysis service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub evaluation: String,
    pub best_move: String,
    pub commentary: String,
    pub suggested_line: Vec<String>,
}

impl AnalysisResult {
    /// Placeholder shown when the service could not produce an analysis.
    pub fn unavailable() -> Self {
        Self {
            evaluation: "N/A".to_string(),
            best_move: "Unable to calculate".to_string(),
            commentary: "An error occurred during data processing.".to_string(),
            suggested_line: Vec::new(),
        }
    }
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("no API key found in ${0}")]
    MissingCredential(String),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("reply contained no text")]
    EmptyReply,
    #[error("malformed analysis: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Anything that can comment on a position.
#[async_trait]
pub trait AnalysisService: Send + Sync {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError>;

    /// Name shown in the UI
    fn name(&self) -> &str;
}

/// Run an analysis, substituting the placeholder result on any failure.
pub async fn analyze_or_fallback(
    service: &dyn AnalysisService,
    request: &AnalysisRequest,
) -> AnalysisResult {
    match service.analyze(request).await {
        Ok(result) => result,
        Err(e) => {
            warn!(service = service.name(), error = %e, "analysis failed");
            AnalysisResult::unavailable()
        }
    }
}
