//! Application state container
//!
//! Owns the game, the analysis panel and the active sheet tab. All user
//! actions go through here so the view can stay a pure projection.

use gemini_analysis::{AnalysisPanel, AnalysisRequest, AnalysisResult, AnalysisTicket};
use sheet_core::{ClickEffect, Coord, Game, MoveRecord, RulesEngine};

/// Right-hand panel tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    GameData,
    Insights,
}

impl Tab {
    pub fn label(self) -> &'static str {
        match self {
            Tab::GameData => "SHEET1 (Game Data)",
            Tab::Insights => "SHEET2 (AI Insights)",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Workbook<R: RulesEngine> {
    game: Game<R>,
    analysis: AnalysisPanel,
    tab: Tab,
}

impl<R: RulesEngine> Workbook<R> {
    pub fn new(game: Game<R>) -> Self {
        Self {
            game,
            analysis: AnalysisPanel::new(),
            tab: Tab::GameData,
        }
    }

    pub fn game(&self) -> &Game<R> {
        &self.game
    }

    pub fn analysis(&self) -> &AnalysisPanel {
        &self.analysis
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn click(&mut self, square: Coord) -> ClickEffect {
        self.game.click(square)
    }

    pub fn undo(&mut self) -> Option<MoveRecord> {
        self.game.undo()
    }

    /// New game: fresh position, empty history, no selection, no analysis.
    pub fn reset(&mut self) {
        self.game.reset();
        self.analysis.reset();
    }

    /// Start an analysis of the current position and show the insights tab.
    pub fn begin_analysis(&mut self) -> AnalysisTicket {
        let request = AnalysisRequest {
            fen: self.game.fen(),
            history: self.game.history().into_iter().map(|m| m.san).collect(),
        };
        self.tab = Tab::Insights;
        self.analysis.begin(request)
    }

    pub fn finish_analysis(&mut self, token: u64, result: AnalysisResult) -> bool {
        self.analysis.resolve(token, result)
    }
}

#[cfg(test)]
#[path = "workbook_tests.rs"]
mod workbook_tests;
