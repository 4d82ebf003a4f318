//! Display facts derived from the game
//!
//! Everything here is a pure function of the game state; the GUI only lays
//! the results out.

use crate::rules::RulesEngine;
use crate::selection::Game;
use crate::types::{Coord, MoveRecord, Outcome, Piece, Side};

/// Number of moves shown in the history table
pub const HISTORY_ROWS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    pub coord: Coord,
    pub piece: Option<Piece>,
    pub dark: bool,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    /// 1-based ply number
    pub entry: usize,
    pub player: &'static str,
    pub san: String,
    /// "E2:E4"
    pub range: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeBanner {
    pub title: String,
    pub subtitle: String,
}

/// The 64 cells in display order, rank 8 first.
pub fn board_cells<R: RulesEngine>(game: &Game<R>) -> Vec<CellView> {
    let selected = game.selected();
    Coord::all()
        .map(|coord| CellView {
            coord,
            piece: game.piece_at(coord),
            dark: coord.is_dark(),
            selected: selected == Some(coord),
        })
        .collect()
}

/// Text of the read-only formula bar.
pub fn formula_bar<R: RulesEngine>(game: &Game<R>) -> String {
    match game.selected() {
        Some(origin) => {
            let piece = game
                .piece_at(origin)
                .map(|p| p.kind.code().to_ascii_uppercase().to_string())
                .unwrap_or_else(|| "EMPTY".to_string());
            format!("{} Piece: {}", origin.to_string().to_uppercase(), piece)
        }
        None => format!("STATUS: {}'S TURN", game.flags().turn.label()),
    }
}

pub fn turn_banner<R: RulesEngine>(game: &Game<R>) -> &'static str {
    match game.flags().turn {
        Side::White => "WHITE (P1)",
        Side::Black => "BLACK (P2)",
    }
}

pub fn check_banner<R: RulesEngine>(game: &Game<R>) -> &'static str {
    if game.flags().is_check {
        "TRUE"
    } else {
        "FALSE"
    }
}

/// The most recent moves, oldest first.
pub fn history_rows(history: &[MoveRecord]) -> Vec<HistoryRow> {
    let start = history.len().saturating_sub(HISTORY_ROWS);
    history[start..]
        .iter()
        .enumerate()
        .map(|(i, record)| HistoryRow {
            entry: start + i + 1,
            player: record.side.label(),
            san: record.san.clone(),
            range: format!("{}:{}", record.from, record.to).to_uppercase(),
        })
        .collect()
}

pub fn outcome_banner(outcome: Outcome) -> Option<OutcomeBanner> {
    let (title, how) = match outcome {
        Outcome::None => return None,
        Outcome::WhiteWins => ("White Wins!", "Checkmate".to_string()),
        Outcome::BlackWins => ("Black Wins!", "Checkmate".to_string()),
        Outcome::Draw(reason) => ("Draw!", reason.to_string()),
    };
    Some(OutcomeBanner {
        title: title.to_string(),
        subtitle: format!("Match concludes with {how}."),
    })
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod view_tests;
