//! Click-driven move input
//!
//! Turns a sequence of square clicks into move proposals. The only state kept
//! here is the selected origin square; everything else is read back from the
//! rules engine.

use crate::rules::RulesEngine;
use crate::types::{Coord, Flags, MoveRecord, Outcome, Piece, PieceKind};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Idle,
    Armed(Coord),
}

impl Selection {
    pub fn origin(self) -> Option<Coord> {
        match self {
            Selection::Idle => None,
            Selection::Armed(origin) => Some(origin),
        }
    }
}

/// What a single click did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickEffect {
    /// Game already over, or an idle click on a square without a friendly piece
    Ignored,
    Selected(Coord),
    Deselected,
    Moved(MoveRecord),
    /// The engine refused the move; `rearmed` is set when the clicked square
    /// held a friendly piece and became the new origin.
    Rejected { rearmed: Option<Coord> },
}

/// Owns the rules engine and the current selection.
///
/// This is the single writer for game state: board, history and selection
/// only change through its methods.
#[derive(Debug, Clone)]
pub struct Game<R: RulesEngine> {
    rules: R,
    selection: Selection,
    promotion: PieceKind,
}

impl<R: RulesEngine + Default> Default for Game<R> {
    fn default() -> Self {
        Self::new(R::default())
    }
}

impl<R: RulesEngine> Game<R> {
    pub fn new(rules: R) -> Self {
        Self {
            rules,
            selection: Selection::Idle,
            promotion: PieceKind::Queen,
        }
    }

    /// Piece used when a pawn reaches the last rank. Defaults to queen.
    pub fn with_promotion(mut self, promotion: PieceKind) -> Self {
        self.promotion = promotion;
        self
    }

    pub fn promotion(&self) -> PieceKind {
        self.promotion
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn selected(&self) -> Option<Coord> {
        self.selection.origin()
    }

    pub fn flags(&self) -> Flags {
        self.rules.flags()
    }

    pub fn outcome(&self) -> Outcome {
        Outcome::from_flags(&self.rules.flags())
    }

    pub fn history(&self) -> Vec<MoveRecord> {
        self.rules.history()
    }

    pub fn piece_at(&self, coord: Coord) -> Option<Piece> {
        self.rules.piece_at(coord)
    }

    pub fn fen(&self) -> String {
        self.rules.fen()
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Handle a click on `square`.
    pub fn click(&mut self, square: Coord) -> ClickEffect {
        if self.outcome().is_over() {
            return ClickEffect::Ignored;
        }

        match self.selection {
            Selection::Idle => {
                if self.is_friendly(square) {
                    self.selection = Selection::Armed(square);
                    ClickEffect::Selected(square)
                } else {
                    ClickEffect::Ignored
                }
            }
            Selection::Armed(origin) if origin == square => {
                self.selection = Selection::Idle;
                ClickEffect::Deselected
            }
            Selection::Armed(origin) => {
                match self.rules.propose_move(origin, square, self.promotion) {
                    Ok(record) => {
                        self.selection = Selection::Idle;
                        info!(san = %record.san, side = %record.side.code(), "move played");
                        ClickEffect::Moved(record)
                    }
                    Err(rejected) => {
                        debug!(%rejected, "selection redirected");
                        if self.is_friendly(square) {
                            self.selection = Selection::Armed(square);
                            ClickEffect::Rejected {
                                rearmed: Some(square),
                            }
                        } else {
                            self.selection = Selection::Idle;
                            ClickEffect::Rejected { rearmed: None }
                        }
                    }
                }
            }
        }
    }

    /// Take back the last move. A no-op on an empty history, apart from
    /// clearing the selection.
    pub fn undo(&mut self) -> Option<MoveRecord> {
        self.selection = Selection::Idle;
        let undone = self.rules.undo();
        if let Some(record) = &undone {
            info!(san = %record.san, "move undone");
        }
        undone
    }

    pub fn reset(&mut self) {
        self.rules.reset();
        self.selection = Selection::Idle;
        info!("new game");
    }

    fn is_friendly(&self, square: Coord) -> bool {
        let turn = self.rules.flags().turn;
        self.rules
            .piece_at(square)
            .is_some_and(|piece| piece.side == turn)
    }
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod selection_tests;
