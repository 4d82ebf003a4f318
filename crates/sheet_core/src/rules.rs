//! Rules engine adapter
//!
//! The rest of the crate never inspects a position directly: it proposes
//! moves through [`RulesEngine`] and reads back the derived facts. Legality,
//! notation and game-end detection all come from the `shakmaty` crate.

use crate::types::{Coord, DrawReason, Flags, MoveRecord, Piece, PieceKind, Side};
use shakmaty::fen::Fen;
use shakmaty::san::SanPlus;
use shakmaty::{CastlingMode, Chess, Color, EnPassantMode, File, Move, Position, Rank, Role, Square};
use thiserror::Error;
use tracing::debug;

/// The engine refused a proposed move. Authoritative for this exact pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("illegal move {from}-{to}")]
pub struct MoveRejected {
    pub from: Coord,
    pub to: Coord,
}

#[derive(Debug, Error)]
pub enum RulesError {
    #[error("invalid FEN `{fen}`: {reason}")]
    InvalidFen { fen: String, reason: String },
}

/// Narrow interface over a chess rules library.
pub trait RulesEngine {
    /// Discard the game and start again from the initial position.
    fn reset(&mut self);

    /// Submit a move. On success the position is replaced by its successor
    /// and the returned record is appended to the history.
    fn propose_move(
        &mut self,
        from: Coord,
        to: Coord,
        promotion: PieceKind,
    ) -> Result<MoveRecord, MoveRejected>;

    fn flags(&self) -> Flags;

    /// Accepted moves, oldest first
    fn history(&self) -> Vec<MoveRecord>;

    /// Revert the most recent move. `None` when there is nothing to undo.
    fn undo(&mut self) -> Option<MoveRecord>;

    fn piece_at(&self, coord: Coord) -> Option<Piece>;

    /// Snapshot of the current position in Forsyth-Edwards Notation
    fn fen(&self) -> String;
}

/// [`RulesEngine`] backed by `shakmaty`.
///
/// Positions are immutable values, so undo keeps each predecessor alongside
/// the move that left it.
#[derive(Debug, Clone)]
pub struct ShakmatyRules {
    start: Chess,
    position: Chess,
    played: Vec<(Chess, MoveRecord)>,
}

impl Default for ShakmatyRules {
    fn default() -> Self {
        Self::new()
    }
}

impl ShakmatyRules {
    pub fn new() -> Self {
        Self {
            start: Chess::default(),
            position: Chess::default(),
            played: Vec::new(),
        }
    }

    /// Start from an arbitrary position. Reset returns to this position.
    pub fn from_fen(fen: &str) -> Result<Self, RulesError> {
        let invalid = |reason: String| RulesError::InvalidFen {
            fen: fen.to_string(),
            reason,
        };
        let parsed: Fen = fen.trim().parse().map_err(|e| invalid(format!("{e}")))?;
        let position: Chess = parsed
            .into_position(CastlingMode::Standard)
            .map_err(|e| invalid(format!("{e}")))?;
        Ok(Self {
            start: position.clone(),
            position,
            played: Vec::new(),
        })
    }

    fn find_move(&self, from: Square, to: Square, promotion: Role) -> Option<Move> {
        let candidates: Vec<Move> = self
            .position
            .legal_moves()
            .into_iter()
            .filter(|m| m.from() == Some(from) && destination(m) == to)
            .collect();

        if candidates.iter().any(|m| m.promotion().is_some()) {
            candidates
                .into_iter()
                .find(|m| m.promotion() == Some(promotion))
        } else {
            candidates.into_iter().next()
        }
    }

    /// Draw reason for the current position, if any.
    fn draw_reason(&self) -> Option<DrawReason> {
        let pos = &self.position;
        if pos.is_stalemate() {
            Some(DrawReason::Stalemate)
        } else if pos.is_insufficient_material() {
            Some(DrawReason::InsufficientMaterial)
        } else if pos.halfmoves() >= 100 && !pos.is_checkmate() {
            Some(DrawReason::FiftyMoves)
        } else if self.repetitions() >= 3 {
            Some(DrawReason::Repetition)
        } else {
            None
        }
    }

    /// How many times the current position has occurred, this one included.
    fn repetitions(&self) -> usize {
        let current = repetition_key(&self.position);
        1 + self
            .played
            .iter()
            .filter(|(pos, _)| repetition_key(pos) == current)
            .count()
    }
}

impl RulesEngine for ShakmatyRules {
    fn reset(&mut self) {
        self.position = self.start.clone();
        self.played.clear();
    }

    fn propose_move(
        &mut self,
        from: Coord,
        to: Coord,
        promotion: PieceKind,
    ) -> Result<MoveRecord, MoveRejected> {
        let rejected = MoveRejected { from, to };
        let Some(m) = self.find_move(to_square(from), to_square(to), to_role(promotion)) else {
            debug!(%from, %to, "move rejected by rules engine");
            return Err(rejected);
        };

        let san = SanPlus::from_move(self.position.clone(), &m).to_string();
        let record = MoveRecord {
            from,
            to,
            piece: from_role(m.role()),
            captured: m.capture().map(from_role),
            side: from_color(self.position.turn()),
            san,
            promotion: m.promotion().map(from_role),
        };

        let mut next = self.position.clone();
        next.play_unchecked(&m);
        let previous = std::mem::replace(&mut self.position, next);
        self.played.push((previous, record.clone()));

        debug!(san = %record.san, "move accepted");
        Ok(record)
    }

    fn flags(&self) -> Flags {
        let draw_reason = self.draw_reason();
        Flags {
            turn: from_color(self.position.turn()),
            is_check: self.position.is_check(),
            is_checkmate: self.position.is_checkmate(),
            is_draw: draw_reason.is_some(),
            draw_reason,
        }
    }

    fn history(&self) -> Vec<MoveRecord> {
        self.played.iter().map(|(_, record)| record.clone()).collect()
    }

    fn undo(&mut self) -> Option<MoveRecord> {
        let (previous, record) = self.played.pop()?;
        self.position = previous;
        Some(record)
    }

    fn piece_at(&self, coord: Coord) -> Option<Piece> {
        self.position.board().piece_at(to_square(coord)).map(|p| Piece {
            side: from_color(p.color),
            kind: from_role(p.role),
        })
    }

    fn fen(&self) -> String {
        Fen::from_position(self.position.clone(), EnPassantMode::Legal).to_string()
    }
}

/// Where the king lands for castling; the library encodes it as king-takes-rook.
fn destination(m: &Move) -> Square {
    match *m {
        Move::Castle { king, rook } => {
            let file = if rook.file() > king.file() {
                File::G
            } else {
                File::C
            };
            Square::from_coords(file, king.rank())
        }
        _ => m.to(),
    }
}

/// Position identity for repetition: placement, side, castling, en passant.
fn repetition_key(pos: &Chess) -> String {
    let fen = Fen::from_position(pos.clone(), EnPassantMode::Legal).to_string();
    fen.split_whitespace().take(4).collect::<Vec<_>>().join(" ")
}

fn to_square(coord: Coord) -> Square {
    Square::from_coords(
        File::new(u32::from(coord.file())),
        Rank::new(u32::from(coord.rank())),
    )
}

fn to_role(kind: PieceKind) -> Role {
    match kind {
        PieceKind::Pawn => Role::Pawn,
        PieceKind::Knight => Role::Knight,
        PieceKind::Bishop => Role::Bishop,
        PieceKind::Rook => Role::Rook,
        PieceKind::Queen => Role::Queen,
        PieceKind::King => Role::King,
    }
}

fn from_role(role: Role) -> PieceKind {
    match role {
        Role::Pawn => PieceKind::Pawn,
        Role::Knight => PieceKind::Knight,
        Role::Bishop => PieceKind::Bishop,
        Role::Rook => PieceKind::Rook,
        Role::Queen => PieceKind::Queen,
        Role::King => PieceKind::King,
    }
}

fn from_color(color: Color) -> Side {
    match color {
        Color::White => Side::White,
        Color::Black => Side::Black,
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
