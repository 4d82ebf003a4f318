use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    #[serde(rename = "w")]
    White,
    #[serde(rename = "b")]
    Black,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Single-letter code used in position strings and move records
    pub fn code(self) -> char {
        match self {
            Side::White => 'w',
            Side::Black => 'b',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Side::White => "WHITE",
            Side::Black => "BLACK",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    #[serde(rename = "p")]
    Pawn,
    #[serde(rename = "n")]
    Knight,
    #[serde(rename = "b")]
    Bishop,
    #[serde(rename = "r")]
    Rook,
    #[serde(rename = "q")]
    Queen,
    #[serde(rename = "k")]
    King,
}

impl PieceKind {
    pub fn code(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_code(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub side: Side,
    pub kind: PieceKind,
}

/// A board square, file a-h and rank 1-8.
///
/// Stored zero-based; formats as algebraic text ("e2").
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    file: u8,
    rank: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid square `{0}`, expected a file a-h followed by a rank 1-8")]
pub struct ParseCoordError(pub String);

impl Coord {
    /// `file` and `rank` are zero-based; out-of-range values give `None`.
    pub fn new(file: u8, rank: u8) -> Option<Coord> {
        if file < 8 && rank < 8 {
            Some(Coord { file, rank })
        } else {
            None
        }
    }

    pub fn file(self) -> u8 {
        self.file
    }

    pub fn rank(self) -> u8 {
        self.rank
    }

    pub fn file_char(self) -> char {
        (b'a' + self.file) as char
    }

    pub fn rank_char(self) -> char {
        (b'1' + self.rank) as char
    }

    /// a1 is a dark square.
    pub fn is_dark(self) -> bool {
        (self.file + self.rank) % 2 == 0
    }

    /// All squares in display order: rank 8 down to rank 1, file a to h.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..8u8)
            .rev()
            .flat_map(|rank| (0..8u8).map(move |file| Coord { file, rank }))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl FromStr for Coord {
    type Err = ParseCoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let b = s.as_bytes();
        if b.len() != 2 {
            return Err(ParseCoordError(s.to_string()));
        }
        let f = b[0].to_ascii_lowercase();
        let r = b[1];
        if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
            return Err(ParseCoordError(s.to_string()));
        }
        Ok(Coord {
            file: f - b'a',
            rank: r - b'1',
        })
    }
}

impl Serialize for Coord {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Coord {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A move accepted by the rules engine. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub from: Coord,
    pub to: Coord,
    pub piece: PieceKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captured: Option<PieceKind>,
    #[serde(rename = "color")]
    pub side: Side,
    /// Standard Algebraic Notation, including check suffixes
    pub san: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion: Option<PieceKind>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawReason {
    Stalemate,
    InsufficientMaterial,
    FiftyMoves,
    Repetition,
}

impl fmt::Display for DrawReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawReason::Stalemate => write!(f, "Stalemate"),
            DrawReason::InsufficientMaterial => write!(f, "Insufficient Material"),
            DrawReason::FiftyMoves => write!(f, "the Fifty-Move Rule"),
            DrawReason::Repetition => write!(f, "Threefold Repetition"),
        }
    }
}

/// Facts the rules engine derives from the current position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flags {
    pub turn: Side,
    pub is_check: bool,
    pub is_checkmate: bool,
    pub is_draw: bool,
    pub draw_reason: Option<DrawReason>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    None,
    WhiteWins,
    BlackWins,
    Draw(DrawReason),
}

impl Outcome {
    pub fn from_flags(flags: &Flags) -> Outcome {
        if flags.is_checkmate {
            match flags.turn.other() {
                Side::White => Outcome::WhiteWins,
                Side::Black => Outcome::BlackWins,
            }
        } else if flags.is_draw {
            Outcome::Draw(flags.draw_reason.unwrap_or(DrawReason::Stalemate))
        } else {
            Outcome::None
        }
    }

    pub fn is_over(self) -> bool {
        self != Outcome::None
    }

    pub fn winner(self) -> Option<Side> {
        match self {
            Outcome::WhiteWins => Some(Side::White),
            Outcome::BlackWins => Some(Side::Black),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
