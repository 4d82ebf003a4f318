//! ExcelChess core
//!
//! Board interaction for the spreadsheet chess UI:
//! - A narrow adapter over the `shakmaty` rules library
//! - The click-driven selection state machine
//! - Pure projections of game state into display facts
//!
//! No chess rules are implemented here; legality, notation and game-end
//! detection are delegated to the rules engine.

pub mod rules;
pub mod selection;
pub mod types;
pub mod view;

pub use rules::{MoveRejected, RulesEngine, RulesError, ShakmatyRules};
pub use selection::{ClickEffect, Game, Selection};
pub use types::*;
