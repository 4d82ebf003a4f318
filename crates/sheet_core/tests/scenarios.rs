//! End-to-end click scenarios against the real rules engine
//!
//! Covers the behaviours a user can observe from the board:
//! - Basic move entry and turn hand-over
//! - Undo followed by replaying the same move
//! - Reset
//! - Checkmate and outcome classification

use sheet_core::{ClickEffect, Coord, Game, Outcome, Selection, ShakmatyRules, Side};

fn c(s: &str) -> Coord {
    s.parse().unwrap()
}

fn play(game: &mut Game<ShakmatyRules>, from: &str, to: &str) {
    game.click(c(from));
    let effect = game.click(c(to));
    assert!(
        matches!(effect, ClickEffect::Moved(_)),
        "{from}-{to} should be legal, got {effect:?}"
    );
}

// =============================================================================
// Move entry
// =============================================================================

#[test]
fn test_e2_e4_from_initial_position() {
    let mut game = Game::new(ShakmatyRules::new());
    play(&mut game, "e2", "e4");

    let history = game.history();
    assert_eq!(history.len(), 1);
    let json = serde_json::to_value(&history[0]).unwrap();
    assert_eq!(json["from"], "e2");
    assert_eq!(json["to"], "e4");
    assert_eq!(json["color"], "w");
    assert_eq!(json["san"], "e4");
    assert_eq!(game.flags().turn, Side::Black);
}

#[test]
fn test_empty_square_click_while_idle() {
    let mut game = Game::new(ShakmatyRules::new());
    let fen = game.fen();
    assert_eq!(game.click(c("d5")), ClickEffect::Ignored);
    assert_eq!(game.selection(), Selection::Idle);
    assert_eq!(game.fen(), fen);
}

// =============================================================================
// Undo / reset
// =============================================================================

#[test]
fn test_undo_then_replay_restores_position() {
    let mut game = Game::new(ShakmatyRules::new());
    play(&mut game, "e2", "e4");
    play(&mut game, "c7", "c5");

    let fen = game.fen();
    let len = game.history().len();

    let undone = game.undo().unwrap();
    assert_eq!(game.history().len(), len - 1);

    play(&mut game, &undone.from.to_string(), &undone.to.to_string());
    assert_eq!(game.fen(), fen);
    assert_eq!(game.history().len(), len);
}

#[test]
fn test_reset_yields_initial_state() {
    let mut game = Game::new(ShakmatyRules::new());
    let initial = game.fen();
    play(&mut game, "d2", "d4");
    game.click(c("g8"));

    game.reset();
    assert!(game.history().is_empty());
    assert_eq!(game.fen(), initial);
    assert_eq!(game.selected(), None);
    assert_eq!(game.outcome(), Outcome::None);
}

// =============================================================================
// Outcome
// =============================================================================

#[test]
fn test_scholars_mate_outcome() {
    let mut game = Game::new(ShakmatyRules::new());
    for (from, to) in [
        ("e2", "e4"),
        ("e7", "e5"),
        ("f1", "c4"),
        ("b8", "c6"),
        ("d1", "h5"),
        ("g8", "f6"),
    ] {
        assert_eq!(game.outcome(), Outcome::None);
        play(&mut game, from, to);
    }
    play(&mut game, "h5", "f7");

    let flags = game.flags();
    assert!(flags.is_checkmate);
    assert_eq!(flags.turn, Side::Black);
    assert_eq!(game.outcome(), Outcome::WhiteWins);
    assert_eq!(game.outcome().winner(), Some(flags.turn.other()));
    assert_eq!(game.history().last().map(|m| m.san.as_str()), Some("Qxf7#"));

    // Board is frozen until reset or undo
    assert_eq!(game.click(c("e8")), ClickEffect::Ignored);
    game.undo();
    assert_eq!(game.outcome(), Outcome::None);
}
