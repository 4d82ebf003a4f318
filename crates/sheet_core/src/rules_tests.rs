use super::*;

fn c(s: &str) -> Coord {
    s.parse().unwrap()
}

#[test]
fn initial_position() {
    let rules = ShakmatyRules::new();
    assert_eq!(
        rules.fen(),
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
    );
    let flags = rules.flags();
    assert_eq!(flags.turn, Side::White);
    assert!(!flags.is_check && !flags.is_checkmate && !flags.is_draw);
    assert_eq!(
        rules.piece_at(c("e1")),
        Some(Piece {
            side: Side::White,
            kind: PieceKind::King
        })
    );
    assert_eq!(rules.piece_at(c("e4")), None);
}

#[test]
fn accepts_pawn_push() {
    let mut rules = ShakmatyRules::new();
    let record = rules.propose_move(c("e2"), c("e4"), PieceKind::Queen).unwrap();
    assert_eq!(record.san, "e4");
    assert_eq!(record.side, Side::White);
    assert_eq!(record.piece, PieceKind::Pawn);
    assert_eq!(record.captured, None);
    assert_eq!(rules.flags().turn, Side::Black);
    assert_eq!(rules.history().len(), 1);
}

#[test]
fn rejects_illegal_move_without_changing_state() {
    let mut rules = ShakmatyRules::new();
    let before = rules.fen();
    let err = rules.propose_move(c("e2"), c("e5"), PieceKind::Queen).unwrap_err();
    assert_eq!(err, MoveRejected { from: c("e2"), to: c("e5") });
    assert_eq!(rules.fen(), before);
    assert!(rules.history().is_empty());
}

#[test]
fn records_captures() {
    let mut rules = ShakmatyRules::new();
    for (from, to) in [("e2", "e4"), ("d7", "d5")] {
        rules.propose_move(c(from), c(to), PieceKind::Queen).unwrap();
    }
    let record = rules.propose_move(c("e4"), c("d5"), PieceKind::Queen).unwrap();
    assert_eq!(record.san, "exd5");
    assert_eq!(record.captured, Some(PieceKind::Pawn));
}

#[test]
fn castling_by_king_destination() {
    let mut rules =
        ShakmatyRules::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let record = rules.propose_move(c("e1"), c("g1"), PieceKind::Queen).unwrap();
    assert_eq!(record.san, "O-O");
    assert_eq!(
        rules.piece_at(c("f1")).map(|p| p.kind),
        Some(PieceKind::Rook)
    );
    let record = rules.propose_move(c("e8"), c("c8"), PieceKind::Queen).unwrap();
    assert_eq!(record.san, "O-O-O");
}

#[test]
fn promotion_uses_requested_piece() {
    let mut rules = ShakmatyRules::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1").unwrap();
    let record = rules.propose_move(c("a7"), c("a8"), PieceKind::Queen).unwrap();
    assert_eq!(record.promotion, Some(PieceKind::Queen));
    assert!(record.san.starts_with("a8=Q"));

    rules.undo();
    let record = rules.propose_move(c("a7"), c("a8"), PieceKind::Knight).unwrap();
    assert_eq!(record.promotion, Some(PieceKind::Knight));
    assert_eq!(
        rules.piece_at(c("a8")).map(|p| p.kind),
        Some(PieceKind::Knight)
    );
}

#[test]
fn undo_restores_previous_position() {
    let mut rules = ShakmatyRules::new();
    let start = rules.fen();
    rules.propose_move(c("g1"), c("f3"), PieceKind::Queen).unwrap();
    let undone = rules.undo().unwrap();
    assert_eq!(undone.san, "Nf3");
    assert_eq!(rules.fen(), start);
    assert!(rules.undo().is_none());
}

#[test]
fn reset_returns_to_starting_fen() {
    let fen = "4k3/8/8/8/8/8/4P3/4K3 w - - 0 1";
    let mut rules = ShakmatyRules::from_fen(fen).unwrap();
    rules.propose_move(c("e2"), c("e4"), PieceKind::Queen).unwrap();
    rules.reset();
    assert_eq!(rules.fen(), fen);
    assert!(rules.history().is_empty());
}

#[test]
fn reset_without_start_fen_returns_to_standard_position() {
    let mut rules = ShakmatyRules::new();
    rules.propose_move(c("e2"), c("e4"), PieceKind::Queen).unwrap();
    rules.propose_move(c("e7"), c("e5"), PieceKind::Queen).unwrap();
    rules.reset();
    assert_eq!(
        rules.fen(),
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
    );
    assert!(rules.history().is_empty());
}

#[test]
fn invalid_fen_is_an_error() {
    assert!(ShakmatyRules::from_fen("not a fen").is_err());
}

#[test]
fn detects_stalemate() {
    let rules = ShakmatyRules::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();
    let flags = rules.flags();
    assert!(flags.is_draw);
    assert_eq!(flags.draw_reason, Some(DrawReason::Stalemate));
}

#[test]
fn detects_insufficient_material() {
    let rules = ShakmatyRules::from_fen("8/8/8/4k3/8/4K3/8/8 w - - 0 1").unwrap();
    assert_eq!(
        rules.flags().draw_reason,
        Some(DrawReason::InsufficientMaterial)
    );
}

#[test]
fn detects_fifty_move_rule() {
    let rules = ShakmatyRules::from_fen("8/8/8/4k3/8/4K3/4R3/8 w - - 100 80").unwrap();
    assert_eq!(rules.flags().draw_reason, Some(DrawReason::FiftyMoves));
}

#[test]
fn detects_threefold_repetition() {
    let mut rules = ShakmatyRules::new();
    let shuffle = [("g1", "f3"), ("g8", "f6"), ("f3", "g1"), ("f6", "g8")];
    for _ in 0..2 {
        for (from, to) in shuffle {
            assert!(!rules.flags().is_draw);
            rules.propose_move(c(from), c(to), PieceKind::Queen).unwrap();
        }
    }
    assert_eq!(rules.flags().draw_reason, Some(DrawReason::Repetition));
}
