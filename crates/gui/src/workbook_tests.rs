use super::*;
use gemini_analysis::{analyze_or_fallback, AnalysisConfig, GeminiService, Lifecycle};
use sheet_core::{Outcome, Selection, ShakmatyRules};

fn c(s: &str) -> Coord {
    s.parse().unwrap()
}

fn workbook() -> Workbook<ShakmatyRules> {
    Workbook::new(Game::new(ShakmatyRules::new()))
}

fn insight() -> AnalysisResult {
    AnalysisResult {
        evaluation: "+0.4".to_string(),
        best_move: "Nf3".to_string(),
        commentary: "Central control.".to_string(),
        suggested_line: vec!["Nf3".to_string(), "Nc6".to_string(), "Bb5".to_string()],
    }
}

#[test]
fn analysis_request_carries_position_and_history() {
    let mut book = workbook();
    book.click(c("e2"));
    book.click(c("e4"));
    let ticket = book.begin_analysis();
    assert_eq!(ticket.request.fen, book.game().fen());
    assert_eq!(ticket.request.history, vec!["e4".to_string()]);
    assert_eq!(book.tab(), Tab::Insights);
    assert_eq!(book.analysis().lifecycle(), Lifecycle::Pending);
}

#[test]
fn board_stays_live_while_analysis_is_pending() {
    let mut book = workbook();
    let ticket = book.begin_analysis();
    assert_eq!(book.click(c("d2")), ClickEffect::Selected(c("d2")));
    assert!(matches!(book.click(c("d4")), ClickEffect::Moved(_)));
    assert!(book.undo().is_some());

    assert!(book.finish_analysis(ticket.token, insight()));
    assert_eq!(book.analysis().result(), Some(&insight()));
}

#[test]
fn newer_request_supersedes_pending_one() {
    let mut book = workbook();
    let first = book.begin_analysis();
    book.click(c("e2"));
    book.click(c("e4"));
    book.select_tab(Tab::GameData);
    let second = book.begin_analysis();
    assert_ne!(first.request.fen, second.request.fen);
    assert_eq!(book.tab(), Tab::Insights);

    // The older reply arrives first and is dropped
    let stale = AnalysisResult {
        best_move: "e4".to_string(),
        ..insight()
    };
    assert!(!book.finish_analysis(first.token, stale));
    assert!(book.analysis().is_pending());
    assert!(book.analysis().result().is_none());

    assert!(book.finish_analysis(second.token, insight()));
    assert_eq!(book.analysis().result(), Some(&insight()));
    assert_eq!(book.analysis().lifecycle(), Lifecycle::Resolved);
    assert_eq!(book.tab(), Tab::Insights);
}

#[test]
fn result_is_kept_across_moves() {
    let mut book = workbook();
    let ticket = book.begin_analysis();
    book.finish_analysis(ticket.token, insight());
    book.click(c("g1"));
    book.click(c("f3"));
    assert_eq!(book.analysis().result(), Some(&insight()));
}

#[test]
fn reset_clears_everything() {
    let mut book = workbook();
    let initial = book.game().fen();
    book.click(c("e2"));
    book.click(c("e4"));
    book.click(c("e7"));
    let ticket = book.begin_analysis();
    book.finish_analysis(ticket.token, insight());
    let late = book.begin_analysis();

    book.reset();
    assert!(book.game().history().is_empty());
    assert_eq!(book.game().fen(), initial);
    assert_eq!(book.game().selection(), Selection::Idle);
    assert_eq!(book.game().outcome(), Outcome::None);
    assert!(book.analysis().result().is_none());
    assert_eq!(book.analysis().lifecycle(), Lifecycle::Idle);

    // A reply to a request issued before the reset is discarded
    assert!(!book.finish_analysis(late.token, insight()));
    assert!(book.analysis().result().is_none());
}

#[tokio::test]
async fn failed_analysis_leaves_workbook_interactive() {
    let mut book = workbook();
    let service = GeminiService::with_key(AnalysisConfig::default(), None).unwrap();

    let ticket = book.begin_analysis();
    let result = analyze_or_fallback(&service, &ticket.request).await;
    assert!(book.finish_analysis(ticket.token, result));
    assert_eq!(book.analysis().result(), Some(&AnalysisResult::unavailable()));
    assert_eq!(book.analysis().lifecycle(), Lifecycle::Resolved);

    assert!(matches!(book.click(c("e2")), ClickEffect::Selected(_)));
    assert!(matches!(book.click(c("e4")), ClickEffect::Moved(_)));
    assert!(book.undo().is_some());
    book.reset();
    assert!(book.analysis().result().is_none());
}
