//! ExcelChess GUI Application
//!
//! A chess board dressed up as a spreadsheet:
//! - Click cells to move pieces
//! - Undo, reset and a short move log
//! - Position commentary from the Gemini API

mod app;
mod board;
mod panels;
mod settings;
mod styles;
mod workbook;

use anyhow::Result;
use app::ChessApp;
use clap::Parser;
use gemini_analysis::{AnalysisService, GeminiService};
use iced::application;
use settings::Settings;
use sheet_core::{Game, ShakmatyRules};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "excelchess", about = "Spreadsheet-styled chess with AI commentary")]
struct Cli {
    /// Settings file (defaults to ./excelchess.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start from this position instead of the standard one
    #[arg(long)]
    fen: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    let rules = match cli.fen.or(settings.game.start_fen.clone()) {
        Some(fen) => ShakmatyRules::from_fen(&fen)?,
        None => ShakmatyRules::new(),
    };
    let game = Game::new(rules).with_promotion(settings.game.promotion());

    let service: Arc<dyn AnalysisService> = Arc::new(GeminiService::new(settings.analysis)?);
    info!(model = service.name(), "starting ExcelChess");

    application("ExcelChess Pro", ChessApp::update, ChessApp::view)
        .theme(ChessApp::theme)
        .window_size((1280.0, 860.0))
        .run_with(move || ChessApp::new(game, service))?;

    Ok(())
}
