//! Application settings, loaded from TOML

use anyhow::{Context, Result};
use gemini_analysis::AnalysisConfig;
use serde::{Deserialize, Serialize};
use sheet_core::PieceKind;
use std::path::Path;
use tracing::{info, warn};

/// Read from the working directory when no `--config` is given
pub const DEFAULT_SETTINGS_FILE: &str = "excelchess.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub game: GameSettings,
    pub analysis: AnalysisConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Piece a pawn becomes on the last rank
    pub promotion: PieceKind,
    /// Starting position; standard start when unset
    pub start_fen: Option<String>,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            promotion: PieceKind::Queen,
            start_fen: None,
        }
    }
}

impl GameSettings {
    /// Configured promotion piece, falling back to queen for pawn or king.
    pub fn promotion(&self) -> PieceKind {
        match self.promotion {
            PieceKind::Pawn | PieceKind::King => {
                warn!(piece = %self.promotion.code(), "cannot promote to this piece, using queen");
                PieceKind::Queen
            }
            other => other,
        }
    }
}

impl Settings {
    /// Load from `path`, or from [`DEFAULT_SETTINGS_FILE`] if it exists.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_SETTINGS_FILE).exists() => {
                Self::from_file(Path::new(DEFAULT_SETTINGS_FILE))
            }
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        let settings = Self::parse(&contents)
            .with_context(|| format!("failed to parse settings in {}", path.display()))?;
        info!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheet_core::{Game, ShakmatyRules};

    #[test]
    fn empty_file_gives_defaults() {
        let settings = Settings::parse("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.game.promotion(), PieceKind::Queen);
    }

    #[test]
    fn parses_all_sections() {
        let settings = Settings::parse(
            r#"
            [game]
            promotion = "n"
            start_fen = "4k3/8/8/8/8/8/4P3/4K3 w - - 0 1"

            [analysis]
            model = "gemini-2.5-flash"
            timeout_secs = 10
            "#,
        )
        .unwrap();
        assert_eq!(settings.game.promotion(), PieceKind::Knight);
        assert!(settings.game.start_fen.is_some());
        assert_eq!(settings.analysis.model, "gemini-2.5-flash");
        assert_eq!(settings.analysis.timeout_secs, 10);
    }

    #[test]
    fn configured_promotion_reaches_the_game() {
        let settings = Settings::parse("[game]\npromotion = \"r\"").unwrap();
        let game = Game::new(ShakmatyRules::new()).with_promotion(settings.game.promotion());
        assert_eq!(game.promotion(), PieceKind::Rook);
    }

    #[test]
    fn king_promotion_falls_back_to_queen() {
        let settings = Settings::parse("[game]\npromotion = \"k\"").unwrap();
        assert_eq!(settings.game.promotion(), PieceKind::Queen);
    }

    #[test]
    fn unknown_piece_is_rejected() {
        assert!(Settings::parse("[game]\npromotion = \"x\"").is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(Settings::load(Some(Path::new("/nonexistent/excelchess.toml"))).is_err());
    }
}
