//! Styling constants for the spreadsheet look

use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};
use sheet_core::{PieceKind, Side};

// Cell colours
pub const LIGHT_CELL: Color = Color::from_rgb(0.906, 0.941, 0.894);
pub const DARK_CELL: Color = Color::from_rgb(0.612, 0.769, 0.553);
pub const SELECTED_RING: Color = Color::from_rgb(0.376, 0.647, 0.980);
pub const GRID_LINE: Color = Color::from_rgb(0.82, 0.82, 0.82);

// Chrome
pub const SHEET_BG: Color = Color::from_rgb(0.953, 0.953, 0.953);
pub const HEADER_BG: Color = Color::from_rgb(0.973, 0.976, 0.980);
pub const EXCEL_GREEN: Color = Color::from_rgb(0.13, 0.45, 0.27);
pub const MUTED_TEXT: Color = Color::from_rgb(0.45, 0.45, 0.45);
pub const WHITE_PLAYER: Color = Color::from_rgb(0.15, 0.39, 0.92);
pub const BLACK_PLAYER: Color = Color::from_rgb(0.92, 0.35, 0.05);
pub const CHECK_TRUE: Color = Color::from_rgb(0.94, 0.27, 0.27);
pub const OVERLAY: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.5);

// Dimensions
pub const CELL_SIZE: f32 = 72.0;
pub const HEADER_SIZE: f32 = 32.0;
pub const PANEL_WIDTH: f32 = 320.0;

/// Unicode glyph for a piece
pub fn piece_char(side: Side, kind: PieceKind) -> &'static str {
    match (side, kind) {
        (Side::White, PieceKind::King) => "♔",
        (Side::White, PieceKind::Queen) => "♕",
        (Side::White, PieceKind::Rook) => "♖",
        (Side::White, PieceKind::Bishop) => "♗",
        (Side::White, PieceKind::Knight) => "♘",
        (Side::White, PieceKind::Pawn) => "♙",
        (Side::Black, PieceKind::King) => "♚",
        (Side::Black, PieceKind::Queen) => "♛",
        (Side::Black, PieceKind::Rook) => "♜",
        (Side::Black, PieceKind::Bishop) => "♝",
        (Side::Black, PieceKind::Knight) => "♞",
        (Side::Black, PieceKind::Pawn) => "♟",
    }
}

pub fn side_color(side: Side) -> Color {
    match side {
        Side::White => WHITE_PLAYER,
        Side::Black => BLACK_PLAYER,
    }
}

/// Grey row/column header cell
pub fn header_cell(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(HEADER_BG)),
        border: Border {
            color: GRID_LINE,
            width: 1.0,
            radius: 0.0.into(),
        },
        text_color: Some(MUTED_TEXT),
        ..Default::default()
    }
}

/// White card with a thin border
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::WHITE)),
        border: Border {
            color: GRID_LINE,
            width: 1.0,
            radius: 4.0.into(),
        },
        ..Default::default()
    }
}

/// Flat toolbar button that only shows a background on hover
pub fn toolbar_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color::from_rgb(0.9, 0.9, 0.9))),
        button::Status::Pressed => Some(Background::Color(Color::from_rgb(0.85, 0.85, 0.85))),
        _ => None,
    };
    button::Style {
        background,
        text_color: match status {
            button::Status::Disabled => GRID_LINE,
            _ => MUTED_TEXT,
        },
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Sheet tab; the active one gets a green top edge
pub fn sheet_tab(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let background = if active {
            Color::WHITE
        } else if status == button::Status::Hovered {
            Color::from_rgb(0.93, 0.93, 0.93)
        } else {
            HEADER_BG
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: if active { EXCEL_GREEN } else { MUTED_TEXT },
            border: Border {
                color: if active { EXCEL_GREEN } else { GRID_LINE },
                width: if active { 2.0 } else { 1.0 },
                radius: 0.0.into(),
            },
            ..Default::default()
        }
    }
}

/// Primary green action
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let base = match status {
        button::Status::Hovered => Color::from_rgb(0.10, 0.38, 0.22),
        button::Status::Disabled => Color::from_rgba(0.13, 0.45, 0.27, 0.5),
        _ => EXCEL_GREEN,
    };
    button::Style {
        background: Some(Background::Color(base)),
        text_color: Color::WHITE,
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
