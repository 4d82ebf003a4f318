//! The board rendered as a block of spreadsheet cells

use crate::styles::{self, CELL_SIZE, HEADER_SIZE};
use iced::widget::{button, column, container, row, stack, text};
use iced::{Background, Border, Color, Element, Font, Length};
use sheet_core::view::{board_cells, CellView};
use sheet_core::{Coord, Game, RulesEngine};

/// Message type for board interactions
#[derive(Debug, Clone)]
pub enum BoardMessage {
    SquareClicked(Coord),
}

/// Renders the chess board with row and column headers
pub struct BoardView<'a, R: RulesEngine> {
    game: &'a Game<R>,
}

impl<'a, R: RulesEngine> BoardView<'a, R> {
    pub fn new(game: &'a Game<R>) -> Self {
        Self { game }
    }

    /// Create the board view element
    pub fn view(&self) -> Element<'a, BoardMessage> {
        let cells = board_cells(self.game);

        let mut column_headers = row![header(String::new(), HEADER_SIZE, HEADER_SIZE * 0.75)];
        for file in 'A'..='H' {
            column_headers = column_headers.push(header(file.to_string(), CELL_SIZE, HEADER_SIZE * 0.75));
        }

        let mut board_column = column![column_headers].spacing(0);
        for rank_cells in cells.chunks(8) {
            let rank = rank_cells[0].coord.rank_char().to_string();
            let mut rank_row = row![header(rank, HEADER_SIZE, CELL_SIZE)].spacing(0);
            for cell in rank_cells {
                rank_row = rank_row.push(render_cell(*cell));
            }
            board_column = board_column.push(rank_row);
        }

        container(board_column)
            .style(|_theme| container::Style {
                border: Border {
                    color: Color::from_rgb(0.6, 0.6, 0.6),
                    width: 2.0,
                    radius: 0.0.into(),
                },
                ..Default::default()
            })
            .into()
    }
}

fn header<'a>(label: String, width: f32, height: f32) -> Element<'a, BoardMessage> {
    container(text(label).size(12).font(Font::MONOSPACE))
        .width(width)
        .height(height)
        .center_x(width)
        .center_y(height)
        .style(styles::header_cell)
        .into()
}

/// Render a single cell
fn render_cell<'a>(cell: CellView) -> Element<'a, BoardMessage> {
    let bg_color = if cell.dark {
        styles::DARK_CELL
    } else {
        styles::LIGHT_CELL
    };

    let piece: Element<'a, BoardMessage> = match cell.piece {
        Some(p) => text(styles::piece_char(p.side, p.kind))
            .size(CELL_SIZE * 0.7)
            .color(Color::BLACK)
            .into(),
        None => text("").into(),
    };

    // Faint cell reference in the corner, like a spreadsheet address
    let address = container(
        text(cell.coord.to_string())
            .size(9)
            .font(Font::MONOSPACE)
            .color(Color::from_rgba(0.0, 0.0, 0.0, 0.25)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_right(Length::Fill)
    .align_bottom(Length::Fill)
    .padding([0, 3]);

    let content = stack![
        container(piece)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill),
        address,
    ];

    let selected = cell.selected;
    button(content)
        .width(CELL_SIZE)
        .height(CELL_SIZE)
        .padding(0)
        .style(move |_theme, status| {
            let hover_overlay = match status {
                button::Status::Hovered => 0.2,
                button::Status::Pressed => 0.3,
                _ => 0.0,
            };
            button::Style {
                background: Some(Background::Color(if hover_overlay > 0.0 {
                    blend_colors(bg_color, Color::from_rgba(1.0, 1.0, 1.0, hover_overlay))
                } else {
                    bg_color
                })),
                border: if selected {
                    Border {
                        color: styles::SELECTED_RING,
                        width: 4.0,
                        radius: 0.0.into(),
                    }
                } else {
                    Border {
                        color: Color::from_rgba(0.82, 0.82, 0.82, 0.3),
                        width: 1.0,
                        radius: 0.0.into(),
                    }
                },
                text_color: Color::BLACK,
                ..Default::default()
            }
        })
        .on_press(BoardMessage::SquareClicked(cell.coord))
        .into()
}

/// Blend two colors together
fn blend_colors(base: Color, overlay: Color) -> Color {
    let alpha = overlay.a;
    Color::from_rgb(
        base.r * (1.0 - alpha) + overlay.r * alpha,
        base.g * (1.0 - alpha) + overlay.g * alpha,
        base.b * (1.0 - alpha) + overlay.b * alpha,
    )
}
