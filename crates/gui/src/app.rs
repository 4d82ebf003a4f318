//! Main application state and logic

use crate::board::{BoardMessage, BoardView};
use crate::panels;
use crate::styles;
use crate::workbook::{Tab, Workbook};

use gemini_analysis::{analyze_or_fallback, AnalysisResult, AnalysisService};
use iced::widget::{button, column, container, row, scrollable, stack, text, vertical_rule};
use iced::{Alignment, Background, Element, Font, Length, Task, Theme};
use sheet_core::view::{formula_bar, outcome_banner};
use sheet_core::{ClickEffect, Game, ShakmatyRules};
use std::sync::Arc;
use tracing::debug;

/// Main application state
pub struct ChessApp {
    book: Workbook<ShakmatyRules>,
    /// Outbound analysis calls
    service: Arc<dyn AnalysisService>,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    TabSelected(Tab),

    // Board interaction
    Board(BoardMessage),

    // Toolbar
    NewGame,
    Undo,
    Analyze,

    // Analysis reply for the given request token
    AnalysisReady(u64, AnalysisResult),
}

impl ChessApp {
    pub fn new(game: Game<ShakmatyRules>, service: Arc<dyn AnalysisService>) -> (Self, Task<Message>) {
        (
            Self {
                book: Workbook::new(game),
                service,
            },
            Task::none(),
        )
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TabSelected(tab) => {
                self.book.select_tab(tab);
                Task::none()
            }

            Message::Board(BoardMessage::SquareClicked(sq)) => {
                let effect = self.book.click(sq);
                if effect != ClickEffect::Ignored {
                    debug!(square = %sq, ?effect, "click");
                }
                Task::none()
            }

            Message::NewGame => {
                self.book.reset();
                Task::none()
            }

            Message::Undo => {
                self.book.undo();
                Task::none()
            }

            Message::Analyze => self.start_analysis(),

            Message::AnalysisReady(token, result) => {
                self.book.finish_analysis(token, result);
                Task::none()
            }
        }
    }

    /// Fire off an analysis of the current position. The board stays live
    /// while it runs.
    fn start_analysis(&mut self) -> Task<Message> {
        let ticket = self.book.begin_analysis();
        let service = Arc::clone(&self.service);

        Task::perform(
            async move {
                let result = analyze_or_fallback(service.as_ref(), &ticket.request).await;
                (ticket.token, result)
            },
            |(token, result)| Message::AnalysisReady(token, result),
        )
    }

    pub fn view(&self) -> Element<'_, Message> {
        column![self.ribbon(), self.workspace()].into()
    }

    /// Title row and quick access toolbar
    fn ribbon(&self) -> Element<'_, Message> {
        let logo = container(text("X").size(16).color(iced::Color::WHITE))
            .padding([2, 8])
            .style(|_theme| container::Style {
                background: Some(Background::Color(styles::EXCEL_GREEN)),
                border: iced::Border {
                    radius: 3.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            });

        let mut menu = row![].spacing(14);
        for item in ["File", "Insert", "Draw", "Page Layout", "Formulas"] {
            menu = menu.push(text(item).size(13).color(styles::MUTED_TEXT));
        }

        let title_row = row![
            logo,
            text("ExcelChess Pro").size(18),
            menu,
        ]
        .spacing(16)
        .padding([6, 16])
        .align_y(Alignment::Center);

        let pending = self.book.analysis().is_pending();
        let formula = container(
            row![
                text("fx").size(14).color(styles::EXCEL_GREEN),
                vertical_rule(1),
                text(formula_bar(self.book.game()))
                    .size(13)
                    .font(Font::MONOSPACE),
            ]
            .spacing(8)
            .height(20)
            .align_y(Alignment::Center),
        )
        .padding([4, 12])
        .width(Length::Fill)
        .style(styles::card);

        let toolbar = row![
            tool_button("RESET", Some(Message::NewGame)),
            tool_button("UNDO", Some(Message::Undo)),
            vertical_rule(1),
            // Stays live while pending: a newer request supersedes the old one
            tool_button(
                if pending { "ANALYZING..." } else { "ANALYZE (GEMINI)" },
                Some(Message::Analyze)
            ),
            formula,
        ]
        .spacing(12)
        .padding([8, 16])
        .height(52)
        .align_y(Alignment::Center);

        column![
            title_row,
            container(toolbar).style(styles::header_cell),
        ]
        .into()
    }

    /// Board, history log and side panel
    fn workspace(&self) -> Element<'_, Message> {
        let game = self.book.game();
        let board = BoardView::new(game).view().map(Message::Board);

        let board: Element<'_, Message> = match outcome_banner(game.outcome()) {
            Some(banner) => stack![board, panels::outcome_overlay(banner)].into(),
            None => board,
        };

        let sheet = scrollable(
            column![board, panels::history_log(&game.history())]
                .spacing(32)
                .padding(16),
        )
        .width(Length::Fill)
        .height(Length::Fill);

        row![
            container(sheet)
                .width(Length::Fill)
                .height(Length::Fill)
                .style(|_theme| container::Style {
                    background: Some(Background::Color(styles::SHEET_BG)),
                    ..Default::default()
                }),
            vertical_rule(1),
            panels::side_panel(&self.book),
        ]
        .height(Length::Fill)
        .into()
    }
}

/// Create a toolbar button; `None` disables it
fn tool_button(label: &str, message: Option<Message>) -> Element<'_, Message> {
    button(text(label).size(11))
        .on_press_maybe(message)
        .padding([8, 10])
        .style(styles::toolbar_button)
        .into()
}
