//! Side panel, history log and game-over card

use crate::app::Message;
use crate::styles::{self, PANEL_WIDTH};
use crate::workbook::{Tab, Workbook};
use gemini_analysis::AnalysisResult;
use iced::widget::{button, column, container, horizontal_rule, row, scrollable, text};
use iced::{Alignment, Color, Element, Font, Length};
use sheet_core::view::{self, history_rows, OutcomeBanner};
use sheet_core::{MoveRecord, RulesEngine};

/// Right-hand panel: sheet tabs, tab content and status bar
pub fn side_panel<R: RulesEngine>(book: &Workbook<R>) -> Element<'_, Message> {
    let tabs = row![
        sheet_tab(Tab::GameData, book.tab()),
        sheet_tab(Tab::Insights, book.tab()),
    ];

    let content = match book.tab() {
        Tab::GameData => game_data(book),
        Tab::Insights => insights(book.analysis().result()),
    };

    column![
        tabs,
        scrollable(container(content).padding(15)).height(Length::Fill),
        status_bar(),
    ]
    .width(PANEL_WIDTH)
    .height(Length::Fill)
    .into()
}

fn sheet_tab(tab: Tab, current: Tab) -> Element<'static, Message> {
    button(text(tab.label()).size(12).center())
        .on_press(Message::TabSelected(tab))
        .width(Length::Fill)
        .padding([10, 4])
        .style(styles::sheet_tab(tab == current))
        .into()
}

fn section_title(label: &str) -> Element<'_, Message> {
    text(label.to_uppercase())
        .size(11)
        .color(styles::MUTED_TEXT)
        .into()
}

fn labelled<'a>(label: &'a str, value: &'a str, color: Color) -> Element<'a, Message> {
    row![
        text(label).size(13).color(styles::MUTED_TEXT),
        iced::widget::horizontal_space(),
        text(value).size(13).color(color),
    ]
    .align_y(Alignment::Center)
    .into()
}

fn game_data<R: RulesEngine>(book: &Workbook<R>) -> Element<'_, Message> {
    let game = book.game();
    let flags = game.flags();

    let check_color = if flags.is_check {
        styles::CHECK_TRUE
    } else {
        styles::GRID_LINE
    };

    let status = column![
        section_title("Workbook Status"),
        labelled(
            "Active Player:",
            view::turn_banner(game),
            styles::side_color(flags.turn)
        ),
        horizontal_rule(1),
        labelled("Check State:", view::check_banner(game), check_color),
    ]
    .spacing(6);

    let fen = container(
        column![
            text("RAW FEN STRING").size(10).color(styles::MUTED_TEXT),
            text(game.fen()).size(11).font(Font::MONOSPACE),
        ]
        .spacing(4),
    )
    .padding(10)
    .width(Length::Fill)
    .style(styles::card);

    let pending = book.analysis().is_pending();
    let analyze = button(
        text(if pending {
            "Calculating Rows..."
        } else {
            "Calculate Smart Moves"
        })
        .size(14)
        .center(),
    )
    .on_press_maybe((!pending).then_some(Message::Analyze))
    .width(Length::Fill)
    .padding(12)
    .style(styles::primary);

    column![status, fen, analyze].spacing(24).into()
}

fn insights(result: Option<&AnalysisResult>) -> Element<'_, Message> {
    let Some(result) = result else {
        return container(
            text("No analysis loaded. Press \"Calculate Smart Moves\" to involve the Gemini engine.")
                .size(13)
                .color(styles::MUTED_TEXT)
                .center(),
        )
        .height(256.0)
        .center_x(Length::Fill)
        .center_y(256.0)
        .into();
    };

    let summary = container(
        column![
            text("EXECUTIVE SUMMARY").size(11).color(styles::EXCEL_GREEN),
            text(format!("\"{}\"", result.commentary)).size(13),
        ]
        .spacing(4),
    )
    .padding(12)
    .width(Length::Fill)
    .style(styles::card);

    let metric = |label: &'static str, value: &str, color: Color| {
        container(
            column![
                text(label).size(10).color(styles::MUTED_TEXT),
                text(value.to_string()).size(20).color(color),
            ]
            .spacing(2),
        )
        .padding(10)
        .width(Length::Fill)
        .style(styles::card)
    };

    let metrics = row![
        metric("EVAL SCORE", &result.evaluation, Color::BLACK),
        metric("BEST MOVE", &result.best_move, styles::EXCEL_GREEN),
    ]
    .spacing(8);

    let mut line = column![section_title("Projected Line")].spacing(4);
    for (idx, mv) in result.suggested_line.iter().enumerate() {
        line = line.push(
            row![
                text(format!("{}.", idx + 1))
                    .size(12)
                    .font(Font::MONOSPACE)
                    .color(styles::MUTED_TEXT)
                    .width(24),
                text(mv.as_str()).size(12).font(Font::MONOSPACE),
            ]
            .padding(6),
        );
    }

    column![summary, metrics, line].spacing(16).into()
}

fn status_bar() -> Element<'static, Message> {
    container(
        row![
            text("READY").size(11).color(styles::EXCEL_GREEN),
            iced::widget::horizontal_space(),
            text("100%").size(11).color(styles::MUTED_TEXT),
        ]
        .spacing(12),
    )
    .padding([4, 12])
    .width(Length::Fill)
    .style(styles::header_cell)
    .into()
}

/// "Cell History Log" table with the last few moves
pub fn history_log(history: &[MoveRecord]) -> Element<'static, Message> {
    let cell = |value: String, color: Color| {
        container(text(value).size(12).font(Font::MONOSPACE).color(color))
            .padding(4)
            .width(Length::FillPortion(1))
    };

    let mut table = column![row![
        cell("Entry".to_string(), Color::BLACK),
        cell("Player".to_string(), Color::BLACK),
        cell("SAN".to_string(), Color::BLACK),
        cell("Cell Range".to_string(), Color::BLACK),
    ]]
    .spacing(0);

    let rows = history_rows(history);
    if rows.is_empty() {
        table = table.push(
            container(
                text("No entries detected in workbook.")
                    .size(12)
                    .color(styles::MUTED_TEXT),
            )
            .padding(16)
            .center_x(Length::Fill),
        );
    }
    for entry in rows {
        table = table.push(row![
            cell(entry.entry.to_string(), Color::BLACK),
            cell(entry.player.to_string(), Color::BLACK),
            cell(entry.san, styles::EXCEL_GREEN),
            cell(entry.range, Color::BLACK),
        ]);
    }

    container(column![section_title("Cell History Log"), table].spacing(8))
        .padding(16)
        .max_width(640.0)
        .width(Length::Fill)
        .style(styles::card)
        .into()
}

/// Game-over card shown on top of the board
pub fn outcome_overlay(banner: OutcomeBanner) -> Element<'static, Message> {
    let card = container(
        column![
            text(banner.title).size(30),
            text(banner.subtitle).size(14).color(styles::MUTED_TEXT),
            button(text("NEW SPREADSHEET").size(13))
                .on_press(Message::NewGame)
                .padding([8, 24])
                .style(styles::primary),
        ]
        .spacing(16)
        .align_x(Alignment::Center),
    )
    .padding(32)
    .style(styles::card);

    container(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(iced::Background::Color(styles::OVERLAY)),
            ..Default::default()
        })
        .into()
}
