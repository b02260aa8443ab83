//! Overlay rendering
//!
//! This module handles the bulk-select popover, the blocking alert and the
//! help screen.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::super::app::App;
use super::super::theme::Theme;
use super::helpers::{anchored_rect, centered_rect};

const POPOVER_WIDTH: u16 = 36;
const POPOVER_HEIGHT: u16 = 7;

/// Render the bulk-select popover under the Title header
pub fn render_popover(frame: &mut Frame, app: &mut App, theme: &Theme, area: Rect) {
    let (title_x, _) = app.layout.title_col;
    let below_header = app.layout.header.y + app.layout.header.height;
    let popup_area = anchored_rect(title_x, below_header, POPOVER_WIDTH, POPOVER_HEIGHT, area);
    app.layout.popover = Some(popup_area);

    frame.render_widget(Clear, popup_area);

    let lines = vec![
        Line::from(Span::styled(
            "Select rows",
            Style::default().fg(theme.subtext0),
        )),
        Line::from(vec![
            Span::styled("› ", Style::default().fg(theme.blue)),
            Span::styled(app.popover.input.as_str(), Style::default().fg(theme.text)),
            Span::styled("│", Style::default().fg(theme.blue)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(theme.yellow)),
            Span::styled(" submit · ", Style::default().fg(theme.subtext0)),
            Span::styled("Esc", Style::default().fg(theme.yellow)),
            Span::styled(" close", Style::default().fg(theme.subtext0)),
        ]),
    ];

    let popover = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.blue))
            .title(Span::styled(
                " Bulk select ",
                Style::default().fg(theme.mauve).add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(theme.base)),
    );

    frame.render_widget(popover, popup_area);
}

/// Render the blocking alert
pub fn render_alert(frame: &mut Frame, message: &str, theme: &Theme, area: Rect) {
    let popup_area = centered_rect(60, 40, area);
    frame.render_widget(Clear, popup_area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(theme.text))),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(theme.subtext0)),
            Span::styled("Enter", Style::default().fg(theme.yellow)),
            Span::styled(" to dismiss", Style::default().fg(theme.subtext0)),
        ]),
    ];

    let alert = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.red))
                .title(Span::styled(
                    " Invalid input ",
                    Style::default().fg(theme.red).add_modifier(Modifier::BOLD),
                ))
                .style(Style::default().bg(theme.base)),
        );

    frame.render_widget(alert, popup_area);
}

fn help_section(title: &'static str, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default().fg(theme.blue).add_modifier(Modifier::BOLD),
    ))
}

fn help_entry(keys: &'static str, action: &'static str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {keys:<10}"), Style::default().fg(theme.yellow)),
        Span::styled(action, Style::default().fg(theme.text)),
    ])
}

/// Render the help overlay
pub fn render_help_overlay(frame: &mut Frame, theme: &Theme, area: Rect) {
    let popup_area = centered_rect(60, 80, area);

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().fg(theme.mauve).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        help_section("Rows", theme),
        help_entry("j/↓", "Move down", theme),
        help_entry("k/↑", "Move up", theme),
        help_entry("g/G", "First/last row", theme),
        Line::from(""),
        help_section("Pages", theme),
        help_entry("l/→/PgDn", "Next page", theme),
        help_entry("h/←/PgUp", "Previous page", theme),
        help_entry("[/Home", "First page", theme),
        help_entry("]/End", "Last page", theme),
        help_entry("r", "Reload page", theme),
        Line::from(""),
        help_section("Selection", theme),
        help_entry("Space", "Toggle row", theme),
        help_entry("a", "Toggle all visible rows", theme),
        help_entry("n", "Select first N rows", theme),
        Line::from(""),
        help_section("Mouse", theme),
        help_entry("click ☐", "Toggle row or header", theme),
        help_entry("click Title", "Open bulk select", theme),
        Line::from(""),
        help_section("Other", theme),
        help_entry("t", "Cycle theme", theme),
        help_entry("?", "Toggle help", theme),
        help_entry("q", "Quit", theme),
    ];

    frame.render_widget(Clear, popup_area);

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.blue))
                .title(Span::styled(
                    " Help ",
                    Style::default().fg(theme.mauve).add_modifier(Modifier::BOLD),
                ))
                .style(Style::default().bg(theme.base)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(help, popup_area);
}
