//! UI rendering for the TUI

mod grid;
mod helpers;
mod overlays;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::{App, LoadState};
use super::theme::Theme;
use helpers::{format_count, spinner_frame};

/// Main render function
pub fn render(frame: &mut Frame, app: &mut App) {
    let theme = Theme::for_variant(app.theme);
    let area = frame.area();

    frame.render_widget(Block::default().style(Style::default().bg(theme.base)), area);

    // Main layout: header, grid, paginator, footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Grid
            Constraint::Length(1), // Paginator
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(frame, app, &theme, chunks[0]);
    grid::render_grid(frame, app, &theme, chunks[1]);
    render_paginator(frame, app, &theme, chunks[2]);
    render_footer(frame, app, &theme, chunks[3]);

    // Overlays, lowest priority first
    if app.popover.visible {
        overlays::render_popover(frame, app, &theme, chunks[1]);
    }

    if app.show_help {
        overlays::render_help_overlay(frame, &theme, area);
    }

    if let Some(message) = &app.alert {
        overlays::render_alert(frame, message, &theme, area);
    }
}

fn render_header(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let mut spans = vec![
        Span::styled(" source: ", Style::default().fg(theme.subtext0)),
        Span::styled(app.source_name(), Style::default().fg(theme.text)),
        Span::styled(" │ ", Style::default().fg(theme.surface1)),
        Span::styled(
            format!("{} selected", format_count(app.selection_count() as u64)),
            Style::default().fg(if app.selection_count() > 0 {
                theme.blue
            } else {
                theme.subtext0
            }),
        ),
    ];

    if let LoadState::Loading { started, .. } = app.load_state {
        spans.push(Span::styled(" │ ", Style::default().fg(theme.surface1)));
        spans.push(Span::styled(
            format!("{} fetching", spinner_frame(started)),
            Style::default().fg(theme.yellow),
        ));
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.surface1))
            .title(Span::styled(
                " artgrid ",
                Style::default().fg(theme.mauve).add_modifier(Modifier::BOLD),
            )),
    );

    frame.render_widget(header, area);
}

/// "« ‹ Page X of Y › »" on the left, record range on the right
fn render_paginator(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let pagination = &app.pagination;
    let active = pagination.active_page();
    let total = pagination.total_pages().max(1);

    let arrow = |enabled: bool, glyph: &'static str| {
        let color = if enabled { theme.blue } else { theme.surface1 };
        Span::styled(glyph, Style::default().fg(color))
    };

    let nav = Line::from(vec![
        Span::raw(" "),
        arrow(active > 1, "«"),
        Span::raw(" "),
        arrow(active > 1, "‹"),
        Span::styled(
            format!(" Page {active} of {total} "),
            Style::default().fg(theme.text),
        ),
        arrow(active < total, "›"),
        Span::raw(" "),
        arrow(active < total, "»"),
    ]);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    frame.render_widget(Paragraph::new(nav), chunks[0]);

    let range = if app.records().is_empty() {
        String::new()
    } else {
        let first = pagination.first_record_offset() + 1;
        let last = first + app.records().len() as u64 - 1;
        let total_records = app
            .page
            .as_ref()
            .and_then(|p| p.total_records)
            .unwrap_or_else(|| pagination.total_records());
        format!(
            "Showing {}–{} of {} ",
            format_count(first),
            format_count(last),
            format_count(total_records)
        )
    };

    frame.render_widget(
        Paragraph::new(Span::styled(range, Style::default().fg(theme.subtext0)))
            .alignment(Alignment::Right),
        chunks[1],
    );
}

fn render_footer(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    // Show status message if present (takes priority)
    if let Some(status) = &app.status_message {
        let color = if status.is_error {
            theme.red
        } else {
            theme.green
        };
        let footer = Paragraph::new(Line::from(vec![
            Span::styled(" ", Style::default()),
            Span::styled(&status.text, Style::default().fg(color)),
        ]))
        .style(Style::default().bg(theme.surface0));

        frame.render_widget(footer, area);
        return;
    }

    let hints: Vec<Span> = if app.popover.visible {
        vec![
            Span::styled(" Bulk select: ", Style::default().fg(theme.yellow)),
            Span::styled("Enter", Style::default().fg(theme.blue)),
            Span::styled(" submit ", Style::default().fg(theme.subtext0)),
            Span::styled(" Esc", Style::default().fg(theme.blue)),
            Span::styled(" close", Style::default().fg(theme.subtext0)),
        ]
    } else {
        vec![
            Span::styled(" j/k", Style::default().fg(theme.blue)),
            Span::styled(" rows ", Style::default().fg(theme.subtext0)),
            Span::styled(" h/l", Style::default().fg(theme.blue)),
            Span::styled(" pages ", Style::default().fg(theme.subtext0)),
            Span::styled(" Space", Style::default().fg(theme.blue)),
            Span::styled(" select ", Style::default().fg(theme.subtext0)),
            Span::styled(" a", Style::default().fg(theme.blue)),
            Span::styled(" all ", Style::default().fg(theme.subtext0)),
            Span::styled(" n", Style::default().fg(theme.blue)),
            Span::styled(" first N ", Style::default().fg(theme.subtext0)),
            Span::styled(" ?", Style::default().fg(theme.blue)),
            Span::styled(" help ", Style::default().fg(theme.subtext0)),
            Span::styled(" q", Style::default().fg(theme.blue)),
            Span::styled(" quit", Style::default().fg(theme.subtext0)),
        ]
    };

    let footer = Paragraph::new(Line::from(hints)).style(Style::default().bg(theme.surface0));
    frame.render_widget(footer, area);
}
