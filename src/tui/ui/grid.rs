//! Artwork table rendering
//!
//! Besides drawing, the renderer records where the header, checkbox column
//! and Title column landed so mouse clicks can be resolved against them.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use super::super::app::{App, GridLayout, LoadState};
use super::super::theme::Theme;
use super::helpers::{checkbox, format_year, header_checkbox, spinner_frame};

/// Checkbox, ID, Title, Artist, Start Date, End Date
const COLUMN_WIDTHS: [Constraint; 6] = [
    Constraint::Length(3),
    Constraint::Length(8),
    Constraint::Fill(3),
    Constraint::Fill(2),
    Constraint::Length(10),
    Constraint::Length(10),
];

const COLUMN_SPACING: u16 = 1;

fn build_title(app: &App) -> String {
    let mut title = format!(" Artworks · page {} ", app.pagination.active_page());
    if let LoadState::Loading { page, started, .. } = app.load_state {
        title.push_str(&format!("{} loading page {page}… ", spinner_frame(started)));
    }
    title
}

fn build_row(app: &App, index: usize, theme: &Theme) -> Row<'static> {
    let record = &app.records()[index];
    let checked = app.is_selected(record);
    let box_color = if checked { theme.blue } else { theme.surface1 };
    let artist = if record.artist.is_empty() {
        Span::styled("Unknown", Style::default().fg(theme.subtext0))
    } else {
        Span::raw(record.artist.clone())
    };

    let mut style = Style::default().fg(if checked { theme.blue } else { theme.text });
    if app.is_loading() {
        style = style.add_modifier(Modifier::DIM);
    }

    Row::new(vec![
        Cell::from(Span::styled(checkbox(checked), Style::default().fg(box_color))),
        Cell::from(record.id.to_string()),
        Cell::from(record.title.clone()),
        Cell::from(artist),
        Cell::from(format_year(record.date_start)),
        Cell::from(format_year(record.date_end)),
    ])
    .style(style)
}

pub fn render_grid(frame: &mut Frame, app: &mut App, theme: &Theme, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.surface1))
        .title(Span::styled(
            build_title(app),
            Style::default().fg(theme.text),
        ));
    let inner = block.inner(area);

    if app.page.is_none() {
        let message = if app.is_loading() {
            "Loading artworks..."
        } else {
            "No artworks loaded. Press 'r' to retry."
        };
        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(theme.subtext0))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, area);
        app.layout = GridLayout {
            popover: app.layout.popover,
            ..GridLayout::default()
        };
        return;
    }

    let header = Row::new(vec![
        Cell::from(header_checkbox(app.header_check())),
        Cell::from("ID"),
        Cell::from(if app.popover.visible {
            "Title ▴"
        } else {
            "Title ▾"
        }),
        Cell::from("Artist"),
        Cell::from("Start Date"),
        Cell::from("End Date"),
    ])
    .style(Style::default().fg(theme.mauve).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = (0..app.records().len())
        .map(|i| build_row(app, i, theme))
        .collect();

    let table = Table::new(rows, COLUMN_WIDTHS)
        .header(header)
        .block(block)
        .column_spacing(COLUMN_SPACING)
        .row_highlight_style(
            Style::default()
                .bg(theme.surface0)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = TableState::default().with_selected(Some(app.cursor));
    frame.render_stateful_widget(table, area, &mut state);

    let columns = Layout::horizontal(COLUMN_WIDTHS)
        .spacing(COLUMN_SPACING)
        .split(inner);
    app.layout.header = Rect {
        height: inner.height.min(1),
        ..inner
    };
    app.layout.checkbox_col = (columns[0].x, columns[0].width);
    app.layout.title_col = (columns[2].x, columns[2].width);
    app.layout.rows = Rect {
        y: inner.y + app.layout.header.height,
        height: inner.height.saturating_sub(1),
        ..inner
    };
    app.layout.row_offset = state.offset();
}
