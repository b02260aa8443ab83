//! Helper functions for UI rendering

use std::time::Instant;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::super::app::HeaderCheck;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner frame for an operation started at `started`
pub fn spinner_frame(started: Instant) -> &'static str {
    let tick = (started.elapsed().as_millis() / 100) as usize;
    SPINNER[tick % SPINNER.len()]
}

pub fn checkbox(checked: bool) -> &'static str {
    if checked { "☑" } else { "☐" }
}

pub fn header_checkbox(state: HeaderCheck) -> &'static str {
    match state {
        HeaderCheck::None => "☐",
        HeaderCheck::Partial => "◩",
        HeaderCheck::All => "☑",
    }
}

/// Format an optional year, with BCE years shown as "500 BCE"
pub fn format_year(year: Option<i32>) -> String {
    match year {
        Some(y) if y < 0 => format!("{} BCE", y.unsigned_abs()),
        Some(y) => y.to_string(),
        None => "—".to_string(),
    }
}

/// Group digits with commas ("12,345")
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Helper function to create a centered rectangle
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Place a `width` x `height` box at (`x`, `y`), shifted to stay inside `bounds`
pub fn anchored_rect(x: u16, y: u16, width: u16, height: u16, bounds: Rect) -> Rect {
    let width = width.min(bounds.width);
    let height = height.min(bounds.height);
    let max_x = bounds.x + bounds.width - width;
    let max_y = bounds.y + bounds.height - height;
    Rect {
        x: x.clamp(bounds.x, max_x),
        y: y.clamp(bounds.y, max_y),
        width,
        height,
    }
}
