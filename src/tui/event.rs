//! Event handling for the TUI

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use super::app::{App, GridHit};

const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Handle all input events
pub fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(POLL_TIMEOUT)? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(app, key),
            Event::Mouse(mouse) => handle_mouse_event(app, mouse),
            _ => {}
        }
    }
    Ok(())
}

pub(crate) fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    // The alert blocks everything until dismissed
    if app.has_alert() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            app.dismiss_alert();
        }
        return;
    }

    if app.popover.visible {
        handle_popover_keys(app, key);
        return;
    }

    if app.show_help {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
        ) {
            app.show_help = false;
        }
        return;
    }

    app.clear_status();
    handle_normal_mode(app, key);
}

fn handle_popover_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_popover(),
        KeyCode::Enter => {
            app.submit_popover();
        }
        KeyCode::Backspace => app.popover_pop(),
        KeyCode::Char(c) => app.popover_push(c),
        _ => {}
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.quit(),

        // Row cursor
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_prev(),
        KeyCode::Char('g') => app.select_first(),
        KeyCode::Char('G') => app.select_last(),

        // Pages
        KeyCode::Char('l') | KeyCode::Right | KeyCode::PageDown => app.next_page(),
        KeyCode::Char('h') | KeyCode::Left | KeyCode::PageUp => app.prev_page(),
        KeyCode::Char('[') | KeyCode::Home => app.first_page(),
        KeyCode::Char(']') | KeyCode::End => app.last_page(),
        KeyCode::Char('r') => app.reload_page(),

        // Selection
        KeyCode::Char(' ') => {
            app.toggle_current();
            app.select_next();
        }
        KeyCode::Char('a') => app.toggle_visible_all(),
        KeyCode::Char('n') => app.open_popover(),

        KeyCode::Char('t') => app.cycle_theme(),
        KeyCode::Char('?') => app.toggle_help(),

        _ => {}
    }
}

pub(crate) fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    if app.has_alert() || app.show_help {
        return;
    }

    match mouse.kind {
        MouseEventKind::ScrollUp if !app.popover.visible => app.select_prev(),
        MouseEventKind::ScrollDown if !app.popover.visible => app.select_next(),
        MouseEventKind::Down(MouseButton::Left) => {
            let hit = app.hit_test(mouse.column, mouse.row);

            // Any click outside the popover dismisses it
            if app.popover.visible {
                if hit != GridHit::Popover {
                    app.close_popover();
                }
                return;
            }

            match hit {
                GridHit::HeaderCheckbox => app.toggle_visible_all(),
                GridHit::TitleHeader => app.toggle_popover(),
                GridHit::Row { index, on_checkbox } => {
                    app.select_row(index);
                    if on_checkbox {
                        app.toggle_row(index);
                    }
                }
                GridHit::Popover | GridHit::Outside => {}
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crossterm::event::KeyEventState;

    use crate::api::{ArtworkSource, FetchError};
    use crate::config::ArtgridConfig;
    use crate::models::{ArtworkRecord, PageResult};

    struct OnePage;

    impl ArtworkSource for OnePage {
        fn name(&self) -> &str {
            "one-page"
        }

        fn fetch_page(&self, page: u32, _limit: u32) -> Result<PageResult, FetchError> {
            let records = (1..=4).map(|id| ArtworkRecord::new(id, "Study")).collect();
            Ok(PageResult::new(page, records, 1))
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn app_with_page() -> App {
        let mut app = App::new(Arc::new(OnePage), &ArtgridConfig::default());
        let records = (1..=4).map(|id| ArtworkRecord::new(id, "Study")).collect();
        app.page = Some(PageResult::new(1, records, 1));
        app
    }

    #[test]
    fn test_space_toggles_and_advances() {
        let mut app = app_with_page();
        handle_key_event(&mut app, key(KeyCode::Char(' ')));
        assert!(app.selection.is_selected(1));
        assert_eq!(app.cursor, 1);
    }

    #[test]
    fn test_popover_keys_route_to_input() {
        let mut app = app_with_page();
        handle_key_event(&mut app, key(KeyCode::Char('n')));
        assert!(app.popover.visible);

        // 'q' is input text while the popover is open
        handle_key_event(&mut app, key(KeyCode::Char('q')));
        assert!(app.running);
        assert_eq!(app.popover.input, "q");

        handle_key_event(&mut app, key(KeyCode::Enter));
        assert!(app.has_alert());

        // Alert swallows keys until dismissed
        handle_key_event(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.popover.input, "q");
        handle_key_event(&mut app, key(KeyCode::Esc));
        assert!(!app.has_alert());

        handle_key_event(&mut app, key(KeyCode::Backspace));
        handle_key_event(&mut app, key(KeyCode::Char('2')));
        handle_key_event(&mut app, key(KeyCode::Enter));
        assert!(!app.popover.visible);
        assert_eq!(app.selection.ids(), vec![1, 2]);
    }

    #[test]
    fn test_ctrl_c_quits_from_popover() {
        let mut app = app_with_page();
        app.open_popover();
        let mut event = key(KeyCode::Char('c'));
        event.modifiers = KeyModifiers::CONTROL;
        handle_key_event(&mut app, event);
        assert!(!app.running);
    }

    #[test]
    fn test_click_outside_closes_popover() {
        let mut app = app_with_page();
        app.open_popover();
        app.layout.popover = Some(ratatui::layout::Rect::new(10, 5, 20, 6));

        let click = |column, row| MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };

        handle_mouse_event(&mut app, click(12, 6));
        assert!(app.popover.visible);

        handle_mouse_event(&mut app, click(0, 0));
        assert!(!app.popover.visible);
    }
}
