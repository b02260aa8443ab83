//! Application state for the TUI

mod fetch;
mod popover;
mod traits;


use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Instant;

use log::debug;
use ratatui::layout::Rect;

use crate::api::{ArtworkSource, FetchError};
use crate::config::{ArtgridConfig, TuiTheme};
use crate::models::{ArtworkRecord, PageResult};
use crate::pagination::Pagination;
use crate::selection::SelectionSet;

pub use popover::BulkSelectPopover;
pub use traits::SelectableList;

/// Idle/loading state of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading {
        page: u32,
        seq: u64,
        started: Instant,
    },
}

/// A page request running on a worker thread
struct InFlightFetch {
    seq: u64,
    page: u32,
    handle: JoinHandle<Result<PageResult, FetchError>>,
}

/// State of the header checkbox for the visible rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCheck {
    None,
    Partial,
    All,
}

/// Status message to display temporarily
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

/// Screen regions from the last render, used for mouse hit testing
#[derive(Debug, Clone, Copy, Default)]
pub struct GridLayout {
    /// Header row of the table
    pub header: Rect,
    /// Horizontal span (x, width) of the checkbox column
    pub checkbox_col: (u16, u16),
    /// Horizontal span (x, width) of the Title column
    pub title_col: (u16, u16),
    /// Area holding the data rows
    pub rows: Rect,
    /// Index of the first rendered row
    pub row_offset: usize,
    /// Bulk-select popover, when shown
    pub popover: Option<Rect>,
}

/// What a mouse click landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridHit {
    HeaderCheckbox,
    TitleHeader,
    Row { index: usize, on_checkbox: bool },
    Popover,
    Outside,
}

pub struct App {
    pub running: bool,
    source: Arc<dyn ArtworkSource>,
    pub pagination: Pagination,
    pub selection: SelectionSet,
    /// Last successfully loaded page (kept on fetch failure)
    pub page: Option<PageResult>,
    pub load_state: LoadState,
    in_flight: Option<InFlightFetch>,
    next_seq: u64,

    /// Row cursor within the current page
    pub cursor: usize,
    pub popover: BulkSelectPopover,
    /// Blocking alert, dismissed explicitly
    pub alert: Option<String>,
    pub status_message: Option<StatusMessage>,
    pub show_help: bool,
    pub theme: TuiTheme,
    pub layout: GridLayout,
}

impl App {
    pub fn new(source: Arc<dyn ArtworkSource>, config: &ArtgridConfig) -> Self {
        Self {
            running: true,
            source,
            pagination: Pagination::new(config.rows_per_page()),
            selection: SelectionSet::new(),
            page: None,
            load_state: LoadState::Idle,
            in_flight: None,
            next_seq: 0,
            cursor: 0,
            popover: BulkSelectPopover::default(),
            alert: None,
            status_message: None,
            show_help: false,
            theme: config.tui.theme,
            layout: GridLayout::default(),
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Records of the page currently displayed
    pub fn records(&self) -> &[ArtworkRecord] {
        self.page.as_ref().map(|p| p.records.as_slice()).unwrap_or(&[])
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load_state, LoadState::Loading { .. })
    }

    // ==================== Selection ====================

    pub fn is_selected(&self, record: &ArtworkRecord) -> bool {
        self.selection.is_selected(record.id)
    }

    /// Selected rows of the current page
    pub fn selected_rows(&self) -> Vec<&ArtworkRecord> {
        self.selection.visible(self.records())
    }

    pub fn selection_count(&self) -> usize {
        self.selection.len()
    }

    /// Toggle the checkbox of the row at `index`
    pub fn toggle_row(&mut self, index: usize) {
        let Some(id) = self.records().get(index).map(|r| r.id) else {
            return;
        };
        let selected = self.selection.toggle(id);
        debug!("Row {id} {}", if selected { "selected" } else { "deselected" });
    }

    /// Toggle the row under the cursor
    pub fn toggle_current(&mut self) {
        self.toggle_row(self.cursor);
    }

    pub fn header_check(&self) -> HeaderCheck {
        let records = self.records();
        let selected = self.selected_rows().len();
        if selected == 0 {
            HeaderCheck::None
        } else if selected == records.len() {
            HeaderCheck::All
        } else {
            HeaderCheck::Partial
        }
    }

    /// Header checkbox: check every visible row, or none if all are checked
    ///
    /// Like a checkbox-per-page grid, this reports only the visible rows, so
    /// the selection is replaced and ids from other pages are dropped.
    /// A page with no rows has nothing to report and leaves the selection alone.
    pub fn toggle_visible_all(&mut self) {
        if self.records().is_empty() {
            return;
        }
        let check_all = self.header_check() != HeaderCheck::All;
        let records = self.page.as_ref().map(|p| p.records.as_slice()).unwrap_or(&[]);
        if check_all {
            self.selection.replace_from_visible_selection(records);
        } else {
            self.selection
                .replace_from_visible_selection(std::iter::empty::<&ArtworkRecord>());
        }
    }

    // ==================== Cursor ====================

    pub fn select_next(&mut self) {
        SelectableList::select_next(self);
    }

    pub fn select_prev(&mut self) {
        SelectableList::select_prev(self);
    }

    pub fn select_first(&mut self) {
        SelectableList::select_first(self);
    }

    pub fn select_last(&mut self) {
        SelectableList::select_last(self);
    }

    /// Move the cursor to `index` (for mouse clicks)
    pub fn select_row(&mut self, index: usize) {
        SelectableList::select(self, index);
    }

    // ==================== Mouse ====================

    /// Resolve a click position against the last rendered layout
    pub fn hit_test(&self, x: u16, y: u16) -> GridHit {
        let contains = |rect: Rect| {
            x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
        };
        let in_span = |(start, width): (u16, u16)| x >= start && x < start + width;

        if let Some(popover) = self.layout.popover {
            return if contains(popover) {
                GridHit::Popover
            } else {
                GridHit::Outside
            };
        }

        if contains(self.layout.header) {
            if in_span(self.layout.checkbox_col) {
                return GridHit::HeaderCheckbox;
            }
            if in_span(self.layout.title_col) {
                return GridHit::TitleHeader;
            }
            return GridHit::Outside;
        }

        if contains(self.layout.rows) {
            let index = (y - self.layout.rows.y) as usize + self.layout.row_offset;
            if index < self.records().len() {
                return GridHit::Row {
                    index,
                    on_checkbox: in_span(self.layout.checkbox_col),
                };
            }
        }

        GridHit::Outside
    }

    // ==================== Status & overlays ====================

    pub fn set_status(&mut self, text: impl Into<String>, is_error: bool) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            is_error,
        });
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.set_status(format!("Theme: {}", self.theme), false);
    }
}
