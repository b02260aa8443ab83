//! Row cursor navigation
//!
//! `SelectableList` holds the clamped next/prev/first/last movement shared by
//! anything that shows a list of rows with a cursor.

use super::App;

/// Trait for a list with a movable cursor
pub trait SelectableList {
    /// Number of rows
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current cursor row
    fn selected_index(&self) -> usize;

    fn set_selected_index(&mut self, idx: usize);

    /// Move down one row, stopping at the last
    fn select_next(&mut self) {
        if !self.is_empty() {
            let idx = (self.selected_index() + 1).min(self.len() - 1);
            self.set_selected_index(idx);
        }
    }

    /// Move up one row, stopping at the first
    fn select_prev(&mut self) {
        let idx = self.selected_index().saturating_sub(1);
        self.set_selected_index(idx);
    }

    fn select_first(&mut self) {
        self.set_selected_index(0);
    }

    fn select_last(&mut self) {
        if !self.is_empty() {
            self.set_selected_index(self.len() - 1);
        }
    }

    /// Jump to `index`, clamped to the last row
    fn select(&mut self, index: usize) {
        if !self.is_empty() {
            self.set_selected_index(index.min(self.len() - 1));
        }
    }
}

impl SelectableList for App {
    fn len(&self) -> usize {
        self.records().len()
    }

    fn selected_index(&self) -> usize {
        self.cursor
    }

    fn set_selected_index(&mut self, idx: usize) {
        self.cursor = idx;
    }
}
