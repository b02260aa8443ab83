//! Bulk-select popover and blocking alert

use log::{info, warn};

use super::App;

/// Longest input accepted by the popover field
const MAX_INPUT_LEN: usize = 12;

/// "Select first N rows" form anchored under the Title header
///
/// The input survives closing and reopening the popover.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkSelectPopover {
    pub visible: bool,
    pub input: String,
}

impl App {
    pub fn open_popover(&mut self) {
        self.popover.visible = true;
    }

    pub fn close_popover(&mut self) {
        self.popover.visible = false;
        self.layout.popover = None;
    }

    pub fn toggle_popover(&mut self) {
        if self.popover.visible {
            self.close_popover();
        } else {
            self.open_popover();
        }
    }

    pub fn popover_push(&mut self, c: char) {
        if !c.is_control() && self.popover.input.chars().count() < MAX_INPUT_LEN {
            self.popover.input.push(c);
        }
    }

    pub fn popover_pop(&mut self) {
        self.popover.input.pop();
    }

    /// Run "select first N" with the popover input against the loaded page
    ///
    /// Invalid input raises the blocking alert and keeps the popover open.
    /// Returns true when the selection was replaced.
    pub fn submit_popover(&mut self) -> bool {
        let records = self.page.as_ref().map(|p| p.records.as_slice()).unwrap_or(&[]);

        match self.selection.select_first_n(&self.popover.input, records) {
            Ok(count) => {
                info!("Selected first {count} row(s) of page {}", self.pagination.active_page());
                self.close_popover();
                self.set_status(format!("Selected first {count} row(s)"), false);
                true
            }
            Err(err) => {
                warn!("Rejected bulk-select input {:?}: {err}", self.popover.input);
                self.alert = Some(err.to_string());
                false
            }
        }
    }

    pub fn has_alert(&self) -> bool {
        self.alert.is_some()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }
}
