//! Page fetching for the TUI
//!
//! Each page change spawns one worker thread and records a sequence number.
//! The event loop polls the worker without blocking; only the completion
//! carrying the latest sequence number may touch the table.

use std::sync::Arc;
use std::time::Instant;

use log::{debug, error, info};

use super::{App, InFlightFetch, LoadState};
use crate::api::FetchError;
use crate::models::PageResult;

impl App {
    // ==================== Pagination ====================

    /// Make `page` active and start fetching it
    pub fn go_to_page(&mut self, page: u32) {
        let page = self.pagination.go_to_page(page);
        self.start_fetch(page);
    }

    pub fn next_page(&mut self) {
        if let Some(page) = self.pagination.next_page() {
            self.go_to_page(page);
        }
    }

    pub fn prev_page(&mut self) {
        if let Some(page) = self.pagination.prev_page() {
            self.go_to_page(page);
        }
    }

    pub fn first_page(&mut self) {
        if let Some(page) = self.pagination.first_page() {
            self.go_to_page(page);
        }
    }

    pub fn last_page(&mut self) {
        if let Some(page) = self.pagination.last_page() {
            self.go_to_page(page);
        }
    }

    /// Fetch the active page again
    pub fn reload_page(&mut self) {
        self.go_to_page(self.pagination.active_page());
    }

    // ==================== Fetch lifecycle ====================

    /// Spawn a fetch for `page`, superseding any request in flight
    fn start_fetch(&mut self, page: u32) -> u64 {
        self.next_seq += 1;
        let seq = self.next_seq;

        if let Some(previous) = self.in_flight.take() {
            debug!(
                "Request #{} for page {} superseded by #{seq}",
                previous.seq, previous.page
            );
        }

        let source = Arc::clone(&self.source);
        let limit = self.pagination.rows_per_page();
        let handle = std::thread::spawn(move || source.fetch_page(page, limit));

        self.in_flight = Some(InFlightFetch { seq, page, handle });
        self.load_state = LoadState::Loading {
            page,
            seq,
            started: Instant::now(),
        };
        seq
    }

    /// Check the worker thread; returns true if a fetch settled
    pub fn poll_fetch(&mut self) -> bool {
        let finished = self
            .in_flight
            .as_ref()
            .is_some_and(|fetch| fetch.handle.is_finished());
        if !finished {
            return false;
        }
        let Some(fetch) = self.in_flight.take() else {
            return false;
        };

        let result = fetch.handle.join().unwrap_or_else(|_| {
            Err(FetchError::Transport("fetch thread panicked".to_string()))
        });
        self.complete_fetch(fetch.seq, fetch.page, result);
        true
    }

    /// Apply the outcome of request `seq` for `page`
    ///
    /// Stale completions are dropped. On failure the previous page stays on
    /// screen and the active page reverts to it.
    pub fn complete_fetch(
        &mut self,
        seq: u64,
        page: u32,
        result: Result<PageResult, FetchError>,
    ) {
        let LoadState::Loading { seq: latest, started, .. } = self.load_state else {
            debug!("Ignoring response #{seq} for page {page}: nothing pending");
            return;
        };
        if seq != latest {
            debug!("Discarding stale response #{seq} for page {page} (latest #{latest})");
            return;
        }

        self.load_state = LoadState::Idle;

        match result {
            Ok(loaded) => {
                info!(
                    "Loaded page {} ({} records, {} pages) in {:?}",
                    loaded.page,
                    loaded.len(),
                    loaded.total_pages,
                    started.elapsed()
                );
                self.pagination.set_total_pages(loaded.total_pages);
                self.cursor = self.cursor.min(loaded.len().saturating_sub(1));
                self.page = Some(loaded);
            }
            Err(err) => {
                error!("Error while fetching artwork page {page}: {err}");
                if let Some(shown) = self.page.as_ref().map(|p| p.page) {
                    self.pagination.go_to_page(shown);
                }
                self.set_status(format!("Could not load page {page}: {err}"), true);
            }
        }
    }
}
