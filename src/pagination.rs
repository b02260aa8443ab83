//! Pagination state for the artworks table

/// Default rows shown per page
pub const DEFAULT_ROWS_PER_PAGE: u32 = 10;

/// Tracks the active page and the last known page count
///
/// The active page is always >= 1. No upper bound is enforced here: callers
/// use `next_page`/`last_page` to stay within the last known total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    active_page: u32,
    total_pages: u32,
    rows_per_page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS_PER_PAGE)
    }
}

impl Pagination {
    pub fn new(rows_per_page: u32) -> Self {
        Self {
            active_page: 1,
            total_pages: 0,
            rows_per_page: rows_per_page.max(1),
        }
    }

    pub fn active_page(&self) -> u32 {
        self.active_page
    }

    /// Last known page count (0 until the first page has loaded)
    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn rows_per_page(&self) -> u32 {
        self.rows_per_page
    }

    /// Set the active page, returning the page actually set
    ///
    /// Page 0 is treated as page 1.
    pub fn go_to_page(&mut self, page: u32) -> u32 {
        self.active_page = page.max(1);
        self.active_page
    }

    pub fn set_total_pages(&mut self, total: u32) {
        self.total_pages = total;
    }

    /// Target of a "next page" action, if there is one
    pub fn next_page(&self) -> Option<u32> {
        (self.active_page < self.total_pages).then(|| self.active_page + 1)
    }

    /// Target of a "previous page" action, if there is one
    pub fn prev_page(&self) -> Option<u32> {
        (self.active_page > 1).then(|| self.active_page - 1)
    }

    /// Target of a "last page" action, if it differs from the active page
    pub fn last_page(&self) -> Option<u32> {
        (self.total_pages > self.active_page).then_some(self.total_pages)
    }

    /// Target of a "first page" action, if it differs from the active page
    pub fn first_page(&self) -> Option<u32> {
        (self.active_page > 1).then_some(1)
    }

    /// Zero-based offset of the first record on the active page
    pub fn first_record_offset(&self) -> u64 {
        u64::from(self.active_page - 1) * u64::from(self.rows_per_page)
    }

    /// Record count the paginator advertises (pages x rows per page)
    pub fn total_records(&self) -> u64 {
        u64::from(self.total_pages) * u64::from(self.rows_per_page)
    }
}
