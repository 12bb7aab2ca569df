use serde::{Deserialize, Serialize};

use super::artwork::ArtworkRecord;

/// Fixed number of records per fetched page.
pub const PAGE_SIZE: u32 = 50;

// ===== Record Page =====

/// One decoded page of catalog records plus its pagination metadata.
///
/// Exactly one `RecordPage` produces exactly one `PaginationState` update
/// plus one rendered page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordPage {
    pub items: Vec<ArtworkRecord>,
    pub page: u32,
    pub total_pages: u32,
    pub total_items: u64,
}

// ===== Pagination State =====

/// The browser's pagination state machine.
///
/// Starts at page 1 of 1 as a placeholder until the first response arrives,
/// and is mutated only by the controller applying a successfully fetched
/// page. Invariant: `1 <= current_page <= total_pages` once a page has been
/// loaded; `items_per_page` never changes after construction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaginationState {
    current_page: u32,
    total_pages: u32,
    total_items: u64,
    items_per_page: u32,
}

impl PaginationState {
    pub fn new(items_per_page: u32) -> Self {
        debug_assert!(items_per_page > 0);
        Self {
            current_page: 1,
            total_pages: 1,
            total_items: 0,
            items_per_page,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    pub fn items_per_page(&self) -> u32 {
        self.items_per_page
    }

    /// Whether a request for `page` would be acted on.
    ///
    /// Out-of-range requests (page 0, or past the known last page) are
    /// ignored by the controller: no fetch, no state change, no render.
    pub fn accepts(&self, page: u32) -> bool {
        page >= 1 && page <= self.total_pages
    }

    /// Replace the state from a successfully fetched page.
    pub fn apply(&mut self, page: &RecordPage) {
        self.current_page = page.page;
        self.total_pages = page.total_pages.max(1);
        self.total_items = page.total_items;
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}
