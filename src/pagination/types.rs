//! Pagination types
//!
//! Defines the page, page metadata and cursor state used by the fetcher.

use crate::types::EventRecord;

/// Where an API starts counting pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageIndexing {
    /// First page is 1; the last page has index == total
    OneBased,
    /// First page is 0; the last page has index == total - 1
    ZeroBased,
}

impl PageIndexing {
    /// Cursor value for the first request
    pub fn first_page(self) -> u32 {
        match self {
            Self::OneBased => 1,
            Self::ZeroBased => 0,
        }
    }

    /// True if `index` is the last page (or past it) out of `total`
    ///
    /// A total of zero always reports the last page.
    pub fn is_last(self, index: u32, total: u32) -> bool {
        match self {
            Self::OneBased => index >= total,
            Self::ZeroBased => index.saturating_add(1) >= total,
        }
    }
}

/// Pagination metadata reported by one response
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageInfo {
    /// Index the API says it returned, if it said
    pub current: Option<u32>,
    /// Total number of pages; zero when absent
    pub total: u32,
}

impl PageInfo {
    /// Create page info
    pub fn new(current: Option<u32>, total: u32) -> Self {
        Self { current, total }
    }
}

/// One parsed API response
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    /// Records in response order
    pub records: Vec<EventRecord>,
    /// Pagination metadata
    pub info: PageInfo,
}

impl Page {
    /// Create a page
    pub fn new(records: Vec<EventRecord>, info: PageInfo) -> Self {
        Self { records, info }
    }

    /// A page with no records and no further pages
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Result of processing a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextPage {
    /// Request this cursor next
    Continue(u32),
    /// No more pages
    Done,
}

impl NextPage {
    /// Check if this is a done result
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}

/// Tracks pagination state during iteration
#[derive(Debug, Clone, Default)]
pub struct PaginationState {
    /// Cursor of the next request
    pub page: u32,
    /// Pages processed so far
    pub pages_fetched: u32,
    /// Total records fetched so far
    pub total_fetched: u64,
    /// Is pagination complete?
    pub done: bool,
}

impl PaginationState {
    /// Create state with a starting page
    pub fn with_page(page: u32) -> Self {
        Self {
            page,
            ..Default::default()
        }
    }

    /// Mark pagination as complete
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Increment page number
    pub fn next_page(&mut self) {
        self.page += 1;
    }

    /// Record one processed page
    pub fn add_page(&mut self, records: usize) {
        self.pages_fetched += 1;
        self.total_fetched += records as u64;
    }
}
