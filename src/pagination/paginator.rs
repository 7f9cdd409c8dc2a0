//! Page number paginator
//!
//! Uses a page number query parameter and the total page count from each
//! response to decide when to stop.
//! Common patterns:
//! - `?page=2` with `{"pagination": {"page_number": 2, "page_count": 5}}`
//! - `?page=1&size=200` with `{"page": {"number": 1, "totalPages": 5}}`

use super::types::{NextPage, PageIndexing, PageInfo, PaginationState};
use tracing::warn;

/// Page number pagination driven by a reported total page count
#[derive(Debug, Clone)]
pub struct PageNumberPaginator {
    /// Query parameter name for page number
    pub page_param: String,
    /// Where page numbering starts
    pub indexing: PageIndexing,
}

impl PageNumberPaginator {
    /// Create a new page number paginator
    pub fn new(page_param: impl Into<String>, indexing: PageIndexing) -> Self {
        Self {
            page_param: page_param.into(),
            indexing,
        }
    }

    /// State positioned on the first page
    pub fn initial_state(&self) -> PaginationState {
        PaginationState::with_page(self.indexing.first_page())
    }

    /// Query parameter for the current cursor
    pub fn params(&self, state: &PaginationState) -> (String, String) {
        (self.page_param.clone(), state.page.to_string())
    }

    /// Process a page and decide whether to continue
    ///
    /// The decision uses the cursor that was requested, not the index echoed
    /// back, so a server repeating the same page number cannot loop forever.
    pub fn process_page(
        &self,
        info: &PageInfo,
        records_count: usize,
        state: &mut PaginationState,
    ) -> NextPage {
        state.add_page(records_count);

        if let Some(current) = info.current {
            if current != state.page {
                warn!(
                    requested = state.page,
                    reported = current,
                    "API reported a different page than requested"
                );
            }
        }

        if self.indexing.is_last(state.page, info.total) {
            state.mark_done();
            return NextPage::Done;
        }

        state.next_page();
        NextPage::Continue(state.page)
    }
}
