//! Pagination module
//!
//! Supports: page-number pagination with a total page count, in either
//! one-based or zero-based form.
//!
//! # Overview
//!
//! Both APIs report the index of the current page and the total number of
//! pages. They disagree on where counting starts, so `PageIndexing` turns
//! the pair into a single "is this the last page" decision that never
//! subtracts from the total.

mod paginator;
mod types;

pub use paginator::PageNumberPaginator;
pub use types::{NextPage, Page, PageIndexing, PageInfo, PaginationState};
