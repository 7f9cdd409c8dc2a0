//! Common types used throughout event-pager
//!
//! This module contains shared type definitions, type aliases,
//! and the query/result types passed between sources and the fetcher.

use chrono::{DateTime, Duration, Utc};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// A single event as returned by an API. Passed through untouched.
pub type EventRecord = JsonValue;

/// Timestamp format used by both APIs (UTC, second precision)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

// ============================================================================
// Query
// ============================================================================

/// Filter parameters for one invocation
///
/// Built once from the target date; the fetcher only reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// City or address the events take place in
    pub location: String,
    /// Category id or classification name
    pub category: String,
    /// ISO country code, for APIs that filter on it
    pub country_code: Option<String>,
    /// Start of the window (inclusive)
    pub start: DateTime<Utc>,
    /// End of the window (exclusive)
    pub end: DateTime<Utc>,
    /// Records per page, for APIs that accept it
    pub page_size: Option<u32>,
}

impl Query {
    /// Create a query covering the 24 hours starting at `date`
    pub fn for_day(
        location: impl Into<String>,
        category: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            location: location.into(),
            category: category.into(),
            country_code: None,
            start: date,
            end: date + Duration::days(1),
            page_size: None,
        }
    }

    /// Set the country code
    #[must_use]
    pub fn with_country_code(mut self, code: impl Into<String>) -> Self {
        self.country_code = Some(code.into());
        self
    }

    /// Set the page size
    #[must_use]
    pub fn with_page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Window start formatted for the wire
    pub fn start_param(&self) -> String {
        self.start.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Window end formatted for the wire
    pub fn end_param(&self) -> String {
        self.end.format(TIMESTAMP_FORMAT).to_string()
    }
}

// ============================================================================
// ResultSet
// ============================================================================

/// All records collected across pages, in page order then within-page order
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    records: Vec<EventRecord>,
    pages: u32,
}

impl ResultSet {
    /// Create an empty result set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one page worth of records
    pub fn push_page(&mut self, records: Vec<EventRecord>) {
        self.records.extend(records);
        self.pages += 1;
    }

    /// Number of records collected
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no records were collected
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of pages appended so far
    pub fn pages(&self) -> u32 {
        self.pages
    }

    /// Borrow the records
    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    /// Consume into the record list
    pub fn into_records(self) -> Vec<EventRecord> {
        self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_query_for_day_window() {
        let date = Utc.with_ymd_and_hms(2024, 3, 9, 18, 30, 15).unwrap();
        let query = Query::for_day("New York", "103", date);

        assert_eq!(query.start_param(), "2024-03-09T18:30:15Z");
        assert_eq!(query.end_param(), "2024-03-10T18:30:15Z");
        assert!(query.country_code.is_none());
        assert!(query.page_size.is_none());
    }

    #[test]
    fn test_query_drops_fractional_seconds() {
        let date = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap()
            + Duration::milliseconds(987);
        let query = Query::for_day("New York", "music", date);

        assert_eq!(query.start_param(), "2024-12-31T23:59:59Z");
        assert_eq!(query.end_param(), "2025-01-01T23:59:59Z");
    }

    #[test]
    fn test_query_builders() {
        let date = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let query = Query::for_day("New York", "music", date)
            .with_country_code("US")
            .with_page_size(200);

        assert_eq!(query.country_code.as_deref(), Some("US"));
        assert_eq!(query.page_size, Some(200));
    }

    #[test]
    fn test_result_set_preserves_order() {
        let mut results = ResultSet::new();
        assert!(results.is_empty());

        results.push_page(vec![json!({"id": 1}), json!({"id": 2})]);
        results.push_page(vec![]);
        results.push_page(vec![json!({"id": 3})]);

        assert_eq!(results.len(), 3);
        assert_eq!(results.pages(), 3);
        let ids: Vec<_> = results.records().iter().map(|r| r["id"].clone()).collect();
        assert_eq!(ids, vec![json!(1), json!(2), json!(3)]);
    }
}
