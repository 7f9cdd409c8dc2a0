//! Event source adapters
//!
//! Each adapter binds the generic fetch loop to one API: where the endpoint
//! lives, how the credential is sent, which query parameters express a
//! `Query`, how a response body splits into records and pagination metadata,
//! and where page numbering starts.

mod eventbrite;
mod ticketmaster;

pub use eventbrite::EventbriteSource;
pub use ticketmaster::TicketmasterSource;

use crate::auth::AuthConfig;
use crate::config::{SourceConfig, SourceKind};
use crate::pagination::{Page, PageIndexing};
use crate::types::{JsonValue, Query};
use chrono::{DateTime, Utc};

/// City every query targets
pub const DEFAULT_LOCATION: &str = "New York";

/// Capability set of a paged event API
pub trait EventSource: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Full URL of the list endpoint
    fn endpoint(&self) -> &str;

    /// Where page numbering starts
    fn indexing(&self) -> PageIndexing;

    /// Credential placement
    fn auth(&self) -> AuthConfig;

    /// Query parameter carrying the page cursor
    fn page_param(&self) -> &'static str {
        "page"
    }

    /// Build the query for the day starting at `date`
    fn build_query(&self, date: DateTime<Utc>) -> Query;

    /// Query parameters for `query`, excluding the page cursor
    fn query_params(&self, query: &Query) -> Vec<(String, String)>;

    /// Split a response body into records and pagination metadata
    ///
    /// Bodies that do not match the expected shape yield an empty final page.
    fn parse_page(&self, body: &JsonValue) -> Page;
}

/// Build the adapter described by `config`
pub fn from_config(config: &SourceConfig) -> Box<dyn EventSource> {
    match config.kind {
        SourceKind::Eventbrite => Box::new(EventbriteSource::from_config(config)),
        SourceKind::Ticketmaster => Box::new(TicketmasterSource::from_config(config)),
    }
}
