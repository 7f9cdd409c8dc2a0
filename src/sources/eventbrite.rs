//! Eventbrite event search
//!
//! `GET /v3/events/search/`, bearer token, one-based pages:
//!
//! ```text
//! {
//!   "events": [ ... ],
//!   "pagination": { "page_number": 1, "page_count": 4, ... }
//! }
//! ```

use super::{EventSource, DEFAULT_LOCATION};
use crate::auth::AuthConfig;
use crate::config::SourceConfig;
use crate::pagination::{Page, PageIndexing, PageInfo};
use crate::types::{JsonValue, Query};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::warn;

/// Endpoint path below the API host
pub const SEARCH_PATH: &str = "/v3/events/search/";

/// Eventbrite category id for Music
pub const MUSIC_CATEGORY: &str = "103";

/// Eventbrite adapter
#[derive(Clone)]
pub struct EventbriteSource {
    endpoint: String,
    token: String,
}

impl EventbriteSource {
    /// Create an adapter for the given endpoint and OAuth token
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
        }
    }

    /// Create an adapter from loaded configuration
    pub fn from_config(config: &SourceConfig) -> Self {
        Self::new(config.endpoint(SEARCH_PATH), config.credential.clone())
    }
}

impl std::fmt::Debug for EventbriteSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventbriteSource")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    events: Vec<JsonValue>,
    #[serde(default)]
    pagination: Option<Pagination>,
}

#[derive(Debug, Deserialize)]
struct Pagination {
    #[serde(default)]
    page_number: Option<u32>,
    #[serde(default)]
    page_count: Option<u32>,
}

impl EventSource for EventbriteSource {
    fn name(&self) -> &'static str {
        "eventbrite"
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn indexing(&self) -> PageIndexing {
        PageIndexing::OneBased
    }

    fn auth(&self) -> AuthConfig {
        AuthConfig::bearer(self.token.clone())
    }

    fn build_query(&self, date: DateTime<Utc>) -> Query {
        Query::for_day(DEFAULT_LOCATION, MUSIC_CATEGORY, date)
    }

    fn query_params(&self, query: &Query) -> Vec<(String, String)> {
        vec![
            ("location.address".to_string(), query.location.clone()),
            ("categories".to_string(), query.category.clone()),
            ("start_date.range_start".to_string(), query.start_param()),
            ("start_date.range_end".to_string(), query.end_param()),
        ]
    }

    fn parse_page(&self, body: &JsonValue) -> Page {
        match SearchResponse::deserialize(body) {
            Ok(response) => {
                let (current, total) = response
                    .pagination
                    .map_or((None, 0), |p| (p.page_number, p.page_count.unwrap_or(0)));
                Page::new(response.events, PageInfo::new(current, total))
            }
            Err(e) => {
                warn!(source = "eventbrite", error = %e, "Unexpected response shape, treating as empty page");
                Page::empty()
            }
        }
    }
}
