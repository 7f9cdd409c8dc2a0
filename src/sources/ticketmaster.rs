//! Ticketmaster discovery
//!
//! `GET /discovery/v2/events.json`, `apikey` query parameter, zero-based pages:
//!
//! ```text
//! {
//!   "_embedded": { "events": [ ... ] },
//!   "page": { "size": 200, "totalElements": 512, "totalPages": 3, "number": 0 }
//! }
//! ```
//!
//! `_embedded` is omitted entirely when a search has no results.

use super::{EventSource, DEFAULT_LOCATION};
use crate::auth::AuthConfig;
use crate::config::SourceConfig;
use crate::pagination::{Page, PageIndexing, PageInfo};
use crate::types::{JsonValue, Query};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::warn;

/// Endpoint path below the API host
pub const EVENTS_PATH: &str = "/discovery/v2/events.json";

/// Classification filter for music events
pub const MUSIC_CLASSIFICATION: &str = "music";

/// Country the city filter is scoped to
pub const COUNTRY_CODE: &str = "US";

/// Largest page size the discovery API accepts
pub const MAX_PAGE_SIZE: u32 = 200;

/// Ticketmaster adapter
#[derive(Clone)]
pub struct TicketmasterSource {
    endpoint: String,
    api_key: String,
}

impl TicketmasterSource {
    /// Create an adapter for the given endpoint and API key
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    /// Create an adapter from loaded configuration
    pub fn from_config(config: &SourceConfig) -> Self {
        Self::new(config.endpoint(EVENTS_PATH), config.credential.clone())
    }
}

impl std::fmt::Debug for TicketmasterSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TicketmasterSource")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Deserialize)]
struct DiscoveryResponse {
    #[serde(rename = "_embedded", default)]
    embedded: Option<Embedded>,
    #[serde(default)]
    page: Option<PageMeta>,
}

#[derive(Debug, Deserialize)]
struct Embedded {
    #[serde(default)]
    events: Vec<JsonValue>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageMeta {
    #[serde(default)]
    number: Option<u32>,
    #[serde(default)]
    total_pages: Option<u32>,
}

impl EventSource for TicketmasterSource {
    fn name(&self) -> &'static str {
        "ticketmaster"
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn indexing(&self) -> PageIndexing {
        PageIndexing::ZeroBased
    }

    fn auth(&self) -> AuthConfig {
        AuthConfig::api_key_query("apikey", self.api_key.clone())
    }

    fn build_query(&self, date: DateTime<Utc>) -> Query {
        Query::for_day(DEFAULT_LOCATION, MUSIC_CLASSIFICATION, date)
            .with_country_code(COUNTRY_CODE)
            .with_page_size(MAX_PAGE_SIZE)
    }

    fn query_params(&self, query: &Query) -> Vec<(String, String)> {
        let mut params = vec![
            ("classificationName".to_string(), query.category.clone()),
            ("city".to_string(), query.location.clone()),
        ];
        if let Some(code) = &query.country_code {
            params.push(("countryCode".to_string(), code.clone()));
        }
        params.push(("startDateTime".to_string(), query.start_param()));
        params.push(("endDateTime".to_string(), query.end_param()));
        if let Some(size) = query.page_size {
            params.push(("size".to_string(), size.to_string()));
        }
        params
    }

    fn parse_page(&self, body: &JsonValue) -> Page {
        match DiscoveryResponse::deserialize(body) {
            Ok(response) => {
                let records = response.embedded.map(|e| e.events).unwrap_or_default();
                let (current, total) = response
                    .page
                    .map_or((None, 0), |p| (p.number, p.total_pages.unwrap_or(0)));
                Page::new(records, PageInfo::new(current, total))
            }
            Err(e) => {
                warn!(source = "ticketmaster", error = %e, "Unexpected response shape, treating as empty page");
                Page::empty()
            }
        }
    }
}
