//! Paged fetch loop
//!
//! `PagedFetcher` walks every page of an `EventSource` for one `Query`:
//! request the current cursor, parse the page, append its records, stop when
//! the source's page indexing says this was the last page, otherwise advance
//! the cursor by one. Requests are strictly sequential and never retried.

use crate::config::SourceConfig;
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use crate::pagination::{NextPage, Page, PageNumberPaginator, PaginationState};
use crate::sources::{self, EventSource};
use crate::types::{Query, ResultSet};
use chrono::{DateTime, Utc};
use std::time::Instant;
use tracing::{debug, info};

/// Fetches and aggregates all pages of an event source
pub struct PagedFetcher {
    client: HttpClient,
    source: Box<dyn EventSource>,
    paginator: PageNumberPaginator,
}

impl PagedFetcher {
    /// Create a fetcher for `source`, authenticating with the source's credential
    pub fn new(source: Box<dyn EventSource>, http: HttpClientConfig) -> Result<Self> {
        let client = HttpClient::with_auth(http, source.auth())?;
        let paginator = PageNumberPaginator::new(source.page_param(), source.indexing());
        Ok(Self {
            client,
            source,
            paginator,
        })
    }

    /// Create a fetcher from loaded configuration
    pub fn from_config(config: &SourceConfig) -> Result<Self> {
        Self::new(sources::from_config(config), config.http.clone())
    }

    /// Build the source's query for the day starting at `date`
    pub fn build_query(&self, date: DateTime<Utc>) -> Query {
        self.source.build_query(date)
    }

    /// Fetch every page and return the aggregated records
    pub async fn fetch_all(&self, query: &Query) -> Result<ResultSet> {
        let mut results = ResultSet::new();
        self.fetch_into(query, &mut results).await?;
        Ok(results)
    }

    /// Fetch every page, appending into `results` as each page arrives
    ///
    /// On error `results` holds exactly the pages fetched before the failure.
    pub async fn fetch_into(
        &self,
        query: &Query,
        results: &mut ResultSet,
    ) -> Result<PaginationState> {
        let start = Instant::now();
        let base_params = self.source.query_params(query);
        let mut state = self.paginator.initial_state();

        loop {
            let page = self.fetch_page(&base_params, &state).await?;
            let record_count = page.records.len();

            debug!(
                source = self.source.name(),
                page = state.page,
                records = record_count,
                total_pages = page.info.total,
                "Fetched page"
            );

            results.push_page(page.records);

            match self
                .paginator
                .process_page(&page.info, record_count, &mut state)
            {
                NextPage::Continue(_) => {}
                NextPage::Done => break,
            }
        }

        info!(
            source = self.source.name(),
            pages = state.pages_fetched,
            records = state.total_fetched,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Completed fetch"
        );

        Ok(state)
    }

    async fn fetch_page(
        &self,
        base_params: &[(String, String)],
        state: &PaginationState,
    ) -> Result<Page> {
        let config = RequestConfig::new()
            .queries(base_params.iter().cloned())
            .queries([self.paginator.params(state)]);

        let endpoint = self.source.endpoint();
        let url = self.client.display_url(endpoint, &config)?;
        info!("Requesting page {}: {}", state.page, url);

        let body = self.client.get_json(endpoint, &config).await?;
        Ok(self.source.parse_page(&body))
    }
}

impl std::fmt::Debug for PagedFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PagedFetcher")
            .field("source", &self.source.name())
            .field("endpoint", &self.source.endpoint())
            .field("paginator", &self.paginator)
            .finish_non_exhaustive()
    }
}
