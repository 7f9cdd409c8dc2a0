//! CLI runner - executes commands

use crate::cli::commands::Cli;
use crate::config::SourceConfig;
use crate::error::{Result, ResultExt};
use crate::fetcher::PagedFetcher;
use crate::output::write_report;
use crate::types::ResultSet;
use chrono::{DateTime, Utc};
use std::io::Write;
use tracing::info;

type EnvLookup = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// CLI runner
pub struct Runner {
    cli: Cli,
    env: EnvLookup,
    date: Option<DateTime<Utc>>,
}

impl Runner {
    /// Create a runner reading the process environment
    pub fn new(cli: Cli) -> Self {
        Self {
            cli,
            env: Box::new(|name| std::env::var(name).ok()),
            date: None,
        }
    }

    /// Read configuration through `lookup` instead of the process environment
    #[must_use]
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        self.env = Box::new(lookup);
        self
    }

    /// Fetch events for the day starting at `date` instead of now
    #[must_use]
    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    /// Run the CLI command, printing the report to stdout
    pub async fn run(&self) -> Result<()> {
        let results = self.fetch().await?;
        let stdout = std::io::stdout();
        write_report(&mut stdout.lock(), &results).context("Failed to write report")
    }

    /// Run the CLI command, writing the report to `out`
    pub async fn run_to<W: Write>(&self, out: &mut W) -> Result<ResultSet> {
        let results = self.fetch().await?;
        write_report(out, &results)?;
        Ok(results)
    }

    /// Load configuration and fetch every page for the selected source
    ///
    /// Configuration is loaded first; a missing credential fails here before
    /// any request is made.
    pub async fn fetch(&self) -> Result<ResultSet> {
        let kind = self.cli.command.source_kind();
        let config = SourceConfig::from_lookup(kind, |name| (self.env)(name))?;
        let fetcher = PagedFetcher::from_config(&config)?;

        let date = self.date.unwrap_or_else(Utc::now);
        let query = fetcher.build_query(date);
        info!(
            source = %kind,
            location = %query.location,
            start = %query.start_param(),
            end = %query.end_param(),
            "Fetching events"
        );

        fetcher.fetch_all(&query).await
    }
}
