// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]

//! # event-pager
//!
//! Fetches one day of music events in New York from a paged event API and
//! aggregates every page into a single result set.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use event_pager::{PagedFetcher, SourceConfig, SourceKind, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = SourceConfig::from_env(SourceKind::Ticketmaster)?;
//!     let fetcher = PagedFetcher::from_config(&config)?;
//!
//!     let query = fetcher.build_query(chrono::Utc::now());
//!     let events = fetcher.fetch_all(&query).await?;
//!     println!("{} events", events.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │            PagedFetcher::fetch_all(query)                │
//! │   request page → parse page → append → last? → advance   │
//! └──────────────────────────────────────────────────────────┘
//!                              │
//! ┌──────────────┬─────────────┴─────┬───────────────────────┐
//! │ EventSource  │   Pagination      │   HTTP / Auth         │
//! ├──────────────┼───────────────────┼───────────────────────┤
//! │ Eventbrite   │ One-based pages   │ Bearer token          │
//! │ Ticketmaster │ Zero-based pages  │ API key (query)       │
//! └──────────────┴───────────────────┴───────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Runtime configuration
pub mod config;

/// Authentication
pub mod auth;

/// HTTP client
pub mod http;

/// Page number pagination
pub mod pagination;

/// Per-API adapters
pub mod sources;

/// The paged fetch loop
pub mod fetcher;

/// Report output
pub mod output;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{SourceConfig, SourceKind};
pub use error::{Error, Result};
pub use fetcher::PagedFetcher;
pub use sources::{EventSource, EventbriteSource, TicketmasterSource};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
