//! HTTP client module
//!
//! Thin wrapper over reqwest used by the page fetcher.
//!
//! # Features
//!
//! - **Authentication**: Integration with auth module
//! - **Status Checking**: Non-success responses become `Error::HttpStatus`
//! - **JSON Bodies**: Response bodies are parsed into `serde_json::Value`
//!
//! Requests are never retried; a failed request fails the caller.

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
