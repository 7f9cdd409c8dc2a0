//! Authentication module
//!
//! Supports: Bearer token, API Key (header or query)
//!
//! The `Authenticator` applies the configured credential to each outgoing
//! request. Credentials are static for the lifetime of a run.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::{AuthConfig, Location};

#[cfg(test)]
mod tests;
