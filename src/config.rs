//! Runtime configuration
//!
//! Configuration is read once at startup from the process environment
//! (after `.env` has been loaded) and then passed by value into the source
//! and fetcher constructors. Nothing reads the environment after this point.

use crate::error::{Error, Result};
use crate::http::HttpClientConfig;
use url::Url;

// ============================================================================
// Source Kind
// ============================================================================

/// The event APIs this crate knows how to page through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Eventbrite event search
    Eventbrite,
    /// Ticketmaster discovery
    Ticketmaster,
}

impl SourceKind {
    /// Environment variable holding the credential
    pub fn credential_var(self) -> &'static str {
        match self {
            Self::Eventbrite => "EVENTBRITE_OAUTH_TOKEN",
            Self::Ticketmaster => "TICKETMASTER_API_KEY",
        }
    }

    /// Environment variable that overrides the API host
    pub fn base_url_var(self) -> &'static str {
        match self {
            Self::Eventbrite => "EVENTBRITE_BASE_URL",
            Self::Ticketmaster => "TICKETMASTER_BASE_URL",
        }
    }

    /// Public API host
    pub fn default_base_url(self) -> &'static str {
        match self {
            Self::Eventbrite => "https://www.eventbriteapi.com",
            Self::Ticketmaster => "https://app.ticketmaster.com",
        }
    }

    /// Short name used in logs
    pub fn name(self) -> &'static str {
        match self {
            Self::Eventbrite => "eventbrite",
            Self::Ticketmaster => "ticketmaster",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Source Config
// ============================================================================

/// Everything needed to build one source and its HTTP client
#[derive(Clone)]
pub struct SourceConfig {
    /// Which API
    pub kind: SourceKind,
    /// API host, without the endpoint path
    pub base_url: String,
    /// OAuth token or API key
    pub credential: String,
    /// HTTP client settings
    pub http: HttpClientConfig,
}

impl SourceConfig {
    /// Create a config pointing at the public API host
    pub fn new(kind: SourceKind, credential: impl Into<String>) -> Self {
        Self {
            kind,
            base_url: kind.default_base_url().to_string(),
            credential: credential.into(),
            http: HttpClientConfig::default(),
        }
    }

    /// Override the API host
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the HTTP client settings
    #[must_use]
    pub fn with_http(mut self, http: HttpClientConfig) -> Self {
        self.http = http;
        self
    }

    /// Load from the process environment
    pub fn from_env(kind: SourceKind) -> Result<Self> {
        Self::from_lookup(kind, |name| std::env::var(name).ok())
    }

    /// Load using an arbitrary variable lookup
    ///
    /// An unset or blank credential is an error.
    pub fn from_lookup<F>(kind: SourceKind, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let credential = lookup(kind.credential_var())
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| Error::missing_credential(kind.credential_var()))?;

        let mut config = Self::new(kind, credential);
        if let Some(base_url) = lookup(kind.base_url_var()).filter(|v| !v.trim().is_empty()) {
            config.base_url = base_url.trim().to_string();
        }
        config.validate()?;
        Ok(config)
    }

    /// Check the base URL is usable
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            Error::config(format!("Invalid base URL '{}': {e}", self.base_url))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "Base URL must be http or https, got '{}'",
                self.base_url
            )));
        }
        Ok(())
    }

    /// Join the base URL with an endpoint path
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

impl std::fmt::Debug for SourceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceConfig")
            .field("kind", &self.kind)
            .field("base_url", &self.base_url)
            .field("credential", &"***")
            .field("http", &self.http)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_credential_vars() {
        assert_eq!(
            SourceKind::Eventbrite.credential_var(),
            "EVENTBRITE_OAUTH_TOKEN"
        );
        assert_eq!(
            SourceKind::Ticketmaster.credential_var(),
            "TICKETMASTER_API_KEY"
        );
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config = SourceConfig::from_lookup(
            SourceKind::Ticketmaster,
            lookup(&[("TICKETMASTER_API_KEY", "abc")]),
        )
        .unwrap();

        assert_eq!(config.kind, SourceKind::Ticketmaster);
        assert_eq!(config.credential, "abc");
        assert_eq!(config.base_url, "https://app.ticketmaster.com");
    }

    #[test]
    fn test_from_lookup_base_url_override() {
        let config = SourceConfig::from_lookup(
            SourceKind::Eventbrite,
            lookup(&[
                ("EVENTBRITE_OAUTH_TOKEN", "tok"),
                ("EVENTBRITE_BASE_URL", "http://127.0.0.1:9999/"),
            ]),
        )
        .unwrap();

        assert_eq!(config.base_url, "http://127.0.0.1:9999/");
        assert_eq!(
            config.endpoint("/v3/events/search/"),
            "http://127.0.0.1:9999/v3/events/search/"
        );
    }

    #[test]
    fn test_from_lookup_missing_credential() {
        let err = SourceConfig::from_lookup(SourceKind::Eventbrite, lookup(&[])).unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("EVENTBRITE_OAUTH_TOKEN"));
    }

    #[test]
    fn test_from_lookup_blank_credential() {
        let err = SourceConfig::from_lookup(
            SourceKind::Ticketmaster,
            lookup(&[("TICKETMASTER_API_KEY", "   ")]),
        )
        .unwrap_err();
        assert!(matches!(err, Error::MissingCredential { .. }));
    }

    #[test]
    fn test_from_lookup_invalid_base_url() {
        let err = SourceConfig::from_lookup(
            SourceKind::Ticketmaster,
            lookup(&[
                ("TICKETMASTER_API_KEY", "abc"),
                ("TICKETMASTER_BASE_URL", "ftp://example.com"),
            ]),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_debug_hides_credential() {
        let config = SourceConfig::new(SourceKind::Eventbrite, "very-secret");
        let debug = format!("{config:?}");
        assert!(!debug.contains("very-secret"));
    }
}
