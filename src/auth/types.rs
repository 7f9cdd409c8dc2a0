//! Auth configuration types

/// Location for API key placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Location {
    /// Place in HTTP header
    #[default]
    Header,
    /// Place in query parameter
    Query,
}

/// Authentication configuration
#[derive(Clone, Default, PartialEq, Eq)]
pub enum AuthConfig {
    /// No authentication required
    #[default]
    None,

    /// Bearer token authentication
    Bearer {
        /// The bearer token
        token: String,
    },

    /// API Key authentication (header or query)
    ApiKey {
        /// Where to place the API key
        location: Location,
        /// Header name or query parameter name
        name: String,
        /// The API key value
        value: String,
    },
}

impl AuthConfig {
    /// Create bearer auth
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: token.into(),
        }
    }

    /// Create an API key passed as a query parameter
    pub fn api_key_query(param: impl Into<String>, value: impl Into<String>) -> Self {
        Self::ApiKey {
            location: Location::Query,
            name: param.into(),
            value: value.into(),
        }
    }

    /// Create an API key passed as a header
    pub fn api_key_header(header: impl Into<String>, value: impl Into<String>) -> Self {
        Self::ApiKey {
            location: Location::Header,
            name: header.into(),
            value: value.into(),
        }
    }

    /// Query parameter carrying the secret, if any
    pub fn secret_query_param(&self) -> Option<&str> {
        match self {
            Self::ApiKey {
                location: Location::Query,
                name,
                ..
            } => Some(name),
            _ => None,
        }
    }
}

// Never print secrets
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Bearer { .. } => f.debug_struct("Bearer").field("token", &"***").finish(),
            Self::ApiKey { location, name, .. } => f
                .debug_struct("ApiKey")
                .field("location", location)
                .field("name", name)
                .field("value", &"***")
                .finish(),
        }
    }
}

#[cfg(test)]
mod type_tests {
    use super::*;

    #[test]
    fn test_auth_config_default() {
        let config = AuthConfig::default();
        assert!(matches!(config, AuthConfig::None));
    }

    #[test]
    fn test_secret_query_param() {
        assert_eq!(
            AuthConfig::api_key_query("apikey", "k").secret_query_param(),
            Some("apikey")
        );
        assert_eq!(AuthConfig::api_key_header("X-Key", "k").secret_query_param(), None);
        assert_eq!(AuthConfig::bearer("t").secret_query_param(), None);
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let debug = format!("{:?}", AuthConfig::bearer("super-secret"));
        assert!(!debug.contains("super-secret"));

        let debug = format!("{:?}", AuthConfig::api_key_query("apikey", "super-secret"));
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("apikey"));
    }
}
