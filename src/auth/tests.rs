//! Tests for the auth module

use super::*;

#[test]
fn test_no_auth() {
    let auth = Authenticator::new(AuthConfig::None);
    let client = reqwest::Client::new();
    let req = auth.apply(client.get("https://example.com/api"));

    let built = req.build().unwrap();
    assert!(built.headers().get("Authorization").is_none());
    assert_eq!(built.url().query(), None);
}

#[test]
fn test_bearer() {
    let auth = Authenticator::new(AuthConfig::bearer("my-token"));
    let client = reqwest::Client::new();
    let req = auth.apply(client.get("https://example.com/api"));

    let built = req.build().unwrap();
    assert_eq!(
        built.headers().get("Authorization").unwrap(),
        "Bearer my-token"
    );
}

#[test]
fn test_api_key_header() {
    let auth = Authenticator::new(AuthConfig::api_key_header("X-API-Key", "test-key-123"));
    let client = reqwest::Client::new();
    let req = auth.apply(client.get("https://example.com/api"));

    let built = req.build().unwrap();
    assert_eq!(built.headers().get("X-API-Key").unwrap(), "test-key-123");
}

#[test]
fn test_api_key_query() {
    let auth = Authenticator::new(AuthConfig::api_key_query("apikey", "secret-key"));
    let client = reqwest::Client::new();
    let req = auth.apply(client.get("https://example.com/api?page=0"));

    let built = req.build().unwrap();
    let pairs: Vec<(String, String)> = built
        .url()
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert!(pairs.contains(&("page".to_string(), "0".to_string())));
    assert!(pairs.contains(&("apikey".to_string(), "secret-key".to_string())));
    assert!(built.headers().get("Authorization").is_none());
}
