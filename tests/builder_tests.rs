use std::time::Duration;

use device_client::{DeviceClient, DeviceError, DEFAULT_BASE_URL};

#[test]
fn test_config_error() {
    // What it tests: Builder-time validation of the base URL. It covers a URL that fails to
    // parse, a non-http scheme, and a blank value.
    //
    // Why it's valuable: Misconfiguration is reported before any network I/O with a specific
    // ConfigurationError instead of surfacing later as a confusing transport failure.
    let err = DeviceClient::builder().base_url("invalid-url").build().unwrap_err();
    match err {
        DeviceError::ConfigurationError(msg) => assert!(msg.contains("Invalid base URL")),
        other => panic!("Expected ConfigurationError for invalid URL, got {other:?}"),
    }

    let err = DeviceClient::new("ftp://files.example.com/api").unwrap_err();
    match err {
        DeviceError::ConfigurationError(msg) => assert!(msg.contains("not an http(s) URL")),
        other => panic!("Expected ConfigurationError for ftp URL, got {other:?}"),
    }

    let err = DeviceClient::new("   ").unwrap_err();
    match err {
        DeviceError::ConfigurationError(msg) => assert_eq!(msg, "Base URL is required"),
        other => panic!("Expected ConfigurationError for blank URL, got {other:?}"),
    }
}

#[test]
fn test_builder_defaults_to_public_api() {
    let client = DeviceClient::builder().build().expect("default builder");
    assert_eq!(client.base_url().as_str(), DEFAULT_BASE_URL);

    let client = DeviceClient::default();
    assert_eq!(client.base_url().as_str(), DEFAULT_BASE_URL);
}

#[test]
fn test_builder_accepts_transport_settings() {
    let client = DeviceClient::builder()
        .base_url("http://localhost:9000/api/")
        .timeout(Duration::from_secs(5))
        .user_agent("inventory-sync/1.0")
        .build()
        .expect("builder with transport settings");
    assert_eq!(client.base_url().as_str(), "http://localhost:9000/api/");

    let client = DeviceClient::builder()
        .base_url("http://localhost:9000/api")
        .http_client(reqwest::Client::new())
        .build()
        .expect("builder with custom http client");
    assert_eq!(client.base_url().path(), "/api");
}
