//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use std::sync::Arc;

use codehub_client::api::{Api, ApiClient};
use codehub_client::config::{ApiConfig, Config};
use codehub_client::storage::{MemoryStorage, Storage};
use codehub_client::App;

pub use mock_backend::{CapturedRequest, MockBackend, MockResponse};

/// API config pointing at `base_url` with short timeouts.
pub fn api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
    }
}

pub fn api_for(backend: &MockBackend) -> Api {
    Api::from_client(ApiClient::new(&api_config(&backend.api_url())).unwrap())
}

/// App over in-memory storage talking to `backend`.
pub fn app_for(backend: &MockBackend) -> (App, Arc<dyn Storage>) {
    let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
    let config = Config {
        api: api_config(&backend.api_url()),
        ..Config::default()
    };
    let app = App::new(&config, storage.clone()).unwrap();
    (app, storage)
}

/// The single request the backend saw; panics on zero or many.
pub async fn only_request(backend: &MockBackend) -> CapturedRequest {
    let requests = backend.captured_requests().await;
    assert_eq!(requests.len(), 1, "expected exactly one call, got {requests:?}");
    requests.into_iter().next().unwrap()
}
