//! Shared HTTP plumbing for the resource wrappers.

use std::time::Duration;

use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::api::envelope::Envelope;
use crate::config::ApiConfig;

/// Header carrying a per-call id, echoed in logs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Failures that prevent an envelope from being produced.
///
/// A non-success envelope is not an error here; it comes back as `Ok`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid API base URL '{url}'")]
    InvalidBaseUrl { url: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Refusing {method} {path}: segment '{segment}' is empty or a dot segment")]
    InvalidPath {
        method: Method,
        path: String,
        segment: String,
    },

    #[error("Failed to encode request body for {method} {path}: {source}")]
    Encode {
        method: Method,
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Network error on {method} {path}: {source}")]
    Network {
        method: Method,
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Malformed response from {method} {path} (HTTP {status}): {source}")]
    Decode {
        method: Method,
        path: String,
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}

/// Method, path segments and query of one backend call.
#[derive(Debug, Clone)]
pub(crate) struct Endpoint {
    method: Method,
    segments: Vec<String>,
    query: Vec<(&'static str, String)>,
}

impl Endpoint {
    pub(crate) fn new<I, S>(method: Method, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method,
            segments: segments.into_iter().map(Into::into).collect(),
            query: Vec::new(),
        }
    }

    pub(crate) fn get<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::GET, segments)
    }

    pub(crate) fn post<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::POST, segments)
    }

    pub(crate) fn put<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::PUT, segments)
    }

    pub(crate) fn delete<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::DELETE, segments)
    }

    /// Append a `/`-separated path (file paths in a tree), skipping empty parts.
    pub(crate) fn with_path(mut self, path: &str) -> Self {
        self.segments.extend(
            path.split('/')
                .filter(|part| !part.is_empty())
                .map(str::to_string),
        );
        self
    }

    pub(crate) fn with_query(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    /// Unencoded path, for logs and errors.
    fn display_path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }

    /// Reject segments a URL parser or server would drop or collapse.
    fn validate(&self) -> Result<(), ApiError> {
        let bad = self
            .segments
            .iter()
            .find(|segment| matches!(segment.as_str(), "" | "." | ".."));
        match bad {
            Some(segment) => Err(ApiError::InvalidPath {
                method: self.method.clone(),
                path: self.display_path(),
                segment: segment.clone(),
            }),
            None => Ok(()),
        }
    }
}

/// Thin wrapper over `reqwest::Client` bound to the API base URL.
///
/// Cheap to clone; clones share the connection pool and cookie store.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base: Url,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base = Url::parse(&config.base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| ApiError::InvalidBaseUrl {
                url: config.base_url.clone(),
            })?;

        let http = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .cookie_store(true)
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self { http, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Full URL for an endpoint, with each segment percent-encoded.
    ///
    /// Empty, `.` and `..` segments are refused so a substituted value can
    /// never address a different resource.
    pub(crate) fn url_for(&self, endpoint: &Endpoint) -> Result<Url, ApiError> {
        endpoint.validate()?;
        let mut url = self.base.clone();
        {
            let mut segments =
                url.path_segments_mut()
                    .map_err(|()| ApiError::InvalidBaseUrl {
                        url: self.base.to_string(),
                    })?;
            segments.pop_if_empty();
            segments.extend(endpoint.segments.iter());
        }
        if !endpoint.query.is_empty() {
            url.query_pairs_mut().extend_pairs(endpoint.query.iter());
        }
        Ok(url)
    }

    /// Issue a call without a request body.
    pub(crate) async fn send<T>(&self, endpoint: Endpoint) -> Result<Envelope<T>, ApiError>
    where
        T: DeserializeOwned,
    {
        self.execute(endpoint, None).await
    }

    /// Issue a call with a JSON request body.
    pub(crate) async fn send_json<B, T>(
        &self,
        endpoint: Endpoint,
        body: &B,
    ) -> Result<Envelope<T>, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body).map_err(|source| ApiError::Encode {
            method: endpoint.method.clone(),
            path: endpoint.display_path(),
            source,
        })?;
        self.execute(endpoint, Some(body)).await
    }

    async fn execute<T>(
        &self,
        endpoint: Endpoint,
        body: Option<serde_json::Value>,
    ) -> Result<Envelope<T>, ApiError>
    where
        T: DeserializeOwned,
    {
        let url = self.url_for(&endpoint)?;
        let method = endpoint.method.clone();
        let path = endpoint.display_path();
        let request_id = Uuid::new_v4().to_string();

        tracing::debug!(%request_id, %method, %path, "API request");

        let mut builder = self
            .http
            .request(method.clone(), url)
            .header(REQUEST_ID_HEADER, &request_id);
        if let Some(body) = &body {
            builder = builder.json(body);
        }

        let network = |source| ApiError::Network {
            method: method.clone(),
            path: path.clone(),
            source,
        };
        let response = builder.send().await.map_err(network)?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(network)?;

        let envelope: Envelope<T> =
            serde_json::from_slice(&bytes).map_err(|source| ApiError::Decode {
                method: method.clone(),
                path: path.clone(),
                status,
                source,
            })?;

        tracing::debug!(
            %request_id,
            %method,
            %path,
            status,
            code = envelope.code(),
            "API response"
        );
        Ok(envelope)
    }
}
