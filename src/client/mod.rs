//! fanart.tv API client
//!
//! [`FanartClient`] owns the credentials and the transport. It turns a
//! relative endpoint path into an authenticated GET request, checks the
//! status and strictly decodes the body into the requested model.

mod transport;

pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport, TransportError};

use crate::models::{ImagesResult, LatestResult};
use crate::query_type::QueryType;
use crate::request::{ImagesRequest, LatestRequest, Request};
use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use std::fmt;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// Base URL of the fanart.tv v3 API
pub const DEFAULT_BASE_URL: &str = "https://webservice.fanart.tv/v3/";

/// Environment variable holding the project API key
pub const API_KEY_ENV: &str = "FANART_API_KEY";

/// Environment variable holding the personal client key
pub const CLIENT_KEY_ENV: &str = "FANART_CLIENT_KEY";

/// Errors that can occur while talking to the fanart.tv API
#[derive(Debug, Error)]
pub enum FanartError {
    /// The request URL or one of its headers could not be built
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The transport failed to complete the exchange
    #[error("Request failed: {0}")]
    Transport(#[source] TransportError),

    /// The cancellation token fired before the exchange completed
    #[error("Request cancelled")]
    Cancelled,

    /// The API answered with a status other than 200
    #[error("Unexpected HTTP status {status} (expected 200)")]
    UnexpectedStatus { status: u16 },

    /// The response body did not match the expected model
    #[error("Failed to decode API response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FanartError {
    /// HTTP status of an [`FanartError::UnexpectedStatus`] error
    pub fn status(&self) -> Option<u16> {
        match self {
            FanartError::UnexpectedStatus { status } => Some(*status),
            _ => None,
        }
    }
}

/// Configuration of a [`FanartClient`]
///
/// Empty keys are not sent. Every option can be set independently. The
/// `Debug` output never shows the keys.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Project API key, sent as `api-key`
    pub api_key: String,
    /// Personal client key, sent as `client-key`
    pub client_key: String,
    /// Base URL all endpoint paths are appended to
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            client_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &redact(&self.api_key))
            .field("client_key", &redact(&self.client_key))
            .field("base_url", &self.base_url)
            .finish()
    }
}

fn redact(key: &str) -> &'static str {
    if key.is_empty() { "" } else { "<redacted>" }
}

impl ClientConfig {
    /// Creates a configuration with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::default().with_api_key(api_key)
    }

    /// Reads both keys from `FANART_API_KEY` and `FANART_CLIENT_KEY`
    ///
    /// Unset variables leave the key empty.
    pub fn from_env() -> Self {
        Self::default()
            .with_api_key(std::env::var(API_KEY_ENV).unwrap_or_default())
            .with_client_key(std::env::var(CLIENT_KEY_ENV).unwrap_or_default())
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_client_key(mut self, client_key: impl Into<String>) -> Self {
        self.client_key = client_key.into();
        self
    }

    /// Overrides the base URL, adding the trailing slash if missing
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.base_url = base_url;
        self
    }
}

/// Client for the fanart.tv API.
///
/// The client holds no mutable state and can be shared between tasks; each
/// call builds its own request.
///
/// # Examples
///
/// ```no_run
/// use fanart_api::{ClientConfig, FanartClient, QueryType};
/// use tokio_util::sync::CancellationToken;
///
/// # async fn run() -> Result<(), fanart_api::FanartError> {
/// let client = FanartClient::new(ClientConfig::new("my-api-key"));
/// let cancel = CancellationToken::new();
///
/// let result = client.images(QueryType::Movie, "tt0137523", &cancel).await?;
/// println!("{:?} ({})", result.name, result.id());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FanartClient<T = ReqwestTransport> {
    config: ClientConfig,
    transport: T,
}

impl FanartClient<ReqwestTransport> {
    /// Creates a client using the default reqwest transport
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, ReqwestTransport::new())
    }
}

impl<T: Transport> FanartClient<T> {
    /// Creates a client sending its requests through `transport`
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Builds the absolute GET request for an endpoint path
    fn build_request(&self, path: &str) -> Result<HttpRequest, FanartError> {
        let raw_url = format!("{}{}", self.config.base_url, path);
        let url = Url::parse(&raw_url)
            .map_err(|e| FanartError::InvalidRequest(format!("{}: {}", raw_url, e)))?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if !self.config.api_key.is_empty() {
            headers.insert(
                HeaderName::from_static("api-key"),
                header_value("api-key", &self.config.api_key)?,
            );
        }
        if !self.config.client_key.is_empty() {
            headers.insert(
                HeaderName::from_static("client-key"),
                header_value("client-key", &self.config.client_key)?,
            );
        }

        Ok(HttpRequest { url, headers })
    }

    /// Executes a GET request against `path` and decodes the body into `V`
    ///
    /// `path` is relative to the base URL, e.g. `movies/tt0137523`. The call
    /// ends with [`FanartError::Cancelled`] as soon as `cancel` fires, also
    /// while the request is in flight. Any status other than 200 is an
    /// error and the body is not decoded. Decoding rejects unknown fields.
    pub async fn execute<V>(&self, path: &str, cancel: &CancellationToken) -> Result<V, FanartError>
    where
        V: DeserializeOwned,
    {
        if cancel.is_cancelled() {
            tracing::debug!(path, "Request cancelled before sending");
            return Err(FanartError::Cancelled);
        }

        let request = self.build_request(path)?;
        tracing::debug!(url = %request.url, "Sending fanart.tv request");

        let response = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::debug!(path, "Request cancelled in flight");
                return Err(FanartError::Cancelled);
            }
            response = self.transport.get(request) => response.map_err(FanartError::Transport)?,
        };

        tracing::debug!(path, status = response.status.as_u16(), "Received fanart.tv response");
        if response.status != StatusCode::OK {
            tracing::warn!(path, status = response.status.as_u16(), "Unexpected fanart.tv status");
            return Err(FanartError::UnexpectedStatus {
                status: response.status.as_u16(),
            });
        }

        Ok(serde_json::from_slice(&response.body)?)
    }

    /// Retrieves the artwork of an entity
    ///
    /// `id` may be any id the API accepts for the query type (IMDb, TMDb,
    /// TheTVDB or MusicBrainz); the API decides based on its format.
    pub async fn images(
        &self,
        query_type: QueryType,
        id: &str,
        cancel: &CancellationToken,
    ) -> Result<ImagesResult, FanartError> {
        ImagesRequest::new(query_type, id).execute(self, cancel).await
    }

    /// Retrieves the entities of a query type that recently got new artwork
    pub async fn latest(
        &self,
        query_type: QueryType,
        cancel: &CancellationToken,
    ) -> Result<Vec<LatestResult>, FanartError> {
        LatestRequest::new(query_type).execute(self, cancel).await
    }
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, FanartError> {
    HeaderValue::from_str(value)
        .map_err(|e| FanartError::InvalidRequest(format!("invalid {} header: {}", name, e)))
}
