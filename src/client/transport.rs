//! HTTP transport abstraction
//!
//! The client never talks to the network directly. It hands a fully built
//! GET request to a [`Transport`] and receives status and body back, which
//! keeps connection pooling, proxies and TLS settings in the hands of the
//! caller.

use reqwest::header::HeaderMap;
use reqwest::{StatusCode, Url};
use std::future::Future;

/// Error reported by a transport, passed through to the caller unchanged
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// A GET request ready to be sent
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// Absolute URL of the endpoint
    pub url: Url,
    /// Headers to attach to the request
    pub headers: HeaderMap,
}

/// A response as seen by the client
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

/// Trait for HTTP transports able to execute GET requests.
///
/// A transport is shared by every call of a client and may be used from
/// many tasks at once. Dropping the returned future must abort the request,
/// which is how cancellation reaches the network layer.
pub trait Transport: Send + Sync {
    /// Sends the request and returns the status and the complete body
    fn get(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}

/// Transport backed by a pooled [`reqwest::Client`].
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport with a default reqwest client
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Creates a transport reusing a caller configured client
    ///
    /// Use this to share a connection pool or to configure proxies and
    /// timeouts on the client.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    async fn get(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let response = self
            .client
            .get(request.url)
            .headers(request.headers)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?.to_vec();

        Ok(HttpResponse { status, body })
    }
}
