//! Delivery of signed requests.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;

use super::HttpMethod;
use crate::error::QingCloudError;

/// A signed request ready to be delivered.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PreparedRequest {
    /// Action name, kept for logging.
    pub api_name: String,
    /// Delivery verb.
    pub method: HttpMethod,
    /// Endpoint without query string.
    pub url: String,
    /// Signed, percent-encoded query.
    pub query: String,
}

impl PreparedRequest {
    /// Full URL including the query, as sent for `GET`.
    #[must_use]
    pub fn full_url(&self) -> String {
        format!("{}?{}", self.url, self.query)
    }
}

/// Raw HTTP outcome handed back to the client for unpacking.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body.
    pub body: String,
}

/// Future returned by [`Transport::send`].
pub type TransportFuture<'a> =
    Pin<Box<dyn Future<Output = Result<TransportResponse, QingCloudError>> + Send + 'a>>;

/// Seam between the request pipeline and the network.
pub trait Transport: Send + Sync {
    /// Delivers the request. Connection-level failures must be reported as
    /// [`QingCloudError::Transport`] so the client can retry them.
    fn send<'a>(&'a self, request: &'a PreparedRequest) -> TransportFuture<'a>;
}

/// Transport backed by `reqwest`.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Builds a transport whose requests time out after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`QingCloudError::Transport`] when the TLS backend cannot be
    /// initialised.
    pub fn new(timeout: Duration) -> Result<Self, QingCloudError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn send<'a>(&'a self, request: &'a PreparedRequest) -> TransportFuture<'a> {
        Box::pin(async move {
            let builder = match request.method {
                HttpMethod::Get => self.client.get(request.full_url()),
                HttpMethod::Post => self
                    .client
                    .post(&request.url)
                    .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(request.query.clone()),
            };
            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(TransportResponse { status, body })
        })
    }
}
