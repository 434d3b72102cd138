//! Test support utilities shared across unit and integration tests.

use std::collections::{BTreeMap, VecDeque};
use std::sync::{Arc, Mutex, PoisonError};

use crate::config::QingCloudConfig;
use crate::error::QingCloudError;
use crate::request::{PreparedRequest, Transport, TransportFuture, TransportResponse};
use crate::service::QingCloudService;

type Scripted = Result<TransportResponse, QingCloudError>;

/// Scripted transport that returns pre-seeded responses in FIFO order.
///
/// Used to drive deterministic API outcomes without opening sockets. Every
/// request is recorded, including those answered with a scripted error.
#[derive(Clone, Debug, Default)]
pub struct ScriptedTransport {
    responses: Arc<Mutex<VecDeque<Scripted>>>,
    requests: Arc<Mutex<Vec<PreparedRequest>>>,
}

impl ScriptedTransport {
    /// Creates a transport with no queued responses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a `200 OK` response carrying `body`.
    pub fn push_json(&self, body: &str) {
        self.push_response(200, body);
    }

    /// Queues a response with an explicit status.
    pub fn push_response(&self, status: u16, body: &str) {
        self.queue(Ok(TransportResponse {
            status,
            body: body.to_owned(),
        }));
    }

    /// Queues a failure returned instead of a response.
    pub fn push_error(&self, error: QingCloudError) {
        self.queue(Err(error));
    }

    /// Returns a snapshot of every request delivered so far.
    #[must_use]
    pub fn requests(&self) -> Vec<PreparedRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Decodes the query of the most recent request, signature included.
    #[must_use]
    pub fn last_params(&self) -> Option<BTreeMap<String, String>> {
        let request = self.requests().pop()?;
        Some(decode_query(&request.query))
    }

    fn queue(&self, response: Scripted) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(response);
    }
}

impl Transport for ScriptedTransport {
    fn send<'a>(&'a self, request: &'a PreparedRequest) -> TransportFuture<'a> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());
        let next = self
            .responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| {
                Err(QingCloudError::Transport(String::from(
                    "no scripted response",
                )))
            });
        Box::pin(async move { next })
    }
}

/// Builds a service over a fresh [`ScriptedTransport`] with placeholder
/// credentials and no retries.
#[must_use]
pub fn scripted_service() -> (QingCloudService, ScriptedTransport) {
    let transport = ScriptedTransport::new();
    let mut config = QingCloudConfig::with_credentials("ACCESS", "SECRET");
    config.connection_retries = 0;
    let service = QingCloudService::with_transport(config, Arc::new(transport.clone()));
    (service, transport)
}

/// Splits a percent-encoded query into decoded key/value pairs.
#[must_use]
pub fn decode_query(query: &str) -> BTreeMap<String, String> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode(key), decode(value))
        })
        .collect()
}

fn decode(text: &str) -> String {
    urlencoding::decode(text).map_or_else(|_| text.to_owned(), std::borrow::Cow::into_owned)
}
