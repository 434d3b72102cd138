//! Request pipeline shared by every service facade.
//!
//! A facade describes the call with an [`Operation`], then hands it to the
//! [`Client`] together with a typed input. The client validates the input,
//! flattens it into query [`Params`], signs it, pushes it through a
//! [`Transport`], and unpacks the JSON response into the typed output.

mod client;
mod params;
mod signer;
mod transport;

pub use client::Client;
pub use params::Params;
pub use signer::Signer;
pub use transport::{
    HttpTransport, PreparedRequest, Transport, TransportFuture, TransportResponse,
};

/// HTTP verb used to deliver an action.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum HttpMethod {
    /// Parameters travel in the query string.
    #[default]
    Get,
    /// Parameters travel in a form-encoded body.
    Post,
}

impl HttpMethod {
    /// Upper-case verb as used in the string to sign.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// Per-facade properties merged into every request.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Properties {
    /// Zone the facade operates in, for example `pek3a`.
    pub zone: String,
}

impl Properties {
    /// Creates properties scoped to `zone`, trimming whitespace.
    #[must_use]
    pub fn new(zone: impl Into<String>) -> Self {
        Self {
            zone: zone.into().trim().to_owned(),
        }
    }
}

/// Describes a single API action invocation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Operation<'a> {
    /// Wire name of the action, for example `DescribeInstances`.
    pub api_name: &'static str,
    /// Verb used to deliver the request.
    pub http_method: HttpMethod,
    /// Facade properties (zone).
    pub properties: &'a Properties,
}

impl<'a> Operation<'a> {
    /// Builds a `GET` operation, which is how every IaaS action is delivered.
    #[must_use]
    pub const fn get(api_name: &'static str, properties: &'a Properties) -> Self {
        Self {
            api_name,
            http_method: HttpMethod::Get,
            properties,
        }
    }

    /// Switches the delivery verb.
    #[must_use]
    pub const fn with_method(mut self, http_method: HttpMethod) -> Self {
        self.http_method = http_method;
        self
    }
}
