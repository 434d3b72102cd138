//! Error types shared by the request layer and the service facades.

use thiserror::Error;

use crate::config::ConfigError;

/// Raised by [`crate::validate::Input::validate`] before any request is sent.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ValidationError {
    /// A required parameter was absent (or an empty list).
    #[error("{parent}'s {parameter} is required")]
    ParameterRequired {
        /// Wire name of the missing parameter.
        parameter: String,
        /// Input or nested record that owns the parameter.
        parent: String,
    },
    /// A constrained parameter held a value outside its declared set.
    #[error(
        "{parameter}'s value {value} is not allowed, should be one of {}",
        .allowed.join(", ")
    )]
    ParameterValueNotAllowed {
        /// Wire name of the offending parameter.
        parameter: String,
        /// Value supplied by the caller.
        value: String,
        /// Values accepted by the API.
        allowed: Vec<String>,
    },
}

/// Errors returned by every QingCloud action.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum QingCloudError {
    /// Client configuration is incomplete.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Input rejected before transport.
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),
    /// Input could not be encoded into query parameters or decoded from JSON.
    #[error("malformed input: {0}")]
    InvalidInput(String),
    /// The API answered with a non-zero return code.
    #[error("{action} failed with ret_code {ret_code}: {message}")]
    Api {
        /// Echoed action name, when the response carried one.
        action: String,
        /// Provider return code.
        ret_code: i64,
        /// Provider message.
        message: String,
    },
    /// The API answered with a non-success HTTP status and no error payload.
    #[error("unexpected HTTP status {status}: {body}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },
    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(String),
    /// The response body did not match the expected output type.
    #[error("failed to decode response: {0}")]
    Decode(String),
    /// The mapping table has no action with this name.
    #[error("unknown action: {0}")]
    UnknownAction(String),
}

impl From<reqwest::Error> for QingCloudError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_message_names_parent_and_parameter() {
        let err = ValidationError::ParameterRequired {
            parameter: String::from("eip"),
            parent: String::from("AssociateEipInput"),
        };
        assert_eq!(err.to_string(), "AssociateEipInput's eip is required");
    }

    #[test]
    fn not_allowed_message_lists_choices() {
        let err = ValidationError::ParameterValueNotAllowed {
            parameter: String::from("billing_mode"),
            value: String::from("monthly"),
            allowed: vec![String::from("bandwidth"), String::from("traffic")],
        };
        assert_eq!(
            err.to_string(),
            "billing_mode's value monthly is not allowed, should be one of bandwidth, traffic"
        );
    }
}
