//! Field validation shared by every action input.
//!
//! Inputs check their own fields in declaration order and stop at the first
//! failure. Required lists count as missing when empty.

use std::fmt::Display;

use serde::Serialize;

use crate::error::ValidationError;

/// Implemented by every `*Input` structure.
pub trait Input: Serialize {
    /// Checks required and enumerated fields.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] for the first field that fails.
    fn validate(&self) -> Result<(), ValidationError>;
}

pub(crate) fn require<T>(
    value: Option<&T>,
    parameter: &str,
    parent: &str,
) -> Result<(), ValidationError> {
    if value.is_some() {
        return Ok(());
    }
    Err(ValidationError::ParameterRequired {
        parameter: parameter.to_owned(),
        parent: parent.to_owned(),
    })
}

pub(crate) fn require_list<T>(
    values: &[T],
    parameter: &str,
    parent: &str,
) -> Result<(), ValidationError> {
    if values.is_empty() {
        return Err(ValidationError::ParameterRequired {
            parameter: parameter.to_owned(),
            parent: parent.to_owned(),
        });
    }
    Ok(())
}

pub(crate) fn one_of<V, A>(
    value: Option<&V>,
    parameter: &str,
    allowed: &[A],
) -> Result<(), ValidationError>
where
    V: PartialEq<A> + Display + ?Sized,
    A: Display,
{
    let Some(candidate) = value else {
        return Ok(());
    };
    if allowed.iter().any(|choice| candidate == choice) {
        return Ok(());
    }
    Err(ValidationError::ParameterValueNotAllowed {
        parameter: parameter.to_owned(),
        value: candidate.to_string(),
        allowed: allowed.iter().map(ToString::to_string).collect(),
    })
}

/// Flags accepted by the API wherever a yes/no switch is expected.
pub(crate) const FLAG: [i64; 2] = [0, 1];

/// Aggregation windows accepted by every monitor action.
pub(crate) const MONITOR_STEPS: [&str; 4] = ["5m", "15m", "2h", "1d"];
