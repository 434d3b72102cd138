//! Flattening of typed inputs into sorted query parameters.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::error::QingCloudError;

/// Sorted key/value pairs sent with a request.
///
/// Lists become `key.1`, `key.2`, …; nested records become `key.N.field`;
/// absent values are skipped. Keys sort in byte order, which is the order the
/// signature is computed over.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serializes `input` and flattens it.
    ///
    /// # Errors
    ///
    /// Returns [`QingCloudError::InvalidInput`] when the input does not
    /// serialize to a JSON object.
    pub fn from_input<I: Serialize + ?Sized>(input: &I) -> Result<Self, QingCloudError> {
        let value = serde_json::to_value(input)
            .map_err(|err| QingCloudError::InvalidInput(err.to_string()))?;
        let Value::Object(fields) = value else {
            return Err(QingCloudError::InvalidInput(String::from(
                "input must serialize to an object",
            )));
        };
        let mut params = Self::new();
        for (key, field) in &fields {
            params.flatten(key, field);
        }
        Ok(params)
    }

    fn flatten(&mut self, key: &str, value: &Value) {
        match value {
            Value::Null => {}
            Value::Bool(flag) => self.insert(key, if *flag { "1" } else { "0" }),
            Value::Number(number) => self.insert(key, number.to_string()),
            Value::String(text) => self.insert(key, text.as_str()),
            Value::Array(items) => {
                for (index, item) in items.iter().enumerate() {
                    self.flatten(&format!("{key}.{}", index + 1), item);
                }
            }
            Value::Object(fields) => {
                for (name, field) in fields {
                    self.flatten(&format!("{key}.{name}"), field);
                }
            }
        }
    }

    /// Inserts or replaces a parameter.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Iterates parameters in signing order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no parameter is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Percent-encoded `key=value` pairs joined by `&`, in signing order.
    #[must_use]
    pub fn canonical_query(&self) -> String {
        self.iter()
            .map(|(key, value)| {
                format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lists_are_numbered_from_one() {
        let params = Params::from_input(&json!({"instances": ["i-a", "i-b"]}))
            .expect("object input");
        assert_eq!(params.get("instances.1"), Some("i-a"));
        assert_eq!(params.get("instances.2"), Some("i-b"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn nested_records_use_dotted_keys() {
        let params = Params::from_input(&json!({
            "router": "rtr-1",
            "statics": [{"static_type": 1, "val1": "80", "val3": null}]
        }))
        .expect("object input");
        assert_eq!(params.get("statics.1.static_type"), Some("1"));
        assert_eq!(params.get("statics.1.val1"), Some("80"));
        assert_eq!(params.get("statics.1.val3"), None);
        assert_eq!(params.get("router"), Some("rtr-1"));
    }

    #[test]
    fn nulls_and_empty_lists_are_skipped() {
        let params = Params::from_input(&json!({"eips": [], "owner": null}))
            .expect("object input");
        assert!(params.is_empty());
    }

    #[test]
    fn non_object_input_is_rejected() {
        let err = Params::from_input(&json!(["a"])).expect_err("array is not an input");
        assert!(matches!(err, QingCloudError::InvalidInput(_)));
    }

    #[test]
    fn canonical_query_sorts_and_encodes() {
        let mut params = Params::new();
        params.insert("zone", "pek3a");
        params.insert("instance_name", "web server");
        params.insert("action", "RunInstances");
        assert_eq!(
            params.canonical_query(),
            "action=RunInstances&instance_name=web%20server&zone=pek3a"
        );
    }
}
