//! Validate, sign, send and unpack.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, trace, warn};

use super::signer::{SIGNATURE_METHOD, SIGNATURE_VERSION};
use super::{Operation, Params, PreparedRequest, Signer, Transport, TransportResponse};
use crate::config::QingCloudConfig;
use crate::error::QingCloudError;
use crate::types::WIRE_TIME_FORMAT;
use crate::validate::Input;

const API_VERSION: &str = "1";

/// Shared handle used by every facade to execute actions.
#[derive(Clone)]
pub struct Client {
    config: Arc<QingCloudConfig>,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("endpoint", &self.config.endpoint())
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a client over an existing transport.
    #[must_use]
    pub fn new(config: Arc<QingCloudConfig>, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    /// Configuration the client signs with.
    #[must_use]
    pub fn config(&self) -> &QingCloudConfig {
        &self.config
    }

    /// Executes `operation` with `input` and decodes the response into `O`.
    ///
    /// # Errors
    ///
    /// Returns [`QingCloudError::Validation`] before any I/O when the input is
    /// rejected, [`QingCloudError::Api`] when the provider answers with a
    /// non-zero return code, and transport or decode errors otherwise.
    pub async fn send<I, O>(&self, operation: &Operation<'_>, input: &I) -> Result<O, QingCloudError>
    where
        I: Input + ?Sized,
        O: DeserializeOwned,
    {
        input.validate()?;
        let request = self.prepare(operation, input, Utc::now())?;
        debug!(
            action = operation.api_name,
            zone = operation.properties.zone.as_str(),
            "sending request"
        );
        let response = self.deliver(&request).await?;
        trace!(action = operation.api_name, status = response.status, body = %response.body);
        unpack(&response)
    }

    /// Builds the signed request for `operation` without sending it.
    ///
    /// # Errors
    ///
    /// Returns [`QingCloudError::InvalidInput`] when the input cannot be
    /// flattened.
    pub fn prepare<I>(
        &self,
        operation: &Operation<'_>,
        input: &I,
        timestamp: DateTime<Utc>,
    ) -> Result<PreparedRequest, QingCloudError>
    where
        I: Input + ?Sized,
    {
        let mut params = Params::from_input(input)?;
        params.insert("action", operation.api_name);
        params.insert("access_key_id", self.config.access_key_id.as_str());
        params.insert("signature_method", SIGNATURE_METHOD);
        params.insert("signature_version", SIGNATURE_VERSION);
        params.insert("time_stamp", timestamp.format(WIRE_TIME_FORMAT).to_string());
        params.insert("version", API_VERSION);
        if !operation.properties.zone.is_empty() {
            params.insert("zone", operation.properties.zone.as_str());
        }

        let query = Signer::new(&self.config.secret_access_key).signed_query(
            operation.http_method,
            &self.config.signing_path(),
            &params,
        )?;
        Ok(PreparedRequest {
            api_name: operation.api_name.to_owned(),
            method: operation.http_method,
            url: self.config.endpoint(),
            query,
        })
    }

    async fn deliver(&self, request: &PreparedRequest) -> Result<TransportResponse, QingCloudError> {
        let mut remaining = self.config.connection_retries;
        loop {
            match self.transport.send(request).await {
                Err(QingCloudError::Transport(message)) if remaining > 0 => {
                    remaining -= 1;
                    warn!(
                        action = request.api_name.as_str(),
                        remaining,
                        error = %message,
                        "transport failure, retrying"
                    );
                }
                other => return other,
            }
        }
    }
}

/// Turns a raw response into the typed output.
pub(crate) fn unpack<O: DeserializeOwned>(response: &TransportResponse) -> Result<O, QingCloudError> {
    let success = (200..300).contains(&response.status);
    let value: Value = match serde_json::from_str(&response.body) {
        Ok(value) => value,
        Err(_) if !success => {
            return Err(QingCloudError::Http {
                status: response.status,
                body: response.body.clone(),
            });
        }
        Err(err) => return Err(QingCloudError::Decode(err.to_string())),
    };

    let ret_code = value.get("ret_code").and_then(Value::as_i64).unwrap_or(0);
    if ret_code != 0 {
        return Err(QingCloudError::Api {
            action: text_field(&value, "action"),
            ret_code,
            message: text_field(&value, "message"),
        });
    }
    if !success {
        return Err(QingCloudError::Http {
            status: response.status,
            body: response.body.clone(),
        });
    }

    serde_json::from_value(value).map_err(|err| QingCloudError::Decode(err.to_string()))
}

fn text_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{HttpMethod, Properties};
    use crate::service::eip::{DescribeEipsInput, DescribeEipsOutput};
    use crate::test_support::ScriptedTransport;
    use chrono::TimeZone;

    fn client(transport: &ScriptedTransport) -> Client {
        let mut config = QingCloudConfig::with_credentials("ACCESS", "SECRET");
        config.connection_retries = 2;
        Client::new(Arc::new(config), Arc::new(transport.clone()))
    }

    fn response(status: u16, body: &str) -> TransportResponse {
        TransportResponse {
            status,
            body: body.to_owned(),
        }
    }

    #[test]
    fn prepare_merges_common_parameters() {
        let transport = ScriptedTransport::new();
        let properties = Properties::new("pek3a");
        let operation = Operation::get("DescribeEips", &properties);
        let timestamp = Utc
            .with_ymd_and_hms(2024, 5, 1, 8, 30, 0)
            .single()
            .expect("valid timestamp");
        let input = DescribeEipsInput {
            eips: vec![String::from("eip-1")],
            ..DescribeEipsInput::default()
        };
        let request = client(&transport)
            .prepare(&operation, &input, timestamp)
            .expect("request builds");

        assert_eq!(request.url, "https://api.qingcloud.com:443/iaas/");
        assert_eq!(request.method, HttpMethod::Get);
        for fragment in [
            "access_key_id=ACCESS",
            "action=DescribeEips",
            "eips.1=eip-1",
            "signature_method=HmacSHA256",
            "signature_version=1",
            "time_stamp=2024-05-01T08%3A30%3A00Z",
            "version=1",
            "zone=pek3a",
            "&signature=",
        ] {
            assert!(request.query.contains(fragment), "missing {fragment}");
        }
    }

    #[test]
    fn unpack_maps_non_zero_ret_code() {
        let err = unpack::<DescribeEipsOutput>(&response(
            200,
            r#"{"action":"DescribeEipsResponse","ret_code":1400,"message":"PermissionDenied"}"#,
        ))
        .expect_err("ret_code 1400 is an error");
        assert_eq!(
            err,
            QingCloudError::Api {
                action: String::from("DescribeEipsResponse"),
                ret_code: 1400,
                message: String::from("PermissionDenied"),
            }
        );
    }

    #[test]
    fn unpack_maps_bad_status_without_payload() {
        let err = unpack::<DescribeEipsOutput>(&response(502, "<html>bad gateway</html>"))
            .expect_err("502 is an error");
        assert!(matches!(err, QingCloudError::Http { status: 502, .. }));
    }

    #[test]
    fn unpack_reports_malformed_success_body() {
        let err = unpack::<DescribeEipsOutput>(&response(200, "not json"))
            .expect_err("garbage body");
        assert!(matches!(err, QingCloudError::Decode(_)));
    }

    #[tokio::test]
    async fn transport_failures_are_retried() {
        let transport = ScriptedTransport::new();
        transport.push_error(QingCloudError::Transport(String::from("reset")));
        transport.push_error(QingCloudError::Transport(String::from("reset")));
        transport.push_json(r#"{"action":"DescribeEipsResponse","ret_code":0,"total_count":0}"#);
        let properties = Properties::new("pek3a");
        let output: DescribeEipsOutput = client(&transport)
            .send(
                &Operation::get("DescribeEips", &properties),
                &DescribeEipsInput::default(),
            )
            .await
            .expect("third attempt succeeds");
        assert_eq!(output.total_count, Some(0));
        assert_eq!(transport.requests().len(), 3);
    }

    #[tokio::test]
    async fn retries_are_bounded() {
        let transport = ScriptedTransport::new();
        for _ in 0..4 {
            transport.push_error(QingCloudError::Transport(String::from("refused")));
        }
        let properties = Properties::new("pek3a");
        let result: Result<DescribeEipsOutput, _> = client(&transport)
            .send(
                &Operation::get("DescribeEips", &properties),
                &DescribeEipsInput::default(),
            )
            .await;
        assert!(matches!(result, Err(QingCloudError::Transport(_))));
        assert_eq!(transport.requests().len(), 3);
    }

    #[tokio::test]
    async fn api_errors_are_not_retried() {
        let transport = ScriptedTransport::new();
        transport.push_json(r#"{"ret_code":2100,"message":"ResourceNotFound"}"#);
        transport.push_json(r#"{"ret_code":0}"#);
        let properties = Properties::new("pek3a");
        let result: Result<DescribeEipsOutput, _> = client(&transport)
            .send(
                &Operation::get("DescribeEips", &properties),
                &DescribeEipsInput::default(),
            )
            .await;
        assert!(matches!(result, Err(QingCloudError::Api { ret_code: 2100, .. })));
        assert_eq!(transport.requests().len(), 1);
    }
}
