//! Configuration loading via `ortho-config`.

use std::fmt;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

/// QingCloud client configuration derived from environment variables,
/// configuration files, and CLI flags.
#[derive(Clone, Deserialize, OrthoConfig, PartialEq, Eq)]
#[ortho_config(prefix = "QINGCLOUD")]
pub struct QingCloudConfig {
    /// Access key identifier sent with every request.
    pub access_key_id: String,
    /// Secret used to sign requests. Never sent over the wire.
    pub secret_access_key: String,
    /// API host. Defaults to `api.qingcloud.com`.
    #[ortho_config(default = "api.qingcloud.com".to_owned())]
    pub host: String,
    /// API port. Defaults to `443`.
    #[ortho_config(default = 443)]
    pub port: u16,
    /// URL scheme, `https` or `http`.
    #[ortho_config(default = "https".to_owned())]
    pub protocol: String,
    /// Path prefix of the IaaS API. Defaults to `/iaas`.
    #[ortho_config(default = "/iaas".to_owned())]
    pub uri: String,
    /// Extra attempts made after a connection-level failure.
    #[ortho_config(default = 3)]
    pub connection_retries: u32,
    /// Per-request timeout in seconds.
    #[ortho_config(default = 30)]
    pub connection_timeout_secs: u64,
}

impl fmt::Debug for QingCloudConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QingCloudConfig")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("protocol", &self.protocol)
            .field("uri", &self.uri)
            .field("connection_retries", &self.connection_retries)
            .field("connection_timeout_secs", &self.connection_timeout_secs)
            .finish()
    }
}

/// Metadata for a configuration field, used to generate actionable error messages.
struct FieldMetadata {
    description: &'static str,
    env_var: &'static str,
    toml_key: &'static str,
}

impl FieldMetadata {
    const fn new(description: &'static str, env_var: &'static str, toml_key: &'static str) -> Self {
        Self {
            description,
            env_var,
            toml_key,
        }
    }
}

impl QingCloudConfig {
    /// Builds a configuration with the given credentials and default
    /// endpoint settings.
    #[must_use]
    pub fn with_credentials(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
    ) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            host: String::from("api.qingcloud.com"),
            port: 443,
            protocol: String::from("https"),
            uri: String::from("/iaas"),
            connection_retries: 3,
            connection_timeout_secs: 30,
        }
    }

    fn require_field(value: &str, metadata: &FieldMetadata) -> Result<(), ConfigError> {
        if value.trim().is_empty() {
            return Err(ConfigError::MissingField(format!(
                "missing {}: set {} or add {} to .qingcloud.toml",
                metadata.description, metadata.env_var, metadata.toml_key
            )));
        }
        Ok(())
    }

    /// Loads configuration using the `ortho-config` derive. Values merge
    /// defaults, configuration files, environment variables, and CLI flags in
    /// that order of precedence.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the loader fails to merge sources.
    pub fn load_from_sources() -> Result<Self, ConfigError> {
        Self::load().map_err(|err| ConfigError::Parse(err.to_string()))
    }

    /// Loads configuration without attempting to parse CLI arguments. Values
    /// still merge defaults, configuration files, and environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the merge fails.
    pub fn load_without_cli_args() -> Result<Self, ConfigError> {
        Self::load_from_iter([std::ffi::OsString::from("qingcloud")])
            .map_err(|err| ConfigError::Parse(err.to_string()))
    }

    /// Base URL every action is sent to, e.g. `https://api.qingcloud.com:443/iaas/`.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!(
            "{}://{}:{}{}/",
            self.protocol,
            self.host,
            self.port,
            self.uri.trim_end_matches('/')
        )
    }

    /// Path used in the string to sign, e.g. `/iaas/`.
    #[must_use]
    pub fn signing_path(&self) -> String {
        format!("{}/", self.uri.trim_end_matches('/'))
    }

    /// Per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.connection_timeout_secs)
    }

    /// Performs semantic validation on required fields. Error messages include
    /// guidance on how to provide missing values via environment variables or
    /// configuration files.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] when a required field is empty and
    /// [`ConfigError::Invalid`] when the protocol is neither `http` nor `https`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::require_field(
            &self.access_key_id,
            &FieldMetadata::new(
                "QingCloud access key ID",
                "QINGCLOUD_ACCESS_KEY_ID",
                "access_key_id",
            ),
        )?;
        Self::require_field(
            &self.secret_access_key,
            &FieldMetadata::new(
                "QingCloud secret access key",
                "QINGCLOUD_SECRET_ACCESS_KEY",
                "secret_access_key",
            ),
        )?;
        Self::require_field(
            &self.host,
            &FieldMetadata::new("API host", "QINGCLOUD_HOST", "host"),
        )?;
        Self::require_field(
            &self.uri,
            &FieldMetadata::new("API path prefix", "QINGCLOUD_URI", "uri"),
        )?;
        if !matches!(self.protocol.as_str(), "http" | "https") {
            return Err(ConfigError::Invalid(format!(
                "protocol must be http or https, got '{}' (QINGCLOUD_PROTOCOL)",
                self.protocol
            )));
        }
        Ok(())
    }
}

/// Errors raised during configuration loading and validation.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ConfigError {
    /// Indicates a required configuration field is empty or missing.
    #[error("missing configuration field: {0}")]
    MissingField(String),
    /// A field is present but holds an unusable value.
    #[error("invalid configuration: {0}")]
    Invalid(String),
    /// Surfaces errors from the `ortho-config` loader.
    #[error("configuration parsing failed: {0}")]
    Parse(String),
}

impl From<ortho_config::OrthoError> for ConfigError {
    fn from(value: ortho_config::OrthoError) -> Self {
        Self::Parse(value.to_string())
    }
}
