//! Per-resource service facades.
//!
//! [`QingCloudService`] owns the configuration and transport and hands out
//! zone-scoped facades. Every facade method follows the same shape: an absent
//! input becomes the input's default, the input is validated, and the action
//! is sent through the shared [`Client`].

use std::sync::Arc;

use crate::config::QingCloudConfig;
use crate::error::QingCloudError;
use crate::request::{Client, HttpTransport, Transport};

/// Declares an action output carrying the common response envelope.
macro_rules! output {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$field_meta:meta])* $field:ident : $ty:ty),* $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, serde::Deserialize, PartialEq, serde::Serialize)]
        #[serde(default)]
        pub struct $name {
            /// Echoed action name, e.g. `DescribeEipsResponse`.
            pub action: Option<String>,
            /// Provider return code, `0` on success.
            pub ret_code: Option<i64>,
            /// Provider message, set on failure.
            pub message: Option<String>,
            $($(#[$field_meta])* pub $field: $ty,)*
        }
    };
}

pub mod eip;
pub mod image;
pub mod instance;
pub mod monitor;
pub mod nic;
pub mod router;
pub mod volume;

pub use eip::EipService;
pub use image::ImageService;
pub use instance::InstanceService;
pub use monitor::MonitorService;
pub use nic::NicService;
pub use router::RouterService;
pub use volume::VolumeService;

/// Entry point holding credentials, endpoint and transport.
#[derive(Clone, Debug)]
pub struct QingCloudService {
    client: Client,
}

impl QingCloudService {
    /// Builds a service that talks HTTP(S) to the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`QingCloudError::Config`] when the configuration fails
    /// validation and [`QingCloudError::Transport`] when the HTTP client
    /// cannot be created.
    pub fn new(config: QingCloudConfig) -> Result<Self, QingCloudError> {
        config.validate()?;
        let transport = HttpTransport::new(config.timeout())?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Builds a service over a caller-supplied transport.
    #[must_use]
    pub fn with_transport(config: QingCloudConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            client: Client::new(Arc::new(config), transport),
        }
    }

    /// Shared request client.
    #[must_use]
    pub const fn client(&self) -> &Client {
        &self.client
    }

    /// Elastic IP actions in `zone`.
    #[must_use]
    pub fn eip(&self, zone: impl Into<String>) -> EipService {
        EipService::new(self.client.clone(), zone)
    }

    /// Image actions in `zone`.
    #[must_use]
    pub fn image(&self, zone: impl Into<String>) -> ImageService {
        ImageService::new(self.client.clone(), zone)
    }

    /// Instance actions in `zone`.
    #[must_use]
    pub fn instance(&self, zone: impl Into<String>) -> InstanceService {
        InstanceService::new(self.client.clone(), zone)
    }

    /// Monitor actions in `zone`.
    #[must_use]
    pub fn monitor(&self, zone: impl Into<String>) -> MonitorService {
        MonitorService::new(self.client.clone(), zone)
    }

    /// Network interface actions in `zone`.
    #[must_use]
    pub fn nic(&self, zone: impl Into<String>) -> NicService {
        NicService::new(self.client.clone(), zone)
    }

    /// Router actions in `zone`.
    #[must_use]
    pub fn router(&self, zone: impl Into<String>) -> RouterService {
        RouterService::new(self.client.clone(), zone)
    }

    /// Volume actions in `zone`.
    #[must_use]
    pub fn volume(&self, zone: impl Into<String>) -> VolumeService {
        VolumeService::new(self.client.clone(), zone)
    }
}
