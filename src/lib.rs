//! Typed client for the QingCloud IaaS control-plane API.
//!
//! [`QingCloudService`] holds credentials and a transport and hands out
//! zone-scoped facades, one per resource family (EIPs, images, instances,
//! monitoring, NICs, routers and volumes). Each facade method takes an
//! optional typed input, validates it, signs it and decodes the typed
//! output. [`registry`] exposes the same actions by name for tooling.

pub mod config;
pub mod error;
pub mod registry;
pub mod request;
pub mod service;
pub mod test_support;
pub mod types;
pub mod validate;

pub use config::{ConfigError, QingCloudConfig};
pub use error::{QingCloudError, ValidationError};
pub use request::{HttpTransport, Transport};
pub use service::{
    EipService, ImageService, InstanceService, MonitorService, NicService, QingCloudService,
    RouterService, VolumeService,
};
pub use types::{Meter, MonitorStep, Sample};
pub use validate::Input;
