//! Monitor actions.
//!
//! Every action returns compressed series; expand them with
//! [`Meter::samples`](crate::types::Meter::samples) using the requested
//! step.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{QingCloudError, ValidationError};
use crate::request::{Client, Operation, Properties};
use crate::types::Meter;
use crate::validate::{Input, MONITOR_STEPS, one_of, require, require_list};

/// Monitor actions scoped to one zone.
#[derive(Clone, Debug)]
pub struct MonitorService {
    client: Client,
    properties: Properties,
}

impl MonitorService {
    pub(crate) fn new(client: Client, zone: impl Into<String>) -> Self {
        Self {
            client,
            properties: Properties::new(zone),
        }
    }

    /// Zone this facade targets.
    #[must_use]
    pub const fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Fetches metrics of an instance, volume, EIP or router.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/monitor/get_monitor.html>
    pub async fn get_monitor(
        &self,
        input: Option<GetMonitorInput>,
    ) -> Result<GetMonitorOutput, QingCloudError> {
        let operation = Operation::get("GetMonitor", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }

    /// Fetches metrics of a load balancer or one of its listeners.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/monitor/get_loadbalancer_monitor.html>
    pub async fn get_load_balancer_monitor(
        &self,
        input: Option<GetLoadBalancerMonitorInput>,
    ) -> Result<GetLoadBalancerMonitorOutput, QingCloudError> {
        let operation = Operation::get("GetLoadBalancerMonitor", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }

    /// Fetches metrics of a database node.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/monitor/get_rdb_monitor.html>
    pub async fn get_rdb_monitor(
        &self,
        input: Option<GetRDBMonitorInput>,
    ) -> Result<GetRDBMonitorOutput, QingCloudError> {
        let operation = Operation::get("GetRDBMonitor", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }
}

/// Parameters of `GetMonitor`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct GetMonitorInput {
    /// End of the window. Required.
    #[serde(serialize_with = "crate::types::wire_time")]
    pub end_time: Option<DateTime<Utc>>,
    /// Meters to fetch, e.g. `cpu`, `memory`, `disk-os`. Required.
    pub meters: Vec<String>,
    /// Resource to inspect. Required.
    pub resource: Option<String>,
    /// Start of the window. Required.
    #[serde(serialize_with = "crate::types::wire_time")]
    pub start_time: Option<DateTime<Utc>>,
    /// `5m`, `15m`, `2h` or `1d`. Required.
    pub step: Option<String>,
}

impl Input for GetMonitorInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require(self.end_time.as_ref(), "end_time", "GetMonitorInput")?;
        require_list(&self.meters, "meters", "GetMonitorInput")?;
        require(self.resource.as_ref(), "resource", "GetMonitorInput")?;
        require(self.start_time.as_ref(), "start_time", "GetMonitorInput")?;
        require(self.step.as_ref(), "step", "GetMonitorInput")?;
        one_of(self.step.as_ref(), "step", &MONITOR_STEPS)
    }
}

output! {
    /// Result of `GetMonitor`.
    GetMonitorOutput {
        /// One series per requested meter.
        meter_set: Vec<Meter>,
        /// Resource the series belong to.
        resource_id: Option<String>,
    }
}

/// Parameters of `GetLoadBalancerMonitor`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct GetLoadBalancerMonitorInput {
    /// End of the window. Required.
    #[serde(serialize_with = "crate::types::wire_time")]
    pub end_time: Option<DateTime<Utc>>,
    /// Meters to fetch, e.g. `traffic`, `request`. Required.
    pub meters: Vec<String>,
    /// Load balancer or listener. Required.
    pub resource: Option<String>,
    /// Start of the window. Required.
    #[serde(serialize_with = "crate::types::wire_time")]
    pub start_time: Option<DateTime<Utc>>,
    /// `5m`, `15m`, `2h` or `1d`. Required.
    pub step: Option<String>,
}

impl Input for GetLoadBalancerMonitorInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require(self.end_time.as_ref(), "end_time", "GetLoadBalancerMonitorInput")?;
        require_list(&self.meters, "meters", "GetLoadBalancerMonitorInput")?;
        require(self.resource.as_ref(), "resource", "GetLoadBalancerMonitorInput")?;
        require(self.start_time.as_ref(), "start_time", "GetLoadBalancerMonitorInput")?;
        require(self.step.as_ref(), "step", "GetLoadBalancerMonitorInput")?;
        one_of(self.step.as_ref(), "step", &MONITOR_STEPS)
    }
}

output! {
    /// Result of `GetLoadBalancerMonitor`.
    GetLoadBalancerMonitorOutput {
        /// One series per requested meter.
        meter_set: Vec<Meter>,
        /// Resource the series belong to.
        resource_id: Option<String>,
    }
}

/// Parameters of `GetRDBMonitor`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct GetRDBMonitorInput {
    /// End of the window. Required.
    #[serde(serialize_with = "crate::types::wire_time")]
    pub end_time: Option<DateTime<Utc>>,
    /// Meters to fetch. Required.
    pub meters: Vec<String>,
    /// Database to inspect. Required.
    pub rdb: Option<String>,
    /// Node role, `master` or `slave`. Required.
    pub role: Option<String>,
    /// Start of the window. Required.
    #[serde(serialize_with = "crate::types::wire_time")]
    pub start_time: Option<DateTime<Utc>>,
    /// `5m`, `15m`, `2h` or `1d`. Required.
    pub step: Option<String>,
}

impl Input for GetRDBMonitorInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require(self.end_time.as_ref(), "end_time", "GetRDBMonitorInput")?;
        require_list(&self.meters, "meters", "GetRDBMonitorInput")?;
        require(self.rdb.as_ref(), "rdb", "GetRDBMonitorInput")?;
        require(self.role.as_ref(), "role", "GetRDBMonitorInput")?;
        require(self.start_time.as_ref(), "start_time", "GetRDBMonitorInput")?;
        require(self.step.as_ref(), "step", "GetRDBMonitorInput")?;
        one_of(self.step.as_ref(), "step", &MONITOR_STEPS)
    }
}

output! {
    /// Result of `GetRDBMonitor`.
    GetRDBMonitorOutput {
        /// One series per requested meter.
        meter_set: Vec<Meter>,
        /// Database the series belong to.
        resource_id: Option<String>,
    }
}
