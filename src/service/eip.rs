//! Elastic IP actions.
//!
//! Every method returns [`QingCloudError::Validation`] before any I/O when a
//! required parameter is missing or an enumerated one is out of range, and
//! passes provider and transport failures through unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{QingCloudError, ValidationError};
use crate::request::{Client, Operation, Properties};
use crate::types::{Eip, Meter};
use crate::validate::{FLAG, Input, MONITOR_STEPS, one_of, require, require_list};

const BILLING_MODES: [&str; 2] = ["bandwidth", "traffic"];

/// Elastic IP actions scoped to one zone.
#[derive(Clone, Debug)]
pub struct EipService {
    client: Client,
    properties: Properties,
}

impl EipService {
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

    /// Allocates EIPs.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/eip/allocate_eips.html>
    pub async fn allocate_eips(
        &self,
        input: Option<AllocateEipsInput>,
    ) -> Result<AllocateEipsOutput, QingCloudError> {
        let operation = Operation::get("AllocateEips", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }

    /// Binds an EIP to an instance.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/eip/associate_eip.html>
    pub async fn associate_eip(
        &self,
        input: Option<AssociateEipInput>,
    ) -> Result<AssociateEipOutput, QingCloudError> {
        let operation = Operation::get("AssociateEip", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }

    /// Changes the bandwidth cap of EIPs.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/eip/change_eips_bandwidth.html>
    pub async fn change_eips_bandwidth(
        &self,
        input: Option<ChangeEipsBandwidthInput>,
    ) -> Result<ChangeEipsBandwidthOutput, QingCloudError> {
        let operation = Operation::get("ChangeEipsBandwidth", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }

    /// Switches EIPs between bandwidth and traffic billing.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/eip/change_eips_billing_mode.html>
    pub async fn change_eips_billing_mode(
        &self,
        input: Option<ChangeEipsBillingModeInput>,
    ) -> Result<ChangeEipsBillingModeOutput, QingCloudError> {
        let operation = Operation::get("ChangeEipsBillingMode", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }

    /// Lists EIPs.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/eip/describe_eips.html>
    pub async fn describe_eips(
        &self,
        input: Option<DescribeEipsInput>,
    ) -> Result<DescribeEipsOutput, QingCloudError> {
        let operation = Operation::get("DescribeEips", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }

    /// Unbinds EIPs from whatever they are attached to.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/eip/dissociate_eips.html>
    pub async fn dissociate_eips(
        &self,
        input: Option<DissociateEipsInput>,
    ) -> Result<DissociateEipsOutput, QingCloudError> {
        let operation = Operation::get("DissociateEips", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }

    /// Fetches traffic metrics of an EIP.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/monitor/get_monitor.html>
    pub async fn get_eip_monitor(
        &self,
        input: Option<GetEipMonitorInput>,
    ) -> Result<GetEipMonitorOutput, QingCloudError> {
        let operation = Operation::get("GetMonitor", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }

    /// Renames or re-describes an EIP.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/eip/modify_eip_attributes.html>
    pub async fn modify_eip_attributes(
        &self,
        input: Option<ModifyEipAttributesInput>,
    ) -> Result<ModifyEipAttributesOutput, QingCloudError> {
        let operation = Operation::get("ModifyEipAttributes", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }

    /// Releases EIPs back to the pool.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/eip/release_eips.html>
    pub async fn release_eips(
        &self,
        input: Option<ReleaseEipsInput>,
    ) -> Result<ReleaseEipsOutput, QingCloudError> {
        let operation = Operation::get("ReleaseEips", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }
}

/// Parameters of `AllocateEips`.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct AllocateEipsInput {
    /// Bandwidth cap in Mbps. Required.
    pub bandwidth: Option<i64>,
    /// `bandwidth` (default) or `traffic`.
    pub billing_mode: Option<String>,
    /// Number of EIPs to allocate. Defaults to 1.
    pub count: Option<i64>,
    /// Name given to every allocated EIP.
    pub eip_name: Option<String>,
    /// `1` to allocate an ICP-filed address. Defaults to 0.
    pub need_icp: Option<i64>,
}

impl Default for AllocateEipsInput {
    fn default() -> Self {
        Self {
            bandwidth: None,
            billing_mode: Some(String::from("bandwidth")),
            count: Some(1),
            eip_name: None,
            need_icp: Some(0),
        }
    }
}

impl Input for AllocateEipsInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require(self.bandwidth.as_ref(), "bandwidth", "AllocateEipsInput")?;
        one_of(self.billing_mode.as_ref(), "billing_mode", &BILLING_MODES)?;
        one_of(self.need_icp.as_ref(), "need_icp", &FLAG)
    }
}

output! {
    /// Result of `AllocateEips`.
    AllocateEipsOutput {
        /// Identifiers of the new EIPs.
        eips: Vec<String>,
    }
}

/// Parameters of `AssociateEip`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct AssociateEipInput {
    /// EIP to bind. Required.
    pub eip: Option<String>,
    /// Target instance. Required.
    pub instance: Option<String>,
}

impl Input for AssociateEipInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require(self.eip.as_ref(), "eip", "AssociateEipInput")?;
        require(self.instance.as_ref(), "instance", "AssociateEipInput")
    }
}

output! {
    /// Result of `AssociateEip`.
    AssociateEipOutput {
        /// Asynchronous job tracking the binding.
        job_id: Option<String>,
    }
}

/// Parameters of `ChangeEipsBandwidth`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct ChangeEipsBandwidthInput {
    /// New cap in Mbps. Required.
    pub bandwidth: Option<i64>,
    /// EIPs to change. Required.
    pub eips: Vec<String>,
}

impl Input for ChangeEipsBandwidthInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require(self.bandwidth.as_ref(), "bandwidth", "ChangeEipsBandwidthInput")?;
        require_list(&self.eips, "eips", "ChangeEipsBandwidthInput")
    }
}

output! {
    /// Result of `ChangeEipsBandwidth`.
    ChangeEipsBandwidthOutput {
        /// Asynchronous job.
        job_id: Option<String>,
    }
}

/// Parameters of `ChangeEipsBillingMode`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct ChangeEipsBillingModeInput {
    /// `bandwidth` or `traffic`. Required.
    pub billing_mode: Option<String>,
    /// Shared-bandwidth group to join when switching to `traffic`.
    pub eip_group: Option<String>,
    /// EIPs to change. Required.
    pub eips: Vec<String>,
}

impl Input for ChangeEipsBillingModeInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require(self.billing_mode.as_ref(), "billing_mode", "ChangeEipsBillingModeInput")?;
        one_of(self.billing_mode.as_ref(), "billing_mode", &BILLING_MODES)?;
        require_list(&self.eips, "eips", "ChangeEipsBillingModeInput")
    }
}

output! {
    /// Result of `ChangeEipsBillingMode`.
    ChangeEipsBillingModeOutput {
        /// Asynchronous job.
        job_id: Option<String>,
    }
}

/// Parameters of `DescribeEips`. Every field is an optional filter.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct DescribeEipsInput {
    /// EIP identifiers.
    pub eips: Vec<String>,
    /// Instance the EIPs are bound to.
    pub instance_id: Option<String>,
    /// Page size.
    pub limit: Option<i64>,
    /// Page offset.
    pub offset: Option<i64>,
    /// Owner account.
    pub owner: Option<String>,
    /// Substring of the name or address.
    pub search_word: Option<String>,
    /// Status filter.
    pub status: Vec<String>,
    /// Tag identifiers.
    pub tags: Vec<String>,
    /// `1` to include related resources.
    pub verbose: Option<i64>,
}

impl Input for DescribeEipsInput {
    fn validate(&self) -> Result<(), ValidationError> {
        one_of(self.verbose.as_ref(), "verbose", &FLAG)
    }
}

output! {
    /// Result of `DescribeEips`.
    DescribeEipsOutput {
        /// Matching EIPs.
        eip_set: Vec<Eip>,
        /// Total matches across pages.
        total_count: Option<i64>,
    }
}

/// Parameters of `DissociateEips`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct DissociateEipsInput {
    /// EIPs to unbind. Required.
    pub eips: Vec<String>,
}

impl Input for DissociateEipsInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require_list(&self.eips, "eips", "DissociateEipsInput")
    }
}

output! {
    /// Result of `DissociateEips`.
    DissociateEipsOutput {
        /// Asynchronous job.
        job_id: Option<String>,
    }
}

/// Parameters of the EIP flavour of `GetMonitor`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct GetEipMonitorInput {
    /// EIP to inspect. Required. Sent as `resource`; `eip` is also accepted
    /// when decoding.
    #[serde(rename = "resource", alias = "eip")]
    pub eip: Option<String>,
    /// End of the window. Required.
    #[serde(serialize_with = "crate::types::wire_time")]
    pub end_time: Option<DateTime<Utc>>,
    /// Meters to fetch, usually `traffic`. Required.
    pub meters: Vec<String>,
    /// Start of the window. Required.
    #[serde(serialize_with = "crate::types::wire_time")]
    pub start_time: Option<DateTime<Utc>>,
    /// `5m`, `15m`, `2h` or `1d`. Required.
    pub step: Option<String>,
}

impl Input for GetEipMonitorInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require(self.eip.as_ref(), "resource", "GetEipMonitorInput")?;
        require(self.end_time.as_ref(), "end_time", "GetEipMonitorInput")?;
        require_list(&self.meters, "meters", "GetEipMonitorInput")?;
        require(self.start_time.as_ref(), "start_time", "GetEipMonitorInput")?;
        require(self.step.as_ref(), "step", "GetEipMonitorInput")?;
        one_of(self.step.as_ref(), "step", &MONITOR_STEPS)
    }
}

output! {
    /// Result of the EIP flavour of `GetMonitor`.
    GetEipMonitorOutput {
        /// EIP the series belong to.
        #[serde(rename = "resource_id")]
        eip_id: Option<String>,
        /// One series per requested meter.
        meter_set: Vec<Meter>,
    }
}

/// Parameters of `ModifyEipAttributes`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct ModifyEipAttributesInput {
    /// New description.
    pub description: Option<String>,
    /// EIP to modify. Required.
    pub eip: Option<String>,
    /// New name.
    pub eip_name: Option<String>,
}

impl Input for ModifyEipAttributesInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require(self.eip.as_ref(), "eip", "ModifyEipAttributesInput")
    }
}

output! {
    /// Result of `ModifyEipAttributes`.
    ModifyEipAttributesOutput {}
}

/// Parameters of `ReleaseEips`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct ReleaseEipsInput {
    /// EIPs to release. Required.
    pub eips: Vec<String>,
}

impl Input for ReleaseEipsInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require_list(&self.eips, "eips", "ReleaseEipsInput")
    }
}

output! {
    /// Result of `ReleaseEips`.
    ReleaseEipsOutput {
        /// Asynchronous job.
        job_id: Option<String>,
    }
}
