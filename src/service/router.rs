//! VPC router actions.
//!
//! Rules (`statics`) and their entries are nested records; each element is
//! validated on its own before the request is built, and changes only take
//! effect once `UpdateRouters` is called.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{QingCloudError, ValidationError};
use crate::request::{Client, Operation, Properties};
use crate::types::{Meter, Router, RouterStatic, RouterStaticEntry, RouterVxNet};
use crate::validate::{FLAG, Input, MONITOR_STEPS, one_of, require, require_list};

const ROUTER_TYPES: [i64; 4] = [0, 1, 2, 3];
const STATIC_TYPE_FILTERS: [i64; 8] = [0, 1, 2, 3, 4, 6, 7, 8];
const VPC_NETWORKS: [&str; 11] = [
    "192.168.0.0/16",
    "172.16.0.0/16",
    "172.17.0.0/16",
    "172.18.0.0/16",
    "172.19.0.0/16",
    "172.20.0.0/16",
    "172.21.0.0/16",
    "172.22.0.0/16",
    "172.23.0.0/16",
    "172.24.0.0/16",
    "172.25.0.0/16",
];

/// Router actions scoped to one zone.
#[derive(Clone, Debug)]
pub struct RouterService {
    client: Client,
    properties: Properties,
}

impl RouterService {
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

    /// Adds entries (e.g. VPN accounts) to a rule.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/router/add_router_static_entries.html>
    pub async fn add_router_static_entries(
        &self,
        input: Option<AddRouterStaticEntriesInput>,
    ) -> Result<AddRouterStaticEntriesOutput, QingCloudError> {
        let operation = Operation::get("AddRouterStaticEntries", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }

    /// Adds rules to a router.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/router/add_router_statics.html>
    ///
    /// # Errors
    ///
    /// Fails without I/O when `router` or `statics` is missing, or when a
    /// rule carries a kind that cannot be created.
    pub async fn add_router_statics(
        &self,
        input: Option<AddRouterStaticsInput>,
    ) -> Result<AddRouterStaticsOutput, QingCloudError> {
        let operation = Operation::get("AddRouterStatics", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }

    /// Creates routers.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/router/create_routers.html>
    pub async fn create_routers(
        &self,
        input: Option<CreateRoutersInput>,
    ) -> Result<CreateRoutersOutput, QingCloudError> {
        let operation = Operation::get("CreateRouters", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }

    /// Removes rule entries.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/router/delete_router_static_entries.html>
    pub async fn delete_router_static_entries(
        &self,
        input: Option<DeleteRouterStaticEntriesInput>,
    ) -> Result<DeleteRouterStaticEntriesOutput, QingCloudError> {
        let operation = Operation::get("DeleteRouterStaticEntries", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }

    /// Removes rules.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/router/delete_router_statics.html>
    pub async fn delete_router_statics(
        &self,
        input: Option<DeleteRouterStaticsInput>,
    ) -> Result<DeleteRouterStaticsOutput, QingCloudError> {
        let operation = Operation::get("DeleteRouterStatics", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }

    /// Deletes routers.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/router/delete_routers.html>
    pub async fn delete_routers(
        &self,
        input: Option<DeleteRoutersInput>,
    ) -> Result<DeleteRoutersOutput, QingCloudError> {
        let operation = Operation::get("DeleteRouters", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }

    /// Lists rule entries.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/router/describe_router_static_entries.html>
    pub async fn describe_router_static_entries(
        &self,
        input: Option<DescribeRouterStaticEntriesInput>,
    ) -> Result<DescribeRouterStaticEntriesOutput, QingCloudError> {
        let operation = Operation::get("DescribeRouterStaticEntries", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }

    /// Lists the rules of a router.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/router/describe_router_statics.html>
    pub async fn describe_router_statics(
        &self,
        input: Option<DescribeRouterStaticsInput>,
    ) -> Result<DescribeRouterStaticsOutput, QingCloudError> {
        let operation = Operation::get("DescribeRouterStatics", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }

    /// Lists the networks connected to a router.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/router/describe_router_vxnets.html>
    pub async fn describe_router_vxnets(
        &self,
        input: Option<DescribeRouterVxnetsInput>,
    ) -> Result<DescribeRouterVxnetsOutput, QingCloudError> {
        let operation = Operation::get("DescribeRouterVxnets", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }

    /// Lists routers.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/router/describe_routers.html>
    pub async fn describe_routers(
        &self,
        input: Option<DescribeRoutersInput>,
    ) -> Result<DescribeRoutersOutput, QingCloudError> {
        let operation = Operation::get("DescribeRouters", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }

    /// Fetches traffic metrics of a router.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/monitor/get_monitor.html>
    pub async fn get_router_monitor(
        &self,
        input: Option<GetRouterMonitorInput>,
    ) -> Result<GetRouterMonitorOutput, QingCloudError> {
        let operation = Operation::get("GetMonitor", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }

    /// Connects a network to a router.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/router/join_router.html>
    pub async fn join_router(
        &self,
        input: Option<JoinRouterInput>,
    ) -> Result<JoinRouterOutput, QingCloudError> {
        let operation = Operation::get("JoinRouter", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }

    /// Disconnects networks from a router.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/router/leave_router.html>
    pub async fn leave_router(
        &self,
        input: Option<LeaveRouterInput>,
    ) -> Result<LeaveRouterOutput, QingCloudError> {
        let operation = Operation::get("LeaveRouter", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }

    /// Changes router settings.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/router/modify_router_attributes.html>
    pub async fn modify_router_attributes(
        &self,
        input: Option<ModifyRouterAttributesInput>,
    ) -> Result<ModifyRouterAttributesOutput, QingCloudError> {
        let operation = Operation::get("ModifyRouterAttributes", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }

    /// Changes a rule.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/router/modify_router_static_attributes.html>
    pub async fn modify_router_static_attributes(
        &self,
        input: Option<ModifyRouterStaticAttributesInput>,
    ) -> Result<ModifyRouterStaticAttributesOutput, QingCloudError> {
        let operation = Operation::get("ModifyRouterStaticAttributes", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }

    /// Changes a rule entry.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/router/modify_router_static_entry_attributes.html>
    pub async fn modify_router_static_entry_attributes(
        &self,
        input: Option<ModifyRouterStaticEntryAttributesInput>,
    ) -> Result<ModifyRouterStaticEntryAttributesOutput, QingCloudError> {
        let operation = Operation::get("ModifyRouterStaticEntryAttributes", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }

    /// Powers routers off.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/router/poweroff_routers.html>
    pub async fn power_off_routers(
        &self,
        input: Option<PowerOffRoutersInput>,
    ) -> Result<PowerOffRoutersOutput, QingCloudError> {
        let operation = Operation::get("PowerOffRouters", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }

    /// Powers routers on.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/router/poweron_routers.html>
    pub async fn power_on_routers(
        &self,
        input: Option<PowerOnRoutersInput>,
    ) -> Result<PowerOnRoutersOutput, QingCloudError> {
        let operation = Operation::get("PowerOnRouters", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }

    /// Applies pending rule and network changes.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/router/update_routers.html>
    pub async fn update_routers(
        &self,
        input: Option<UpdateRoutersInput>,
    ) -> Result<UpdateRoutersOutput, QingCloudError> {
        let operation = Operation::get("UpdateRouters", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }
}

/// Parameters of `AddRouterStaticEntries`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct AddRouterStaticEntriesInput {
    /// Entries to add. Required.
    pub entries: Vec<RouterStaticEntry>,
    /// Owning rule. Required.
    pub router_static: Option<String>,
}

impl Input for AddRouterStaticEntriesInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require_list(&self.entries, "entries", "AddRouterStaticEntriesInput")?;
        require(self.router_static.as_ref(), "router_static", "AddRouterStaticEntriesInput")
    }
}

output! {
    /// Result of `AddRouterStaticEntries`.
    AddRouterStaticEntriesOutput {
        /// Identifiers of the new entries.
        router_static_entries: Vec<String>,
    }
}

/// Parameters of `AddRouterStatics`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct AddRouterStaticsInput {
    /// Router to extend. Required.
    pub router: Option<String>,
    /// Rules to add. Required.
    pub statics: Vec<RouterStatic>,
    /// Network the rules apply to.
    pub vxnet: Option<String>,
}

impl Input for AddRouterStaticsInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require(self.router.as_ref(), "router", "AddRouterStaticsInput")?;
        require_list(&self.statics, "statics", "AddRouterStaticsInput")?;
        self.statics.iter().try_for_each(RouterStatic::validate)
    }
}

output! {
    /// Result of `AddRouterStatics`.
    AddRouterStaticsOutput {
        /// Identifiers of the new rules.
        router_statics: Vec<String>,
    }
}

/// Parameters of `CreateRouters`.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct CreateRoutersInput {
    /// Number of routers. Defaults to 1.
    pub count: Option<i64>,
    /// Name given to every router.
    pub router_name: Option<String>,
    /// `0` medium, `1` small, `2` large, `3` extra-large.
    pub router_type: Option<i64>,
    /// Security group to apply.
    pub security_group: Option<String>,
    /// Private address range of the VPC.
    pub vpc_network: Option<String>,
}

impl Default for CreateRoutersInput {
    fn default() -> Self {
        Self {
            count: Some(1),
            router_name: None,
            router_type: None,
            security_group: None,
            vpc_network: None,
        }
    }
}

impl Input for CreateRoutersInput {
    fn validate(&self) -> Result<(), ValidationError> {
        one_of(self.router_type.as_ref(), "router_type", &ROUTER_TYPES)?;
        one_of(self.vpc_network.as_ref(), "vpc_network", &VPC_NETWORKS)
    }
}

output! {
    /// Result of `CreateRouters`.
    CreateRoutersOutput {
        /// Identifiers of the new routers.
        routers: Vec<String>,
    }
}

/// Parameters of `DeleteRouterStaticEntries`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct DeleteRouterStaticEntriesInput {
    /// Entries to remove. Required.
    pub router_static_entries: Vec<String>,
}

impl Input for DeleteRouterStaticEntriesInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require_list(
            &self.router_static_entries,
            "router_static_entries",
            "DeleteRouterStaticEntriesInput",
        )
    }
}

output! {
    /// Result of `DeleteRouterStaticEntries`.
    DeleteRouterStaticEntriesOutput {
        /// Entries removed.
        router_static_entries: Vec<String>,
    }
}

/// Parameters of `DeleteRouterStatics`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct DeleteRouterStaticsInput {
    /// Rules to remove. Required.
    pub router_statics: Vec<String>,
}

impl Input for DeleteRouterStaticsInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require_list(&self.router_statics, "router_statics", "DeleteRouterStaticsInput")
    }
}

output! {
    /// Result of `DeleteRouterStatics`.
    DeleteRouterStaticsOutput {
        /// Rules removed.
        router_statics: Vec<String>,
    }
}

/// Parameters of `DeleteRouters`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct DeleteRoutersInput {
    /// Routers to delete. Required.
    pub routers: Vec<String>,
}

impl Input for DeleteRoutersInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require_list(&self.routers, "routers", "DeleteRoutersInput")
    }
}

output! {
    /// Result of `DeleteRouters`.
    DeleteRoutersOutput {
        /// Asynchronous job.
        job_id: Option<String>,
    }
}

/// Parameters of `DescribeRouterStaticEntries`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct DescribeRouterStaticEntriesInput {
    /// Page size.
    pub limit: Option<i64>,
    /// Page offset.
    pub offset: Option<i64>,
    /// Single entry to fetch.
    pub router_static_entry_id: Option<String>,
    /// Owning rule.
    pub router_static_id: Option<String>,
}

impl Input for DescribeRouterStaticEntriesInput {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

output! {
    /// Result of `DescribeRouterStaticEntries`.
    DescribeRouterStaticEntriesOutput {
        /// Matching entries.
        router_static_entry_set: Vec<RouterStaticEntry>,
        /// Total matches across pages.
        total_count: Option<i64>,
    }
}

/// Parameters of `DescribeRouterStatics`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct DescribeRouterStaticsInput {
    /// Page size.
    pub limit: Option<i64>,
    /// Page offset.
    pub offset: Option<i64>,
    /// Owner account.
    pub owner: Option<String>,
    /// Router to inspect. Required.
    pub router: Option<String>,
    /// Rule identifiers.
    pub router_statics: Vec<String>,
    /// Rule kind filter; `0` matches port forwarding on legacy routers.
    pub static_type: Option<i64>,
    /// `1` to include related resources.
    pub verbose: Option<i64>,
    /// Network the rules apply to.
    pub vxnet: Option<String>,
}

impl Input for DescribeRouterStaticsInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require(self.router.as_ref(), "router", "DescribeRouterStaticsInput")?;
        one_of(self.static_type.as_ref(), "static_type", &STATIC_TYPE_FILTERS)?;
        one_of(self.verbose.as_ref(), "verbose", &FLAG)
    }
}

output! {
    /// Result of `DescribeRouterStatics`.
    DescribeRouterStaticsOutput {
        /// Matching rules.
        router_static_set: Vec<RouterStatic>,
        /// Total matches across pages.
        total_count: Option<i64>,
    }
}

/// Parameters of `DescribeRouterVxnets`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct DescribeRouterVxnetsInput {
    /// Page size.
    pub limit: Option<i64>,
    /// Page offset.
    pub offset: Option<i64>,
    /// Router to inspect. Required.
    pub router: Option<String>,
    /// `1` to include related resources.
    pub verbose: Option<i64>,
    /// Single network to fetch.
    pub vxnet: Option<String>,
}

impl Input for DescribeRouterVxnetsInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require(self.router.as_ref(), "router", "DescribeRouterVxnetsInput")?;
        one_of(self.verbose.as_ref(), "verbose", &FLAG)
    }
}

output! {
    /// Result of `DescribeRouterVxnets`.
    DescribeRouterVxnetsOutput {
        /// Connected networks.
        router_vxnet_set: Vec<RouterVxNet>,
        /// Total matches across pages.
        total_count: Option<i64>,
    }
}

/// Parameters of `DescribeRouters`. Every field is an optional filter.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct DescribeRoutersInput {
    /// Page size.
    pub limit: Option<i64>,
    /// Page offset.
    pub offset: Option<i64>,
    /// Owner account.
    pub owner: Option<String>,
    /// Router identifiers.
    pub routers: Vec<String>,
    /// Substring of the name or identifier.
    pub search_word: Option<String>,
    /// Status filter.
    pub status: Vec<String>,
    /// Tag identifiers.
    pub tags: Vec<String>,
    /// `1` to include related resources.
    pub verbose: Option<i64>,
    /// Routers connected to this network.
    pub vxnet: Option<String>,
}

impl Input for DescribeRoutersInput {
    fn validate(&self) -> Result<(), ValidationError> {
        one_of(self.verbose.as_ref(), "verbose", &FLAG)
    }
}

output! {
    /// Result of `DescribeRouters`.
    DescribeRoutersOutput {
        /// Matching routers.
        router_set: Vec<Router>,
        /// Total matches across pages.
        total_count: Option<i64>,
    }
}

/// Parameters of the router flavour of `GetMonitor`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct GetRouterMonitorInput {
    /// End of the window. Required.
    #[serde(serialize_with = "crate::types::wire_time")]
    pub end_time: Option<DateTime<Utc>>,
    /// Meters to fetch, e.g. `traffic`. Required.
    pub meters: Vec<String>,
    /// Router to inspect. Required. Sent as `resource`; `router` is also
    /// accepted when decoding.
    #[serde(rename = "resource", alias = "router")]
    pub router: Option<String>,
    /// Start of the window. Required.
    #[serde(serialize_with = "crate::types::wire_time")]
    pub start_time: Option<DateTime<Utc>>,
    /// `5m`, `15m`, `2h` or `1d`. Required.
    pub step: Option<String>,
}

impl Input for GetRouterMonitorInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require(self.end_time.as_ref(), "end_time", "GetRouterMonitorInput")?;
        require_list(&self.meters, "meters", "GetRouterMonitorInput")?;
        require(self.router.as_ref(), "resource", "GetRouterMonitorInput")?;
        require(self.start_time.as_ref(), "start_time", "GetRouterMonitorInput")?;
        require(self.step.as_ref(), "step", "GetRouterMonitorInput")?;
        one_of(self.step.as_ref(), "step", &MONITOR_STEPS)
    }
}

output! {
    /// Result of the router flavour of `GetMonitor`.
    GetRouterMonitorOutput {
        /// One series per requested meter.
        meter_set: Vec<Meter>,
        /// Router the series belong to.
        #[serde(rename = "resource_id")]
        router_id: Option<String>,
    }
}

/// Parameters of `JoinRouter`.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct JoinRouterInput {
    /// Feature bitmask; `1` enables DHCP. Defaults to 1.
    pub features: Option<i64>,
    /// Address range of the network, e.g. `192.168.1.0/24`. Required.
    pub ip_network: Option<String>,
    /// Router to join. Required.
    pub router: Option<String>,
    /// Network to connect. Required.
    pub vxnet: Option<String>,
}

impl Default for JoinRouterInput {
    fn default() -> Self {
        Self {
            features: Some(1),
            ip_network: None,
            router: None,
            vxnet: None,
        }
    }
}

impl Input for JoinRouterInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require(self.ip_network.as_ref(), "ip_network", "JoinRouterInput")?;
        require(self.router.as_ref(), "router", "JoinRouterInput")?;
        require(self.vxnet.as_ref(), "vxnet", "JoinRouterInput")
    }
}

output! {
    /// Result of `JoinRouter`.
    JoinRouterOutput {
        /// Asynchronous job.
        job_id: Option<String>,
        /// Router joined.
        router_id: Option<String>,
        /// Network connected.
        vxnet_id: Option<String>,
    }
}

/// Parameters of `LeaveRouter`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct LeaveRouterInput {
    /// Router to leave. Required.
    pub router: Option<String>,
    /// Networks to disconnect. Required.
    pub vxnets: Vec<String>,
}

impl Input for LeaveRouterInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require(self.router.as_ref(), "router", "LeaveRouterInput")?;
        require_list(&self.vxnets, "vxnets", "LeaveRouterInput")
    }
}

output! {
    /// Result of `LeaveRouter`.
    LeaveRouterOutput {
        /// Asynchronous job.
        job_id: Option<String>,
        /// Router left.
        router_id: Option<String>,
        /// Networks disconnected.
        vxnets: Vec<String>,
    }
}

/// Parameters of `ModifyRouterAttributes`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct ModifyRouterAttributesInput {
    /// New description.
    pub description: Option<String>,
    /// End of the DHCP range on `vxnet`.
    pub dyn_ip_end: Option<String>,
    /// Start of the DHCP range on `vxnet`.
    pub dyn_ip_start: Option<String>,
    /// EIP to bind.
    pub eip: Option<String>,
    /// Feature bitmask on `vxnet`.
    pub features: Option<i64>,
    /// Router to modify. Required.
    pub router: Option<String>,
    /// New name.
    pub router_name: Option<String>,
    /// Security group to apply.
    pub security_group: Option<String>,
    /// Network the DHCP settings apply to.
    pub vxnet: Option<String>,
}

impl Input for ModifyRouterAttributesInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require(self.router.as_ref(), "router", "ModifyRouterAttributesInput")
    }
}

output! {
    /// Result of `ModifyRouterAttributes`.
    ModifyRouterAttributesOutput {}
}

/// Parameters of `ModifyRouterStaticAttributes`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct ModifyRouterStaticAttributesInput {
    /// Rule to modify. Required.
    pub router_static: Option<String>,
    /// New name.
    pub router_static_name: Option<String>,
    /// First rule value.
    pub val1: Option<String>,
    /// Second rule value.
    pub val2: Option<String>,
    /// Third rule value.
    pub val3: Option<String>,
    /// Fourth rule value.
    pub val4: Option<String>,
    /// Fifth rule value.
    pub val5: Option<String>,
    /// Sixth rule value.
    pub val6: Option<String>,
}

impl Input for ModifyRouterStaticAttributesInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require(
            self.router_static.as_ref(),
            "router_static",
            "ModifyRouterStaticAttributesInput",
        )
    }
}

output! {
    /// Result of `ModifyRouterStaticAttributes`.
    ModifyRouterStaticAttributesOutput {}
}

/// Parameters of `ModifyRouterStaticEntryAttributes`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct ModifyRouterStaticEntryAttributesInput {
    /// Entry to modify. Required.
    pub router_static_entry: Option<String>,
    /// New name.
    pub router_static_entry_name: Option<String>,
    /// First entry value.
    pub val1: Option<String>,
    /// Second entry value.
    pub val2: Option<String>,
}

impl Input for ModifyRouterStaticEntryAttributesInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require(
            self.router_static_entry.as_ref(),
            "router_static_entry",
            "ModifyRouterStaticEntryAttributesInput",
        )
    }
}

output! {
    /// Result of `ModifyRouterStaticEntryAttributes`.
    ModifyRouterStaticEntryAttributesOutput {}
}

/// Parameters of `PowerOffRouters`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct PowerOffRoutersInput {
    /// Routers to power off. Required.
    pub routers: Vec<String>,
}

impl Input for PowerOffRoutersInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require_list(&self.routers, "routers", "PowerOffRoutersInput")
    }
}

output! {
    /// Result of `PowerOffRouters`.
    PowerOffRoutersOutput {
        /// Asynchronous job.
        job_id: Option<String>,
    }
}

/// Parameters of `PowerOnRouters`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct PowerOnRoutersInput {
    /// Routers to power on. Required.
    pub routers: Vec<String>,
}

impl Input for PowerOnRoutersInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require_list(&self.routers, "routers", "PowerOnRoutersInput")
    }
}

output! {
    /// Result of `PowerOnRouters`.
    PowerOnRoutersOutput {
        /// Asynchronous job.
        job_id: Option<String>,
    }
}

/// Parameters of `UpdateRouters`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct UpdateRoutersInput {
    /// Routers whose pending changes should be applied. Required.
    pub routers: Vec<String>,
}

impl Input for UpdateRoutersInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require_list(&self.routers, "routers", "UpdateRoutersInput")
    }
}

output! {
    /// Result of `UpdateRouters`.
    UpdateRoutersOutput {
        /// Asynchronous job.
        job_id: Option<String>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::scripted_service;
    use rstest::rstest;

    fn port_forward(static_type: i64) -> RouterStatic {
        RouterStatic {
            router_static_name: Some(String::from("ssh")),
            static_type: Some(static_type),
            val1: Some(String::from("2222")),
            val2: Some(String::from("192.168.1.2")),
            val3: Some(String::from("22")),
            ..RouterStatic::default()
        }
    }

    #[rstest]
    #[case(1, true)]
    #[case(8, true)]
    #[case(0, false)]
    #[case(5, false)]
    fn added_statics_are_validated_per_element(#[case] static_type: i64, #[case] ok: bool) {
        let input = AddRouterStaticsInput {
            router: Some(String::from("rtr-1")),
            statics: vec![port_forward(1), port_forward(static_type)],
            vxnet: None,
        };
        assert_eq!(input.validate().is_ok(), ok);
    }

    #[rstest]
    #[case(0, true)]
    #[case(5, false)]
    fn describe_statics_accepts_legacy_filter(#[case] static_type: i64, #[case] ok: bool) {
        let input = DescribeRouterStaticsInput {
            router: Some(String::from("rtr-1")),
            static_type: Some(static_type),
            ..DescribeRouterStaticsInput::default()
        };
        assert_eq!(input.validate().is_ok(), ok);
    }

    #[rstest]
    #[case("192.168.0.0/16", true)]
    #[case("172.25.0.0/16", true)]
    #[case("172.26.0.0/16", false)]
    #[case("10.0.0.0/8", false)]
    fn vpc_network_is_constrained(#[case] network: &str, #[case] ok: bool) {
        let input = CreateRoutersInput {
            vpc_network: Some(network.to_owned()),
            ..CreateRoutersInput::default()
        };
        assert_eq!(input.validate().is_ok(), ok);
    }

    #[test]
    fn declared_defaults() {
        assert_eq!(CreateRoutersInput::default().count, Some(1));
        assert_eq!(JoinRouterInput::default().features, Some(1));
    }

    #[tokio::test]
    async fn statics_are_flattened_with_indices() {
        let (service, transport) = scripted_service();
        transport.push_json(
            r#"{"action":"AddRouterStaticsResponse","ret_code":0,"router_statics":["rtrs-1"]}"#,
        );
        let output = service
            .router("pek3a")
            .add_router_statics(Some(AddRouterStaticsInput {
                router: Some(String::from("rtr-1")),
                statics: vec![port_forward(1)],
                vxnet: None,
            }))
            .await
            .expect("add succeeds");

        assert_eq!(output.router_statics, vec!["rtrs-1"]);
        let params = transport.last_params().expect("request recorded");
        assert_eq!(params.get("statics.1.static_type").map(String::as_str), Some("1"));
        assert_eq!(params.get("statics.1.val2").map(String::as_str), Some("192.168.1.2"));
        assert!(!params.contains_key("statics.1.router_id"));
    }

    #[tokio::test]
    async fn invalid_static_never_reaches_transport() {
        let (service, transport) = scripted_service();
        let err = service
            .router("pek3a")
            .add_router_statics(Some(AddRouterStaticsInput {
                router: Some(String::from("rtr-1")),
                statics: vec![port_forward(5)],
                vxnet: None,
            }))
            .await
            .expect_err("type 5 cannot be created");
        assert!(matches!(
            err,
            QingCloudError::Validation(ValidationError::ParameterValueNotAllowed { .. })
        ));
        assert!(transport.requests().is_empty());
    }
}
