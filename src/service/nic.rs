//! Network interface actions.

use serde::{Deserialize, Serialize};

use crate::error::{QingCloudError, ValidationError};
use crate::request::{Client, Operation, Properties};
use crate::types::{Nic, NicIp};
use crate::validate::{Input, one_of, require, require_list};

const NIC_STATUSES: [&str; 2] = ["available", "in-use"];

/// Network interface actions scoped to one zone.
#[derive(Clone, Debug)]
pub struct NicService {
    client: Client,
    properties: Properties,
}

impl NicService {
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

    /// Plugs NICs into an instance.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/nic/attach_nics.html>
    pub async fn attach_nics(
        &self,
        input: Option<AttachNicsInput>,
    ) -> Result<AttachNicsOutput, QingCloudError> {
        let operation = Operation::get("AttachNics", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }

    /// Creates NICs on a network.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/nic/create_nics.html>
    pub async fn create_nics(
        &self,
        input: Option<CreateNicsInput>,
    ) -> Result<CreateNicsOutput, QingCloudError> {
        let operation = Operation::get("CreateNics", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }

    /// Deletes detached NICs.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/nic/delete_nics.html>
    pub async fn delete_nics(
        &self,
        input: Option<DeleteNicsInput>,
    ) -> Result<DeleteNicsOutput, QingCloudError> {
        let operation = Operation::get("DeleteNics", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }

    /// Lists NICs.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/nic/describe_nics.html>
    pub async fn describe_nics(
        &self,
        input: Option<DescribeNicsInput>,
    ) -> Result<DescribeNicsOutput, QingCloudError> {
        let operation = Operation::get("DescribeNics", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }

    /// Unplugs NICs from their instance.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/nic/detach_nics.html>
    pub async fn detach_nics(
        &self,
        input: Option<DetachNicsInput>,
    ) -> Result<DetachNicsOutput, QingCloudError> {
        let operation = Operation::get("DetachNics", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }

    /// Renames a NIC or changes its address.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/nic/modify_nic_attributes.html>
    pub async fn modify_nic_attributes(
        &self,
        input: Option<ModifyNicAttributesInput>,
    ) -> Result<ModifyNicAttributesOutput, QingCloudError> {
        let operation = Operation::get("ModifyNicAttributes", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }
}

/// Parameters of `AttachNics`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct AttachNicsInput {
    /// Target instance. Required.
    pub instance: Option<String>,
    /// NICs to plug. Required.
    pub nics: Vec<String>,
}

impl Input for AttachNicsInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require(self.instance.as_ref(), "instance", "AttachNicsInput")?;
        require_list(&self.nics, "nics", "AttachNicsInput")
    }
}

output! {
    /// Result of `AttachNics`.
    AttachNicsOutput {
        /// Asynchronous job.
        job_id: Option<String>,
    }
}

/// Parameters of `CreateNics`.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct CreateNicsInput {
    /// Number of NICs. Defaults to 1.
    pub count: Option<i64>,
    /// Name given to every NIC.
    pub nic_name: Option<String>,
    /// Fixed addresses, one per NIC.
    pub private_ips: Vec<String>,
    /// Network to create the NICs on. Required.
    pub vxnet: Option<String>,
}

impl Default for CreateNicsInput {
    fn default() -> Self {
        Self {
            count: Some(1),
            nic_name: None,
            private_ips: Vec::new(),
            vxnet: None,
        }
    }
}

impl Input for CreateNicsInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require(self.vxnet.as_ref(), "vxnet", "CreateNicsInput")
    }
}

output! {
    /// Result of `CreateNics`.
    CreateNicsOutput {
        /// Identifiers and addresses of the new NICs.
        nics: Vec<NicIp>,
    }
}

/// Parameters of `DeleteNics`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct DeleteNicsInput {
    /// NICs to delete. Required.
    pub nics: Vec<String>,
}

impl Input for DeleteNicsInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require_list(&self.nics, "nics", "DeleteNicsInput")
    }
}

output! {
    /// Result of `DeleteNics`.
    DeleteNicsOutput {}
}

/// Parameters of `DescribeNics`. Every field is an optional filter.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct DescribeNicsInput {
    /// Instances the NICs are attached to.
    pub instances: Vec<String>,
    /// Page size.
    pub limit: Option<i64>,
    /// NIC name.
    pub nic_name: Option<String>,
    /// NIC identifiers.
    pub nics: Vec<String>,
    /// Page offset.
    pub offset: Option<i64>,
    /// Owner account.
    pub owner: Option<String>,
    /// `available` or `in-use`.
    pub status: Option<String>,
    /// `0` unmanaged, `1` managed networks.
    pub vxnet_type: Option<i64>,
    /// Networks.
    pub vxnets: Vec<String>,
}

impl Input for DescribeNicsInput {
    fn validate(&self) -> Result<(), ValidationError> {
        one_of(self.status.as_ref(), "status", &NIC_STATUSES)
    }
}

output! {
    /// Result of `DescribeNics`.
    DescribeNicsOutput {
        /// Matching NICs.
        nic_set: Vec<Nic>,
        /// Total matches across pages.
        total_count: Option<i64>,
    }
}

/// Parameters of `DetachNics`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct DetachNicsInput {
    /// NICs to unplug. Required.
    pub nics: Vec<String>,
}

impl Input for DetachNicsInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require_list(&self.nics, "nics", "DetachNicsInput")
    }
}

output! {
    /// Result of `DetachNics`.
    DetachNicsOutput {
        /// Asynchronous job.
        job_id: Option<String>,
    }
}

/// Parameters of `ModifyNicAttributes`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct ModifyNicAttributesInput {
    /// NIC to modify. Required.
    pub nic: Option<String>,
    /// New name.
    pub nic_name: Option<String>,
    /// New private address.
    pub private_ip: Option<String>,
}

impl Input for ModifyNicAttributesInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require(self.nic.as_ref(), "nic", "ModifyNicAttributesInput")
    }
}

output! {
    /// Result of `ModifyNicAttributes`.
    ModifyNicAttributesOutput {}
}
