//! Block storage volume actions.

use serde::{Deserialize, Serialize};

use crate::error::{QingCloudError, ValidationError};
use crate::request::{Client, Operation, Properties};
use crate::types::Volume;
use crate::validate::{FLAG, Input, one_of, require, require_list};

/// Storage classes: `0`/`3` performance, `1` high capacity, `2` super high
/// performance, `4` NeonSAN, `5` enterprise distributed SAN, `10`, `100` and
/// `200` for the newer basic, SSD and enterprise tiers.
const VOLUME_TYPES: [i64; 9] = [0, 1, 2, 3, 4, 5, 10, 100, 200];

/// Volume actions scoped to one zone.
#[derive(Clone, Debug)]
pub struct VolumeService {
    client: Client,
    properties: Properties,
}

impl VolumeService {
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

    /// Attaches volumes to an instance.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/volume/attach_volumes.html>
    pub async fn attach_volumes(
        &self,
        input: Option<AttachVolumesInput>,
    ) -> Result<AttachVolumesOutput, QingCloudError> {
        let operation = Operation::get("AttachVolumes", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }

    /// Creates volumes.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/volume/create_volumes.html>
    pub async fn create_volumes(
        &self,
        input: Option<CreateVolumesInput>,
    ) -> Result<CreateVolumesOutput, QingCloudError> {
        let operation = Operation::get("CreateVolumes", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }

    /// Deletes detached volumes.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/volume/delete_volumes.html>
    pub async fn delete_volumes(
        &self,
        input: Option<DeleteVolumesInput>,
    ) -> Result<DeleteVolumesOutput, QingCloudError> {
        let operation = Operation::get("DeleteVolumes", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }

    /// Lists volumes.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/volume/describe_volumes.html>
    pub async fn describe_volumes(
        &self,
        input: Option<DescribeVolumesInput>,
    ) -> Result<DescribeVolumesOutput, QingCloudError> {
        let operation = Operation::get("DescribeVolumes", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }

    /// Detaches volumes from an instance.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/volume/detach_volumes.html>
    pub async fn detach_volumes(
        &self,
        input: Option<DetachVolumesInput>,
    ) -> Result<DetachVolumesOutput, QingCloudError> {
        let operation = Operation::get("DetachVolumes", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }

    /// Renames or re-describes a volume.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/volume/modify_volume_attributes.html>
    pub async fn modify_volume_attributes(
        &self,
        input: Option<ModifyVolumeAttributesInput>,
    ) -> Result<ModifyVolumeAttributesOutput, QingCloudError> {
        let operation = Operation::get("ModifyVolumeAttributes", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }

    /// Grows detached volumes.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/volume/resize_volumes.html>
    pub async fn resize_volumes(
        &self,
        input: Option<ResizeVolumesInput>,
    ) -> Result<ResizeVolumesOutput, QingCloudError> {
        let operation = Operation::get("ResizeVolumes", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }
}

/// Parameters of `AttachVolumes`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct AttachVolumesInput {
    /// Target instance. Required.
    pub instance: Option<String>,
    /// Volumes to attach. Required.
    pub volumes: Vec<String>,
}

impl Input for AttachVolumesInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require(self.instance.as_ref(), "instance", "AttachVolumesInput")?;
        require_list(&self.volumes, "volumes", "AttachVolumesInput")
    }
}

output! {
    /// Result of `AttachVolumes`.
    AttachVolumesOutput {
        /// Asynchronous job.
        job_id: Option<String>,
    }
}

/// Parameters of `CreateVolumes`.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct CreateVolumesInput {
    /// Number of volumes. Defaults to 1.
    pub count: Option<i64>,
    /// Size in GB, a multiple of 10. Required.
    pub size: Option<i64>,
    /// Name given to every volume.
    pub volume_name: Option<String>,
    /// Storage class.
    pub volume_type: Option<i64>,
}

impl Default for CreateVolumesInput {
    fn default() -> Self {
        Self {
            count: Some(1),
            size: None,
            volume_name: None,
            volume_type: None,
        }
    }
}

impl Input for CreateVolumesInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require(self.size.as_ref(), "size", "CreateVolumesInput")?;
        one_of(self.volume_type.as_ref(), "volume_type", &VOLUME_TYPES)
    }
}

output! {
    /// Result of `CreateVolumes`.
    CreateVolumesOutput {
        /// Asynchronous job.
        job_id: Option<String>,
        /// Identifiers of the new volumes.
        volumes: Vec<String>,
    }
}

/// Parameters of `DeleteVolumes`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct DeleteVolumesInput {
    /// Volumes to delete. Required.
    pub volumes: Vec<String>,
}

impl Input for DeleteVolumesInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require_list(&self.volumes, "volumes", "DeleteVolumesInput")
    }
}

output! {
    /// Result of `DeleteVolumes`.
    DeleteVolumesOutput {
        /// Asynchronous job.
        job_id: Option<String>,
    }
}

/// Parameters of `DescribeVolumes`. Every field is an optional filter.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct DescribeVolumesInput {
    /// Instance the volumes are attached to.
    pub instance_id: Option<String>,
    /// Page size.
    pub limit: Option<i64>,
    /// Page offset.
    pub offset: Option<i64>,
    /// Owner account.
    pub owner: Option<String>,
    /// Substring of the name or identifier.
    pub search_word: Option<String>,
    /// Status filter.
    pub status: Vec<String>,
    /// Tag identifiers.
    pub tags: Vec<String>,
    /// `1` to include related resources.
    pub verbose: Option<i64>,
    /// Storage class.
    pub volume_type: Option<i64>,
    /// Volume identifiers.
    pub volumes: Vec<String>,
}

impl Input for DescribeVolumesInput {
    fn validate(&self) -> Result<(), ValidationError> {
        one_of(self.verbose.as_ref(), "verbose", &FLAG)?;
        one_of(self.volume_type.as_ref(), "volume_type", &VOLUME_TYPES)
    }
}

output! {
    /// Result of `DescribeVolumes`.
    DescribeVolumesOutput {
        /// Matching volumes.
        volume_set: Vec<Volume>,
        /// Total matches across pages.
        total_count: Option<i64>,
    }
}

/// Parameters of `DetachVolumes`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct DetachVolumesInput {
    /// Instance to detach from. Required.
    pub instance: Option<String>,
    /// Volumes to detach. Required.
    pub volumes: Vec<String>,
}

impl Input for DetachVolumesInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require(self.instance.as_ref(), "instance", "DetachVolumesInput")?;
        require_list(&self.volumes, "volumes", "DetachVolumesInput")
    }
}

output! {
    /// Result of `DetachVolumes`.
    DetachVolumesOutput {
        /// Asynchronous job.
        job_id: Option<String>,
    }
}

/// Parameters of `ModifyVolumeAttributes`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct ModifyVolumeAttributesInput {
    /// New description.
    pub description: Option<String>,
    /// Volume to modify. Required.
    pub volume: Option<String>,
    /// New name.
    pub volume_name: Option<String>,
}

impl Input for ModifyVolumeAttributesInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require(self.volume.as_ref(), "volume", "ModifyVolumeAttributesInput")
    }
}

output! {
    /// Result of `ModifyVolumeAttributes`.
    ModifyVolumeAttributesOutput {}
}

/// Parameters of `ResizeVolumes`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct ResizeVolumesInput {
    /// New size in GB; must exceed the current size. Required.
    pub size: Option<i64>,
    /// Volumes to grow. Required.
    pub volumes: Vec<String>,
}

impl Input for ResizeVolumesInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require(self.size.as_ref(), "size", "ResizeVolumesInput")?;
        require_list(&self.volumes, "volumes", "ResizeVolumesInput")
    }
}

output! {
    /// Result of `ResizeVolumes`.
    ResizeVolumesOutput {
        /// Asynchronous job.
        job_id: Option<String>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::scripted_service;
    use rstest::rstest;

    #[rstest]
    #[case(0, true)]
    #[case(5, true)]
    #[case(200, true)]
    #[case(6, false)]
    #[case(-1, false)]
    fn volume_type_is_constrained(#[case] volume_type: i64, #[case] ok: bool) {
        let input = CreateVolumesInput {
            size: Some(10),
            volume_type: Some(volume_type),
            ..CreateVolumesInput::default()
        };
        assert_eq!(input.validate().is_ok(), ok);
    }

    #[test]
    fn volume_type_error_lists_allowed_values() {
        let input = DescribeVolumesInput {
            volume_type: Some(6),
            ..DescribeVolumesInput::default()
        };
        let err = input.validate().expect_err("6 is not a storage class");
        assert_eq!(
            err.to_string(),
            "volume_type's value 6 is not allowed, should be one of 0, 1, 2, 3, 4, 5, 10, 100, 200"
        );
    }

    #[tokio::test]
    async fn describe_decodes_attachment() {
        let (service, transport) = scripted_service();
        transport.push_json(
            r#"{"action":"DescribeVolumesResponse","ret_code":0,"total_count":1,
                "volume_set":[{"volume_id":"vol-1","size":10,"status":"in-use","volume_type":0,
                "instance":{"instance_id":"i-1","device":"/dev/sdc"}}]}"#,
        );
        let output = service
            .volume("gd2")
            .describe_volumes(None)
            .await
            .expect("describe succeeds");

        let volume = output.volume_set.first().expect("one volume");
        assert_eq!(volume.size, Some(10));
        assert_eq!(
            volume
                .instance
                .as_ref()
                .and_then(|instance| instance.instance_id.as_deref()),
            Some("i-1")
        );
        let params = transport.last_params().expect("request recorded");
        assert_eq!(params.get("zone").map(String::as_str), Some("gd2"));
        assert_eq!(params.get("action").map(String::as_str), Some("DescribeVolumes"));
    }
}
