//! Instance actions.
//!
//! `RunInstances` carries most of the enumerated fields in the crate: CPU
//! and memory must match a purchasable shape, and `login_mode` selects
//! which credential field the provider reads.

use serde::{Deserialize, Serialize};

use crate::error::{QingCloudError, ValidationError};
use crate::request::{Client, Operation, Properties};
use crate::types::{Instance, InstanceType};
use crate::validate::{FLAG, Input, one_of, require, require_list};

const CPU_COUNTS: [i64; 5] = [1, 2, 4, 8, 16];
const CPU_MODELS: [&str; 5] = ["Westmere", "SandyBridge", "IvyBridge", "Haswell", "Broadwell"];
const LOGIN_MODES: [&str; 2] = ["keypair", "passwd"];
const MEMORY_SIZES: [i64; 9] = [1024, 2048, 4096, 6144, 8192, 12288, 16384, 24576, 32768];
const USERDATA_TYPES: [&str; 3] = ["plain", "exec", "tar"];

/// Instance actions scoped to one zone.
#[derive(Clone, Debug)]
pub struct InstanceService {
    client: Client,
    properties: Properties,
}

impl InstanceService {
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

    /// Lists purchasable instance types.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/instance/describe_instance_types.html>
    pub async fn describe_instance_types(
        &self,
        input: Option<DescribeInstanceTypesInput>,
    ) -> Result<DescribeInstanceTypesOutput, QingCloudError> {
        let operation = Operation::get("DescribeInstanceTypes", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }

    /// Lists instances.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/instance/describe_instances.html>
    pub async fn describe_instances(
        &self,
        input: Option<DescribeInstancesInput>,
    ) -> Result<DescribeInstancesOutput, QingCloudError> {
        let operation = Operation::get("DescribeInstances", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }

    /// Renames or re-describes an instance.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/instance/modify_instance_attributes.html>
    pub async fn modify_instance_attributes(
        &self,
        input: Option<ModifyInstanceAttributesInput>,
    ) -> Result<ModifyInstanceAttributesOutput, QingCloudError> {
        let operation = Operation::get("ModifyInstanceAttributes", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }

    /// Reinstalls the operating system of stopped instances.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/instance/reset_instances.html>
    pub async fn reset_instances(
        &self,
        input: Option<ResetInstancesInput>,
    ) -> Result<ResetInstancesOutput, QingCloudError> {
        let operation = Operation::get("ResetInstances", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }

    /// Changes the CPU and memory of stopped instances.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/instance/resize_instances.html>
    pub async fn resize_instances(
        &self,
        input: Option<ResizeInstancesInput>,
    ) -> Result<ResizeInstancesOutput, QingCloudError> {
        let operation = Operation::get("ResizeInstances", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }

    /// Reboots running instances.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/instance/restart_instances.html>
    pub async fn restart_instances(
        &self,
        input: Option<RestartInstancesInput>,
    ) -> Result<RestartInstancesOutput, QingCloudError> {
        let operation = Operation::get("RestartInstances", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }

    /// Creates instances from an image.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/instance/run_instances.html>
    ///
    /// # Errors
    ///
    /// Fails without I/O when `image_id` or `login_mode` is missing, or when
    /// `cpu`, `memory`, `cpu_model`, `userdata_type` or a flag field is out
    /// of range.
    pub async fn run_instances(
        &self,
        input: Option<RunInstancesInput>,
    ) -> Result<RunInstancesOutput, QingCloudError> {
        let operation = Operation::get("RunInstances", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }

    /// Boots stopped instances.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/instance/start_instances.html>
    pub async fn start_instances(
        &self,
        input: Option<StartInstancesInput>,
    ) -> Result<StartInstancesOutput, QingCloudError> {
        let operation = Operation::get("StartInstances", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }

    /// Shuts instances down, optionally forcing power-off.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/instance/stop_instances.html>
    pub async fn stop_instances(
        &self,
        input: Option<StopInstancesInput>,
    ) -> Result<StopInstancesOutput, QingCloudError> {
        let operation = Operation::get("StopInstances", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }

    /// Destroys instances.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/instance/terminate_instances.html>
    pub async fn terminate_instances(
        &self,
        input: Option<TerminateInstancesInput>,
    ) -> Result<TerminateInstancesOutput, QingCloudError> {
        let operation = Operation::get("TerminateInstances", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }
}

/// Parameters of `DescribeInstanceTypes`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct DescribeInstanceTypesInput {
    /// Type identifiers, e.g. `small_b`.
    pub instance_types: Vec<String>,
}

impl Input for DescribeInstanceTypesInput {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

output! {
    /// Result of `DescribeInstanceTypes`.
    DescribeInstanceTypesOutput {
        /// Matching types.
        instance_type_set: Vec<InstanceType>,
        /// Total matches.
        total_count: Option<i64>,
    }
}

/// Parameters of `DescribeInstances`. Every field is an optional filter.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct DescribeInstancesInput {
    /// Source images.
    pub image_id: Vec<String>,
    /// `0` for standard, `1` for high-performance instances.
    pub instance_class: Option<i64>,
    /// Instance types.
    pub instance_type: Vec<String>,
    /// Instance identifiers.
    pub instances: Vec<String>,
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
}

impl Input for DescribeInstancesInput {
    fn validate(&self) -> Result<(), ValidationError> {
        one_of(self.instance_class.as_ref(), "instance_class", &FLAG)?;
        one_of(self.verbose.as_ref(), "verbose", &FLAG)
    }
}

output! {
    /// Result of `DescribeInstances`.
    DescribeInstancesOutput {
        /// Matching instances.
        instance_set: Vec<Instance>,
        /// Total matches across pages.
        total_count: Option<i64>,
    }
}

/// Parameters of `ModifyInstanceAttributes`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct ModifyInstanceAttributesInput {
    /// New description.
    pub description: Option<String>,
    /// Instance to modify. Required.
    pub instance: Option<String>,
    /// New name.
    pub instance_name: Option<String>,
}

impl Input for ModifyInstanceAttributesInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require(self.instance.as_ref(), "instance", "ModifyInstanceAttributesInput")
    }
}

output! {
    /// Result of `ModifyInstanceAttributes`.
    ModifyInstanceAttributesOutput {}
}

/// Parameters of `ResetInstances`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct ResetInstancesInput {
    /// Instances to reset. Required.
    pub instances: Vec<String>,
    /// Key pair installed when `login_mode` is `keypair`.
    pub login_keypair: Option<String>,
    /// `keypair` or `passwd`.
    pub login_mode: Option<String>,
    /// Password set when `login_mode` is `passwd`.
    pub login_passwd: Option<String>,
    /// `1` to regenerate the Windows SID.
    pub need_newsid: Option<i64>,
}

impl Input for ResetInstancesInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require_list(&self.instances, "instances", "ResetInstancesInput")?;
        one_of(self.login_mode.as_ref(), "login_mode", &LOGIN_MODES)?;
        one_of(self.need_newsid.as_ref(), "need_newsid", &FLAG)
    }
}

output! {
    /// Result of `ResetInstances`.
    ResetInstancesOutput {
        /// Asynchronous job.
        job_id: Option<String>,
    }
}

/// Parameters of `ResizeInstances`. Either `instance_type` or the
/// `cpu`/`memory` pair selects the new shape.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct ResizeInstancesInput {
    /// Virtual CPUs.
    pub cpu: Option<i64>,
    /// Target type.
    pub instance_type: Option<String>,
    /// Instances to resize. Required.
    pub instances: Vec<String>,
    /// Memory in MB.
    pub memory: Option<i64>,
}

impl Input for ResizeInstancesInput {
    fn validate(&self) -> Result<(), ValidationError> {
        one_of(self.cpu.as_ref(), "cpu", &CPU_COUNTS)?;
        require_list(&self.instances, "instances", "ResizeInstancesInput")?;
        one_of(self.memory.as_ref(), "memory", &MEMORY_SIZES)
    }
}

output! {
    /// Result of `ResizeInstances`.
    ResizeInstancesOutput {
        /// Asynchronous job.
        job_id: Option<String>,
    }
}

/// Parameters of `RestartInstances`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct RestartInstancesInput {
    /// Instances to reboot. Required.
    pub instances: Vec<String>,
}

impl Input for RestartInstancesInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require_list(&self.instances, "instances", "RestartInstancesInput")
    }
}

output! {
    /// Result of `RestartInstances`.
    RestartInstancesOutput {
        /// Asynchronous job.
        job_id: Option<String>,
    }
}

/// Parameters of `RunInstances`.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct RunInstancesInput {
    /// Billing account to charge.
    pub billing_id: Option<String>,
    /// Number of instances. Defaults to 1.
    pub count: Option<i64>,
    /// Virtual CPUs.
    pub cpu: Option<i64>,
    /// Upper bound for hot CPU resize.
    pub cpu_max: Option<i64>,
    /// Host CPU generation.
    pub cpu_model: Option<String>,
    /// Number of GPUs.
    pub gpu: Option<i64>,
    /// Guest hostname.
    pub hostname: Option<String>,
    /// Source image. Required.
    pub image_id: Option<String>,
    /// `0` for standard, `1` for high-performance instances.
    pub instance_class: Option<i64>,
    /// Instance name.
    pub instance_name: Option<String>,
    /// Predefined type; overrides `cpu` and `memory`.
    pub instance_type: Option<String>,
    /// Key pair installed when `login_mode` is `keypair`.
    pub login_keypair: Option<String>,
    /// `keypair` or `passwd`. Required.
    pub login_mode: Option<String>,
    /// Password set when `login_mode` is `passwd`.
    pub login_passwd: Option<String>,
    /// Upper bound for hot memory resize.
    pub mem_max: Option<i64>,
    /// Memory in MB.
    pub memory: Option<i64>,
    /// `1` to regenerate the Windows SID.
    pub need_newsid: Option<i64>,
    /// `1` to inject user data.
    pub need_userdata: Option<i64>,
    /// Security group applied to the default network.
    pub security_group: Option<String>,
    /// Desktop type for Windows images.
    pub ui_type: Option<String>,
    /// Uploaded user data file, used with `tar`.
    pub userdata_file: Option<String>,
    /// Guest path user data is written to. Defaults to
    /// `/etc/qingcloud/userdata`.
    pub userdata_path: Option<String>,
    /// `plain`, `exec` or `tar`.
    pub userdata_type: Option<String>,
    /// Inline user data.
    pub userdata_value: Option<String>,
    /// Volumes attached at boot.
    pub volumes: Vec<String>,
    /// Networks joined at boot.
    pub vxnets: Vec<String>,
}

impl Default for RunInstancesInput {
    fn default() -> Self {
        Self {
            billing_id: None,
            count: Some(1),
            cpu: None,
            cpu_max: None,
            cpu_model: None,
            gpu: None,
            hostname: None,
            image_id: None,
            instance_class: None,
            instance_name: None,
            instance_type: None,
            login_keypair: None,
            login_mode: None,
            login_passwd: None,
            mem_max: None,
            memory: None,
            need_newsid: None,
            need_userdata: None,
            security_group: None,
            ui_type: None,
            userdata_file: None,
            userdata_path: Some(String::from("/etc/qingcloud/userdata")),
            userdata_type: None,
            userdata_value: None,
            volumes: Vec::new(),
            vxnets: Vec::new(),
        }
    }
}

impl Input for RunInstancesInput {
    fn validate(&self) -> Result<(), ValidationError> {
        one_of(self.cpu.as_ref(), "cpu", &CPU_COUNTS)?;
        one_of(self.cpu_model.as_ref(), "cpu_model", &CPU_MODELS)?;
        require(self.image_id.as_ref(), "image_id", "RunInstancesInput")?;
        one_of(self.instance_class.as_ref(), "instance_class", &FLAG)?;
        require(self.login_mode.as_ref(), "login_mode", "RunInstancesInput")?;
        one_of(self.login_mode.as_ref(), "login_mode", &LOGIN_MODES)?;
        one_of(self.memory.as_ref(), "memory", &MEMORY_SIZES)?;
        one_of(self.need_newsid.as_ref(), "need_newsid", &FLAG)?;
        one_of(self.need_userdata.as_ref(), "need_userdata", &FLAG)?;
        one_of(self.userdata_type.as_ref(), "userdata_type", &USERDATA_TYPES)
    }
}

output! {
    /// Result of `RunInstances`.
    RunInstancesOutput {
        /// Identifiers of the new instances.
        instances: Vec<String>,
        /// Asynchronous job.
        job_id: Option<String>,
    }
}

/// Parameters of `StartInstances`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct StartInstancesInput {
    /// Instances to boot. Required.
    pub instances: Vec<String>,
}

impl Input for StartInstancesInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require_list(&self.instances, "instances", "StartInstancesInput")
    }
}

output! {
    /// Result of `StartInstances`.
    StartInstancesOutput {
        /// Asynchronous job.
        job_id: Option<String>,
    }
}

/// Parameters of `StopInstances`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct StopInstancesInput {
    /// `1` to cut power instead of a graceful shutdown.
    pub force: Option<i64>,
    /// Instances to stop. Required.
    pub instances: Vec<String>,
}

impl Input for StopInstancesInput {
    fn validate(&self) -> Result<(), ValidationError> {
        one_of(self.force.as_ref(), "force", &FLAG)?;
        require_list(&self.instances, "instances", "StopInstancesInput")
    }
}

output! {
    /// Result of `StopInstances`.
    StopInstancesOutput {
        /// Asynchronous job.
        job_id: Option<String>,
    }
}

/// Parameters of `TerminateInstances`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct TerminateInstancesInput {
    /// Instances to destroy. Required.
    pub instances: Vec<String>,
}

impl Input for TerminateInstancesInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require_list(&self.instances, "instances", "TerminateInstancesInput")
    }
}

output! {
    /// Result of `TerminateInstances`.
    TerminateInstancesOutput {
        /// Asynchronous job.
        job_id: Option<String>,
    }
}
