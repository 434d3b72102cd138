//! Image actions.

use serde::{Deserialize, Serialize};

use crate::error::{QingCloudError, ValidationError};
use crate::request::{Client, Operation, Properties};
use crate::types::{Image, ImageUser};
use crate::validate::{FLAG, Input, one_of, require, require_list};

const PROCESSOR_TYPES: [&str; 2] = ["64bit", "32bit"];
const PROVIDERS: [&str; 2] = ["system", "self"];
const VISIBILITIES: [&str; 2] = ["public", "private"];

/// Image actions scoped to one zone.
#[derive(Clone, Debug)]
pub struct ImageService {
    client: Client,
    properties: Properties,
}

impl ImageService {
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

    /// Captures a stopped instance into a new image.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/image/capture_instance.html>
    ///
    /// # Errors
    ///
    /// Fails without I/O when `instance` is missing.
    pub async fn capture_instance(
        &self,
        input: Option<CaptureInstanceInput>,
    ) -> Result<CaptureInstanceOutput, QingCloudError> {
        let operation = Operation::get("CaptureInstance", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }

    /// Deletes private images.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/image/delete_images.html>
    pub async fn delete_images(
        &self,
        input: Option<DeleteImagesInput>,
    ) -> Result<DeleteImagesOutput, QingCloudError> {
        let operation = Operation::get("DeleteImages", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }

    /// Lists the users an image is shared with.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/image/describe_image_users.html>
    pub async fn describe_image_users(
        &self,
        input: Option<DescribeImageUsersInput>,
    ) -> Result<DescribeImageUsersOutput, QingCloudError> {
        let operation = Operation::get("DescribeImageUsers", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }

    /// Lists images.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/image/describe_images.html>
    ///
    /// # Errors
    ///
    /// Fails without I/O when `processor_type`, `provider`, `verbose` or
    /// `visibility` hold an unsupported value.
    pub async fn describe_images(
        &self,
        input: Option<DescribeImagesInput>,
    ) -> Result<DescribeImagesOutput, QingCloudError> {
        let operation = Operation::get("DescribeImages", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }

    /// Shares an image with other accounts.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/image/grant_image_to_users.html>
    pub async fn grant_image_to_users(
        &self,
        input: Option<GrantImageToUsersInput>,
    ) -> Result<GrantImageToUsersOutput, QingCloudError> {
        let operation = Operation::get("GrantImageToUsers", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }

    /// Renames or re-describes an image.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/image/modify_image_attributes.html>
    pub async fn modify_image_attributes(
        &self,
        input: Option<ModifyImageAttributesInput>,
    ) -> Result<ModifyImageAttributesOutput, QingCloudError> {
        let operation = Operation::get("ModifyImageAttributes", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }

    /// Stops sharing an image with other accounts.
    ///
    /// Documentation URL: <https://docs.qingcloud.com/api/image/revoke_image_from_users.html>
    pub async fn revoke_image_from_users(
        &self,
        input: Option<RevokeImageFromUsersInput>,
    ) -> Result<RevokeImageFromUsersOutput, QingCloudError> {
        let operation = Operation::get("RevokeImageFromUsers", &self.properties);
        self.client.send(&operation, &input.unwrap_or_default()).await
    }
}

/// Parameters of `CaptureInstance`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct CaptureInstanceInput {
    /// Name of the new image.
    pub image_name: Option<String>,
    /// Instance to capture. Required.
    pub instance: Option<String>,
}

impl Input for CaptureInstanceInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require(self.instance.as_ref(), "instance", "CaptureInstanceInput")
    }
}

output! {
    /// Result of `CaptureInstance`.
    CaptureInstanceOutput {
        /// Identifier of the image being created.
        image_id: Option<String>,
        /// Asynchronous job.
        job_id: Option<String>,
    }
}

/// Parameters of `DeleteImages`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct DeleteImagesInput {
    /// Images to delete. Required.
    pub images: Vec<String>,
}

impl Input for DeleteImagesInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require_list(&self.images, "images", "DeleteImagesInput")
    }
}

output! {
    /// Result of `DeleteImages`.
    DeleteImagesOutput {
        /// Asynchronous job.
        job_id: Option<String>,
    }
}

/// Parameters of `DescribeImageUsers`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct DescribeImageUsersInput {
    /// Image to inspect. Required.
    pub image_id: Option<String>,
    /// Page size.
    pub limit: Option<i64>,
    /// Page offset.
    pub offset: Option<i64>,
}

impl Input for DescribeImageUsersInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require(self.image_id.as_ref(), "image_id", "DescribeImageUsersInput")
    }
}

output! {
    /// Result of `DescribeImageUsers`.
    DescribeImageUsersOutput {
        /// Accounts the image is shared with.
        image_user_set: Vec<ImageUser>,
        /// Total matches across pages.
        total_count: Option<i64>,
    }
}

/// Parameters of `DescribeImages`. Every field is an optional filter.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct DescribeImagesInput {
    /// Image identifiers.
    pub images: Vec<String>,
    /// Page size.
    pub limit: Option<i64>,
    /// Page offset.
    pub offset: Option<i64>,
    /// Operating system family, e.g. `centos`.
    pub os_family: Option<String>,
    /// Owner account.
    pub owner: Option<String>,
    /// `64bit` or `32bit`.
    pub processor_type: Option<String>,
    /// `system` or `self`.
    pub provider: Option<String>,
    /// Substring of the name or identifier.
    pub search_word: Option<String>,
    /// Status filter.
    pub status: Vec<String>,
    /// `1` to include related resources.
    pub verbose: Option<i64>,
    /// `public` or `private`.
    pub visibility: Option<String>,
}

impl Input for DescribeImagesInput {
    fn validate(&self) -> Result<(), ValidationError> {
        one_of(self.processor_type.as_ref(), "processor_type", &PROCESSOR_TYPES)?;
        one_of(self.provider.as_ref(), "provider", &PROVIDERS)?;
        one_of(self.verbose.as_ref(), "verbose", &FLAG)?;
        one_of(self.visibility.as_ref(), "visibility", &VISIBILITIES)
    }
}

output! {
    /// Result of `DescribeImages`.
    DescribeImagesOutput {
        /// Matching images.
        image_set: Vec<Image>,
        /// Total matches across pages.
        total_count: Option<i64>,
    }
}

/// Parameters of `GrantImageToUsers`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct GrantImageToUsersInput {
    /// Image to share. Required.
    pub image: Option<String>,
    /// Accounts to share with. Required.
    pub users: Vec<String>,
}

impl Input for GrantImageToUsersInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require(self.image.as_ref(), "image", "GrantImageToUsersInput")?;
        require_list(&self.users, "users", "GrantImageToUsersInput")
    }
}

output! {
    /// Result of `GrantImageToUsers`.
    GrantImageToUsersOutput {}
}

/// Parameters of `ModifyImageAttributes`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct ModifyImageAttributesInput {
    /// New description.
    pub description: Option<String>,
    /// Image to modify. Required.
    pub image: Option<String>,
    /// New name.
    pub image_name: Option<String>,
}

impl Input for ModifyImageAttributesInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require(self.image.as_ref(), "image", "ModifyImageAttributesInput")
    }
}

output! {
    /// Result of `ModifyImageAttributes`.
    ModifyImageAttributesOutput {}
}

/// Parameters of `RevokeImageFromUsers`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct RevokeImageFromUsersInput {
    /// Image to stop sharing. Required.
    pub image: Option<String>,
    /// Accounts to revoke. Required.
    pub users: Vec<String>,
}

impl Input for RevokeImageFromUsersInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require(self.image.as_ref(), "image", "RevokeImageFromUsersInput")?;
        require_list(&self.users, "users", "RevokeImageFromUsersInput")
    }
}

output! {
    /// Result of `RevokeImageFromUsers`.
    RevokeImageFromUsersOutput {}
}
