//! Name-keyed dispatch over every facade action.
//!
//! The table pairs each action name with the facade method that executes
//! it, so tooling can drive the API from untyped JSON. EIP and router
//! metrics are registered under their facade method names
//! (`GetEipMonitor`, `GetRouterMonitor`) because they share the
//! `GetMonitor` wire action.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::QingCloudError;
use crate::service::{QingCloudService, eip, image, instance, monitor, nic, router, volume};

macro_rules! action_table {
    ($($api:literal => $facade:ident . $method:ident ($input:ty)),* $(,)?) => {
        /// Every action reachable through [`invoke`], grouped by facade.
        pub const ACTIONS: &[&str] = &[$($api),*];

        /// Runs `api_name` in `zone` with `input` decoded into the action's
        /// input type; `null` selects the input defaults.
        ///
        /// # Errors
        ///
        /// Returns [`QingCloudError::UnknownAction`] for names missing from
        /// [`ACTIONS`], [`QingCloudError::InvalidInput`] when `input` does
        /// not fit the action, and whatever the action itself returns.
        pub async fn invoke(
            service: &QingCloudService,
            zone: &str,
            api_name: &str,
            input: Value,
        ) -> Result<Value, QingCloudError> {
            match api_name {
                $($api => {
                    let parsed: $input = decode(input)?;
                    encode(&service.$facade(zone).$method(Some(parsed)).await?)
                })*
                other => Err(QingCloudError::UnknownAction(other.to_owned())),
            }
        }
    };
}

action_table! {
    "AllocateEips" => eip.allocate_eips(eip::AllocateEipsInput),
    "AssociateEip" => eip.associate_eip(eip::AssociateEipInput),
    "ChangeEipsBandwidth" => eip.change_eips_bandwidth(eip::ChangeEipsBandwidthInput),
    "ChangeEipsBillingMode" => eip.change_eips_billing_mode(eip::ChangeEipsBillingModeInput),
    "DescribeEips" => eip.describe_eips(eip::DescribeEipsInput),
    "DissociateEips" => eip.dissociate_eips(eip::DissociateEipsInput),
    "GetEipMonitor" => eip.get_eip_monitor(eip::GetEipMonitorInput),
    "ModifyEipAttributes" => eip.modify_eip_attributes(eip::ModifyEipAttributesInput),
    "ReleaseEips" => eip.release_eips(eip::ReleaseEipsInput),

    "CaptureInstance" => image.capture_instance(image::CaptureInstanceInput),
    "DeleteImages" => image.delete_images(image::DeleteImagesInput),
    "DescribeImageUsers" => image.describe_image_users(image::DescribeImageUsersInput),
    "DescribeImages" => image.describe_images(image::DescribeImagesInput),
    "GrantImageToUsers" => image.grant_image_to_users(image::GrantImageToUsersInput),
    "ModifyImageAttributes" => image.modify_image_attributes(image::ModifyImageAttributesInput),
    "RevokeImageFromUsers" => image.revoke_image_from_users(image::RevokeImageFromUsersInput),

    "DescribeInstanceTypes" => instance.describe_instance_types(instance::DescribeInstanceTypesInput),
    "DescribeInstances" => instance.describe_instances(instance::DescribeInstancesInput),
    "ModifyInstanceAttributes" => instance.modify_instance_attributes(instance::ModifyInstanceAttributesInput),
    "ResetInstances" => instance.reset_instances(instance::ResetInstancesInput),
    "ResizeInstances" => instance.resize_instances(instance::ResizeInstancesInput),
    "RestartInstances" => instance.restart_instances(instance::RestartInstancesInput),
    "RunInstances" => instance.run_instances(instance::RunInstancesInput),
    "StartInstances" => instance.start_instances(instance::StartInstancesInput),
    "StopInstances" => instance.stop_instances(instance::StopInstancesInput),
    "TerminateInstances" => instance.terminate_instances(instance::TerminateInstancesInput),

    "GetMonitor" => monitor.get_monitor(monitor::GetMonitorInput),
    "GetLoadBalancerMonitor" => monitor.get_load_balancer_monitor(monitor::GetLoadBalancerMonitorInput),
    "GetRDBMonitor" => monitor.get_rdb_monitor(monitor::GetRDBMonitorInput),

    "AttachNics" => nic.attach_nics(nic::AttachNicsInput),
    "CreateNics" => nic.create_nics(nic::CreateNicsInput),
    "DeleteNics" => nic.delete_nics(nic::DeleteNicsInput),
    "DescribeNics" => nic.describe_nics(nic::DescribeNicsInput),
    "DetachNics" => nic.detach_nics(nic::DetachNicsInput),
    "ModifyNicAttributes" => nic.modify_nic_attributes(nic::ModifyNicAttributesInput),

    "AddRouterStaticEntries" => router.add_router_static_entries(router::AddRouterStaticEntriesInput),
    "AddRouterStatics" => router.add_router_statics(router::AddRouterStaticsInput),
    "CreateRouters" => router.create_routers(router::CreateRoutersInput),
    "DeleteRouterStaticEntries" => router.delete_router_static_entries(router::DeleteRouterStaticEntriesInput),
    "DeleteRouterStatics" => router.delete_router_statics(router::DeleteRouterStaticsInput),
    "DeleteRouters" => router.delete_routers(router::DeleteRoutersInput),
    "DescribeRouterStaticEntries" => router.describe_router_static_entries(router::DescribeRouterStaticEntriesInput),
    "DescribeRouterStatics" => router.describe_router_statics(router::DescribeRouterStaticsInput),
    "DescribeRouterVxnets" => router.describe_router_vxnets(router::DescribeRouterVxnetsInput),
    "DescribeRouters" => router.describe_routers(router::DescribeRoutersInput),
    "GetRouterMonitor" => router.get_router_monitor(router::GetRouterMonitorInput),
    "JoinRouter" => router.join_router(router::JoinRouterInput),
    "LeaveRouter" => router.leave_router(router::LeaveRouterInput),
    "ModifyRouterAttributes" => router.modify_router_attributes(router::ModifyRouterAttributesInput),
    "ModifyRouterStaticAttributes" => router.modify_router_static_attributes(router::ModifyRouterStaticAttributesInput),
    "ModifyRouterStaticEntryAttributes" => router.modify_router_static_entry_attributes(router::ModifyRouterStaticEntryAttributesInput),
    "PowerOffRouters" => router.power_off_routers(router::PowerOffRoutersInput),
    "PowerOnRouters" => router.power_on_routers(router::PowerOnRoutersInput),
    "UpdateRouters" => router.update_routers(router::UpdateRoutersInput),

    "AttachVolumes" => volume.attach_volumes(volume::AttachVolumesInput),
    "CreateVolumes" => volume.create_volumes(volume::CreateVolumesInput),
    "DeleteVolumes" => volume.delete_volumes(volume::DeleteVolumesInput),
    "DescribeVolumes" => volume.describe_volumes(volume::DescribeVolumesInput),
    "DetachVolumes" => volume.detach_volumes(volume::DetachVolumesInput),
    "ModifyVolumeAttributes" => volume.modify_volume_attributes(volume::ModifyVolumeAttributesInput),
    "ResizeVolumes" => volume.resize_volumes(volume::ResizeVolumesInput),
}

fn decode<I: DeserializeOwned + Default>(input: Value) -> Result<I, QingCloudError> {
    if input.is_null() {
        return Ok(I::default());
    }
    serde_json::from_value(input).map_err(|err| QingCloudError::InvalidInput(err.to_string()))
}

fn encode<O: Serialize>(output: &O) -> Result<Value, QingCloudError> {
    serde_json::to_value(output).map_err(|err| QingCloudError::Decode(err.to_string()))
}
