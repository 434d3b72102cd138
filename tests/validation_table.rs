//! Required-field and enumeration checks across every resource family.
//!
//! Each case builds an input that is valid except for one field and asserts
//! the exact error, so regressions in field order or allowed sets surface
//! as message diffs.

use chrono::{DateTime, TimeDelta, Utc};
use qingcloud::Input;
use qingcloud::ValidationError;
use qingcloud::service::{eip, image, instance, monitor, nic, router, volume};
use qingcloud::types::{RouterStatic, RouterStaticEntry};
use rstest::rstest;

fn required(parameter: &str, parent: &str) -> ValidationError {
    ValidationError::ParameterRequired {
        parameter: parameter.to_owned(),
        parent: parent.to_owned(),
    }
}

fn ids(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}

fn text(value: &str) -> Option<String> {
    Some(value.to_owned())
}

fn window() -> (DateTime<Utc>, DateTime<Utc>) {
    let start = DateTime::from_timestamp(1_704_067_200, 0).expect("valid timestamp");
    (start, start + TimeDelta::hours(1))
}

fn monitor_window() -> monitor::GetMonitorInput {
    let (start, end) = window();
    monitor::GetMonitorInput {
        end_time: Some(end),
        meters: ids(&["cpu"]),
        resource: text("i-1"),
        start_time: Some(start),
        step: text("5m"),
    }
}

fn eip_monitor(step: &str) -> eip::GetEipMonitorInput {
    let (start, end) = window();
    eip::GetEipMonitorInput {
        eip: text("eip-1"),
        end_time: Some(end),
        meters: ids(&["traffic"]),
        start_time: Some(start),
        step: text(step),
    }
}

fn lb_monitor(step: &str, resource: Option<String>) -> monitor::GetLoadBalancerMonitorInput {
    let (start, end) = window();
    monitor::GetLoadBalancerMonitorInput {
        end_time: Some(end),
        meters: ids(&["traffic"]),
        resource,
        start_time: Some(start),
        step: text(step),
    }
}

#[rstest]
#[case::associate_eip(
    Box::new(eip::AssociateEipInput { eip: text("eip-1"), instance: None }),
    required("instance", "AssociateEipInput")
)]
#[case::release_eips(Box::new(eip::ReleaseEipsInput::default()), required("eips", "ReleaseEipsInput"))]
#[case::capture_instance(
    Box::new(image::CaptureInstanceInput::default()),
    required("instance", "CaptureInstanceInput")
)]
#[case::describe_image_users(
    Box::new(image::DescribeImageUsersInput::default()),
    required("image_id", "DescribeImageUsersInput")
)]
#[case::run_instances(
    Box::new(instance::RunInstancesInput::default()),
    required("image_id", "RunInstancesInput")
)]
#[case::terminate_instances(
    Box::new(instance::TerminateInstancesInput::default()),
    required("instances", "TerminateInstancesInput")
)]
#[case::get_monitor(
    Box::new(monitor::GetMonitorInput::default()),
    required("end_time", "GetMonitorInput")
)]
#[case::attach_nics(
    Box::new(nic::AttachNicsInput { instance: text("i-1"), nics: Vec::new() }),
    required("nics", "AttachNicsInput")
)]
#[case::join_router(
    Box::new(router::JoinRouterInput { ip_network: text("192.168.1.0/24"), ..router::JoinRouterInput::default() }),
    required("router", "JoinRouterInput")
)]
#[case::add_router_static_entries(
    Box::new(router::AddRouterStaticEntriesInput {
        entries: vec![RouterStaticEntry::default()],
        router_static: None,
    }),
    required("router_static", "AddRouterStaticEntriesInput")
)]
#[case::describe_router_statics(
    Box::new(router::DescribeRouterStaticsInput::default()),
    required("router", "DescribeRouterStaticsInput")
)]
#[case::create_volumes(
    Box::new(volume::CreateVolumesInput::default()),
    required("size", "CreateVolumesInput")
)]
#[case::resize_volumes(
    Box::new(volume::ResizeVolumesInput { size: Some(50), volumes: Vec::new() }),
    required("volumes", "ResizeVolumesInput")
)]
#[case::allocate_eips(
    Box::new(eip::AllocateEipsInput::default()),
    required("bandwidth", "AllocateEipsInput")
)]
#[case::associate_eip_target(
    Box::new(eip::AssociateEipInput::default()),
    required("eip", "AssociateEipInput")
)]
#[case::change_eips_bandwidth(
    Box::new(eip::ChangeEipsBandwidthInput::default()),
    required("bandwidth", "ChangeEipsBandwidthInput")
)]
#[case::change_eips_bandwidth_targets(
    Box::new(eip::ChangeEipsBandwidthInput { bandwidth: Some(5), ..eip::ChangeEipsBandwidthInput::default() }),
    required("eips", "ChangeEipsBandwidthInput")
)]
#[case::change_eips_billing_mode(
    Box::new(eip::ChangeEipsBillingModeInput::default()),
    required("billing_mode", "ChangeEipsBillingModeInput")
)]
#[case::change_eips_billing_mode_targets(
    Box::new(eip::ChangeEipsBillingModeInput { billing_mode: text("traffic"), ..eip::ChangeEipsBillingModeInput::default() }),
    required("eips", "ChangeEipsBillingModeInput")
)]
#[case::dissociate_eips(
    Box::new(eip::DissociateEipsInput::default()),
    required("eips", "DissociateEipsInput")
)]
#[case::get_eip_monitor(
    Box::new(eip::GetEipMonitorInput::default()),
    required("resource", "GetEipMonitorInput")
)]
#[case::modify_eip_attributes(
    Box::new(eip::ModifyEipAttributesInput::default()),
    required("eip", "ModifyEipAttributesInput")
)]
#[case::delete_images(
    Box::new(image::DeleteImagesInput::default()),
    required("images", "DeleteImagesInput")
)]
#[case::grant_image_to_users(
    Box::new(image::GrantImageToUsersInput::default()),
    required("image", "GrantImageToUsersInput")
)]
#[case::grant_image_to_users_targets(
    Box::new(image::GrantImageToUsersInput { image: text("img-1"), ..image::GrantImageToUsersInput::default() }),
    required("users", "GrantImageToUsersInput")
)]
#[case::modify_image_attributes(
    Box::new(image::ModifyImageAttributesInput::default()),
    required("image", "ModifyImageAttributesInput")
)]
#[case::revoke_image_from_users(
    Box::new(image::RevokeImageFromUsersInput::default()),
    required("image", "RevokeImageFromUsersInput")
)]
#[case::revoke_image_from_users_targets(
    Box::new(image::RevokeImageFromUsersInput { image: text("img-1"), ..image::RevokeImageFromUsersInput::default() }),
    required("users", "RevokeImageFromUsersInput")
)]
#[case::modify_instance_attributes(
    Box::new(instance::ModifyInstanceAttributesInput::default()),
    required("instance", "ModifyInstanceAttributesInput")
)]
#[case::reset_instances(
    Box::new(instance::ResetInstancesInput::default()),
    required("instances", "ResetInstancesInput")
)]
#[case::resize_instances(
    Box::new(instance::ResizeInstancesInput::default()),
    required("instances", "ResizeInstancesInput")
)]
#[case::restart_instances(
    Box::new(instance::RestartInstancesInput::default()),
    required("instances", "RestartInstancesInput")
)]
#[case::run_instances_login_mode(
    Box::new(instance::RunInstancesInput { image_id: text("centos7x64"), ..instance::RunInstancesInput::default() }),
    required("login_mode", "RunInstancesInput")
)]
#[case::start_instances(
    Box::new(instance::StartInstancesInput::default()),
    required("instances", "StartInstancesInput")
)]
#[case::stop_instances(
    Box::new(instance::StopInstancesInput::default()),
    required("instances", "StopInstancesInput")
)]
#[case::get_monitor_resource(
    Box::new(monitor::GetMonitorInput { resource: None, ..monitor_window() }),
    required("resource", "GetMonitorInput")
)]
#[case::get_load_balancer_monitor(
    Box::new(monitor::GetLoadBalancerMonitorInput::default()),
    required("end_time", "GetLoadBalancerMonitorInput")
)]
#[case::get_load_balancer_monitor_resource(
    Box::new(lb_monitor("5m", None)),
    required("resource", "GetLoadBalancerMonitorInput")
)]
#[case::get_rdb_monitor(
    Box::new(monitor::GetRDBMonitorInput::default()),
    required("end_time", "GetRDBMonitorInput")
)]
#[case::attach_nics_instance(
    Box::new(nic::AttachNicsInput::default()),
    required("instance", "AttachNicsInput")
)]
#[case::create_nics(
    Box::new(nic::CreateNicsInput::default()),
    required("vxnet", "CreateNicsInput")
)]
#[case::delete_nics(
    Box::new(nic::DeleteNicsInput::default()),
    required("nics", "DeleteNicsInput")
)]
#[case::detach_nics(
    Box::new(nic::DetachNicsInput::default()),
    required("nics", "DetachNicsInput")
)]
#[case::modify_nic_attributes(
    Box::new(nic::ModifyNicAttributesInput::default()),
    required("nic", "ModifyNicAttributesInput")
)]
#[case::add_router_static_entries_list(
    Box::new(router::AddRouterStaticEntriesInput::default()),
    required("entries", "AddRouterStaticEntriesInput")
)]
#[case::add_router_statics(
    Box::new(router::AddRouterStaticsInput::default()),
    required("router", "AddRouterStaticsInput")
)]
#[case::add_router_statics_list(
    Box::new(router::AddRouterStaticsInput { router: text("rtr-1"), ..router::AddRouterStaticsInput::default() }),
    required("statics", "AddRouterStaticsInput")
)]
#[case::delete_router_static_entries(
    Box::new(router::DeleteRouterStaticEntriesInput::default()),
    required("router_static_entries", "DeleteRouterStaticEntriesInput")
)]
#[case::delete_router_statics(
    Box::new(router::DeleteRouterStaticsInput::default()),
    required("router_statics", "DeleteRouterStaticsInput")
)]
#[case::delete_routers(
    Box::new(router::DeleteRoutersInput::default()),
    required("routers", "DeleteRoutersInput")
)]
#[case::describe_router_vxnets(
    Box::new(router::DescribeRouterVxnetsInput::default()),
    required("router", "DescribeRouterVxnetsInput")
)]
#[case::get_router_monitor(
    Box::new(router::GetRouterMonitorInput::default()),
    required("end_time", "GetRouterMonitorInput")
)]
#[case::join_router_network(
    Box::new(router::JoinRouterInput::default()),
    required("ip_network", "JoinRouterInput")
)]
#[case::join_router_vxnet(
    Box::new(router::JoinRouterInput { ip_network: text("192.168.1.0/24"), router: text("rtr-1"), ..router::JoinRouterInput::default() }),
    required("vxnet", "JoinRouterInput")
)]
#[case::leave_router(
    Box::new(router::LeaveRouterInput::default()),
    required("router", "LeaveRouterInput")
)]
#[case::leave_router_vxnets(
    Box::new(router::LeaveRouterInput { router: text("rtr-1"), ..router::LeaveRouterInput::default() }),
    required("vxnets", "LeaveRouterInput")
)]
#[case::modify_router_attributes(
    Box::new(router::ModifyRouterAttributesInput::default()),
    required("router", "ModifyRouterAttributesInput")
)]
#[case::modify_router_static_attributes(
    Box::new(router::ModifyRouterStaticAttributesInput::default()),
    required("router_static", "ModifyRouterStaticAttributesInput")
)]
#[case::modify_router_static_entry_attributes(
    Box::new(router::ModifyRouterStaticEntryAttributesInput::default()),
    required("router_static_entry", "ModifyRouterStaticEntryAttributesInput")
)]
#[case::power_off_routers(
    Box::new(router::PowerOffRoutersInput::default()),
    required("routers", "PowerOffRoutersInput")
)]
#[case::power_on_routers(
    Box::new(router::PowerOnRoutersInput::default()),
    required("routers", "PowerOnRoutersInput")
)]
#[case::update_routers(
    Box::new(router::UpdateRoutersInput::default()),
    required("routers", "UpdateRoutersInput")
)]
#[case::attach_volumes(
    Box::new(volume::AttachVolumesInput::default()),
    required("instance", "AttachVolumesInput")
)]
#[case::attach_volumes_list(
    Box::new(volume::AttachVolumesInput { instance: text("i-1"), ..volume::AttachVolumesInput::default() }),
    required("volumes", "AttachVolumesInput")
)]
#[case::delete_volumes(
    Box::new(volume::DeleteVolumesInput::default()),
    required("volumes", "DeleteVolumesInput")
)]
#[case::detach_volumes(
    Box::new(volume::DetachVolumesInput::default()),
    required("instance", "DetachVolumesInput")
)]
#[case::modify_volume_attributes(
    Box::new(volume::ModifyVolumeAttributesInput::default()),
    required("volume", "ModifyVolumeAttributesInput")
)]
#[case::resize_volumes_size(
    Box::new(volume::ResizeVolumesInput::default()),
    required("size", "ResizeVolumesInput")
)]
fn missing_required_fields_are_named(
    #[case] input: Box<dyn ErasedInput>,
    #[case] expected: ValidationError,
) {
    assert_eq!(input.check(), Err(expected));
}

#[rstest]
#[case::billing_mode(
    Box::new(eip::AllocateEipsInput { bandwidth: Some(2), billing_mode: text("monthly"), ..eip::AllocateEipsInput::default() }),
    "billing_mode",
    "monthly"
)]
#[case::need_icp(
    Box::new(eip::AllocateEipsInput { bandwidth: Some(2), need_icp: Some(3), ..eip::AllocateEipsInput::default() }),
    "need_icp",
    "3"
)]
#[case::image_visibility(
    Box::new(image::DescribeImagesInput { visibility: text("friends"), ..image::DescribeImagesInput::default() }),
    "visibility",
    "friends"
)]
#[case::resize_memory(
    Box::new(instance::ResizeInstancesInput { instances: ids(&["i-1"]), memory: Some(512), ..instance::ResizeInstancesInput::default() }),
    "memory",
    "512"
)]
#[case::reset_login_mode(
    Box::new(instance::ResetInstancesInput { instances: ids(&["i-1"]), login_mode: text("token"), ..instance::ResetInstancesInput::default() }),
    "login_mode",
    "token"
)]
#[case::stop_force(
    Box::new(instance::StopInstancesInput { force: Some(2), instances: ids(&["i-1"]) }),
    "force",
    "2"
)]
#[case::nic_status(
    Box::new(nic::DescribeNicsInput { status: text("gone"), ..nic::DescribeNicsInput::default() }),
    "status",
    "gone"
)]
#[case::router_type(
    Box::new(router::CreateRoutersInput { router_type: Some(4), ..router::CreateRoutersInput::default() }),
    "router_type",
    "4"
)]
#[case::nested_static_type(
    Box::new(router::AddRouterStaticsInput {
        router: text("rtr-1"),
        statics: vec![RouterStatic { static_type: Some(0), ..RouterStatic::default() }],
        vxnet: None,
    }),
    "static_type",
    "0"
)]
#[case::volume_type(
    Box::new(volume::DescribeVolumesInput { volume_type: Some(7), ..volume::DescribeVolumesInput::default() }),
    "volume_type",
    "7"
)]
#[case::change_billing_mode(
    Box::new(eip::ChangeEipsBillingModeInput { billing_mode: text("hourly"), eips: ids(&["eip-1"]), ..eip::ChangeEipsBillingModeInput::default() }),
    "billing_mode",
    "hourly"
)]
#[case::eip_verbose(
    Box::new(eip::DescribeEipsInput { verbose: Some(2), ..eip::DescribeEipsInput::default() }),
    "verbose",
    "2"
)]
#[case::eip_monitor_step(
    Box::new(eip_monitor("1h")),
    "step",
    "1h"
)]
#[case::image_processor_type(
    Box::new(image::DescribeImagesInput { processor_type: text("arm"), ..image::DescribeImagesInput::default() }),
    "processor_type",
    "arm"
)]
#[case::image_provider(
    Box::new(image::DescribeImagesInput { provider: text("vendor"), ..image::DescribeImagesInput::default() }),
    "provider",
    "vendor"
)]
#[case::instance_class(
    Box::new(instance::DescribeInstancesInput { instance_class: Some(5), ..instance::DescribeInstancesInput::default() }),
    "instance_class",
    "5"
)]
#[case::run_cpu(
    Box::new(instance::RunInstancesInput { cpu: Some(3), ..instance::RunInstancesInput::default() }),
    "cpu",
    "3"
)]
#[case::run_cpu_model(
    Box::new(instance::RunInstancesInput { cpu_model: text("Skylake"), ..instance::RunInstancesInput::default() }),
    "cpu_model",
    "Skylake"
)]
#[case::run_login_mode(
    Box::new(instance::RunInstancesInput { image_id: text("centos7x64"), login_mode: text("token"), ..instance::RunInstancesInput::default() }),
    "login_mode",
    "token"
)]
#[case::run_userdata_type(
    Box::new(instance::RunInstancesInput { image_id: text("centos7x64"), login_mode: text("passwd"), userdata_type: text("zip"), ..instance::RunInstancesInput::default() }),
    "userdata_type",
    "zip"
)]
#[case::reset_need_newsid(
    Box::new(instance::ResetInstancesInput { instances: ids(&["i-1"]), need_newsid: Some(9), ..instance::ResetInstancesInput::default() }),
    "need_newsid",
    "9"
)]
#[case::resize_cpu(
    Box::new(instance::ResizeInstancesInput { cpu: Some(32), ..instance::ResizeInstancesInput::default() }),
    "cpu",
    "32"
)]
#[case::monitor_step(
    Box::new(monitor::GetMonitorInput { step: text("1h"), ..monitor_window() }),
    "step",
    "1h"
)]
#[case::lb_monitor_step(
    Box::new(lb_monitor("30m", text("lb-1"))),
    "step",
    "30m"
)]
#[case::vpc_network(
    Box::new(router::CreateRoutersInput { vpc_network: text("10.0.0.0/8"), ..router::CreateRoutersInput::default() }),
    "vpc_network",
    "10.0.0.0/8"
)]
#[case::static_type_filter(
    Box::new(router::DescribeRouterStaticsInput { router: text("rtr-1"), static_type: Some(5), ..router::DescribeRouterStaticsInput::default() }),
    "static_type",
    "5"
)]
#[case::router_vxnets_verbose(
    Box::new(router::DescribeRouterVxnetsInput { router: text("rtr-1"), verbose: Some(3), ..router::DescribeRouterVxnetsInput::default() }),
    "verbose",
    "3"
)]
#[case::create_volume_type(
    Box::new(volume::CreateVolumesInput { size: Some(10), volume_type: Some(6), ..volume::CreateVolumesInput::default() }),
    "volume_type",
    "6"
)]
fn out_of_range_values_are_rejected(
    #[case] input: Box<dyn ErasedInput>,
    #[case] field: &str,
    #[case] offending: &str,
) {
    match input.check() {
        Err(ValidationError::ParameterValueNotAllowed {
            parameter,
            value,
            allowed,
        }) => {
            assert_eq!(parameter, field);
            assert_eq!(value, offending);
            assert!(!allowed.is_empty());
        }
        other => panic!("expected {field}={offending} to be rejected, got {other:?}"),
    }
}

#[rstest]
#[case::describe_eips(Box::new(eip::DescribeEipsInput::default()))]
#[case::describe_images(Box::new(image::DescribeImagesInput::default()))]
#[case::describe_instances(Box::new(instance::DescribeInstancesInput::default()))]
#[case::describe_nics(Box::new(nic::DescribeNicsInput::default()))]
#[case::describe_routers(Box::new(router::DescribeRoutersInput::default()))]
#[case::create_routers(Box::new(router::CreateRoutersInput::default()))]
#[case::describe_volumes(Box::new(volume::DescribeVolumesInput::default()))]
#[case::describe_instance_types(Box::new(instance::DescribeInstanceTypesInput::default()))]
#[case::describe_router_static_entries(Box::new(router::DescribeRouterStaticEntriesInput::default()))]
#[case::monitor_window(Box::new(monitor_window()))]
#[case::lb_monitor(Box::new(lb_monitor("2h", text("lb-1"))))]
#[case::eip_monitor(Box::new(eip_monitor("1d")))]
fn listing_defaults_are_valid(#[case] input: Box<dyn ErasedInput>) {
    assert_eq!(input.check(), Ok(()));
}

/// Object-safe view of [`Input`] so heterogeneous inputs share one table.
trait ErasedInput {
    fn check(&self) -> Result<(), ValidationError>;
}

impl<T: Input> ErasedInput for T {
    fn check(&self) -> Result<(), ValidationError> {
        self.validate()
    }
}
