//! Resource records shared by several actions.
//!
//! Response records tolerate missing fields: the API omits whatever the
//! caller did not ask for with `verbose`. [`RouterStatic`] doubles as a
//! nested input and validates its own rule kind.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;
use crate::validate::one_of;

/// Static types accepted when creating a router static.
pub(crate) const ROUTER_STATIC_TYPES: [i64; 7] = [1, 2, 3, 4, 6, 7, 8];

/// Second-precision UTC layout for every timestamp on the wire.
pub(crate) const WIRE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Serializes a monitoring window bound in [`WIRE_TIME_FORMAT`], dropping
/// any sub-second part.
#[expect(
    clippy::ref_option,
    reason = "serde's serialize_with hands the field over by reference"
)]
pub(crate) fn wire_time<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match value {
        Some(time) => serializer.collect_str(&time.format(WIRE_TIME_FORMAT)),
        None => serializer.serialize_none(),
    }
}

/// Key/value label attached to a resource.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Tag {
    /// Tag identifier.
    pub tag_id: Option<String>,
    /// Display name.
    pub tag_name: Option<String>,
    /// Display colour, e.g. `#9f9bb7`.
    pub color: Option<String>,
}

/// Elastic IP.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Eip {
    /// EIP identifier.
    pub eip_id: Option<String>,
    /// EIP name.
    pub eip_name: Option<String>,
    /// Public address.
    pub eip_addr: Option<String>,
    /// Bandwidth cap in Mbps.
    pub bandwidth: Option<i64>,
    /// `bandwidth` or `traffic`.
    pub billing_mode: Option<String>,
    /// ICP filing flag.
    pub need_icp: Option<i64>,
    /// `pending`, `available`, `associated`, `suspended`, `released`, `ceased`.
    pub status: Option<String>,
    /// Transition in progress, if any.
    pub transition_status: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// Resource the EIP is bound to.
    pub resource: Option<EipResource>,
    /// Owning EIP group.
    pub eip_group: Option<EipGroup>,
    /// Tags.
    pub tags: Vec<Tag>,
    /// Creation time.
    pub create_time: Option<DateTime<Utc>>,
    /// Last status change.
    pub status_time: Option<DateTime<Utc>>,
}

/// Resource an EIP is associated with.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct EipResource {
    /// Resource identifier.
    pub resource_id: Option<String>,
    /// Resource name.
    pub resource_name: Option<String>,
    /// Resource kind, e.g. `instance` or `router`.
    pub resource_type: Option<String>,
}

/// EIP group reference.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct EipGroup {
    /// Group identifier.
    pub eip_group_id: Option<String>,
    /// Group name.
    pub eip_group_name: Option<String>,
}

/// EIP as embedded in instance and router records.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct EipAddr {
    /// EIP identifier.
    pub eip_id: Option<String>,
    /// EIP name.
    pub eip_name: Option<String>,
    /// Public address.
    pub eip_addr: Option<String>,
    /// Bandwidth cap in Mbps.
    pub bandwidth: Option<i64>,
}

/// Machine image.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Image {
    /// Image identifier.
    pub image_id: Option<String>,
    /// Image name.
    pub image_name: Option<String>,
    /// Operating system family, e.g. `centos`.
    pub os_family: Option<String>,
    /// `linux` or `windows`.
    pub platform: Option<String>,
    /// `64bit` or `32bit`.
    pub processor_type: Option<String>,
    /// `system` or `self`.
    pub provider: Option<String>,
    /// `public` or `private`.
    pub visibility: Option<String>,
    /// Recommended instance type.
    pub recommended_type: Option<String>,
    /// Root volume size in GB.
    pub size: Option<i64>,
    /// `pending`, `available`, `deprecated`, `suspended`, `deleted`, `ceased`.
    pub status: Option<String>,
    /// Transition in progress, if any.
    pub transition_status: Option<String>,
    /// Instance the image was captured from.
    pub root_id: Option<String>,
    /// Owner account.
    pub owner: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// Tags.
    pub tags: Vec<Tag>,
    /// Creation time.
    pub create_time: Option<DateTime<Utc>>,
    /// Last status change.
    pub status_time: Option<DateTime<Utc>>,
}

/// Account an image has been shared with.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct ImageUser {
    /// Image identifier.
    pub image_id: Option<String>,
    /// Account identifier.
    pub user: Option<User>,
    /// When the image was shared.
    pub create_time: Option<DateTime<Utc>>,
}

/// Account reference.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct User {
    /// Account identifier.
    pub user_id: Option<String>,
    /// Account e-mail.
    pub email: Option<String>,
}

/// Virtual machine.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Instance {
    /// Instance identifier.
    pub instance_id: Option<String>,
    /// Instance name.
    pub instance_name: Option<String>,
    /// Instance type, e.g. `small_b`.
    pub instance_type: Option<String>,
    /// `0` performance, `1` high performance.
    pub instance_class: Option<i64>,
    /// Current vCPU count.
    pub vcpus_current: Option<i64>,
    /// Current memory in MB.
    pub memory_current: Option<i64>,
    /// `pending`, `running`, `stopped`, `suspended`, `terminated`, `ceased`.
    pub status: Option<String>,
    /// Transition in progress, if any.
    pub transition_status: Option<String>,
    /// Boot image.
    pub image: Option<InstanceImage>,
    /// Bound EIP.
    pub eip: Option<EipAddr>,
    /// Attached networks.
    pub vxnets: Vec<InstanceVxNet>,
    /// Attached volume identifiers.
    pub volume_ids: Vec<String>,
    /// Installed key pairs.
    pub keypair_ids: Vec<String>,
    /// Security group.
    pub security_group: Option<SecurityGroupRef>,
    /// Free-form description.
    pub description: Option<String>,
    /// Tags.
    pub tags: Vec<Tag>,
    /// Creation time.
    pub create_time: Option<DateTime<Utc>>,
    /// Last status change.
    pub status_time: Option<DateTime<Utc>>,
}

/// Image summary embedded in an instance.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct InstanceImage {
    /// Image identifier.
    pub image_id: Option<String>,
    /// Image name.
    pub image_name: Option<String>,
    /// Operating system family.
    pub os_family: Option<String>,
    /// `linux` or `windows`.
    pub platform: Option<String>,
    /// `64bit` or `32bit`.
    pub processor_type: Option<String>,
    /// `system` or `self`.
    pub provider: Option<String>,
}

/// Network attachment of an instance.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct InstanceVxNet {
    /// Network identifier.
    pub vxnet_id: Option<String>,
    /// Network name.
    pub vxnet_name: Option<String>,
    /// `0` unmanaged, `1` managed.
    pub vxnet_type: Option<i64>,
    /// NIC identifier (MAC address).
    pub nic_id: Option<String>,
    /// Private address.
    pub private_ip: Option<String>,
}

/// Security group reference.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct SecurityGroupRef {
    /// Security group identifier.
    pub security_group_id: Option<String>,
    /// Security group name.
    pub security_group_name: Option<String>,
    /// Whether this is the account's default group.
    pub is_default: Option<i64>,
}

/// Instance type offered in a zone.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct InstanceType {
    /// Type identifier, e.g. `small_b`.
    pub instance_type_id: Option<String>,
    /// Display name.
    pub instance_type_name: Option<String>,
    /// vCPU count.
    pub vcpus_current: Option<i64>,
    /// Memory in MB.
    pub memory_current: Option<i64>,
    /// `available` or `deprecated`.
    pub status: Option<String>,
    /// Zone offering the type.
    pub zone_id: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
}

/// Network interface.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Nic {
    /// NIC identifier (MAC address).
    pub nic_id: Option<String>,
    /// NIC name.
    pub nic_name: Option<String>,
    /// Instance the NIC is attached to.
    pub instance_id: Option<String>,
    /// Private address.
    pub private_ip: Option<String>,
    /// `0` secondary, `1` primary.
    pub role: Option<i64>,
    /// `available` or `in-use`.
    pub status: Option<String>,
    /// Network the NIC belongs to.
    pub vxnet_id: Option<String>,
    /// Owner account.
    pub owner: Option<String>,
    /// Creation time.
    pub create_time: Option<DateTime<Utc>>,
    /// Last status change.
    pub status_time: Option<DateTime<Utc>>,
}

/// Identifier and address of a freshly created NIC.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct NicIp {
    /// NIC identifier.
    pub nic_id: Option<String>,
    /// Private address.
    pub private_ip: Option<String>,
}

/// VPC router.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Router {
    /// Router identifier.
    pub router_id: Option<String>,
    /// Router name.
    pub router_name: Option<String>,
    /// `0` medium, `1` small, `2` large, `3` extra-large.
    pub router_type: Option<i64>,
    /// `pending`, `active`, `poweroffed`, `suspended`, `deleted`, `ceased`.
    pub status: Option<String>,
    /// Transition in progress, if any.
    pub transition_status: Option<String>,
    /// Private address on the management network.
    pub private_ip: Option<String>,
    /// VPC address range.
    pub vpc_network: Option<String>,
    /// Bound EIP.
    pub eip: Option<EipAddr>,
    /// Security group identifier.
    pub security_group_id: Option<String>,
    /// Start of the DHCP range.
    pub dyn_ip_start: Option<String>,
    /// End of the DHCP range.
    pub dyn_ip_end: Option<String>,
    /// Connected networks.
    pub vxnets: Vec<RouterVxNet>,
    /// Free-form description.
    pub description: Option<String>,
    /// Whether pending changes await `UpdateRouters`.
    pub is_applied: Option<i64>,
    /// Tags.
    pub tags: Vec<Tag>,
    /// Creation time.
    pub create_time: Option<DateTime<Utc>>,
    /// Last status change.
    pub status_time: Option<DateTime<Utc>>,
}

/// Router rule (port forwarding, VPN, DHCP option, tunnel, filter …).
///
/// Also sent as a nested input of `AddRouterStatics`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct RouterStatic {
    /// Owning router.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub router_id: Option<String>,
    /// Rule identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub router_static_id: Option<String>,
    /// Rule name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub router_static_name: Option<String>,
    /// Rule kind: `1` port forwarding, `2` VPN, `3` DHCP, `4` tunnel,
    /// `6` filter, `7` L3 GRE, `8` IPsec.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub static_type: Option<i64>,
    /// First rule value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub val1: Option<String>,
    /// Second rule value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub val2: Option<String>,
    /// Third rule value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub val3: Option<String>,
    /// Fourth rule value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub val4: Option<String>,
    /// Fifth rule value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub val5: Option<String>,
    /// Sixth rule value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub val6: Option<String>,
    /// Network the rule applies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vxnet_id: Option<String>,
    /// Creation time.
    #[serde(skip_serializing)]
    pub create_time: Option<DateTime<Utc>>,
}

impl RouterStatic {
    /// Checks the rule kind.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ParameterValueNotAllowed`] when
    /// `static_type` is not a creatable kind.
    pub fn validate(&self) -> Result<(), ValidationError> {
        one_of(self.static_type.as_ref(), "static_type", &ROUTER_STATIC_TYPES)
    }
}

/// Entry of a router rule, e.g. a VPN account or a PPTP user.
///
/// Also sent as a nested input of `AddRouterStaticEntries`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct RouterStaticEntry {
    /// Owning router.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub router_id: Option<String>,
    /// Entry identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub router_static_entry_id: Option<String>,
    /// Entry name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub router_static_entry_name: Option<String>,
    /// Owning rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub router_static_id: Option<String>,
    /// First entry value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub val1: Option<String>,
    /// Second entry value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub val2: Option<String>,
}

/// Network connected to a router.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct RouterVxNet {
    /// Router identifier.
    pub router_id: Option<String>,
    /// Network identifier.
    pub vxnet_id: Option<String>,
    /// Network name.
    pub vxnet_name: Option<String>,
    /// Network address range.
    pub ip_network: Option<String>,
    /// Router address on the network.
    pub manager_ip: Option<String>,
    /// Start of the DHCP range.
    pub dyn_ip_start: Option<String>,
    /// End of the DHCP range.
    pub dyn_ip_end: Option<String>,
    /// Feature bitmask (`1` enables DHCP).
    pub features: Option<i64>,
    /// When the network joined.
    pub create_time: Option<DateTime<Utc>>,
}

/// Block storage volume.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Volume {
    /// Volume identifier.
    pub volume_id: Option<String>,
    /// Volume name.
    pub volume_name: Option<String>,
    /// Storage class, see `CreateVolumes`.
    pub volume_type: Option<i64>,
    /// Size in GB.
    pub size: Option<i64>,
    /// `pending`, `available`, `in-use`, `suspended`, `deleted`, `ceased`.
    pub status: Option<String>,
    /// Transition in progress, if any.
    pub transition_status: Option<String>,
    /// Instance the volume is attached to.
    pub instance: Option<VolumeInstance>,
    /// Owner account.
    pub owner: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// Tags.
    pub tags: Vec<Tag>,
    /// Creation time.
    pub create_time: Option<DateTime<Utc>>,
    /// Last status change.
    pub status_time: Option<DateTime<Utc>>,
}

/// Attachment point of a volume.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct VolumeInstance {
    /// Instance identifier.
    pub instance_id: Option<String>,
    /// Instance name.
    pub instance_name: Option<String>,
    /// Device path inside the guest, e.g. `/dev/sdc`.
    pub device: Option<String>,
}

/// Aggregation window of monitor data.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MonitorStep {
    /// `5m`
    FiveMinutes,
    /// `15m`
    FifteenMinutes,
    /// `2h`
    TwoHours,
    /// `1d`
    OneDay,
}

impl MonitorStep {
    /// Wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FiveMinutes => "5m",
            Self::FifteenMinutes => "15m",
            Self::TwoHours => "2h",
            Self::OneDay => "1d",
        }
    }

    /// Distance between consecutive samples.
    #[must_use]
    pub fn interval(self) -> TimeDelta {
        match self {
            Self::FiveMinutes => TimeDelta::minutes(5),
            Self::FifteenMinutes => TimeDelta::minutes(15),
            Self::TwoHours => TimeDelta::hours(2),
            Self::OneDay => TimeDelta::days(1),
        }
    }
}

impl fmt::Display for MonitorStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MonitorStep {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "5m" => Ok(Self::FiveMinutes),
            "15m" => Ok(Self::FifteenMinutes),
            "2h" => Ok(Self::TwoHours),
            "1d" => Ok(Self::OneDay),
            other => Err(ValidationError::ParameterValueNotAllowed {
                parameter: String::from("step"),
                value: other.to_owned(),
                allowed: ["5m", "15m", "2h", "1d"].map(str::to_owned).to_vec(),
            }),
        }
    }
}

/// Monitor series for one meter of one resource.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct Meter {
    /// Meter name, e.g. `cpu`, `disk-os`, `if-52:54:9e:2a:4e:1a`.
    pub meter_id: Option<String>,
    /// Compressed samples, see [`Meter::samples`].
    pub data: Vec<Value>,
    /// Network of an interface meter.
    pub vxnet_id: Option<String>,
}

/// One decoded monitor point. `value` is `None` where the API reported `NA`.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    /// Point in time.
    pub time: DateTime<Utc>,
    /// Raw value (number, or `[in, out]` pair for interface meters).
    pub value: Option<Value>,
}

impl Meter {
    /// Expands the compressed series.
    ///
    /// The first point is `[unix_seconds, value]`. Each later point is either
    /// a bare value one `step` after its predecessor, `"NA"` for a missing
    /// sample, or a fresh `[unix_seconds, value]` pair after a gap.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ParameterValueNotAllowed`] when the first
    /// point carries no usable timestamp.
    pub fn samples(&self, step: MonitorStep) -> Result<Vec<Sample>, ValidationError> {
        let mut points = self.data.iter();
        let Some(first) = points.next() else {
            return Ok(Vec::new());
        };
        let Some((mut time, value)) = stamped(first, None) else {
            return Err(ValidationError::ParameterValueNotAllowed {
                parameter: String::from("data"),
                value: first.to_string(),
                allowed: vec![String::from("[timestamp, value]")],
            });
        };

        let mut samples = vec![Sample {
            time,
            value: present(value),
        }];
        for point in points {
            let next = time + step.interval();
            let (at, value) = stamped(point, Some(next)).unwrap_or((next, point));
            time = at;
            samples.push(Sample {
                time,
                value: present(value),
            });
        }
        Ok(samples)
    }
}

fn stamped(point: &Value, not_before: Option<DateTime<Utc>>) -> Option<(DateTime<Utc>, &Value)> {
    let Value::Array(pair) = point else {
        return None;
    };
    let [stamp, value] = pair.as_slice() else {
        return None;
    };
    let time = DateTime::from_timestamp(stamp.as_i64()?, 0)?;
    if not_before.is_some_and(|earliest| time < earliest) {
        return None;
    }
    Some((time, value))
}

fn present(value: &Value) -> Option<Value> {
    match value {
        Value::String(text) if text == "NA" => None,
        Value::Null => None,
        other => Some(other.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn at(seconds: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(seconds, 0).expect("valid timestamp")
    }

    #[test]
    fn samples_expand_bare_values_by_step() {
        let meter = Meter {
            meter_id: Some(String::from("cpu")),
            data: vec![json!([1_390_633_200, 10]), json!(20), json!("NA"), json!(40)],
            vxnet_id: None,
        };
        let samples = meter.samples(MonitorStep::FiveMinutes).expect("decodable");
        let times: Vec<_> = samples.iter().map(|sample| sample.time).collect();
        assert_eq!(
            times,
            vec![
                at(1_390_633_200),
                at(1_390_633_500),
                at(1_390_633_800),
                at(1_390_634_100)
            ]
        );
        assert_eq!(samples.get(2).map(|sample| sample.value.clone()), Some(None));
        assert_eq!(
            samples.get(3).and_then(|sample| sample.value.clone()),
            Some(json!(40))
        );
    }

    #[test]
    fn samples_resynchronise_after_gap() {
        let meter = Meter {
            meter_id: Some(String::from("disk-os")),
            data: vec![json!([1_390_633_200, 1]), json!([1_390_640_400, 2]), json!(3)],
            vxnet_id: None,
        };
        let samples = meter.samples(MonitorStep::TwoHours).expect("decodable");
        let times: Vec<_> = samples.iter().map(|sample| sample.time).collect();
        assert_eq!(
            times,
            vec![at(1_390_633_200), at(1_390_640_400), at(1_390_647_600)]
        );
    }

    #[test]
    fn interface_pairs_are_values_not_timestamps() {
        let meter = Meter {
            meter_id: Some(String::from("if-52:54:9e:2a:4e:1a")),
            data: vec![json!([1_390_633_200, [0, 0]]), json!([120, 80])],
            vxnet_id: Some(String::from("vxnet-0")),
        };
        let samples = meter.samples(MonitorStep::FiveMinutes).expect("decodable");
        assert_eq!(samples.len(), 2);
        assert_eq!(
            samples.get(1).and_then(|sample| sample.value.clone()),
            Some(json!([120, 80]))
        );
        assert_eq!(samples.get(1).map(|sample| sample.time), Some(at(1_390_633_500)));
    }

    #[test]
    fn unstamped_first_point_is_rejected() {
        let meter = Meter {
            meter_id: Some(String::from("cpu")),
            data: vec![json!(5)],
            vxnet_id: None,
        };
        assert!(meter.samples(MonitorStep::OneDay).is_err());
    }

    #[test]
    fn step_round_trips_through_text() {
        for step in [
            MonitorStep::FiveMinutes,
            MonitorStep::FifteenMinutes,
            MonitorStep::TwoHours,
            MonitorStep::OneDay,
        ] {
            assert_eq!(step.as_str().parse::<MonitorStep>(), Ok(step));
        }
        assert!("1h".parse::<MonitorStep>().is_err());
    }

    #[test]
    fn router_static_rejects_unknown_type() {
        let rule = RouterStatic {
            static_type: Some(5),
            ..RouterStatic::default()
        };
        assert!(rule.validate().is_err());
        let rule = RouterStatic {
            static_type: Some(1),
            ..RouterStatic::default()
        };
        assert!(rule.validate().is_ok());
    }

    #[test]
    fn instance_decodes_from_api_payload() {
        let instance: Instance = serde_json::from_value(json!({
            "instance_id": "i-12345678",
            "instance_type": "small_b",
            "status": "running",
            "vcpus_current": 1,
            "memory_current": 1024,
            "vxnets": [{"vxnet_id": "vxnet-0", "nic_id": "52:54:00:00:00:01", "private_ip": "10.0.0.2"}],
            "eip": {"eip_id": "eip-1", "eip_addr": "1.2.3.4", "bandwidth": 2},
            "create_time": "2013-08-30T05:13:25Z"
        }))
        .expect("payload decodes");
        assert_eq!(instance.instance_id.as_deref(), Some("i-12345678"));
        assert_eq!(instance.vxnets.len(), 1);
        assert_eq!(
            instance.eip.and_then(|eip| eip.eip_addr).as_deref(),
            Some("1.2.3.4")
        );
        assert_eq!(instance.create_time, Some(at(1_377_839_605)));
    }
}
