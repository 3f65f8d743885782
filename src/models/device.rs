// Net Inspect - Device Models
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! Decoded network interface records.
//!
//! One [`Device`] is the state of one interface as reported by
//! `nmcli device show` after normalization through `jc`. The whole set is
//! rematerialized on every capture as a [`Snapshot`]; records never update
//! in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// NetworkManager state code for a fully activated device.
const STATE_ACTIVATED: i64 = 100;

/// One static or learned route entry attached to a device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// Route destination (CIDR or bare IP literal).
    pub destination: String,
    /// Next hop address; empty when the route is directly connected.
    #[serde(default)]
    pub next_hop: String,
    /// Route metric.
    #[serde(default)]
    pub metric: i64,
}

/// One network interface record.
///
/// String fields are `None` when the source listing omitted the key or
/// reported it with the wrong type; integer fields default to 0 in the same
/// situations. Sequence fields are always present, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    /// Interface name (e.g. "eth0", "enp3s0").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Device type as reported by NetworkManager (e.g. "ethernet", "wifi").
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub device_type: Option<String>,
    /// Hardware MAC address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardware_address: Option<String>,
    /// Interface MTU; 0 when the source did not report one.
    pub mtu: i64,
    /// NetworkManager numeric state code (100 = activated).
    pub state: i64,
    /// Human-readable state ("connected", "unavailable", ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_text: Option<String>,
    /// Active connection name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_name: Option<String>,
    /// D-Bus path of the active connection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_path: Option<String>,
    /// IPv4 default gateway.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv4_gateway: Option<String>,
    /// IPv6 default gateway.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv6_gateway: Option<String>,
    /// IPv4 addresses in discovery order.
    #[serde(default)]
    pub ipv4_addresses: Vec<String>,
    /// IPv4 DNS servers in discovery order.
    #[serde(default)]
    pub ipv4_dns_servers: Vec<String>,
    /// IPv4 routes in discovery order.
    #[serde(default)]
    pub ipv4_routes: Vec<Route>,
    /// IPv6 addresses in discovery order.
    #[serde(default)]
    pub ipv6_addresses: Vec<String>,
    /// IPv6 routes in discovery order.
    #[serde(default)]
    pub ipv6_routes: Vec<Route>,
}

impl Device {
    /// Whether NetworkManager reports the device as fully activated.
    pub fn is_connected(&self) -> bool {
        self.state == STATE_ACTIVATED
    }

    /// Display label for listings: name plus type when known.
    pub fn display_label(&self) -> String {
        let name = self.name.as_deref().unwrap_or("unknown");
        match &self.device_type {
            Some(device_type) => format!("{} ({})", name, device_type),
            None => name.to_string(),
        }
    }
}

/// Why a field fell back to its default during decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldProblem {
    /// Key absent from the record.
    Missing,
    /// Key present with an unexpected JSON type.
    WrongType,
    /// Numbered-key group still going when the probe bound was reached.
    Truncated,
}

/// Non-fatal diagnostic recorded while decoding a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldWarning {
    /// 1-based index of the record in the source array.
    pub record: usize,
    /// Offending key, or key prefix for a truncated numbered group.
    pub key: String,
    pub problem: FieldProblem,
}

impl fmt::Display for FieldWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.problem {
            FieldProblem::Missing => {
                write!(f, "record {}: '{}' is missing", self.record, self.key)
            }
            FieldProblem::WrongType => {
                write!(f, "record {}: '{}' has an unexpected type", self.record, self.key)
            }
            FieldProblem::Truncated => {
                write!(f, "record {}: '{}' list cut off at the probe bound", self.record, self.key)
            }
        }
    }
}

/// A full decode result: every device from one listing, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// When the snapshot was captured from a live command, if it was.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captured_at: Option<DateTime<Utc>>,
    /// Decoded devices, in the order the source reported them.
    pub devices: Vec<Device>,
    /// Non-fatal field diagnostics collected during decoding.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<FieldWarning>,
}

impl Snapshot {
    /// Number of devices NetworkManager reports as activated.
    pub fn connected_count(&self) -> usize {
        self.devices.iter().filter(|d| d.is_connected()).count()
    }

    /// Find a device by interface name.
    pub fn device_by_name(&self, name: &str) -> Option<&Device> {
        self.devices.iter().find(|d| d.name.as_deref() == Some(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_connected() {
        let device = Device {
            state: 100,
            ..Device::default()
        };
        assert!(device.is_connected());

        let down = Device {
            state: 20,
            ..Device::default()
        };
        assert!(!down.is_connected());
    }

    #[test]
    fn test_display_label() {
        let device = Device {
            name: Some("enp3s0".to_string()),
            device_type: Some("ethernet".to_string()),
            ..Device::default()
        };
        assert_eq!(device.display_label(), "enp3s0 (ethernet)");

        let anonymous = Device::default();
        assert_eq!(anonymous.display_label(), "unknown");
    }

    #[test]
    fn test_device_by_name() {
        let snapshot = Snapshot {
            captured_at: None,
            devices: vec![
                Device {
                    name: Some("lo".to_string()),
                    ..Device::default()
                },
                Device {
                    name: Some("wlan0".to_string()),
                    state: 100,
                    ..Device::default()
                },
            ],
            warnings: Vec::new(),
        };
        assert!(snapshot.device_by_name("wlan0").is_some());
        assert!(snapshot.device_by_name("eth9").is_none());
        assert_eq!(snapshot.connected_count(), 1);
    }
}
