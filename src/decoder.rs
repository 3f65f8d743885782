// Net Inspect - Device Record Decoder
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! JSON device-listing decoder.
//!
//! Decodes the output of `nmcli device show | jc --nmcli`: a JSON array of
//! flat objects, one per interface, where repeated values are spelled as
//! numbered keys (`ip4_address_1`, `ip4_address_2`, ...). Shape violations
//! of the root or of a whole record abort the decode; problems inside a
//! record only default the field and record a [`FieldWarning`].

use serde_json::{Map, Value};

use crate::models::{Device, Error, FieldProblem, FieldWarning, Result, Route, Snapshot};

/// Upper bound on numbered-key probing per group. Keeps hostile input from
/// turning the scan into an unbounded loop.
const MAX_GROUP_KEYS: usize = 64;

/// Decode a JSON device listing into a [`Snapshot`].
///
/// The snapshot carries every device from the listing in input order plus
/// the non-fatal field warnings collected along the way. The three fatal
/// shapes (bad JSON, non-array root, non-object record) return an [`Error`]
/// and no partial results.
pub fn decode_devices(text: &str) -> Result<Snapshot> {
    let root: Value = serde_json::from_str(text)?;
    let records = root.as_array().ok_or(Error::RootNotArray)?;

    let mut devices = Vec::with_capacity(records.len());
    let mut warnings = Vec::new();

    for (i, record) in records.iter().enumerate() {
        let record = record
            .as_object()
            .ok_or(Error::RecordNotObject { index: i + 1 })?;
        devices.push(decode_record(record, i + 1, &mut warnings));
    }

    Ok(Snapshot {
        captured_at: None,
        devices,
        warnings,
    })
}

/// Decode one record. Field problems are recorded, never fatal: an
/// interface that is down simply lacks most of the IP keys.
fn decode_record(
    record: &Map<String, Value>,
    index: usize,
    warnings: &mut Vec<FieldWarning>,
) -> Device {
    let mut fields = FieldReader {
        record,
        index,
        warnings,
    };

    Device {
        name: fields.string("device"),
        device_type: fields.string("type"),
        hardware_address: fields.string("hwaddr"),
        mtu: fields.integer("mtu"),
        state: fields.integer("state"),
        state_text: fields.string("state_text"),
        connection_name: fields.string("connection"),
        connection_path: fields.string("con_path"),
        ipv4_gateway: fields.string("ip4_gateway"),
        ipv6_gateway: fields.string("ip6_gateway"),
        ipv4_addresses: fields.string_group("ip4_address_"),
        ipv4_dns_servers: fields.string_group("ip4_dns_"),
        ipv4_routes: fields.route_group("ip4_route_"),
        ipv6_addresses: fields.string_group("ip6_address_"),
        ipv6_routes: fields.route_group("ip6_route_"),
    }
}

/// Uniform typed access to one record's fields.
///
/// Every read lands in exactly one of two outcomes: the typed value, or the
/// field default plus a recorded [`FieldWarning`]. All field access goes
/// through here so the tolerance rules live in one place.
struct FieldReader<'a> {
    record: &'a Map<String, Value>,
    index: usize,
    warnings: &'a mut Vec<FieldWarning>,
}

impl<'a> FieldReader<'a> {
    fn warn(&mut self, key: &str, problem: FieldProblem) {
        self.warnings.push(FieldWarning {
            record: self.index,
            key: key.to_string(),
            problem,
        });
    }

    /// Scalar string field: absent or mistyped reads as `None`.
    fn string(&mut self, key: &str) -> Option<String> {
        match self.record.get(key) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                self.warn(key, FieldProblem::WrongType);
                None
            }
            None => {
                self.warn(key, FieldProblem::Missing);
                None
            }
        }
    }

    /// Scalar integer field: absent or mistyped reads as 0.
    fn integer(&mut self, key: &str) -> i64 {
        match self.record.get(key) {
            Some(value) => match value.as_i64() {
                Some(n) => n,
                None => {
                    self.warn(key, FieldProblem::WrongType);
                    0
                }
            },
            None => {
                self.warn(key, FieldProblem::Missing);
                0
            }
        }
    }

    /// Numbered string group: probe `prefix1`, `prefix2`, ... ascending and
    /// stop at the first index that is absent or not a string. A gap ends
    /// the scan; later indices are never consulted. Absence is normal
    /// termination; a present non-string value also records a warning.
    fn string_group(&mut self, prefix: &str) -> Vec<String> {
        let mut values = Vec::new();
        for n in 1..=MAX_GROUP_KEYS {
            let key = format!("{}{}", prefix, n);
            match self.record.get(&key) {
                Some(Value::String(s)) => values.push(s.clone()),
                Some(_) => {
                    self.warn(&key, FieldProblem::WrongType);
                    return values;
                }
                None => return values,
            }
        }
        self.warn(prefix, FieldProblem::Truncated);
        values
    }

    /// Numbered route group: same probing rule, but each hit must be an
    /// object carrying `dst`/`nh`/`mt`, each sub-key tolerated individually.
    fn route_group(&mut self, prefix: &str) -> Vec<Route> {
        let mut routes = Vec::new();
        for n in 1..=MAX_GROUP_KEYS {
            let key = format!("{}{}", prefix, n);
            match self.record.get(&key) {
                Some(Value::Object(entry)) => {
                    let route = self.route(&key, entry);
                    routes.push(route);
                }
                Some(_) => {
                    self.warn(&key, FieldProblem::WrongType);
                    return routes;
                }
                None => return routes,
            }
        }
        self.warn(prefix, FieldProblem::Truncated);
        routes
    }

    fn route(&mut self, group_key: &str, entry: &'a Map<String, Value>) -> Route {
        Route {
            destination: self.sub_string(group_key, entry, "dst").unwrap_or_default(),
            next_hop: self.sub_string(group_key, entry, "nh").unwrap_or_default(),
            metric: self.sub_integer(group_key, entry, "mt"),
        }
    }

    fn sub_string(
        &mut self,
        group_key: &str,
        entry: &Map<String, Value>,
        key: &str,
    ) -> Option<String> {
        match entry.get(key) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                self.warn(&format!("{}.{}", group_key, key), FieldProblem::WrongType);
                None
            }
            None => {
                self.warn(&format!("{}.{}", group_key, key), FieldProblem::Missing);
                None
            }
        }
    }

    fn sub_integer(&mut self, group_key: &str, entry: &Map<String, Value>, key: &str) -> i64 {
        match entry.get(key) {
            Some(value) => match value.as_i64() {
                Some(n) => n,
                None => {
                    self.warn(&format!("{}.{}", group_key, key), FieldProblem::WrongType);
                    0
                }
            },
            None => {
                self.warn(&format!("{}.{}", group_key, key), FieldProblem::Missing);
                0
            }
        }
    }
}
