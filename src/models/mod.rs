// Net Inspect - Shared Models
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! # Net Inspect Models
//!
//! Shared types and logic used by the capture pipeline and the CLI:
//!
//! - **Device**: decoded network interface records
//! - **Validation**: IPv4 address and subnet mask verdicts
//! - **Config**: persisted application settings
//! - **Error**: shared error types
//!
//! ## Design Principles
//!
//! 1. **Batch snapshots**: every capture rematerializes the full device set
//! 2. **Tolerant decoding**: per-field problems default the field, never abort
//! 3. **Verdicts, not errors**: validation outcomes are ordinary values
//! 4. **Serializable**: all records serialize to JSON for machine output

pub mod config;
pub mod device;
pub mod error;
pub mod validation;

// Re-export main types for convenience
pub use config::AppConfig;
pub use device::{Device, FieldProblem, FieldWarning, Route, Snapshot};
pub use error::{Error, Result};
pub use validation::{validate_ipv4, validate_ipv4_mask, Verdict};

/// Configuration directory name (under XDG_CONFIG_HOME).
pub const CONFIG_DIR_NAME: &str = "netinspect";

/// Default command line producing the JSON device listing.
pub const SHOW_COMMAND: &str = "nmcli device show | jc --nmcli";

/// External tools the default capture pipeline shells out to.
pub const REQUIRED_TOOLS: &[&str] = &["nmcli", "jc"];
