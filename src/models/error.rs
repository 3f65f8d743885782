// Net Inspect - Error Types
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! Shared error types for netinspect.
//!
//! Only fatal conditions live here: malformed listings, failed commands,
//! failed writes. Validation outcomes are [`Verdict`](super::Verdict)
//! values, returned rather than raised.

use thiserror::Error;

/// Result type alias for netinspect operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for netinspect operations.
#[derive(Debug, Error)]
pub enum Error {
    // ========================================
    // Decode Errors
    // ========================================
    #[error("Device listing is not valid JSON: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Device listing root is not an array")]
    RootNotArray,

    #[error("Device record {index} is not an object")]
    RecordNotObject { index: usize },

    // ========================================
    // Command Errors
    // ========================================
    #[error("Command failed: {command} - {reason}")]
    CommandFailed { command: String, reason: String },

    #[error("Command timed out after {seconds}s: {command}")]
    CommandTimeout { command: String, seconds: u64 },

    #[error("Required command(s) not found in system: {0}")]
    CommandNotFound(String),

    // ========================================
    // Storage Errors
    // ========================================
    #[error("Failed to write configuration: {0}")]
    ConfigWriteFailed(String),

    // ========================================
    // System Errors
    // ========================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new command failed error.
    pub fn command_failed(command: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::CommandFailed {
            command: command.into(),
            reason: reason.into(),
        }
    }
}

// Convert from serde_json errors, keeping the parser's position
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Syntax {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

// Convert from toml serialize errors
impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::ConfigWriteFailed(err.to_string())
    }
}
