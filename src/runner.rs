// Net Inspect - Command Runner
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! Shell command execution for the capture pipeline.
//!
//! Runs the listing command through `sh -c`, captures its stdout, and
//! enforces a wall-clock timeout so a wedged subprocess cannot hang the
//! caller. Also hosts the required-tool check and the capture entry point
//! that ties running and decoding together.

use std::io::Read;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use chrono::Utc;
use tracing::{debug, warn};

use crate::decoder;
use crate::models::{Error, Result, Snapshot, REQUIRED_TOOLS};

/// Poll interval while waiting for the child to exit.
const WAIT_POLL: Duration = Duration::from_millis(25);

/// Shell command runner with a configurable timeout.
#[derive(Debug, Clone)]
pub struct CommandRunner {
    timeout: Duration,
}

impl CommandRunner {
    /// Create a runner that kills commands after `timeout`.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Run a command line through `sh -c` and return its captured stdout.
    ///
    /// A non-zero exit status is logged but the output is still returned;
    /// the listing pipeline reports its own failures on stderr. A child
    /// that outlives the timeout is killed and reported as
    /// [`Error::CommandTimeout`].
    pub fn run(&self, command_line: &str) -> Result<String> {
        debug!("Running: {}", command_line);

        let mut child = Command::new("sh")
            .arg("-c")
            .arg(command_line)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| Error::command_failed(command_line, e.to_string()))?;

        // Drain stdout on a helper thread so a full pipe cannot deadlock
        // the wait loop.
        let mut stdout = child
            .stdout
            .take()
            .ok_or_else(|| Error::command_failed(command_line, "stdout not captured"))?;
        let reader = std::thread::spawn(move || {
            let mut buffer = String::new();
            stdout.read_to_string(&mut buffer).map(|_| buffer)
        });

        let deadline = Instant::now() + self.timeout;
        let status = loop {
            match child.try_wait()? {
                Some(status) => break status,
                None if Instant::now() >= deadline => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(Error::CommandTimeout {
                        command: command_line.to_string(),
                        seconds: self.timeout.as_secs(),
                    });
                }
                None => std::thread::sleep(WAIT_POLL),
            }
        };

        let output = reader
            .join()
            .map_err(|_| Error::command_failed(command_line, "output reader panicked"))?
            .map_err(|e| Error::command_failed(command_line, e.to_string()))?;

        if !status.success() {
            warn!("Command exited with {}: {}", status, command_line);
        }

        Ok(output)
    }
}

/// Check if a command exists in PATH.
pub fn command_exists(cmd: &str) -> bool {
    Command::new("which")
        .arg(cmd)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Verify that every tool the default capture pipeline shells out to is
/// installed, reporting all missing ones at once.
pub fn check_required_tools() -> Result<()> {
    let missing: Vec<&str> = REQUIRED_TOOLS
        .iter()
        .copied()
        .filter(|tool| !command_exists(tool))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        for tool in &missing {
            warn!("command '{}' is not found in system", tool);
        }
        Err(Error::CommandNotFound(missing.join(", ")))
    }
}

/// Capture a fresh device snapshot: run the listing command, decode its
/// output, and stamp the result. Each call replaces the previous snapshot
/// wholesale; there is no incremental update.
pub fn capture(runner: &CommandRunner, command_line: &str) -> Result<Snapshot> {
    let output = runner.run(command_line)?;
    let mut snapshot = decoder::decode_devices(&output)?;
    snapshot.captured_at = Some(Utc::now());

    for warning in &snapshot.warnings {
        debug!("{}", warning);
    }
    if !snapshot.warnings.is_empty() {
        warn!(
            "Decoded {} devices with {} field warnings (run with --debug for details)",
            snapshot.devices.len(),
            snapshot.warnings.len()
        );
    }

    Ok(snapshot)
}
