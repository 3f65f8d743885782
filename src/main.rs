// Net Inspect - Main Entry Point
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! # Net Inspect
//!
//! A command-line network interface inspector for Linux.
//!
//! Shells out to `nmcli device show | jc --nmcli`, decodes the JSON listing
//! into device records, and validates user-entered IPv4 address and subnet
//! mask strings.

use std::env;
use std::process::ExitCode;
use std::time::Duration;

mod decoder;
mod models;
mod runner;
mod storage;

use models::{
    validate_ipv4, validate_ipv4_mask, AppConfig, Device, Route, Snapshot, Verdict,
};
use runner::CommandRunner;
use storage::SettingsStore;

/// Human-readable application name.
pub const APP_NAME: &str = "Net Inspect";

/// Application version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Print version information and exit.
fn print_version() {
    println!("{} {}", APP_NAME, VERSION);
    println!("Copyright (C) 2026 Christos A. Daggas");
    println!("License: MIT");
    println!();
    println!("A command-line network interface inspector for Linux.");
}

/// Print help information and exit.
fn print_help() {
    println!(
        "Usage: {} [OPTIONS] [COMMAND]",
        env::args().next().unwrap_or_else(|| "netinspect".to_string())
    );
    println!();
    println!("Inspect network interfaces through nmcli and jc.");
    println!();
    println!("Commands:");
    println!("  list                  Show every known interface (default)");
    println!("  show <interface>      Show a single interface");
    println!("  check-ip <address>    Validate an IPv4 address literal");
    println!("  check-mask <mask>     Validate an IPv4 subnet mask");
    println!("  config                Print the current settings and their location");
    println!("  set-command <cmd>     Persist a custom listing command");
    println!("  set-timeout <secs>    Persist the listing command timeout");
    println!();
    println!("Options:");
    println!("  -h, --help            Show this help message and exit");
    println!("  -v, --version         Show version information and exit");
    println!("  -d, --debug           Enable debug logging");
    println!("  -j, --json            Emit JSON instead of human-readable output");
    println!("  -c, --command <cmd>   Use a custom listing command for this run");
    println!("  -t, --timeout <secs>  Kill the listing command after this many seconds");
    println!();
    println!("Environment variables:");
    println!("  RUST_LOG              Set log level (trace, debug, info, warn, error)");
    println!();
    println!("Report bugs to: https://github.com/christosdaggas/netinspect/issues");
}

fn main() -> ExitCode {
    let mut args = env::args().skip(1);
    let mut positional: Vec<String> = Vec::new();
    let mut debug_mode = false;
    let mut json_output = false;
    let mut command_override: Option<String> = None;
    let mut timeout_override: Option<u64> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                return ExitCode::SUCCESS;
            }
            "-v" | "--version" => {
                print_version();
                return ExitCode::SUCCESS;
            }
            "-d" | "--debug" => {
                debug_mode = true;
            }
            "-j" | "--json" => {
                json_output = true;
            }
            "-c" | "--command" => match args.next() {
                Some(value) => command_override = Some(value),
                None => return usage_error("Option '--command' requires a command line"),
            },
            "-t" | "--timeout" => match args.next().and_then(|v| v.parse().ok()) {
                Some(value) => timeout_override = Some(value),
                None => return usage_error("Option '--timeout' requires a number of seconds"),
            },
            _ => {
                if arg.starts_with('-') {
                    eprintln!("Unknown option: {}", arg);
                    eprintln!("Try '--help' for more information.");
                    return ExitCode::FAILURE;
                }
                positional.push(arg);
            }
        }
    }

    // Initialize logging with appropriate level
    let log_level = if debug_mode {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Starting {} v{}", APP_NAME, VERSION);

    let store = SettingsStore::new();
    let mut config = store.load();
    if let Some(command_line) = command_override {
        config.show_command = command_line;
    }
    if let Some(secs) = timeout_override {
        config.command_timeout_secs = secs;
    }

    let command = positional.first().map(String::as_str).unwrap_or("list");
    match command {
        "list" => cmd_list(&config, json_output),
        "show" => match positional.get(1) {
            Some(name) => cmd_show(&config, name, json_output),
            None => usage_error("Command 'show' requires an interface name"),
        },
        "check-ip" => match positional.get(1) {
            Some(input) => cmd_check(input, validate_ipv4),
            None => usage_error("Command 'check-ip' requires an address"),
        },
        "check-mask" => match positional.get(1) {
            Some(input) => cmd_check(input, validate_ipv4_mask),
            None => usage_error("Command 'check-mask' requires a mask"),
        },
        "config" => cmd_config(&store, &config),
        "set-command" => match positional.get(1) {
            Some(value) => {
                config.show_command = value.clone();
                save_settings(&store, &config)
            }
            None => usage_error("Command 'set-command' requires a command line"),
        },
        "set-timeout" => match positional.get(1).and_then(|v| v.parse().ok()) {
            Some(secs) => {
                config.command_timeout_secs = secs;
                save_settings(&store, &config)
            }
            None => usage_error("Command 'set-timeout' requires a number of seconds"),
        },
        unknown => {
            eprintln!("Unknown command: {}", unknown);
            eprintln!("Try '--help' for more information.");
            ExitCode::FAILURE
        }
    }
}

fn usage_error(message: &str) -> ExitCode {
    eprintln!("{}", message);
    eprintln!("Try '--help' for more information.");
    ExitCode::FAILURE
}

/// Run the configured listing command and decode a fresh snapshot.
///
/// The required-tool check only applies to the stock pipeline; a custom
/// command brings its own dependencies.
fn capture_snapshot(config: &AppConfig) -> models::Result<Snapshot> {
    if config.show_command == models::SHOW_COMMAND {
        runner::check_required_tools()?;
    }
    let cmd_runner = CommandRunner::new(Duration::from_secs(config.command_timeout_secs));
    runner::capture(&cmd_runner, &config.show_command)
}

fn cmd_list(config: &AppConfig, json_output: bool) -> ExitCode {
    let snapshot = match capture_snapshot(config) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if json_output {
        return print_json(&snapshot);
    }

    for (i, device) in snapshot.devices.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_device(device);
    }
    println!();
    println!(
        "{} device(s), {} connected",
        snapshot.devices.len(),
        snapshot.connected_count()
    );
    ExitCode::SUCCESS
}

fn cmd_show(config: &AppConfig, name: &str, json_output: bool) -> ExitCode {
    let snapshot = match capture_snapshot(config) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match snapshot.device_by_name(name) {
        Some(device) if json_output => print_json(device),
        Some(device) => {
            print_device(device);
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("No such device: {}", name);
            ExitCode::FAILURE
        }
    }
}

fn cmd_check(input: &str, validate: fn(&str) -> Verdict) -> ExitCode {
    let verdict = validate(input);
    if verdict.is_valid() {
        println!("{}: valid", input);
        ExitCode::SUCCESS
    } else {
        println!("{}: {}", input, verdict.message());
        ExitCode::FAILURE
    }
}

fn cmd_config(store: &SettingsStore, config: &AppConfig) -> ExitCode {
    println!("settings file:   {}", store.settings_path().display());
    println!("show command:    {}", config.show_command);
    println!("command timeout: {}s", config.command_timeout_secs);
    ExitCode::SUCCESS
}

fn save_settings(store: &SettingsStore, config: &AppConfig) -> ExitCode {
    match store.save(config) {
        Ok(()) => {
            println!("Settings saved to {}", store.settings_path().display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(text) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_device(device: &Device) {
    println!("{}", device.display_label());
    if let Some(hwaddr) = &device.hardware_address {
        println!("  hwaddr:       {}", hwaddr);
    }
    println!("  mtu:          {}", device.mtu);
    match &device.state_text {
        Some(text) => println!("  state:        {} ({})", device.state, text),
        None => println!("  state:        {}", device.state),
    }
    if let Some(connection) = &device.connection_name {
        println!("  connection:   {}", connection);
    }
    if let Some(path) = &device.connection_path {
        println!("  con path:     {}", path);
    }
    if let Some(gateway) = &device.ipv4_gateway {
        println!("  ip4 gateway:  {}", gateway);
    }
    for address in &device.ipv4_addresses {
        println!("  ip4 address:  {}", address);
    }
    for dns in &device.ipv4_dns_servers {
        println!("  ip4 dns:      {}", dns);
    }
    for route in &device.ipv4_routes {
        print_route("ip4 route:   ", route);
    }
    if let Some(gateway) = &device.ipv6_gateway {
        println!("  ip6 gateway:  {}", gateway);
    }
    for address in &device.ipv6_addresses {
        println!("  ip6 address:  {}", address);
    }
    for route in &device.ipv6_routes {
        print_route("ip6 route:   ", route);
    }
}

fn print_route(label: &str, route: &Route) {
    // nmcli reports directly connected routes with a zero next hop
    if route.next_hop.is_empty() || route.next_hop == "0.0.0.0" || route.next_hop == "::" {
        println!("  {} {} (metric {})", label, route.destination, route.metric);
    } else {
        println!(
            "  {} {} via {} (metric {})",
            label, route.destination, route.next_hop, route.metric
        );
    }
}
