//! awhapticctl - vibrator control CLI
//!
//! Drives a register-based vibrator through its sysfs control nodes, or
//! through an in-memory register file with `--dry-run`.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod error;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use awhaptic_effects::{Effect, Strength};
use awhaptic_registers::{MemoryRegisterPort, RegisterConfig, SysfsRegisterPort};
use awhaptic_vibrator::{ExtendedOperation, Vibrator, VibratorConfig};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "awhapticctl")]
#[command(about = "Control and diagnose a register-driven vibrator")]
#[command(version)]
#[command(long_about = "
awhapticctl plays haptic effects, runs timed vibration and adjusts amplitude
on a vibrator whose driver exposes one control file per register.

Use --dry-run to program an in-memory register file instead of hardware and
print the writes that would have been issued. Use --json for machine-readable
output.
")]
struct Cli {
    /// Directory holding the driver's control nodes
    #[arg(long, global = true, env = "AWHAPTIC_SYSFS_ROOT")]
    root: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Program in-memory registers instead of hardware
    #[arg(long, global = true)]
    dry_run: bool,

    /// Output in JSON format for machine parsing
    #[arg(long, global = true)]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the advertised capability bits
    Capabilities,

    /// List supported effects and strengths
    Effects,

    /// Vibrate continuously for a number of milliseconds
    On {
        /// Duration in milliseconds
        timeout_ms: u32,

        /// Block until the completion fires
        #[arg(short, long)]
        wait: bool,
    },

    /// Stop vibrating
    Off,

    /// Play an effect
    Perform {
        /// Effect name, e.g. click or double_click
        effect: Effect,

        /// Effect strength
        #[arg(short, long, default_value = "medium")]
        strength: Strength,

        /// Block until the completion fires
        #[arg(short, long)]
        wait: bool,
    },

    /// Set output amplitude in (0, 1]
    Amplitude {
        /// Amplitude
        #[arg(allow_negative_numbers = true)]
        value: f32,
    },

    /// Report which control nodes exist and the current gain
    Status,

    /// Invoke an extended operation (none are supported)
    Extended {
        /// Operation name, e.g. compose or always_on_enable
        operation: ExtendedOperation,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "awhapticctl={log_level},awhaptic_vibrator={log_level},awhaptic_registers={log_level}"
                )
                .into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                output::print_error_json(&e);
            } else {
                output::print_error_human(&e);
            }
            error::exit_code(&e)
        }
    }
}

/// Resolve the vibrator configuration: file first, then the root override.
fn load_config(cli: &Cli) -> Result<VibratorConfig> {
    let mut config = match &cli.config {
        Some(path) => VibratorConfig::from_json_file(path)?,
        None => VibratorConfig::default(),
    };
    if let Some(root) = &cli.root {
        config.registers = RegisterConfig::new(root);
    }
    config.validate()?;
    Ok(config)
}

fn execute(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    debug!(
        root = %config.registers.root().display(),
        dry_run = cli.dry_run,
        "configuration loaded"
    );

    if cli.dry_run {
        let port = MemoryRegisterPort::with_all_nodes();
        let vibrator = Vibrator::with_config(port.clone(), config)?;
        let outcome = commands::run(&vibrator, &cli.command)?;
        output::print_outcome(&outcome, cli.json, Some(&port.writes()));
    } else {
        let port = SysfsRegisterPort::new(config.registers.clone())?;
        let vibrator = Vibrator::with_config(port, config)?;
        let outcome = commands::run(&vibrator, &cli.command)?;
        output::print_outcome(&outcome, cli.json, None);
    }
    Ok(())
}
