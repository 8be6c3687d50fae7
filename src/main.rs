//! `adb-battery` CLI entry point.
//!
//! Prints the battery state of the attached Android device either as
//! Xfce genmon markup (default) or as colored terminal text.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing::error;

use battery_indicator::battery::render::{render, render_error, OutputMode};
use battery_indicator::battery::{poll, AdbSource};
use battery_indicator::logging;

/// Battery status of an adb-tethered Android device.
#[derive(Parser)]
#[command(name = "adb-battery", version, about)]
struct Cli {
    /// Output format.
    #[arg(short = 'o', long = "output", value_enum, default_value_t = OutputMode::Genmon)]
    output: OutputMode,

    /// Path to the adb executable.
    #[arg(long, default_value = "adb")]
    adb: PathBuf,

    /// Seconds to wait for adb before giving up.
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // stdout belongs to the panel; keep diagnostics quiet on stderr.
    logging::init_cli("warn");

    let source = AdbSource::new(cli.adb, Duration::from_secs(cli.timeout_secs));

    match poll(&source).await {
        Ok((state, tier)) => {
            print!("{}", render(cli.output, &state, tier));
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "battery poll failed");
            print!("{}", render_error(cli.output, &e.to_string()));
            ExitCode::FAILURE
        }
    }
}
