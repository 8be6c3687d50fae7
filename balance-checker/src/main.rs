//! `balance-checker` CLI entry point.
//!
//! Intended to run from cron or a systemd timer: each run checks the balance
//! once, prints one line, and sends a Telegram reminder when the balance is
//! low and the notification window is open.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use balance_checker::checker::run_check;
use balance_checker::client::{AuthenticatedClient, BalanceClient};
use balance_checker::config::{load_config, resolve_config_path};
use balance_checker::reporter::{DryRunNotifier, Notifier, TelegramReporter};

/// Prepaid internet balance monitor with Telegram reminders.
#[derive(Parser)]
#[command(name = "balance-checker", version, about)]
struct Cli {
    /// Path to the TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Assess and print the balance without sending reminders.
    #[arg(long)]
    dry_run: bool,

    /// Also write JSON logs to this directory (daily rotation).
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _logging_guard = match cli.log_dir {
        Some(ref dir) => Some(battery_indicator::logging::init_production(
            dir,
            "balance-checker.log",
        )?),
        None => {
            battery_indicator::logging::init_cli("info");
            None
        }
    };

    let config_path = resolve_config_path(cli.config.as_deref())?;
    let config = load_config(&config_path)?;
    info!(config = %config_path.display(), "config loaded");

    let client = BalanceClient::new(&config.api).context("failed to build HTTP client")?;
    let source = AuthenticatedClient::new(client, config.account.clone());

    let notifier: Box<dyn Notifier> = if cli.dry_run {
        Box::new(DryRunNotifier)
    } else {
        let token = config.notify.resolve_bot_token().unwrap_or_default();
        Box::new(TelegramReporter::new(&token, config.notify.chats.clone()))
    };

    let now = chrono::Local::now().time();
    let outcome = run_check(&source, notifier.as_ref(), &config, now).await?;

    println!("{}", outcome.line);
    Ok(())
}
