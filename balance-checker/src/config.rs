//! Configuration loading for the balance checker.
//!
//! Loads a TOML file and validates it before anything else runs, so a bad
//! daily cost or notification time fails at startup instead of inside the
//! days-left arithmetic. Optional sections use `#[serde(default)]`.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::alert::BalancePolicy;
use crate::gate::NotifyWindow;
use crate::urgency::check_daily_cost;

/// Invalid configuration values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Daily cost must be a positive, finite amount.
    #[error("daily_cost must be positive, got {0}")]
    NonPositiveDailyCost(f64),
    /// Notification hour outside 0-23.
    #[error("notify.time.hour must be within 0-23, got {0}")]
    HourOutOfRange(u32),
    /// Notification minute outside 0-59.
    #[error("notify.time.minute must be within 0-59, got {0}")]
    MinuteOutOfRange(u32),
    /// Chats are configured but no bot token is available.
    #[error("notify.chats is set but neither notify.bot_token nor ${0} provides a bot token")]
    MissingBotToken(String),
}

/// Top-level balance checker configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Cost of one day of service, in currency units.
    pub daily_cost: f64,

    /// Personal account credentials.
    pub account: AccountConfig,

    /// Stdout line templates.
    #[serde(default)]
    pub templates: TemplatesConfig,

    /// Telegram reminder settings.
    #[serde(default)]
    pub notify: NotifyConfig,

    /// Provider API settings.
    #[serde(default)]
    pub api: ApiConfig,
}

/// Personal account credentials.
#[derive(Clone, Deserialize)]
pub struct AccountConfig {
    /// Account login.
    pub login: String,
    /// Account password.
    pub password: String,
}

impl std::fmt::Debug for AccountConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountConfig")
            .field("login", &self.login)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Templates for the line printed on every run.
///
/// `{balance}` is replaced with the balance formatted to two decimals.
#[derive(Debug, Clone, Deserialize)]
pub struct TemplatesConfig {
    /// Used when the balance is healthy.
    #[serde(default = "default_high_balance")]
    pub high_balance: String,

    /// Used when the balance needs a top-up soon.
    #[serde(default = "default_low_balance")]
    pub low_balance: String,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            high_balance: default_high_balance(),
            low_balance: default_low_balance(),
        }
    }
}

/// Telegram reminder settings.
#[derive(Debug, Clone, Deserialize)]
pub struct NotifyConfig {
    /// Bot token given inline. Takes precedence over `bot_token_env`.
    #[serde(default)]
    pub bot_token: Option<String>,

    /// Environment variable name holding the bot token.
    #[serde(default = "default_bot_token_env")]
    pub bot_token_env: String,

    /// Chat IDs that receive reminders.
    #[serde(default)]
    pub chats: Vec<i64>,

    /// Daily reminder time (local time).
    #[serde(default)]
    pub time: NotifyTimeConfig,
}

impl NotifyConfig {
    /// Resolve the bot token from the inline value or the environment.
    pub fn resolve_bot_token(&self) -> Option<String> {
        self.bot_token
            .clone()
            .or_else(|| std::env::var(&self.bot_token_env).ok())
            .filter(|token| !token.trim().is_empty())
    }
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            bot_token: None,
            bot_token_env: default_bot_token_env(),
            chats: Vec::new(),
            time: NotifyTimeConfig::default(),
        }
    }
}

/// Reminder time of day.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct NotifyTimeConfig {
    /// Hour (0-23).
    #[serde(default = "default_notify_hour")]
    pub hour: u32,

    /// Minute (0-59).
    #[serde(default)]
    pub minute: u32,
}

impl Default for NotifyTimeConfig {
    fn default() -> Self {
        Self {
            hour: default_notify_hour(),
            minute: 0,
        }
    }
}

/// Provider API settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the personal account API, without trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Check every value the core relies on.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.policy()?;
        if !self.notify.chats.is_empty() && self.notify.resolve_bot_token().is_none() {
            return Err(ConfigError::MissingBotToken(self.notify.bot_token_env.clone()));
        }
        Ok(())
    }

    /// The validated subset of the configuration used for assessment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for a non-positive daily cost or an
    /// out-of-range notification time.
    pub fn policy(&self) -> Result<BalancePolicy, ConfigError> {
        Ok(BalancePolicy {
            daily_cost: check_daily_cost(self.daily_cost)?,
            window: NotifyWindow::new(self.notify.time.hour, self.notify.time.minute)?,
        })
    }
}

// Default value functions for serde

fn default_high_balance() -> String {
    "Balance: {balance}".to_owned()
}
fn default_low_balance() -> String {
    "Low balance: {balance}".to_owned()
}
fn default_bot_token_env() -> String {
    "BALANCE_CHECKER_BOT_TOKEN".to_owned()
}
fn default_notify_hour() -> u32 {
    10
}
fn default_base_url() -> String {
    "https://yarurf.ru/api/lk".to_owned()
}
fn default_timeout_secs() -> u64 {
    10
}

/// Parse and validate a configuration from TOML text.
///
/// # Errors
///
/// Returns an error if the text is not valid TOML for [`Config`] or a value
/// fails validation.
pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents).context("failed to parse config")?;
    config.validate().context("invalid config")?;
    Ok(config)
}

/// Load and validate the configuration at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or validated.
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config at {}", path.display()))?;
    parse_config(&contents).with_context(|| format!("config at {}", path.display()))
}

/// Resolve the default config directory (`~/.balance-checker/`).
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn config_dir() -> anyhow::Result<PathBuf> {
    let home = directories::BaseDirs::new()
        .ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?;
    Ok(home.home_dir().join(".balance-checker"))
}

/// Pick the config file: an explicit path, else `./config.toml` when it
/// exists, else `~/.balance-checker/config.toml`.
///
/// # Errors
///
/// Returns an error if no explicit path is given, `./config.toml` is absent,
/// and the home directory cannot be determined.
pub fn resolve_config_path(explicit: Option<&Path>) -> anyhow::Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    let local = PathBuf::from("config.toml");
    if local.exists() {
        return Ok(local);
    }
    Ok(config_dir()?.join("config.toml"))
}
