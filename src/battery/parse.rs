//! Line-oriented parser for `dumpsys battery` output.

use tracing::debug;

const LEVEL_KEY: &str = "level:";
const AC_KEY: &str = "AC powered:";
const USB_KEY: &str = "USB powered:";
const STATUS_KEY: &str = "status:";

/// Charging status reported by the device's battery service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChargeStatus {
    /// Battery is being charged.
    Charging,
    /// Battery is draining.
    Discharging,
    /// Plugged in but not charging.
    NotCharging,
    /// Battery is full.
    Full,
    /// Status code absent, malformed, or not one of the known codes.
    #[default]
    Unknown,
}

impl ChargeStatus {
    /// Map a numeric battery status code onto a status.
    ///
    /// Unrecognised codes map to [`ChargeStatus::Unknown`], never to an error.
    pub fn from_code(code: i64) -> Self {
        match code {
            2 => Self::Charging,
            3 => Self::Discharging,
            4 => Self::NotCharging,
            5 => Self::Full,
            _ => Self::Unknown,
        }
    }

    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Charging => "Charging",
            Self::Discharging => "Discharging",
            Self::NotCharging => "Not charging",
            Self::Full => "Full",
            Self::Unknown => "Unknown",
        }
    }
}

/// Snapshot of the battery fields parsed from one dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeviceState {
    /// Charge level in percent. Expected in `0..=100` but not enforced.
    pub level: i64,
    /// Charging status.
    pub status: ChargeStatus,
    /// Whether a mains charger is connected.
    pub ac_powered: bool,
    /// Whether USB power is connected.
    pub usb_powered: bool,
}

impl DeviceState {
    /// Returns `true` when the device reports charging or any power source.
    pub fn is_charging(&self) -> bool {
        self.status == ChargeStatus::Charging || self.ac_powered || self.usb_powered
    }
}

/// Errors produced while parsing battery diagnostic text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The `level:` value is present but not a base-10 integer.
    #[error("invalid battery level: {token:?}")]
    InvalidLevel {
        /// The offending token.
        token: String,
    },
}

/// Parse the text output of `dumpsys battery` into a [`DeviceState`].
///
/// Each line is trimmed and checked for one of the keys `level:`,
/// `AC powered:`, `USB powered:`, `status:` (first match wins per line).
/// The line is split on whitespace and the value is the token right after
/// as many tokens as the key has words: the second token for `level:` and
/// `status:`, the third for `AC powered:` and `USB powered:`. Line order does
/// not matter and a repeated key keeps its last value. A key line without
/// that token (including `level:47`) is skipped.
///
/// Strictness is deliberately asymmetric:
/// - `level` is essential, so a non-integer level fails the whole parse.
/// - `status` is advisory, so a non-integer code leaves it [`ChargeStatus::Unknown`].
/// - Power flags are `true` only for the exact token `"true"`.
///
/// Input without any recognised key yields [`DeviceState::default`].
///
/// # Errors
///
/// Returns [`ParseError::InvalidLevel`] when the level token is not an integer.
pub fn parse_battery_dump(output: &str) -> Result<DeviceState, ParseError> {
    let mut state = DeviceState::default();

    for line in output.lines().map(str::trim) {
        if line.contains(LEVEL_KEY) {
            if let Some(token) = value_token(line, LEVEL_KEY) {
                state.level = token.parse().map_err(|_| ParseError::InvalidLevel {
                    token: token.to_owned(),
                })?;
            }
        } else if line.contains(AC_KEY) {
            if let Some(token) = value_token(line, AC_KEY) {
                state.ac_powered = token == "true";
            }
        } else if line.contains(USB_KEY) {
            if let Some(token) = value_token(line, USB_KEY) {
                state.usb_powered = token == "true";
            }
        } else if line.contains(STATUS_KEY) {
            match value_token(line, STATUS_KEY).map(str::parse::<i64>) {
                Some(Ok(code)) => state.status = ChargeStatus::from_code(code),
                Some(Err(_)) => debug!(line, "ignoring malformed battery status"),
                None => {}
            }
        }
    }

    Ok(state)
}

/// Whitespace token of `line` following the words of `key`, if any.
fn value_token<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    line.split_whitespace().nth(key.split_whitespace().count())
}
