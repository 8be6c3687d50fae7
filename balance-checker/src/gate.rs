//! Daily notification window.
//!
//! The gate is a pure predicate over a wall-clock reading. It keeps no state,
//! so repeated runs inside the window each return `true`; avoiding duplicate
//! sends is up to whoever schedules the checker.

use chrono::Timelike;

use crate::config::ConfigError;

/// Configured target time for reminders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotifyWindow {
    hour: u32,
    minute: u32,
}

impl NotifyWindow {
    /// Build a window starting at `hour:minute`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HourOutOfRange`] for `hour > 23` and
    /// [`ConfigError::MinuteOutOfRange`] for `minute > 59`.
    pub fn new(hour: u32, minute: u32) -> Result<Self, ConfigError> {
        if hour > 23 {
            return Err(ConfigError::HourOutOfRange(hour));
        }
        if minute > 59 {
            return Err(ConfigError::MinuteOutOfRange(minute));
        }
        Ok(Self { hour, minute })
    }

    /// Target hour (0-23).
    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// Target minute (0-59).
    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Whether `now` falls inside this window.
    pub fn is_open(&self, now: &impl Timelike) -> bool {
        should_notify(now, self.hour, self.minute)
    }
}

/// Whether a reminder may be sent at `now` for a `hour:minute` target.
///
/// True when the hour matches and
/// `target_minute <= now.minute < target_minute + 60`. Since minutes never
/// reach 60, the upper bound never bites: the effective window is
/// `[target_minute, 60)` of the target hour, not the sixty minutes after the
/// target. A 21:30 target therefore fires from 21:30 to 21:59 only.
// TODO: confirm whether reminders should span the full hour after the target
// (wrapping into the next hour); the truncated window is kept until then.
pub fn should_notify(now: &impl Timelike, target_hour: u32, target_minute: u32) -> bool {
    if now.hour() != target_hour {
        return false;
    }

    let minute = now.minute();
    minute >= target_minute && minute < target_minute.saturating_add(60)
}
