//! Days-left estimation and urgency classification.

use crate::config::ConfigError;

/// Largest `days_left` still classified as [`UrgencyTier::Urgent`].
pub const URGENT_MAX_DAYS: i64 = 1;

/// Largest `days_left` still classified as [`UrgencyTier::Warning`].
pub const WARNING_MAX_DAYS: i64 = 3;

/// How soon the balance needs a top-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UrgencyTier {
    /// More than [`WARNING_MAX_DAYS`] days left.
    Healthy,
    /// Two or three days left.
    Warning,
    /// At most [`URGENT_MAX_DAYS`] day left.
    Urgent,
}

impl UrgencyTier {
    /// Classify a whole number of remaining days.
    pub fn from_days_left(days_left: i64) -> Self {
        if days_left <= URGENT_MAX_DAYS {
            Self::Urgent
        } else if days_left <= WARNING_MAX_DAYS {
            Self::Warning
        } else {
            Self::Healthy
        }
    }

    /// Badge prefixed to alert messages.
    pub fn badge(self) -> &'static str {
        match self {
            Self::Urgent => "\u{1f534} URGENT",
            Self::Warning => "\u{1f7e0} URGENT",
            Self::Healthy => "\u{1f7e1} NOTICE",
        }
    }
}

/// Result of classifying a balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Forecast {
    /// Whole days the balance covers, truncated toward zero.
    pub days_left: i64,
    /// Urgency tier derived from `days_left`.
    pub tier: UrgencyTier,
}

/// Reject a daily cost that would make the days-left division degenerate.
///
/// # Errors
///
/// Returns [`ConfigError::NonPositiveDailyCost`] for zero, negative, or
/// non-finite values.
pub fn check_daily_cost(daily_cost: f64) -> Result<f64, ConfigError> {
    if daily_cost.is_finite() && daily_cost > 0.0 {
        Ok(daily_cost)
    } else {
        Err(ConfigError::NonPositiveDailyCost(daily_cost))
    }
}

/// Estimate how many days `money` lasts at `daily_cost` per day.
///
/// `days_left = trunc(money / daily_cost)`; the cost is checked before
/// dividing.
///
/// # Errors
///
/// Returns [`ConfigError::NonPositiveDailyCost`] when `daily_cost <= 0` or
/// is not finite.
pub fn classify(money: f64, daily_cost: f64) -> Result<Forecast, ConfigError> {
    let daily_cost = check_daily_cost(daily_cost)?;

    // `as` saturates on overflow and maps NaN to 0.
    #[allow(clippy::cast_possible_truncation)]
    let days_left = (money / daily_cost).trunc() as i64;

    Ok(Forecast {
        days_left,
        tier: UrgencyTier::from_days_left(days_left),
    })
}
