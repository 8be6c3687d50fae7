//! Turning a balance into a notification decision.

use chrono::Timelike;

use crate::config::ConfigError;
use crate::gate::NotifyWindow;
use crate::urgency::{classify, Forecast, UrgencyTier};

/// Validated settings needed to assess a balance.
///
/// Built once from the configuration and passed explicitly; obtain it via
/// [`crate::config::Config::policy`] or construct it from checked parts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalancePolicy {
    /// Cost of one day of service. Positive and finite.
    pub daily_cost: f64,
    /// Daily reminder window.
    pub window: NotifyWindow,
}

/// Everything a low-balance reminder reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlertPayload {
    /// Urgency of the reminder.
    pub tier: UrgencyTier,
    /// Current balance.
    pub balance: f64,
    /// Whole days the balance covers.
    pub days_left: i64,
    /// Daily cost used for the estimate.
    pub daily_cost: f64,
}

impl AlertPayload {
    /// Render the reminder as Telegram HTML.
    pub fn message(&self) -> String {
        format!(
            "{badge} <b>Low internet balance</b>\n\n\
             \u{1f4b3} Balance: {balance:.2}\n\
             \u{1f4c5} Top up within: {days} d.\n\
             \u{1f4c6} Estimate: {balance:.2} \u{f7} {cost:.2} = {days} d.\n\n\
             \u{26a1} Don't forget to top up!",
            badge = self.tier.badge(),
            balance = self.balance,
            days = self.days_left,
            cost = self.daily_cost,
        )
    }
}

/// Outcome of assessing one balance reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assessment {
    /// Days left and urgency tier.
    pub forecast: Forecast,
    /// Whether a reminder should go out now.
    pub should_notify: bool,
    /// The reminder to send; present exactly when `should_notify` is set.
    pub alert: Option<AlertPayload>,
}

impl Assessment {
    /// Reminder text, or an empty string when nothing should be sent.
    pub fn message(&self) -> String {
        self.alert
            .as_ref()
            .map(AlertPayload::message)
            .unwrap_or_default()
    }
}

/// Assess `money` against `policy` at wall-clock time `now`.
///
/// A reminder is due when the tier is not [`UrgencyTier::Healthy`] and the
/// notification window is open. At most one payload is produced per call;
/// nothing is remembered between calls.
///
/// # Errors
///
/// Returns [`ConfigError::NonPositiveDailyCost`] if the policy carries an
/// unchecked daily cost.
pub fn assess(
    money: f64,
    policy: &BalancePolicy,
    now: &impl Timelike,
) -> Result<Assessment, ConfigError> {
    let forecast = classify(money, policy.daily_cost)?;
    let should_notify = forecast.tier != UrgencyTier::Healthy && policy.window.is_open(now);

    let alert = should_notify.then_some(AlertPayload {
        tier: forecast.tier,
        balance: money,
        days_left: forecast.days_left,
        daily_cost: policy.daily_cost,
    });

    Ok(Assessment {
        forecast,
        should_notify,
        alert,
    })
}
