//! One balance check from fetch to stdout line.

use anyhow::Context;
use chrono::NaiveTime;
use tracing::{info, warn};

use crate::alert::{assess, Assessment};
use crate::client::BalanceSource;
use crate::config::{Config, TemplatesConfig};
use crate::reporter::Notifier;
use crate::urgency::UrgencyTier;

/// Placeholder replaced with the formatted balance in templates.
pub const BALANCE_PLACEHOLDER: &str = "{balance}";

/// Result of a completed check.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    /// Balance reported by the account API.
    pub money: f64,
    /// Tier, days left, and reminder decision.
    pub assessment: Assessment,
    /// Whether a reminder was handed to the notifier successfully.
    pub notified: bool,
    /// Line to print on stdout.
    pub line: String,
}

/// Fill a template with `balance` formatted to two decimals.
pub fn render_template(template: &str, balance: f64) -> String {
    template.replace(BALANCE_PLACEHOLDER, &format!("{balance:.2}"))
}

/// Pick the stdout template for a tier.
pub fn template_for(templates: &TemplatesConfig, tier: UrgencyTier) -> &str {
    match tier {
        UrgencyTier::Healthy => &templates.high_balance,
        UrgencyTier::Warning | UrgencyTier::Urgent => &templates.low_balance,
    }
}

/// Fetch the balance, assess it at `now`, send at most one reminder, and
/// render the stdout line.
///
/// A failed reminder is logged and reported through
/// [`CheckOutcome::notified`]; it does not fail the check.
///
/// # Errors
///
/// Returns an error if the balance cannot be fetched or the configuration
/// is invalid.
pub async fn run_check(
    source: &dyn BalanceSource,
    notifier: &dyn Notifier,
    config: &Config,
    now: NaiveTime,
) -> anyhow::Result<CheckOutcome> {
    let policy = config.policy().context("invalid config")?;
    let money = source
        .fetch_money()
        .await
        .context("failed to fetch balance")?;

    let assessment = assess(money, &policy, &now)?;
    info!(
        money,
        days_left = assessment.forecast.days_left,
        tier = ?assessment.forecast.tier,
        should_notify = assessment.should_notify,
        "balance assessed"
    );

    let notified = match assessment.alert {
        Some(ref alert) => match notifier.send(&alert.message()).await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "failed to deliver low balance reminder");
                false
            }
        },
        None => false,
    };

    let template = template_for(&config.templates, assessment.forecast.tier);
    let line = render_template(template, money);

    Ok(CheckOutcome {
        money,
        assessment,
        notified,
        line,
    })
}
