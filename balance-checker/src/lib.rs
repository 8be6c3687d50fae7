//! Balance checker — warns before a prepaid internet balance runs out.
//!
//! Logs into the provider's personal account, reads the balance, estimates
//! how many days it covers at the configured daily cost, and sends a
//! Telegram reminder once the balance gets low, but only inside the
//! configured daily notification window.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Low-balance alert payload and assessment.
pub mod alert;
/// One end-to-end check: fetch, assess, notify, render.
pub mod checker;
/// HTTP client for the provider's account API.
pub mod client;
/// Configuration loading and validation.
pub mod config;
/// Daily notification time window.
pub mod gate;
/// Telegram delivery of alerts.
pub mod reporter;
/// Days-left estimation and urgency tiers.
pub mod urgency;
