//! Battery pipeline: fetch diagnostic text, parse it, classify it.
//!
//! The parser and classifier are pure; [`poll`] is the only entry point that
//! touches the device, through a [`BatterySource`].

pub mod parse;
pub mod render;
pub mod source;
pub mod tier;

pub use parse::{parse_battery_dump, ChargeStatus, DeviceState, ParseError};
pub use source::{AdbSource, BatterySource, SourceError};
pub use tier::{classify, BatteryTier};

use tracing::debug;

/// Errors from a single battery poll.
#[derive(Debug, thiserror::Error)]
pub enum BatteryError {
    /// The device could not be queried.
    #[error(transparent)]
    Source(#[from] SourceError),
    /// The diagnostic text could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Fetch, parse, and classify one battery reading.
///
/// # Errors
///
/// Returns [`BatteryError::Source`] when the dump cannot be obtained and
/// [`BatteryError::Parse`] when the level is malformed.
pub async fn poll(source: &dyn BatterySource) -> Result<(DeviceState, BatteryTier), BatteryError> {
    let dump = source.read_dump().await?;
    let state = parse_battery_dump(&dump)?;
    let tier = classify(&state);
    debug!(level = state.level, status = state.status.label(), ?tier, "battery classified");
    Ok((state, tier))
}
