//! Battery tier classification.

use super::parse::DeviceState;

/// Lowest level (inclusive) classified as [`BatteryTier::High`].
pub const HIGH_LEVEL_THRESHOLD: i64 = 80;

/// Lowest level (inclusive) classified as [`BatteryTier::Medium`].
pub const LOW_LEVEL_THRESHOLD: i64 = 20;

/// Severity tier of a battery reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BatteryTier {
    /// Device is charging or on external power. Level is not consulted.
    Charging,
    /// Level at or above [`HIGH_LEVEL_THRESHOLD`].
    High,
    /// Level in `LOW_LEVEL_THRESHOLD..HIGH_LEVEL_THRESHOLD`.
    Medium,
    /// Level below [`LOW_LEVEL_THRESHOLD`].
    Low,
}

/// Classify a device state into a [`BatteryTier`].
///
/// Any charging indicator overrides the level ladder. Out-of-range levels
/// are not rejected; they fall through the same comparisons.
pub fn classify(state: &DeviceState) -> BatteryTier {
    if state.is_charging() {
        return BatteryTier::Charging;
    }

    match state.level {
        level if level >= HIGH_LEVEL_THRESHOLD => BatteryTier::High,
        level if level >= LOW_LEVEL_THRESHOLD => BatteryTier::Medium,
        _ => BatteryTier::Low,
    }
}
