//! Battery indicator — reports the battery state of an adb-tethered Android device.
//!
//! Runs `adb shell dumpsys battery`, parses the diagnostic text into a
//! [`battery::DeviceState`], classifies it into a [`battery::BatteryTier`],
//! and renders it for a terminal or an Xfce generic-monitor panel.
//!
//! The [`logging`] module is shared with the `balance-checker` workspace member.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod battery;
pub mod logging;
