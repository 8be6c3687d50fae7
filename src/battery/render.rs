//! Output formatting for terminals and the Xfce generic-monitor (genmon) panel.
//!
//! Genmon reads `<txt>` as the panel text and `<tool>` as the tooltip; both
//! accept Pango markup, so tooltip text is escaped.

use super::parse::DeviceState;
use super::tier::{BatteryTier, LOW_LEVEL_THRESHOLD};

const ANSI_DARK_GREEN: &str = "\x1b[32m";
const ANSI_LIGHT_GREEN: &str = "\x1b[92m";
const ANSI_YELLOW: &str = "\x1b[33m";
const ANSI_RED: &str = "\x1b[31m";
const ANSI_RESET: &str = "\x1b[0m";

const HEX_DARK_GREEN: &str = "#006400";
const HEX_LIGHT_GREEN: &str = "#32CD32";
const HEX_YELLOW: &str = "#FFD700";
const HEX_RED: &str = "#FF0000";

const ICON_CHARGING: &str = "\u{26a1}";
const ICON_BATTERY: &str = "\u{1f50b}";
const ICON_LOW: &str = "\u{1faab}";
const ICON_ERROR: &str = "\u{1f534}";

/// Output surface for a battery reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputMode {
    /// Xfce genmon plugin markup.
    #[default]
    Genmon,
    /// ANSI-colored terminal text.
    Bash,
}

/// ANSI escape sequence for a tier.
pub fn ansi_color(tier: BatteryTier) -> &'static str {
    match tier {
        BatteryTier::Charging => ANSI_DARK_GREEN,
        BatteryTier::High => ANSI_LIGHT_GREEN,
        BatteryTier::Medium => ANSI_YELLOW,
        BatteryTier::Low => ANSI_RED,
    }
}

/// Hex color used in genmon markup for a tier.
pub fn hex_color(tier: BatteryTier) -> &'static str {
    match tier {
        BatteryTier::Charging => HEX_DARK_GREEN,
        BatteryTier::High => HEX_LIGHT_GREEN,
        BatteryTier::Medium => HEX_YELLOW,
        BatteryTier::Low => HEX_RED,
    }
}

/// Render a reading for the selected output mode.
pub fn render(mode: OutputMode, state: &DeviceState, tier: BatteryTier) -> String {
    match mode {
        OutputMode::Genmon => render_genmon(state, tier),
        OutputMode::Bash => render_bash(state, tier),
    }
}

/// Render a reading as colored terminal text.
pub fn render_bash(state: &DeviceState, tier: BatteryTier) -> String {
    let indicator = if state.is_charging() { ICON_CHARGING } else { "" };
    format!(
        "{color}Battery level: {level}% {indicator}({status}){reset}\n\
         AC powered: {ac}\n\
         USB powered: {usb}\n",
        color = ansi_color(tier),
        level = state.level,
        status = state.status.label(),
        reset = ANSI_RESET,
        ac = state.ac_powered,
        usb = state.usb_powered,
    )
}

/// Render a reading as genmon panel markup with a tooltip.
pub fn render_genmon(state: &DeviceState, tier: BatteryTier) -> String {
    let icon = if state.is_charging() {
        ICON_CHARGING
    } else if state.level < LOW_LEVEL_THRESHOLD {
        ICON_LOW
    } else {
        ICON_BATTERY
    };

    format!(
        "<txt><span foreground='{color}'>{icon} {level}%</span></txt>\n\
         <tool><b>Android battery status</b>\n\
         Level: {level}%\n\
         Status: {status}\n\
         AC power: {ac}\n\
         USB power: {usb}</tool>\n",
        color = hex_color(tier),
        level = state.level,
        status = state.status.label(),
        ac = state.ac_powered,
        usb = state.usb_powered,
    )
}

/// Render a failure for the selected output mode.
pub fn render_error(mode: OutputMode, message: &str) -> String {
    match mode {
        OutputMode::Genmon => format!(
            "<txt><span foreground='{HEX_RED}'>{ICON_ERROR} Error</span></txt>\n<tool>{}</tool>\n",
            escape_markup(message)
        ),
        OutputMode::Bash => format!("Error: {message}\n"),
    }
}

/// Escape special markup characters in free text.
fn escape_markup(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
