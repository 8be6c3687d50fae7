//! Tests for `src/battery/tier.rs` — tier classification.

use battery_indicator::battery::{classify, BatteryTier, ChargeStatus, DeviceState};

fn discharging(level: i64) -> DeviceState {
    DeviceState {
        level,
        status: ChargeStatus::Discharging,
        ac_powered: false,
        usb_powered: false,
    }
}

#[test]
fn boundary_levels() {
    assert_eq!(classify(&discharging(80)), BatteryTier::High);
    assert_eq!(classify(&discharging(79)), BatteryTier::Medium);
    assert_eq!(classify(&discharging(20)), BatteryTier::Medium);
    assert_eq!(classify(&discharging(19)), BatteryTier::Low);
}

#[test]
fn ladder_holds_across_full_range() {
    for level in 0..=100 {
        let expected = if level >= 80 {
            BatteryTier::High
        } else if level >= 20 {
            BatteryTier::Medium
        } else {
            BatteryTier::Low
        };
        assert_eq!(classify(&discharging(level)), expected, "level {level}");
    }
}

#[test]
fn out_of_range_levels_fall_through_ladder() {
    assert_eq!(classify(&discharging(150)), BatteryTier::High);
    assert_eq!(classify(&discharging(-5)), BatteryTier::Low);
}

#[test]
fn ac_power_overrides_level() {
    let state = DeviceState {
        ac_powered: true,
        ..discharging(5)
    };
    assert_eq!(classify(&state), BatteryTier::Charging);
}

#[test]
fn usb_power_overrides_level() {
    let state = DeviceState {
        usb_powered: true,
        ..discharging(95)
    };
    assert_eq!(classify(&state), BatteryTier::Charging);
}

#[test]
fn charging_status_overrides_level() {
    let state = DeviceState {
        status: ChargeStatus::Charging,
        ..discharging(10)
    };
    assert_eq!(classify(&state), BatteryTier::Charging);
}

#[test]
fn full_and_not_charging_use_ladder() {
    let full = DeviceState {
        status: ChargeStatus::Full,
        ..discharging(100)
    };
    let stalled = DeviceState {
        status: ChargeStatus::NotCharging,
        ..discharging(40)
    };
    assert_eq!(classify(&full), BatteryTier::High);
    assert_eq!(classify(&stalled), BatteryTier::Medium);
}
