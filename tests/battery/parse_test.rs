//! Tests for `src/battery/parse.rs` — dumpsys text parsing.

use battery_indicator::battery::{parse_battery_dump, ChargeStatus, DeviceState, ParseError};

const REAL_DUMP: &str = "Current Battery Service state:
  AC powered: false
  USB powered: true
  Wireless powered: false
  Max charging current: 500000
  Max charging voltage: 5000000
  Charge counter: 2150000
  status: 2
  health: 2
  present: true
  level: 63
  scale: 100
  voltage: 4012
  temperature: 281
  technology: Li-ion
";

#[test]
fn parses_documented_example() {
    let input = "level: 47\nstatus: 3\nAC powered: false\nUSB powered: true";
    let state = parse_battery_dump(input).expect("should parse");
    assert_eq!(
        state,
        DeviceState {
            level: 47,
            status: ChargeStatus::Discharging,
            ac_powered: false,
            usb_powered: true,
        }
    );
}

#[test]
fn parses_indented_real_dump() {
    let state = parse_battery_dump(REAL_DUMP).expect("should parse");
    assert_eq!(state.level, 63);
    assert_eq!(state.status, ChargeStatus::Charging);
    assert!(!state.ac_powered);
    assert!(state.usb_powered);
}

#[test]
fn malformed_level_is_fatal() {
    let err = parse_battery_dump("level: abc").expect_err("level must be numeric");
    assert_eq!(
        err,
        ParseError::InvalidLevel {
            token: "abc".to_owned()
        }
    );
}

#[test]
fn malformed_level_fails_even_with_other_fields() {
    let input = "status: 2\nlevel: 4x7\nAC powered: true";
    assert!(parse_battery_dump(input).is_err());
}

#[test]
fn missing_level_defaults_to_zero() {
    let state = parse_battery_dump("status: 3\nAC powered: true").expect("should parse");
    assert_eq!(state.level, 0);
    assert_eq!(state.status, ChargeStatus::Discharging);
    assert!(state.ac_powered);
}

#[test]
fn empty_input_yields_zero_record() {
    let state = parse_battery_dump("").expect("should parse");
    assert_eq!(state, DeviceState::default());
    assert_eq!(state.status, ChargeStatus::Unknown);
}

#[test]
fn unrelated_text_yields_zero_record() {
    let state = parse_battery_dump("error: no devices/emulators found\n").expect("should parse");
    assert_eq!(state, DeviceState::default());
}

#[test]
fn key_without_value_is_skipped() {
    let state = parse_battery_dump("level:\nstatus:\nUSB powered:").expect("should parse");
    assert_eq!(state, DeviceState::default());
}

#[test]
fn level_glued_to_key_is_skipped() {
    let state = parse_battery_dump("level:abc").expect("glued token is not a value");
    assert_eq!(state.level, 0);

    let state = parse_battery_dump("level:47
status: 2").expect("should parse");
    assert_eq!(state.level, 0);
    assert_eq!(state.status, ChargeStatus::Charging);
}

#[test]
fn malformed_status_is_advisory() {
    let state = parse_battery_dump("level: 55\nstatus: charging").expect("should parse");
    assert_eq!(state.level, 55);
    assert_eq!(state.status, ChargeStatus::Unknown);
}

#[test]
fn unknown_status_code_maps_to_unknown() {
    let state = parse_battery_dump("status: 9").expect("should parse");
    assert_eq!(state.status, ChargeStatus::Unknown);
    let state = parse_battery_dump("status: 1").expect("should parse");
    assert_eq!(state.status, ChargeStatus::Unknown);
}

#[test]
fn status_codes_map_to_statuses() {
    assert_eq!(ChargeStatus::from_code(2), ChargeStatus::Charging);
    assert_eq!(ChargeStatus::from_code(3), ChargeStatus::Discharging);
    assert_eq!(ChargeStatus::from_code(4), ChargeStatus::NotCharging);
    assert_eq!(ChargeStatus::from_code(5), ChargeStatus::Full);
    assert_eq!(ChargeStatus::from_code(-1), ChargeStatus::Unknown);
}

#[test]
fn power_flags_require_exact_true() {
    let input = "AC powered: True\nUSB powered: yes";
    let state = parse_battery_dump(input).expect("should parse");
    assert!(!state.ac_powered);
    assert!(!state.usb_powered);
}

#[test]
fn last_occurrence_wins() {
    let input = "level: 10\nUSB powered: true\nlevel: 90\nUSB powered: false";
    let state = parse_battery_dump(input).expect("should parse");
    assert_eq!(state.level, 90);
    assert!(!state.usb_powered);
}

#[test]
fn line_order_does_not_matter() {
    let forward = "level: 30\nstatus: 4\nAC powered: true";
    let reversed = "AC powered: true\nstatus: 4\nlevel: 30";
    assert_eq!(
        parse_battery_dump(forward).expect("should parse"),
        parse_battery_dump(reversed).expect("should parse")
    );
}

#[test]
fn status_labels() {
    assert_eq!(ChargeStatus::NotCharging.label(), "Not charging");
    assert_eq!(ChargeStatus::Unknown.label(), "Unknown");
}
