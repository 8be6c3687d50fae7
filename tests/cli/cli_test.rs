//! CLI contract tests for `adb-battery`.

use assert_cmd::Command;

fn adb_battery() -> Command {
    Command::cargo_bin("adb-battery").expect("binary should be built")
}

#[test]
fn help_lists_output_modes() {
    let output = adb_battery().arg("--help").output().expect("should run");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--output"));
    assert!(stdout.contains("genmon"));
    assert!(stdout.contains("bash"));
}

#[test]
fn invalid_output_mode_is_rejected() {
    let output = adb_battery()
        .args(["-o", "html"])
        .output()
        .expect("should run");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("html"));
}

#[test]
fn missing_adb_renders_genmon_error() {
    let output = adb_battery()
        .args(["--adb", "/nonexistent/definitely-not-adb"])
        .output()
        .expect("should run");
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("<txt><span foreground='#FF0000'>"));
    assert!(stdout.contains("<tool>failed to run /nonexistent/definitely-not-adb"));
}

#[test]
fn missing_adb_renders_bash_error() {
    let output = adb_battery()
        .args(["-o", "bash", "--adb", "/nonexistent/definitely-not-adb"])
        .output()
        .expect("should run");
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Error: failed to run"));
}

#[cfg(unix)]
fn write_fake_adb(dir: &std::path::Path) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("fake-adb");
    std::fs::write(
        &path,
        "#!/bin/sh\necho '  AC powered: true'\necho '  USB powered: false'\necho '  status: 2'\necho '  level: 81'\n",
    )
    .expect("should write script");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
        .expect("should chmod script");
    path
}

// One test writes the script and runs both modes so no spawn overlaps the write.
#[cfg(unix)]
#[test]
fn fake_adb_renders_both_modes() {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let adb = write_fake_adb(dir.path());

    let output = adb_battery().arg("--adb").arg(&adb).output().expect("should run");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "<txt><span foreground='#006400'>\u{26a1} 81%</span></txt>\n\
         <tool><b>Android battery status</b>\n\
         Level: 81%\n\
         Status: Charging\n\
         AC power: true\n\
         USB power: false</tool>\n"
    );

    let output = adb_battery()
        .args(["-o", "bash", "--adb"])
        .arg(&adb)
        .output()
        .expect("should run");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "\x1b[32mBattery level: 81% \u{26a1}(Charging)\x1b[0m\nAC powered: true\nUSB powered: false\n"
    );
}
