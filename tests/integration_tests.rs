use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn cmd() -> Command {
    cargo_bin_cmd!("pavlette")
}

#[test]
fn test_cli_default_row_as_text() {
    cmd()
        .assert()
        .success()
        .stdout(predicate::str::starts_with("  0 [sync] #0d0606"))
        .stdout(predicate::str::contains("#ff0000"))
        .stdout(predicate::str::ends_with("#ff8080\n"));
}

#[test]
fn test_cli_one_line_per_color() {
    let output = cmd()
        .args(["-c", "#0000ff", "-c", "hsb(120, 100%, 100%)", "-n", "3"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("#0000ff"));
    assert!(lines[1].contains("#00ff00"));
    // index, marker, 7 colors
    assert_eq!(lines[0].split_whitespace().count(), 9);
}

#[test]
fn test_cli_json_report() {
    let output = cmd()
        .args(["--format", "json", "-n", "2", "--color-space", "srgb"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["step_count"], 2);
    assert_eq!(report["color_space"], "srgb");
    assert_eq!(report["rows"][0]["ramp"].as_array().unwrap().len(), 5);
    assert_eq!(report["rows"][0]["hue_sync"], true);
}

#[test]
fn test_cli_references() {
    cmd()
        .args(["--references", "-c", "hsb(200, 80%, 90%)"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"base\": \"hsb(200, 80%, 90%)\""))
        .stdout(predicate::str::contains("\"dark\": \"hsb(200, 50%, 5%)\""));
}

#[test]
fn test_cli_endpoint_overrides_and_no_sync() {
    let output = cmd()
        .args([
            "--references",
            "--format",
            "yaml",
            "--dark",
            "black",
            "--light",
            "white",
            "--no-hue-sync",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    assert!(stdout.contains("hsb(0, 0%, 0%)"));
    assert!(stdout.contains("hsb(0, 0%, 100%)"));
}

#[test]
fn test_cli_grey_scale() {
    cmd()
        .args(["-g"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#363636"))
        .stdout(predicate::str::contains("#ff0000").not());
}

#[test]
fn test_cli_invalid_color_fails() {
    cmd()
        .args(["-c", "notacolor"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid color"));
}

#[test]
fn test_cli_step_count_out_of_range() {
    cmd().args(["-n", "11"]).assert().failure();
}

#[test]
fn test_cli_missing_config_fails() {
    cmd()
        .args(["--config", "/nonexistent/pavlette.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn test_cli_completions() {
    cmd()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pavlette"));
}

#[test]
fn test_cli_help() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--step-count"))
        .stdout(predicate::str::contains("--references"));
}

#[test]
fn test_cli_synced_dark_override_follows_base_hue() {
    cmd()
        .args(["--references", "--color", "red", "--dark", "#0000ff"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"dark\": \"hsb(0, 100%, 100%)\""));
}
