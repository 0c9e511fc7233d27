//! End-to-end tests for the `capbudget` binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

fn capbudget() -> Command {
    let mut cmd = Command::cargo_bin("capbudget").unwrap();
    cmd.env_remove("CAPBUDGET_CONFIG").env_remove("RUST_LOG");
    cmd
}

const PROJECT: [&str; 6] = [
    "--investment",
    "1000",
    "--flows",
    "300,400,500",
    "--rate",
    "0.1",
];

#[test]
fn test_npv_minimal() {
    capbudget()
        .args(["--format", "minimal", "npv"])
        .args(PROJECT)
        .assert()
        .success()
        .stdout(predicate::str::contains("-21.036814"));
}

#[test]
fn test_irr_minimal() {
    capbudget()
        .args(["-f", "minimal", "irr"])
        .args(PROJECT)
        .assert()
        .success()
        .stdout(predicate::str::contains("0.088963"));
}

#[test]
fn test_irr_not_computable() {
    capbudget()
        .args(["-f", "minimal", "irr", "--investment", "1000", "--flows", "300,300"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not_computable"));
}

#[test]
fn test_payback_minimal() {
    capbudget()
        .args(["-f", "minimal", "payback"])
        .args(PROJECT)
        .assert()
        .success()
        .stdout(predicate::str::contains("2.600000"));
}

#[test]
fn test_payback_never_recovered() {
    capbudget()
        .args(["-f", "minimal", "payback", "--investment", "2000"])
        .args(["--flows", "-500,100,300,600,900"])
        .assert()
        .success()
        .stdout(predicate::str::contains("never_recovered"));
}

#[test]
fn test_pi_minimal() {
    capbudget()
        .args(["-f", "minimal", "pi"])
        .args(PROJECT)
        .assert()
        .success()
        .stdout(predicate::str::contains("0.978963"));
}

#[test]
fn test_pi_zero_investment_fails() {
    capbudget()
        .args(["pi", "--investment", "0", "--flows", "100"])
        .assert()
        .failure();
}

#[test]
fn test_negative_investment_rejected() {
    capbudget()
        .args(["npv", "--investment=-5", "--flows", "100"])
        .assert()
        .failure();
}

#[test]
fn test_missing_flows() {
    capbudget()
        .args(["npv", "--investment", "1000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required argument"));
}

#[test]
fn test_metrics_json() {
    let output = capbudget()
        .args(["--format", "json", "metrics"])
        .args(PROJECT)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!((json["npv"].as_f64().unwrap() + 21.036814).abs() < 1e-5);
    assert_eq!(json["irr"]["status"], "rate");
    assert!((json["irr"]["rate"].as_f64().unwrap() - 0.0889634).abs() < 1e-6);
    assert_eq!(json["payback"]["status"], "recovered");
    assert!((json["profitability_index"].as_f64().unwrap() - 0.978963).abs() < 1e-6);
}

#[test]
fn test_metrics_table() {
    capbudget()
        .arg("metrics")
        .args(PROJECT)
        .assert()
        .success()
        .stdout(predicate::str::contains("NPV"))
        .stdout(predicate::str::contains("-$21.04"))
        .stdout(predicate::str::contains("2.60 periods"));
}

#[test]
fn test_metrics_terminal_value() {
    let output = capbudget()
        .args(["-f", "json", "metrics", "--terminal-growth", "0.02"])
        .args(PROJECT)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    let with_tv = json["npv_with_terminal_value"].as_f64().unwrap();
    assert!(with_tv > json["npv"].as_f64().unwrap());
}

#[test]
fn test_wacc_minimal() {
    capbudget()
        .args(["-f", "minimal", "wacc"])
        .args(["--equity-cost", "0.12", "--debt-cost", "0.06", "--tax-rate", "0.25"])
        .args(["--equity-weight", "0.6", "--debt-weight", "0.4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.090000"));
}

#[test]
fn test_wacc_default_debt_weight() {
    capbudget()
        .args(["-f", "minimal", "wacc"])
        .args(["--equity-cost", "0.12", "--debt-cost", "0.06", "--equity-weight", "0.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.090000"));
}

#[test]
fn test_details_csv() {
    capbudget()
        .args(["-f", "csv", "details"])
        .args(PROJECT)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "period,cash_flow,discount_factor,present_value,cumulative_npv",
        ))
        .stdout(predicate::str::contains("0,-1000"));
}

#[test]
fn test_csv_input_file() {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    writeln!(file, "year,cash_flow\n1,300\n2,400\n3,500").unwrap();

    capbudget()
        .args(["-f", "minimal", "npv", "--investment", "1000", "--rate", "0.1"])
        .arg("--input")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("-21.036814"));
}

#[test]
fn test_json_input_file() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        file,
        r#"{{"initialInvestment": 1000, "cashFlows": [
            {{"year": 1, "cashFlow": 300}},
            {{"year": 2, "cashFlow": 400}},
            {{"year": 3, "cashFlow": 500}}
        ], "discountRate": 0.1}}"#
    )
    .unwrap();

    capbudget()
        .args(["-f", "minimal", "payback", "--input"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("2.600000"));
}

#[test]
fn test_scenarios_spread() {
    let output = capbudget()
        .args(["-f", "json", "scenarios", "--spread", "0.2"])
        .args(PROJECT)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    let results = json.as_array().unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["name"], "optimistic");
    assert!(
        results[0]["metrics"]["npv"].as_f64().unwrap()
            > results[2]["metrics"]["npv"].as_f64().unwrap()
    );
}

#[test]
fn test_scenarios_requires_source() {
    capbudget()
        .arg("scenarios")
        .args(PROJECT)
        .assert()
        .failure();
}

#[test]
fn test_config_init_and_use() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("capbudget.toml");

    capbudget()
        .args(["config", "init", "--path"])
        .arg(&path)
        .assert()
        .success();
    assert!(path.exists());

    // Refuses to overwrite without --force
    capbudget()
        .args(["config", "init", "--path"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    let content = std::fs::read_to_string(&path)
        .unwrap()
        .replace("default_discount_rate = 0.1", "default_discount_rate = 0.0");
    std::fs::write(&path, content).unwrap();

    // Zero rate: NPV is the plain sum
    capbudget()
        .arg("--config")
        .arg(&path)
        .args(["-f", "minimal", "npv", "--investment", "1000", "--flows", "300,400,500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("200.000000"));
}

#[test]
fn test_config_show() {
    capbudget()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default_discount_rate"));
}
