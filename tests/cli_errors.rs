#![cfg(feature = "cli")]

use predicates::prelude::*;

#[test]
fn cli_fails_without_any_input() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("equilibria_rs");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Missing input data"));
}

#[test]
fn cli_works_with_state_json() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("equilibria_rs");
    let state = serde_json::json!({ "temp_k": 298.15, "psal": 35.0 }).to_string();

    cmd.arg("--json").arg("--state-json").arg(state);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"constants\""))
        .stdout(predicate::str::contains("\"k_hso4\""));
}

#[test]
fn cli_prints_pk_table_without_json_flag() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("equilibria_rs");
    cmd.arg("--state-json")
        .arg(r#"{"temp_k": 298.15, "psal": 35.0}"#);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("pK1 (Free)"))
        .stdout(predicate::str::contains("pKSi (Free)"));
}

#[test]
fn cli_reads_input_document_from_stdin() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("equilibria_rs");

    let doc = serde_json::json!({
        "state": { "temp_k": 288.15, "psal": 33.5 },
        "totals": { "carbon": 0.0021, "phosphate": 1.0e-6 },
        "options": { "hydrofluoric": "dickson_riley1979" }
    })
    .to_string();

    cmd.arg("--json").arg("--input").arg("-").write_stdin(doc);

    let assert = cmd
        .assert()
        .success()
        .stdout(predicate::str::contains("\"carbon\": 0.0021"));

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    let k_hf = report["constants"]["k_hf"].as_f64().unwrap();
    let dickson_riley = equilibria_rs::hydrofluoric_dickson1979(288.15, 33.5);
    let perez_fraga_free = equilibria_rs::hydrofluoric_perez1987(288.15, 33.5)
        * equilibria_rs::total_to_free_factor(288.15, 33.5);
    assert!(((k_hf - dickson_riley) / dickson_riley).abs() < 1e-12);
    assert!(((k_hf - perez_fraga_free) / perez_fraga_free).abs() > 1e-3);
}

#[test]
fn cli_reports_invalid_state_json() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("equilibria_rs");
    cmd.arg("--state-json").arg("{not valid json}");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON for --state-json"));
}

#[test]
fn cli_reports_invalid_json_in_file() {
    use std::fs::File;
    use std::io::Write as _;
    use tempfile::tempdir;

    let dir = tempdir().unwrap();
    let file_path = dir.path().join("bad.json");
    let mut f = File::create(&file_path).unwrap();
    writeln!(f, "this is not json").unwrap();

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("equilibria_rs");
    cmd.arg("--input").arg(file_path);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON in input document"));
}

#[test]
fn cli_reports_missing_file() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("equilibria_rs");
    cmd.arg("--input").arg("/nonexistent/state.json");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error reading file"));
}
