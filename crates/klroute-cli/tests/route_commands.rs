use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures/four_landmarks.csv")
        .canonicalize()
        .expect("fixture network present")
}

fn prepare_command() -> Command {
    let mut cmd = cargo_bin_cmd!("klroute-cli");
    cmd.env("RUST_LOG", "error")
        .env("NO_COLOR", "1")
        .env_remove("KLROUTE_NETWORK");
    cmd
}

fn route(from: &str, to: &str) -> Command {
    let mut cmd = prepare_command();
    cmd.arg("route").arg("--from").arg(from).arg("--to").arg(to);
    cmd
}

#[test]
fn text_route_uses_builtin_network() {
    route("KLCC", "KL Sentral")
        .assert()
        .success()
        .stdout(predicate::str::contains("Route: KLCC -> KL Sentral (4 hops)"))
        .stdout(predicate::str::contains("National Mosque"))
        .stdout(predicate::str::contains("Total distance: 6.6"));
}

#[test]
fn note_format_prints_path_and_units() {
    let mut cmd = route("Central Market", "Petaling Street");
    cmd.arg("--format").arg("note");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Path: Central Market → Petaling Street"))
        .stdout(predicate::str::contains("Total Distance: 0.6 units"));
}

#[test]
fn rich_format_is_markdown() {
    let mut cmd = route("KLCC", "KL Tower");
    cmd.arg("--format").arg("rich");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("**Route** _KLCC → KL Tower_"));
}

#[test]
fn json_format_is_parseable() {
    let mut cmd = route("KLCC", "KL Sentral");
    cmd.arg("--format").arg("json");

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    assert_eq!(value["start"], "KLCC");
    assert_eq!(value["goal"], "KL Sentral");
    assert_eq!(value["hops"], 4);
    assert_eq!(value["steps"].as_array().map(Vec::len), Some(5));
    let total = value["total_distance"].as_f64().expect("numeric total");
    assert!((total - 6.6).abs() < 1e-9);
}

#[test]
fn unknown_landmark_error_is_friendly() {
    route("KLCC", "KL Sentrl")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown landmark 'KL Sentrl'"))
        .stderr(predicate::str::contains("Did you mean"))
        .stderr(predicate::str::contains("KL Sentral"));
}

#[test]
fn unreachable_landmark_reports_no_route() {
    route("KLCC", "Putrajaya")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No route found between KLCC and Putrajaya"));
}

#[test]
fn same_source_and_destination_warns_without_failing() {
    route("KLCC", "KLCC")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("source and destination are the same (KLCC)"));
}

#[test]
fn network_flag_loads_fixture() {
    let mut cmd = route("A", "D");
    cmd.arg("--network").arg(fixture_path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Route: A -> D (3 hops)"))
        .stdout(predicate::str::contains("Total distance: 6.0"));
}

#[test]
fn isolated_fixture_landmark_has_no_route() {
    let mut cmd = route("A", "E");
    cmd.arg("--network").arg(fixture_path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No route found between A and E"));
}

#[test]
fn environment_variable_selects_network() {
    let mut cmd = route("A", "C");
    cmd.env("KLROUTE_NETWORK", fixture_path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Total distance: 5.0"));
}
