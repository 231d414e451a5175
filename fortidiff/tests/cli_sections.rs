use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(path)
}

fn fortidiff() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("fortidiff"))
}

#[test]
fn sections_lists_presence_and_hot_spots() {
    fortidiff()
        .arg("sections")
        .arg(fixture("fixtures/fortigate_a.conf"))
        .arg(fixture("fixtures/fortigate_b.conf"))
        .assert()
        .success()
        .stdout(predicate::str::contains("common"))
        .stdout(predicate::str::contains("- system interface"))
        .stdout(predicate::str::contains("right_only"))
        .stdout(predicate::str::contains("- system dns"))
        .stdout(predicate::str::contains("section_summary"))
        .stdout(predicate::str::contains("- firewall policy:"));
}

#[test]
fn sections_json_serializes_the_inventory() {
    fortidiff()
        .arg("sections")
        .arg(fixture("fixtures/fortigate_a.conf"))
        .arg(fixture("fixtures/fortigate_b.conf"))
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"inventory\""))
        .stdout(predicate::str::contains("\"right_only\""))
        .stdout(predicate::str::contains("\"system dns\""));
}
