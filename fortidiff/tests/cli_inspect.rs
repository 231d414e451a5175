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
fn inspect_outlines_sections_subsections_and_keys() {
    fortidiff()
        .arg("inspect")
        .arg(fixture("fixtures/fortigate_a.conf"))
        .assert()
        .success()
        .stdout(predicate::str::contains("system interface\n"))
        .stdout(predicate::str::contains("  port1\n"))
        .stdout(predicate::str::contains(
            "    ip = 192.168.1.99 255.255.255.0\n",
        ));
}

#[test]
fn inspect_depth_limits_the_outline() {
    fortidiff()
        .arg("inspect")
        .arg(fixture("fixtures/fortigate_a.conf"))
        .arg("--depth")
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains("system interface"))
        .stdout(predicate::str::contains("port1").not());
}

#[test]
fn inspect_narrows_to_one_section() {
    fortidiff()
        .arg("inspect")
        .arg(fixture("fixtures/fortigate_a.conf"))
        .arg("--section")
        .arg("system global")
        .assert()
        .success()
        .stdout(predicate::str::contains("admintimeout = 30"))
        .stdout(predicate::str::contains("port1").not());
}

#[test]
fn inspect_fails_for_unknown_section() {
    fortidiff()
        .arg("inspect")
        .arg(fixture("fixtures/fortigate_a.conf"))
        .arg("--section")
        .arg("router bgp")
        .assert()
        .failure()
        .stderr(predicate::str::contains("section 'router bgp' not found"));
}

#[test]
fn inspect_canonical_prints_directive_text() {
    fortidiff()
        .arg("inspect")
        .arg(fixture("fixtures/fortigate_a.conf"))
        .arg("--section")
        .arg("system global")
        .arg("--canonical")
        .assert()
        .success()
        .stdout(predicate::str::contains("config system global\n"))
        .stdout(predicate::str::contains("    set admintimeout 30\n"))
        .stdout(predicate::str::contains("end\n"));
}
