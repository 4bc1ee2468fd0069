#![allow(clippy::unwrap_used)]
// Smoke tests for the ptzlink binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn ptzlink() -> Command {
    let mut cmd = Command::cargo_bin("ptzlink").unwrap();
    // Isolate from the developer's environment and any ptzlink.toml in
    // the working tree.
    for var in [
        "PTZLINK_HOST",
        "PTZLINK_PORT",
        "PTZLINK_USERNAME",
        "PTZLINK_PASSWORD",
        "PTZLINK_PROFILE",
        "PTZLINK_CONFIG",
    ] {
        cmd.env_remove(var);
    }
    cmd.current_dir(std::env::temp_dir());
    cmd
}

#[test]
fn help_lists_subcommands() {
    ptzlink()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("watch"))
        .stdout(predicate::str::contains("info"))
        .stdout(predicate::str::contains("ptz"))
        .stdout(predicate::str::contains("preset"));
}

#[test]
fn missing_connection_config_fails_cleanly() {
    ptzlink()
        .arg("info")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Bad configuration"));
}

#[test]
fn rejects_unknown_subcommand() {
    ptzlink().arg("teleport").assert().failure();
}
