#![allow(clippy::unwrap_used)]
// CLI surface tests: argument parsing and offline failure modes.

use assert_cmd::Command;
use predicates::prelude::*;

fn stillage() -> Command {
    let mut cmd = Command::cargo_bin("stillage").unwrap();
    // Isolate from any developer config / session.
    cmd.env_remove("STILLAGE_URL");
    cmd.env_remove("STILLAGE_PROFILE");
    cmd.env("STILLAGE_TOKEN", "");
    cmd.env("HOME", std::env::temp_dir());
    cmd.env("XDG_CONFIG_HOME", std::env::temp_dir().join("stillage-test-config"));
    cmd
}

#[test]
fn no_args_shows_help() {
    stillage()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_lists_resource_commands() {
    stillage()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("containers"))
        .stdout(predicate::str::contains("container-types"))
        .stdout(predicate::str::contains("products"))
        .stdout(predicate::str::contains("units"))
        .stdout(predicate::str::contains("users"))
        .stdout(predicate::str::contains("history"));
}

#[test]
fn list_commands_accept_shared_flags() {
    stillage()
        .args(["containers", "list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--search"))
        .stdout(predicate::str::contains("--sort"))
        .stdout(predicate::str::contains("--page"))
        .stdout(predicate::str::contains("--page-size"));
}

#[test]
fn missing_url_is_a_usage_error() {
    stillage()
        .args(["units", "list"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("no backend URL configured"));
}

#[test]
fn completions_generate_without_a_backend() {
    stillage()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stillage"));
}

#[test]
fn invalid_date_flag_is_rejected() {
    stillage()
        .args([
            "--url",
            "http://localhost:1",
            "products",
            "create",
            "--name",
            "cider",
            "--type",
            "1",
            "--produced",
            "june 1st",
        ])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("expected YYYY-MM-DD"));
}
