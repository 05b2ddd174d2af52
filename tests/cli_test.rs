//! Integration tests for the CLI surface.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("gangway"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("provisioning installer"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("gangway"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_rejects_unknown_flags() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("gangway"));
    cmd.arg("--uninstall");
    cmd.assert().failure();
    Ok(())
}

#[test]
fn cli_rejects_quiet_with_verbose() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("gangway"));
    cmd.args(["--quiet", "--verbose"]);
    cmd.assert().failure();
    Ok(())
}

/// Without privileges, or with them but no source artifact in the working
/// directory, preflight fails before any mutation and the process exits 1
/// with the diagnostic on stderr.
#[test]
fn cli_fails_preconditions_in_empty_directory() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = Command::new(cargo_bin("gangway"));
    cmd.current_dir(temp.path());
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error:"))
        .stderr(predicate::str::contains("precondition failed"));
    Ok(())
}
