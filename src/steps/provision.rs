//! Deployment tree and isolated environment provisioning.
//!
//! Directory existence and environment existence are checked separately:
//! a deployment tree can survive a prior failed run without a fully
//! formed environment inside it, and a re-run must redo only the part
//! that did not complete.

use crate::config::InstallConfig;
use crate::error::{InstallError, Result};
use crate::shell::{run, RunOptions};
use std::ffi::OsString;
use std::fs;
use std::path::Path;

/// Outcome of the environment-provisioning step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvState {
    /// The isolated environment was materialized this run.
    Created,

    /// The isolated environment was already present and reused as-is.
    AlreadyExisted,
}

/// Create the deployment tree and isolated environment where absent.
///
/// An existing deployment tree is reused with a warning; an existing
/// environment is assumed structurally valid and skipped.
pub fn provision(config: &InstallConfig, interpreter: &Path) -> Result<EnvState> {
    let deploy_dir = config.deploy_dir();
    if deploy_dir.is_dir() {
        tracing::warn!(path = %deploy_dir.display(), "deployment tree already exists, reusing");
    } else {
        fs::create_dir_all(&deploy_dir).map_err(|source| InstallError::DirectoryCreateFailed {
            path: deploy_dir.clone(),
            source,
        })?;
    }

    let venv = config.venv_dir();
    if venv.is_dir() {
        tracing::info!(path = %venv.display(), "isolated environment present, skipping creation");
        return Ok(EnvState::AlreadyExisted);
    }

    let args: Vec<OsString> = vec![
        OsString::from("-m"),
        OsString::from("venv"),
        venv.clone().into_os_string(),
    ];
    let options = RunOptions {
        interactive: true,
        ..Default::default()
    };
    let result = run(interpreter, &args, &options)?;

    if !result.success {
        return Err(InstallError::EnvironmentCreateFailed {
            path: venv,
            code: result.exit_code,
        });
    }

    Ok(EnvState::Created)
}
