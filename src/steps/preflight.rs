//! Precondition checks.
//!
//! Every check runs before any mutation. A failure here aborts the run
//! with zero side effects; success only resolves paths for later steps.

use crate::config::InstallConfig;
use crate::error::{InstallError, Result};
use crate::shell::{is_elevated, which};
use std::path::PathBuf;

/// Paths resolved by the precondition checks, consumed by later steps.
#[derive(Debug, Clone)]
pub struct Preflight {
    /// The interpreter resolved on the execution path.
    pub interpreter: PathBuf,

    /// The source artifact confirmed present in the invocation directory.
    pub source_artifact: PathBuf,
}

/// Verify privilege level, interpreter resolvability, and source artifact
/// presence, in that order.
pub fn check(config: &InstallConfig) -> Result<Preflight> {
    if config.require_root && !is_elevated() {
        return Err(InstallError::InsufficientPrivilege);
    }

    let interpreter =
        which(&config.interpreter).ok_or_else(|| InstallError::MissingInterpreter {
            name: config.interpreter.display().to_string(),
        })?;
    tracing::debug!(interpreter = %interpreter.display(), "resolved interpreter");

    if !config.source_artifact.is_file() {
        return Err(InstallError::MissingSourceArtifact {
            path: config.source_artifact.clone(),
        });
    }

    Ok(Preflight {
        interpreter,
        source_artifact: config.source_artifact.clone(),
    })
}
