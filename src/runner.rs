//! The linear installation state machine.
//!
//! Steps run strictly in order; each step's postcondition is the next
//! step's precondition. The first fatal error aborts the remaining
//! pipeline; the two recoverable failures (tooling self-upgrade, alias
//! registration) are logged as warnings and execution continues. There
//! are no retries and no rollback: recovery is idempotent re-invocation.

use crate::config::InstallConfig;
use crate::error::Result;
use crate::steps::{aliases, entrypoint, packages, payload, preflight, provision, system_deps};
use crate::steps::EnvState;
use crate::ui::Output;

/// Outcome of a completed installation run.
#[derive(Debug)]
pub struct InstallReport {
    /// Whether the isolated environment was created or reused.
    pub env_state: EnvState,

    /// Messages from tolerated non-fatal failures.
    pub warnings: Vec<String>,
}

/// Run a step whose failure is tolerated: log it, record it, continue.
/// Fatal errors still propagate.
fn tolerate(result: Result<()>, output: &Output, warnings: &mut Vec<String>) -> Result<()> {
    match result {
        Err(err) if !err.is_fatal() => {
            tracing::warn!("{err}");
            output.warn(&err.to_string());
            warnings.push(err.to_string());
            Ok(())
        }
        other => other,
    }
}

/// Execute the full provisioning pipeline against `config`.
pub fn install(config: &InstallConfig, output: &Output) -> Result<InstallReport> {
    let total = if config.register_aliases { 7 } else { 6 };
    let mut warnings = Vec::new();

    output.step(1, total, "Checking preconditions");
    let preflight = preflight::check(config)?;
    output.detail(&format!(
        "interpreter: {}",
        preflight.interpreter.display()
    ));
    output.detail(&format!(
        "source artifact: {}",
        preflight.source_artifact.display()
    ));

    output.step(2, total, "Installing system packages");
    system_deps::install(config)?;

    output.step(3, total, "Provisioning isolated environment");
    let env_state = provision::provision(config, &preflight.interpreter)?;
    if env_state == EnvState::AlreadyExisted {
        output.notice("environment already present, skipping creation");
    }

    output.step(4, total, "Deploying application payload");
    payload::deploy(config)?;

    output.step(5, total, "Installing runtime packages");
    tolerate(packages::upgrade_tooling(config), output, &mut warnings)?;
    packages::install_runtime(config)?;

    output.step(6, total, "Generating entrypoint");
    entrypoint::generate(config)?;

    if config.register_aliases {
        output.step(7, total, "Registering shell aliases");
        tolerate(aliases::register(config), output, &mut warnings)?;
    }

    Ok(InstallReport {
        env_state,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InstallError;

    #[test]
    fn tolerate_swallows_nonfatal_errors() {
        let output = Output::new(crate::ui::OutputMode::Quiet);
        let mut warnings = Vec::new();

        let result = tolerate(
            Err(InstallError::ToolUpgradeFailed { code: Some(1) }),
            &output,
            &mut warnings,
        );

        assert!(result.is_ok());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("self-upgrade"));
    }

    #[test]
    fn tolerate_propagates_fatal_errors() {
        let output = Output::new(crate::ui::OutputMode::Quiet);
        let mut warnings = Vec::new();

        let result = tolerate(
            Err(InstallError::DependencyInstallFailed { code: Some(1) }),
            &output,
            &mut warnings,
        );

        assert!(result.is_err());
        assert!(warnings.is_empty());
    }

    #[test]
    fn tolerate_passes_success_through() {
        let output = Output::new(crate::ui::OutputMode::Quiet);
        let mut warnings = Vec::new();

        assert!(tolerate(Ok(()), &output, &mut warnings).is_ok());
        assert!(warnings.is_empty());
    }
}
