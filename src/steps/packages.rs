//! Runtime package installation inside the isolated environment.
//!
//! Two sub-steps with deliberately different severity: the package
//! tooling self-upgrade is recoverable noise, the runtime package
//! install is not. The pipeline driver applies that policy through
//! [`InstallError::is_fatal`].

use crate::config::InstallConfig;
use crate::error::{InstallError, Result};
use crate::shell::{run, RunOptions};

fn interactive() -> RunOptions {
    RunOptions {
        interactive: true,
        ..Default::default()
    }
}

/// Upgrade the isolated package manager itself.
///
/// An outdated pip does not necessarily prevent the installs that
/// follow, so the caller treats a failure here as a warning.
pub fn upgrade_tooling(config: &InstallConfig) -> Result<()> {
    let python = config.venv_python();
    let result = run(
        &python,
        &["-m", "pip", "install", "--upgrade", "pip"],
        &interactive(),
    )?;

    if !result.success {
        return Err(InstallError::ToolUpgradeFailed {
            code: result.exit_code,
        });
    }

    Ok(())
}

/// Install the runtime packages the deployed application imports.
///
/// Fatal on failure: the application cannot run without them.
pub fn install_runtime(config: &InstallConfig) -> Result<()> {
    let python = config.venv_python();
    let mut args: Vec<String> = vec!["-m".into(), "pip".into(), "install".into()];
    args.extend(config.runtime_packages.iter().cloned());

    tracing::debug!(
        python = %python.display(),
        packages = %config.runtime_packages.join(" "),
        "installing runtime packages"
    );

    let result = run(&python, &args, &interactive())?;

    if !result.success {
        return Err(InstallError::RuntimePackageInstallFailed {
            packages: config.runtime_packages.join(" "),
            code: result.exit_code,
        });
    }

    Ok(())
}
