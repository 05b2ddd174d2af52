//! System-level dependency installation via the host package manager.

use crate::config::InstallConfig;
use crate::error::{InstallError, Result};
use crate::shell::{run, RunOptions};

/// Ensure the fixed set of system packages is present.
///
/// The package manager runs with inherited stdio so it can ask the
/// operator for confirmation before touching the system. A nonzero exit
/// is fatal: no later step can succeed without these packages. Packages
/// it already installed stay installed.
pub fn install(config: &InstallConfig) -> Result<()> {
    let mut args: Vec<String> = vec!["--ask".into(), "--verbose".into()];
    if config.update_system_packages {
        args.push("-uND".into());
    }
    args.extend(config.system_packages.iter().cloned());

    tracing::debug!(
        package_manager = %config.package_manager.display(),
        packages = %config.system_packages.join(" "),
        "invoking host package manager"
    );

    let options = RunOptions {
        interactive: true,
        ..Default::default()
    };
    let result = run(&config.package_manager, &args, &options)?;

    if !result.success {
        return Err(InstallError::DependencyInstallFailed {
            code: result.exit_code,
        });
    }

    Ok(())
}
