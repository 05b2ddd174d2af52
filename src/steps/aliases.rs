//! Optional shell integration: short-name aliases in profile.d.

use crate::config::InstallConfig;
use crate::error::{InstallError, Result};
use crate::shell::{set_mode, take_ownership};
use std::fs;
use std::path::Path;

/// Render the alias file contents. Each alias resolves to the absolute
/// entrypoint path rather than relying on search-path resolution, so it
/// works even under a partially initialized shell.
pub fn render(app_name: &str, entrypoint: &Path, names: &[String]) -> String {
    let mut content = format!("# Shortcuts for {app_name}; regenerated on every install run.\n");
    for name in names {
        content.push_str(&format!("alias {name}='{}'\n", entrypoint.display()));
    }
    content
}

/// Overwrite the system-wide alias file. Mode 0644, owner root.
///
/// The caller treats a failure here as a warning: the entrypoint remains
/// usable without aliases.
pub fn register(config: &InstallConfig) -> Result<()> {
    let file = config.alias_file();
    let content = render(
        &config.app_name,
        &config.entrypoint_path(),
        &config.alias_names,
    );

    let write_err = |source: std::io::Error| InstallError::AliasWriteFailed {
        path: file.clone(),
        source,
    };

    fs::write(&file, content).map_err(write_err)?;
    set_mode(&file, 0o644).map_err(write_err)?;
    take_ownership(&file).map_err(write_err)?;

    tracing::debug!(path = %file.display(), "shell aliases registered");
    Ok(())
}
