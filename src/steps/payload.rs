//! Application payload deployment.

use crate::config::InstallConfig;
use crate::error::{InstallError, Result};
use crate::shell::{set_mode, take_ownership};
use std::fs;

/// Copy the source artifact into the deployment tree.
///
/// The copy always overwrites so the deployed payload matches the
/// invocation-time source; the entrypoint generated afterwards assumes
/// the payload at this path is current. Mode 0644, owner root.
pub fn deploy(config: &InstallConfig) -> Result<()> {
    let dest = config.payload_path();

    let copy_err = |source: std::io::Error| InstallError::PayloadCopyFailed {
        from: config.source_artifact.clone(),
        to: dest.clone(),
        source,
    };

    fs::copy(&config.source_artifact, &dest).map_err(copy_err)?;
    set_mode(&dest, 0o644).map_err(copy_err)?;
    take_ownership(&dest).map_err(copy_err)?;

    tracing::debug!(path = %dest.display(), "payload deployed");
    Ok(())
}
