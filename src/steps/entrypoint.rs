//! Entrypoint generation.
//!
//! The entrypoint is a small POSIX `sh` wrapper published on the
//! execution path. Its whole runtime job: verify the isolated
//! interpreter and payload still exist, then replace itself with the
//! interpreter running the payload, forwarding every argument so the
//! wrapper's exit status is exactly the application's.

use crate::config::InstallConfig;
use crate::error::{InstallError, Result};
use crate::shell::{set_mode, take_ownership};
use std::fs;
use std::path::Path;

/// Render the wrapper script for the given interpreter and payload paths.
pub fn render(env_python: &Path, payload: &Path) -> String {
    format!(
        r#"#!/bin/sh
# Generated by gangway; regenerated on every install run.
PYTHON="{python}"
APP="{payload}"

if [ ! -x "$PYTHON" ]; then
    echo "error: isolated interpreter not found at $PYTHON" >&2
    echo "re-run the installer to repair this installation" >&2
    exit 1
fi

if [ ! -f "$APP" ]; then
    echo "error: application payload not found at $APP" >&2
    echo "re-run the installer to repair this installation" >&2
    exit 1
fi

exec "$PYTHON" "$APP" "$@"
"#,
        python = env_python.display(),
        payload = payload.display(),
    )
}

/// Write the entrypoint, overwriting any prior version unconditionally
/// so it always reflects the current deployment tree paths. Mode 0755,
/// owner root.
pub fn generate(config: &InstallConfig) -> Result<()> {
    let target = config.entrypoint_path();
    let script = render(&config.venv_python(), &config.payload_path());

    let write_err = |source: std::io::Error| InstallError::EntrypointWriteFailed {
        path: target.clone(),
        source,
    };

    fs::write(&target, script).map_err(write_err)?;
    set_mode(&target, 0o755).map_err(write_err)?;
    take_ownership(&target).map_err(write_err)?;

    tracing::debug!(path = %target.display(), "entrypoint generated");
    Ok(())
}
