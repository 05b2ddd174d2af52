//! Error types for Gangway operations.
//!
//! This module defines [`InstallError`], the primary error type used
//! throughout the installer, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every provisioning step surfaces its own `InstallError` variant so
//!   the final diagnostic names the step that failed
//! - [`InstallError::is_fatal`] encodes the severity table: the pipeline
//!   driver aborts on fatal errors and downgrades the rest to warnings
//! - Use `anyhow::Error` (via `InstallError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Gangway operations.
#[derive(Debug, Error)]
pub enum InstallError {
    /// The invoking identity lacks root privileges.
    #[error("precondition failed: this installer must run with root privileges")]
    InsufficientPrivilege,

    /// The required interpreter is not resolvable on PATH.
    #[error("precondition failed: interpreter '{name}' not found on PATH")]
    MissingInterpreter { name: String },

    /// The application source artifact is absent from the invocation directory.
    #[error("precondition failed: source artifact not found at {path}")]
    MissingSourceArtifact { path: PathBuf },

    /// The host package manager exited nonzero.
    #[error("system dependency install failed: package manager exited with code {code:?}")]
    DependencyInstallFailed { code: Option<i32> },

    /// The deployment tree could not be created.
    #[error("failed to create deployment tree at {path}: {source}")]
    DirectoryCreateFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The interpreter failed to materialize the isolated environment.
    #[error("failed to create isolated environment at {path}: interpreter exited with code {code:?}")]
    EnvironmentCreateFailed { path: PathBuf, code: Option<i32> },

    /// Copying the payload into the deployment tree failed.
    #[error("failed to deploy payload from {from} to {to}: {source}")]
    PayloadCopyFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The isolated package manager's self-upgrade failed. Non-fatal.
    #[error("package tooling self-upgrade failed with code {code:?}")]
    ToolUpgradeFailed { code: Option<i32> },

    /// Installing the runtime packages inside the isolated environment failed.
    #[error("failed to install runtime packages [{packages}]: installer exited with code {code:?}")]
    RuntimePackageInstallFailed {
        packages: String,
        code: Option<i32>,
    },

    /// Writing or marking the entrypoint executable failed.
    #[error("failed to write entrypoint at {path}: {source}")]
    EntrypointWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the shell alias file failed. Non-fatal.
    #[error("failed to write alias file at {path}: {source}")]
    AliasWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An external program could not be launched at all.
    #[error("failed to launch '{program}': {source}")]
    LaunchFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl InstallError {
    /// Whether this error must abort the remaining pipeline.
    ///
    /// Only the package-tooling self-upgrade and alias registration are
    /// recoverable; the driver logs them as warnings and continues.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            InstallError::ToolUpgradeFailed { .. } | InstallError::AliasWriteFailed { .. }
        )
    }
}

/// Result type alias for Gangway operations.
pub type Result<T> = std::result::Result<T, InstallError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_interpreter_displays_name() {
        let err = InstallError::MissingInterpreter {
            name: "python3".into(),
        };
        assert!(err.to_string().contains("python3"));
    }

    #[test]
    fn missing_source_artifact_displays_path() {
        let err = InstallError::MissingSourceArtifact {
            path: PathBuf::from("/work/PortageGUI.py"),
        };
        assert!(err.to_string().contains("/work/PortageGUI.py"));
    }

    #[test]
    fn dependency_install_failed_displays_code() {
        let err = InstallError::DependencyInstallFailed { code: Some(1) };
        let msg = err.to_string();
        assert!(msg.contains("package manager"));
        assert!(msg.contains('1'));
    }

    #[test]
    fn environment_create_failed_displays_path_and_code() {
        let err = InstallError::EnvironmentCreateFailed {
            path: PathBuf::from("/opt/PortageGUI/venv"),
            code: Some(2),
        };
        let msg = err.to_string();
        assert!(msg.contains("/opt/PortageGUI/venv"));
        assert!(msg.contains('2'));
    }

    #[test]
    fn payload_copy_failed_displays_both_paths() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = InstallError::PayloadCopyFailed {
            from: PathBuf::from("/work/PortageGUI.py"),
            to: PathBuf::from("/opt/PortageGUI/PortageGUI.py"),
            source: io,
        };
        let msg = err.to_string();
        assert!(msg.contains("/work/PortageGUI.py"));
        assert!(msg.contains("/opt/PortageGUI/PortageGUI.py"));
    }

    #[test]
    fn runtime_package_install_failed_displays_packages() {
        let err = InstallError::RuntimePackageInstallFailed {
            packages: "PyQt6 ansi2html".into(),
            code: Some(1),
        };
        assert!(err.to_string().contains("PyQt6 ansi2html"));
    }

    #[test]
    fn launch_failed_displays_program() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = InstallError::LaunchFailed {
            program: "emerge".into(),
            source: io,
        };
        assert!(err.to_string().contains("emerge"));
    }

    #[test]
    fn severity_table_matches_design() {
        assert!(InstallError::InsufficientPrivilege.is_fatal());
        assert!(InstallError::DependencyInstallFailed { code: Some(1) }.is_fatal());
        assert!(InstallError::RuntimePackageInstallFailed {
            packages: "PyQt6".into(),
            code: Some(1),
        }
        .is_fatal());
        assert!(!InstallError::ToolUpgradeFailed { code: Some(1) }.is_fatal());

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(!InstallError::AliasWriteFailed {
            path: PathBuf::from("/etc/profile.d/portagegui.sh"),
            source: io,
        }
        .is_fatal());
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: InstallError = io_err.into();
        assert!(matches!(err, InstallError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(InstallError::InsufficientPrivilege)
        }
        assert!(returns_error().is_err());
    }
}
