//! Installation configuration.
//!
//! [`InstallConfig`] is the single immutable record describing the whole
//! installation: where the deployment tree lives, which external programs
//! are invoked, and which package sets they receive. It is constructed
//! once at startup and passed by value into every step, so no step reads
//! implicit global paths. Tests rebind every field to a sandbox.

use std::path::{Path, PathBuf};

/// System packages ensured by the host package manager: the GUI toolkit
/// bindings, the two package-query helpers the application shells out to
/// (`equery`, `eix`), and the privilege-escalation helper (`pkexec`).
pub const SYSTEM_PACKAGES: [&str; 4] = [
    "dev-python/PyQt6",
    "app-portage/gentoolkit",
    "app-portage/eix",
    "sys-auth/polkit",
];

/// Runtime packages installed inside the isolated environment, in order.
pub const RUNTIME_PACKAGES: [&str; 2] = ["PyQt6", "ansi2html"];

/// Short names registered by the optional shell integration step.
pub const ALIAS_NAMES: [&str; 2] = ["pgui", "portagegui"];

/// Immutable description of one installation run.
#[derive(Debug, Clone)]
pub struct InstallConfig {
    /// Application name; also names the deployment tree and entrypoint.
    pub app_name: String,

    /// The payload expected in the invocation directory.
    pub source_artifact: PathBuf,

    /// Parent of the deployment tree (`/opt`).
    pub install_base: PathBuf,

    /// Execution-path directory receiving the entrypoint (`/usr/local/bin`).
    pub bin_dir: PathBuf,

    /// System-wide shell-init directory for the alias file (`/etc/profile.d`).
    pub profile_dir: PathBuf,

    /// Interpreter used to create the isolated environment. A bare name is
    /// resolved on PATH during preflight.
    pub interpreter: PathBuf,

    /// Host package manager binary.
    pub package_manager: PathBuf,

    /// Packages passed to the host package manager.
    pub system_packages: Vec<String>,

    /// Packages installed inside the isolated environment.
    pub runtime_packages: Vec<String>,

    /// Short names written into the alias file.
    pub alias_names: Vec<String>,

    /// Ask the host package manager for update/deep/newuse behavior.
    pub update_system_packages: bool,

    /// Run the optional shell integration step.
    pub register_aliases: bool,

    /// Require an elevated effective uid during preflight.
    pub require_root: bool,
}

impl InstallConfig {
    /// The standard fixed layout used by the CLI.
    pub fn standard(invocation_dir: &Path) -> Self {
        let app_name = "PortageGUI".to_string();
        Self {
            source_artifact: invocation_dir.join(format!("{app_name}.py")),
            app_name,
            install_base: PathBuf::from("/opt"),
            bin_dir: PathBuf::from("/usr/local/bin"),
            profile_dir: PathBuf::from("/etc/profile.d"),
            interpreter: PathBuf::from("python3"),
            package_manager: PathBuf::from("emerge"),
            system_packages: SYSTEM_PACKAGES.iter().map(|p| p.to_string()).collect(),
            runtime_packages: RUNTIME_PACKAGES.iter().map(|p| p.to_string()).collect(),
            alias_names: ALIAS_NAMES.iter().map(|n| n.to_string()).collect(),
            update_system_packages: true,
            register_aliases: false,
            require_root: true,
        }
    }

    /// Root of the deployment tree.
    pub fn deploy_dir(&self) -> PathBuf {
        self.install_base.join(&self.app_name)
    }

    /// The isolated runtime environment inside the deployment tree.
    pub fn venv_dir(&self) -> PathBuf {
        self.deploy_dir().join("venv")
    }

    /// The isolated interpreter the entrypoint launches.
    pub fn venv_python(&self) -> PathBuf {
        self.venv_dir().join("bin").join("python3")
    }

    /// Where the payload lands inside the deployment tree.
    pub fn payload_path(&self) -> PathBuf {
        self.deploy_dir().join(format!("{}.py", self.app_name))
    }

    /// The published entrypoint on the execution path.
    pub fn entrypoint_path(&self) -> PathBuf {
        self.bin_dir.join(&self.app_name)
    }

    /// The optional alias file, named after the lowercased application.
    pub fn alias_file(&self) -> PathBuf {
        self.profile_dir
            .join(format!("{}.sh", self.app_name.to_lowercase()))
    }
}
