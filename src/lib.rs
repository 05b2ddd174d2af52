//! Gangway - idempotent provisioning installer for the PortageGUI
//! desktop application.
//!
//! Gangway installs the application into a fixed deployment tree under
//! `/opt`, provisions an isolated Python runtime environment for it,
//! installs its runtime dependencies, and publishes a stable entrypoint
//! on the execution path. Re-running it against a partially or fully
//! provisioned system converges to the same end state: steps that
//! already completed are skipped, artifacts that must track the source
//! (payload, entrypoint, aliases) are overwritten.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - The immutable installation configuration record
//! - [`error`] - Error taxonomy and result alias
//! - [`runner`] - The linear installation state machine
//! - [`shell`] - External process invocation and platform probing
//! - [`steps`] - The individual provisioning steps
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```no_run
//! use gangway::{install, InstallConfig};
//! use gangway::ui::{Output, OutputMode};
//!
//! let cwd = std::env::current_dir().unwrap();
//! let config = InstallConfig::standard(&cwd);
//! let output = Output::new(OutputMode::Normal);
//! let report = install(&config, &output).unwrap();
//! println!("environment: {:?}", report.env_state);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod runner;
pub mod shell;
pub mod steps;
pub mod ui;

pub use config::InstallConfig;
pub use error::{InstallError, Result};
pub use runner::{install, InstallReport};
pub use steps::EnvState;
