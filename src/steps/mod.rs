//! Provisioning steps, one module per stage of the pipeline.
//!
//! Each step checks its own precondition, performs its action, and
//! reports failure through an [`InstallError`](crate::error::InstallError)
//! variant; the [`runner`](crate::runner) decides per the severity table
//! whether a failure aborts the run or is logged and tolerated.

pub mod aliases;
pub mod entrypoint;
pub mod packages;
pub mod payload;
pub mod preflight;
pub mod provision;
pub mod system_deps;

pub use preflight::Preflight;
pub use provision::EnvState;
