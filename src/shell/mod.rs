//! External process invocation and platform probing.

pub mod command;
pub mod platform;

pub use command::{run, CommandResult, RunOptions};
pub use platform::{is_elevated, set_mode, take_ownership, which};
