//! External process invocation.

use crate::error::{InstallError, Result};
use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Result of running an external program.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Captured standard output (empty for interactive runs).
    pub stdout: String,

    /// Captured standard error (empty for interactive runs).
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the program exited with code 0.
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }
}

/// Options for running an external program.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Inherit stdin/stdout/stderr from the installer so the child can
    /// prompt the operator and stream its own progress. The host package
    /// manager's confirmation prompt depends on this.
    pub interactive: bool,
}

/// Run a program directly (no intermediate shell), waiting for it to exit.
///
/// Interactive runs inherit all three stdio streams; non-interactive runs
/// capture output for diagnostics. Returns [`InstallError::LaunchFailed`]
/// only when the program cannot be spawned at all; a nonzero exit is a
/// normal [`CommandResult`] for the caller's step to judge.
pub fn run<P, S>(program: P, args: &[S], options: &RunOptions) -> Result<CommandResult>
where
    P: AsRef<OsStr>,
    S: AsRef<OsStr>,
{
    let start = Instant::now();

    let mut cmd = Command::new(program.as_ref());
    cmd.args(args);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    if options.interactive {
        cmd.stdin(Stdio::inherit());
        cmd.stdout(Stdio::inherit());
        cmd.stderr(Stdio::inherit());

        let status = cmd.status().map_err(|source| InstallError::LaunchFailed {
            program: program.as_ref().to_string_lossy().into_owned(),
            source,
        })?;
        let duration = start.elapsed();

        return Ok(if status.success() {
            CommandResult::success(String::new(), String::new(), duration)
        } else {
            CommandResult::failure(status.code(), String::new(), String::new(), duration)
        });
    }

    cmd.stdin(Stdio::null());
    let output = cmd.output().map_err(|source| InstallError::LaunchFailed {
        program: program.as_ref().to_string_lossy().into_owned(),
        source,
    })?;
    let duration = start.elapsed();

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    if output.status.success() {
        Ok(CommandResult::success(stdout, stderr, duration))
    } else {
        Ok(CommandResult::failure(
            output.status.code(),
            stdout,
            stderr,
            duration,
        ))
    }
}
