//! Output mode and writer.
//!
//! Progress narration goes to stdout; warnings and error diagnostics go
//! to stderr. Child-process output is not routed through here at all:
//! interactive steps inherit the terminal directly.

use console::style;
use std::str::FromStr;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show step headers plus resolved-path details.
    Verbose,
    /// Show step headers and status.
    #[default]
    Normal,
    /// Show only the final status, warnings, and errors.
    Quiet,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verbose" => Ok(Self::Verbose),
            "normal" => Ok(Self::Normal),
            "quiet" => Ok(Self::Quiet),
            _ => Err(format!("unknown output mode: {}", s)),
        }
    }
}

impl OutputMode {
    /// Check if this mode shows step headers and skip notices.
    pub fn shows_steps(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows resolved-path detail lines.
    pub fn shows_detail(&self) -> bool {
        matches!(self, Self::Verbose)
    }
}

/// Output writer that respects output mode.
#[derive(Debug)]
pub struct Output {
    mode: OutputMode,
}

impl Output {
    /// Create a new output writer.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    /// Get the output mode.
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Announce a pipeline step.
    pub fn step(&self, index: usize, total: usize, title: &str) {
        if self.mode.shows_steps() {
            println!("{} {}", style(format!("[{index}/{total}]")).cyan().bold(), title);
        }
    }

    /// Print a dimmed notice under the current step (skips, reuse).
    pub fn notice(&self, msg: &str) {
        if self.mode.shows_steps() {
            println!("  {}", style(msg).dim());
        }
    }

    /// Print a detail line (verbose only).
    pub fn detail(&self, msg: &str) {
        if self.mode.shows_detail() {
            println!("  {}", msg);
        }
    }

    /// Print a final success line.
    pub fn success(&self, msg: &str) {
        println!("{} {}", style("✓").green().bold(), msg);
    }

    /// Print a warning to stderr.
    pub fn warn(&self, msg: &str) {
        eprintln!("{} {}", style("warning:").yellow().bold(), msg);
    }

    /// Print an error to stderr.
    pub fn error(&self, msg: &str) {
        eprintln!("{} {}", style("error:").red().bold(), msg);
    }
}
