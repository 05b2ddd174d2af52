//! CLI argument definitions.
//!
//! Gangway is a single-pass tool, so there are no subcommands: one
//! invocation is one installation run. The two variant toggles from the
//! upstream install scripts are exposed as flags.

use clap::Parser;

/// Gangway - idempotent provisioning installer for PortageGUI.
#[derive(Debug, Parser)]
#[command(name = "gangway")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Register short-name shell aliases in the system profile directory
    #[arg(long)]
    pub aliases: bool,

    /// Install system packages without requesting update/deep/newuse behavior
    #[arg(long)]
    pub no_update: bool,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_no_args() {
        let cli = Cli::try_parse_from(["gangway"]).unwrap();
        assert!(!cli.aliases);
        assert!(!cli.no_update);
        assert!(!cli.quiet);
    }

    #[test]
    fn parses_variant_toggles() {
        let cli = Cli::try_parse_from(["gangway", "--aliases", "--no-update"]).unwrap();
        assert!(cli.aliases);
        assert!(cli.no_update);
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["gangway", "--quiet", "--verbose"]).is_err());
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["gangway", "--uninstall"]).is_err());
    }
}
