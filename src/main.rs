//! Gangway CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use gangway::cli::Cli;
use gangway::ui::{Output, OutputMode};
use gangway::InstallConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("gangway=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gangway=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Gangway starting with args: {:?}", cli);

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let output = Output::new(output_mode);

    let invocation_dir = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            output.error(&format!("cannot determine working directory: {e}"));
            return ExitCode::from(1);
        }
    };

    let mut config = InstallConfig::standard(&invocation_dir);
    config.register_aliases = cli.aliases;
    config.update_system_packages = !cli.no_update;

    match gangway::install(&config, &output) {
        Ok(report) => {
            output.success(&format!(
                "{} installed. Launch it with '{}'.",
                config.app_name,
                config.entrypoint_path().display()
            ));
            if !report.warnings.is_empty() {
                output.warn(&format!(
                    "completed with {} warning(s); see above",
                    report.warnings.len()
                ));
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            output.error(&e.to_string());
            ExitCode::from(1)
        }
    }
}
