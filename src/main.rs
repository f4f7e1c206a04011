//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `dns_monitor` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Mapping the outcome to one output line and a monitoring exit code
//!
//! All core functionality is implemented in the library crate.

use std::process;

use clap::error::ErrorKind;
use clap::Parser;

use dns_monitor::initialization::{init_logger_with, init_resolver};
use dns_monitor::report::unknown_line;
use dns_monitor::{load_expected, run_check, Cli, ServiceState, UsageError};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are successful runs; anything else is a usage error
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => ServiceState::Unknown.exit_code(),
            };
            let _ = e.print();
            process::exit(code);
        }
    };

    let config = match cli.into_config(std::env::args().next()) {
        Ok(config) => config,
        Err(e) => usage_exit(&e),
    };

    if let Err(e) = init_logger_with(config.log_level.clone().into(), config.log_format.clone()) {
        usage_exit(&e.into());
    }

    let expected = match load_expected(&config.file) {
        Ok(expected) => expected,
        Err(e) => usage_exit(&e),
    };

    let resolver = match init_resolver(&config) {
        Ok(resolver) => resolver,
        Err(e) => usage_exit(&e.into()),
    };

    let state = match run_check(&resolver, &expected).await {
        Ok(report) => {
            println!("{}", report.summary());
            report.state()
        }
        Err(e) => {
            log::debug!("Check aborted: {e:?}");
            println!("{}", unknown_line(&e));
            ServiceState::Unknown
        }
    };

    process::exit(state.exit_code());
}

/// Reports a usage problem on stderr and exits with the `UNKNOWN` status.
fn usage_exit(error: &UsageError) -> ! {
    eprintln!("{error}");
    process::exit(ServiceState::Unknown.exit_code());
}
