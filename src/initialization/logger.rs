//! Logger initialization.
//!
//! This module provides functions to initialize the logger with custom formatting.
//! Log output goes to stderr so that stdout carries only the status line.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::LevelFilter;
use serde::Serialize;

/// Modules that only log at error level unless `RUST_LOG` names them.
const QUIET_MODULES: [&str; 2] = ["hickory_proto", "hickory_resolver"];

/// One log record in `--log-format json`.
#[derive(Serialize)]
struct JsonLine<'a> {
    ts: i64,
    level: &'a str,
    target: &'a str,
    msg: String,
}

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting. Supports both plain text
/// (with colors) and JSON formats for structured logging.
///
/// The logger reads from the `RUST_LOG` environment variable by default, but
/// the provided `level` parameter will override it for this crate. hickory's
/// modules log errors only, unless `RUST_LOG` sets their level.
///
/// # Arguments
///
/// * `level` - Minimum log level to display (overrides `RUST_LOG` if set)
/// * `format` - Log format (Plain or Json)
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Show every query and its normalized answer
/// dns_monitor expected.json --log-level debug
///
/// # Per-module filtering via RUST_LOG
/// RUST_LOG=hickory_resolver=debug dns_monitor expected.json
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    // Truncated or malformed UDP responses are retried by hickory itself
    let rust_log = std::env::var(env_logger::DEFAULT_FILTER_ENV).ok();
    for module in modules_to_quiet(rust_log.as_deref()) {
        builder.filter_module(module, LevelFilter::Error);
    }
    builder.filter_module("dns_monitor", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                let line = JsonLine {
                    ts: chrono::Utc::now().timestamp_millis(),
                    level: record.level().as_str(),
                    target: record.target(),
                    msg: record.args().to_string(),
                };
                writeln!(
                    buf,
                    "{}",
                    serde_json::to_string(&line).unwrap_or_else(|_| "{}".into())
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                let colored_level = match level {
                    log::Level::Error => level.to_string().red(),
                    log::Level::Warn => level.to_string().yellow(),
                    log::Level::Info => level.to_string().green(),
                    log::Level::Debug => level.to_string().blue(),
                    log::Level::Trace => level.to_string().purple(),
                };

                writeln!(
                    buf,
                    "{} [{}] {}",
                    record.target().cyan(),
                    colored_level,
                    record.args()
                )
            });
        }
    }

    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

/// The entries of [`QUIET_MODULES`] that `rust_log` does not configure itself.
fn modules_to_quiet(rust_log: Option<&str>) -> Vec<&'static str> {
    let named: Vec<&str> = rust_log
        .unwrap_or_default()
        .split(',')
        .filter_map(|directive| directive.split('=').next())
        .map(str::trim)
        .collect();

    QUIET_MODULES
        .into_iter()
        .filter(|module| {
            !named.iter().any(|name| {
                name == module
                    || name
                        .strip_prefix(module)
                        .is_some_and(|rest| rest.starts_with("::"))
            })
        })
        .collect()
}
