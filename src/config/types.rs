//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_PROGRAM_NAME, DNS_TIMEOUT_SECS};
use crate::error_handling::UsageError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options.
///
/// The config file is optional at the clap level so that a missing argument
/// can be reported with the monitoring `UNKNOWN` status instead of clap's own
/// exit code.
#[derive(Debug, Parser)]
#[command(name = "dns_monitor")]
#[command(version)]
#[command(about = "Check that DNS records match an expected JSON configuration", long_about = None)]
pub struct Cli {
    /// JSON file mapping domains to expected records
    #[arg(value_name = "CONFIGFILE")]
    pub file: Option<PathBuf>,

    /// Log level (RUST_LOG is used as the base filter)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Per-query DNS timeout in seconds
    #[arg(long, default_value_t = DNS_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Query this nameserver instead of the system resolvers (repeatable)
    #[arg(long = "nameserver", value_name = "IP")]
    pub nameservers: Vec<IpAddr>,
}

impl Cli {
    /// Converts parsed arguments into a [`Config`].
    ///
    /// # Errors
    ///
    /// Returns `UsageError::MissingConfig` when no config file was given.
    pub fn into_config(self, program: Option<String>) -> Result<Config, UsageError> {
        let Some(file) = self.file else {
            return Err(UsageError::MissingConfig {
                program: program.unwrap_or_else(|| DEFAULT_PROGRAM_NAME.to_string()),
            });
        };

        Ok(Config {
            file,
            log_level: self.log_level,
            log_format: self.log_format,
            timeout_seconds: self.timeout,
            nameservers: self.nameservers,
        })
    }
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use dns_monitor::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     file: PathBuf::from("expected.json"),
///     timeout_seconds: 2,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON file with the expected records
    pub file: PathBuf,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Per-query timeout in seconds
    pub timeout_seconds: u64,

    /// Nameservers to query; empty means the system configuration
    pub nameservers: Vec<IpAddr>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from("dns_monitor.json"),
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            timeout_seconds: DNS_TIMEOUT_SECS,
            nameservers: Vec::new(),
        }
    }
}
