//! dns_monitor library: DNS record drift checks for monitoring systems
//!
//! This library compares the live DNS records of a set of domains with an
//! expected configuration and turns the result into a monitoring-plugin
//! verdict (`OK`, `CRITICAL`, `UNKNOWN`).
//!
//! # Example
//!
//! ```no_run
//! use dns_monitor::{load_expected, run_check, Config};
//! use dns_monitor::initialization::init_resolver;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     file: std::path::PathBuf::from("expected.json"),
//!     ..Default::default()
//! };
//!
//! let expected = load_expected(&config.file)?;
//! let resolver = init_resolver(&config)?;
//! let report = run_check(&resolver, &expected).await?;
//! println!("{}", report.summary());
//! std::process::exit(report.state().exit_code());
//! # }
//! ```
//!
//! # Requirements
//!
//! The bundled resolver needs a Tokio runtime. Queries are awaited one at a
//! time, so a current-thread runtime is enough.

#![warn(missing_docs)]

pub mod check;
pub mod config;
pub mod dns;
pub mod error_handling;
pub mod initialization;
pub mod report;

// Re-export public API
pub use check::{find_mismatch, run_check, Discrepancy};
pub use config::{load_expected, Cli, Config, ExpectedConfig, LogFormat, LogLevel};
pub use dns::{dns_query, RecordSource, RecordValue};
pub use error_handling::{DnsError, InitializationError, UsageError};
pub use report::{CheckReport, ServiceState};
