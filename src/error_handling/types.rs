//! Error type definitions.
//!
//! This module defines the error types used throughout the application. Each
//! category maps onto a distinct monitoring outcome: usage and initialization
//! problems are reported on stderr, DNS failures become an `UNKNOWN` verdict.

use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// The DNS client could not be set up (unreadable system config, bad nameserver).
    #[error("DNS resolver unavailable: {0}")]
    DnsResolverError(String),
}

/// Errors that stop the check before any query is sent.
///
/// Every variant ends the process with the `UNKNOWN` exit status and a single
/// line on stderr.
#[derive(Error, Debug)]
pub enum UsageError {
    /// No config file argument was given.
    #[error("Syntax: {program} configfile.json")]
    MissingConfig {
        /// Name the program was invoked as
        program: String,
    },

    /// The config file could not be read.
    #[error("Cannot read '{}': {source}", .path.display())]
    Unreadable {
        /// Path given on the command line
        path: PathBuf,
        /// Underlying IO failure
        source: std::io::Error,
    },

    /// The config file is not valid JSON.
    #[error("Malformed json in '{}': {source}", .path.display())]
    MalformedJson {
        /// Path given on the command line
        path: PathBuf,
        /// Parser error, including line and column
        source: serde_json::Error,
    },

    /// The config file is valid JSON but not a domain -> record type -> value document.
    #[error("Invalid config in '{}': {source}", .path.display())]
    InvalidConfig {
        /// Path given on the command line
        path: PathBuf,
        /// Parser error, including line and column
        source: serde_json::Error,
    },

    /// A record type name in the config is not a DNS record type.
    #[error("Unknown record type '{record_type}' for {domain}")]
    UnknownRecordType {
        /// Domain the record type was listed under
        domain: String,
        /// Record type as written in the config
        record_type: String,
    },

    /// Startup failed before the check could run.
    #[error(transparent)]
    Initialization(#[from] InitializationError),
}

/// DNS query failures.
///
/// "No answer for this type" is not an error: it is reported by the record
/// source as `Ok(None)`. Everything here aborts the run.
#[derive(Error, Debug)]
pub enum DnsError {
    /// The record type string does not name a DNS record type.
    #[error("unsupported record type '{0}'")]
    UnsupportedType(String),

    /// The resolver failed (timeout, NXDOMAIN, SERVFAIL, network error).
    #[error("DNS query failed for {domain} {record_type}: {message}")]
    LookupFailed {
        /// Queried domain
        domain: String,
        /// Queried record type
        record_type: String,
        /// Resolver error text
        message: String,
    },
}
