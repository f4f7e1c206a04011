//! Configuration constants.
//!
//! Defaults for the command line and the record types whose expected values
//! are normalized before comparison.

/// Per-query DNS timeout in seconds
pub const DNS_TIMEOUT_SECS: u64 = 5;

/// Port used for `--nameserver` addresses
pub const DNS_PORT: u16 = 53;

/// Name shown in the usage line when the program name cannot be determined
pub const DEFAULT_PROGRAM_NAME: &str = "dns_monitor";

/// Record types whose expected lists are sorted before comparison.
///
/// Any other list (NS, CNAME, ...) is compared as written, against an actual
/// value that is always sorted.
pub const SORTED_RECORD_TYPES: [&str; 3] = ["A", "AAAA", "TXT"];

/// Separator between discrepancies in the `CRITICAL` line
pub const DISCREPANCY_SEPARATOR: &str = " AND ";
