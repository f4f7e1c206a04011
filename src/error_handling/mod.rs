//! Error handling.
//!
//! Errors are categorized by how the check reports them:
//! - **Initialization**: logger or DNS client setup failed
//! - **Usage**: the check cannot start (missing argument, bad config)
//! - **DNS**: a query failed for a reason other than "no records"

mod types;

// Re-export public API
pub use types::{DnsError, InitializationError, UsageError};
