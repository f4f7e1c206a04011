//! DNS querying and record normalization.
//!
//! This module provides:
//! - The [`RecordSource`] capability, implemented for `hickory-resolver`
//! - [`dns_query`], which turns one query into a comparable [`RecordValue`]
//! - CNAME suppression for A/AAAA lookups
//!
//! Queries are issued one at a time; retries and timeouts belong to the
//! resolver's own options.

mod query;
mod records;

// Re-export public API
pub use query::{dns_query, parse_record_type, RecordSource};
pub use records::{normalize_answer, record_text, PreferenceMap, RecordValue};
