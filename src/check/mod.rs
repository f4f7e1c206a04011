//! Comparison of expected and actual records.
//!
//! For every domain, each listed record type is queried once and compared
//! with the configured value. Record types that are not listed are never
//! queried.

use std::fmt;

use crate::config::{ExpectedConfig, ExpectedRecord, SORTED_RECORD_TYPES};
use crate::dns::{dns_query, RecordSource, RecordValue};
use crate::error_handling::DnsError;
use crate::report::CheckReport;

/// One record type whose live value differs from the configured one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discrepancy {
    /// Domain that was queried
    pub domain: String,
    /// Record type as written in the config file
    pub record_type: String,
    /// Expected value after normalization
    pub expected: RecordValue,
    /// Value returned by DNS
    pub actual: RecordValue,
}

impl fmt::Display for Discrepancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} mismatch for {}. Expected: {} Actual: {}",
            self.domain, self.record_type, self.expected, self.actual
        )
    }
}

/// Normalizes a configured value before comparison.
///
/// Lists for A, AAAA and TXT are sorted, since the order they were written in
/// carries no meaning. Other types are used as written.
pub fn expected_for_comparison(record_type: &str, expected: &RecordValue) -> RecordValue {
    let upper = record_type.to_uppercase();
    if SORTED_RECORD_TYPES.contains(&upper.as_str()) {
        expected.sorted()
    } else {
        expected.clone()
    }
}

/// Compares every expected record of `domain` against DNS.
///
/// Returns one [`Discrepancy`] per mismatching record type, in config order.
///
/// # Errors
///
/// Returns the first DNS failure; the remaining record types are not queried.
pub async fn find_mismatch<S>(
    source: &S,
    domain: &str,
    expected: &[ExpectedRecord],
) -> Result<Vec<Discrepancy>, DnsError>
where
    S: RecordSource + ?Sized,
{
    let mut discrepancies = Vec::new();

    for record in expected {
        let expected_value = expected_for_comparison(&record.record_type, &record.expected);
        let actual = dns_query(source, domain, &record.record_type).await?;

        if actual != expected_value {
            log::debug!(
                "{domain} {}: expected {expected_value}, got {actual}",
                record.record_type
            );
            discrepancies.push(Discrepancy {
                domain: domain.to_string(),
                record_type: record.record_type.clone(),
                expected: expected_value,
                actual,
            });
        }
    }

    Ok(discrepancies)
}

/// Checks every domain in `config`, in config order.
///
/// # Errors
///
/// Returns the first DNS failure. Mismatches are not errors; they are
/// collected in the report.
pub async fn run_check<S>(source: &S, config: &ExpectedConfig) -> Result<CheckReport, DnsError>
where
    S: RecordSource + ?Sized,
{
    let mut discrepancies = Vec::new();

    for set in &config.domains {
        let found = find_mismatch(source, &set.domain, &set.records).await?;
        log::info!(
            "{}: {} record type(s) checked, {} mismatch(es)",
            set.domain,
            set.records.len(),
            found.len()
        );
        discrepancies.extend(found);
    }

    Ok(CheckReport {
        domains_checked: config.len(),
        discrepancies,
    })
}
