//! DNS queries through a pluggable record source.
//!
//! The check only needs one capability from a DNS client: send a query and
//! hand back the raw answer section, CNAME records included. [`RecordSource`]
//! captures that, so the CNAME suppression in [`normalize_answer`] works the
//! same against the real resolver and against in-memory sources in tests.

use std::str::FromStr;

use async_trait::async_trait;
use hickory_resolver::error::ResolveErrorKind;
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::proto::rr::{Name, Record, RecordType};
use hickory_resolver::TokioAsyncResolver;

use super::records::{normalize_answer, RecordValue};
use crate::error_handling::DnsError;

/// A DNS client that exposes raw answer sections.
#[async_trait]
pub trait RecordSource {
    /// Queries `record_type` records for `domain`.
    ///
    /// Returns `Ok(None)` when the server has no answer for this type,
    /// otherwise every record of the answer section, unprocessed.
    ///
    /// # Errors
    ///
    /// Returns `DnsError::LookupFailed` for anything other than "no answer":
    /// timeouts, NXDOMAIN, SERVFAIL, network failures.
    async fn query(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Option<Vec<Record>>, DnsError>;
}

#[async_trait]
impl RecordSource for TokioAsyncResolver {
    async fn query(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Option<Vec<Record>>, DnsError> {
        let failed = |message: String| DnsError::LookupFailed {
            domain: domain.to_string(),
            record_type: record_type.to_string(),
            message,
        };

        // Config domains are absolute; a relative name would pick up the
        // resolv.conf search list once the bare name has no answer
        let mut name = Name::from_str(domain).map_err(|e| failed(e.to_string()))?;
        name.set_fqdn(true);

        match TokioAsyncResolver::lookup(self, name, record_type).await {
            Ok(lookup) => Ok(Some(lookup.records().to_vec())),
            Err(e) => match e.kind() {
                // NOERROR with an empty answer: the name exists, the type does not
                ResolveErrorKind::NoRecordsFound { response_code, .. }
                    if *response_code == ResponseCode::NoError =>
                {
                    Ok(None)
                }
                _ => {
                    log::debug!("{record_type} lookup for {domain} failed: {e}");
                    Err(failed(e.to_string()))
                }
            },
        }
    }
}

/// Parses a record type name case-insensitively.
///
/// # Errors
///
/// Returns `DnsError::UnsupportedType` if the name is not a DNS record type.
pub fn parse_record_type(name: &str) -> Result<RecordType, DnsError> {
    RecordType::from_str(&name.to_uppercase())
        .map_err(|_| DnsError::UnsupportedType(name.to_string()))
}

/// Queries `domain` for `record_type` and returns the comparable value.
///
/// The record type is matched case-insensitively. "No answer" and empty
/// results are both [`RecordValue::Absent`].
///
/// # Errors
///
/// Returns `DnsError::UnsupportedType` for an unknown record type name, or the
/// source's error if the query fails.
pub async fn dns_query<S>(
    source: &S,
    domain: &str,
    record_type: &str,
) -> Result<RecordValue, DnsError>
where
    S: RecordSource + ?Sized,
{
    let record_type = parse_record_type(record_type)?;
    log::debug!("Querying {record_type} records for {domain}");

    let value = match source.query(domain, record_type).await? {
        Some(answer) => normalize_answer(record_type, &answer),
        None => RecordValue::Absent,
    };

    log::debug!("{domain} {record_type}: {value}");
    Ok(value)
}
