// Shared test helpers: an in-memory record source and record builders.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::Mutex;

use async_trait::async_trait;
use dns_monitor::{DnsError, RecordSource};
use hickory_resolver::proto::rr::rdata::{A, CNAME, MX};
use hickory_resolver::proto::rr::{Name, RData, Record, RecordType};

/// Record source answering from a fixed table.
///
/// Pairs missing from the table fail like NXDOMAIN. Every query is recorded
/// so tests can assert on what was (not) asked.
#[derive(Default)]
pub struct StaticSource {
    answers: HashMap<(String, RecordType), Option<Vec<Record>>>,
    queries: Mutex<Vec<(String, RecordType)>>,
}

#[allow(dead_code)] // Used by other test files
impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers `record_type` queries for `domain` with `records`.
    pub fn answer(mut self, domain: &str, record_type: RecordType, records: Vec<Record>) -> Self {
        self.answers
            .insert((domain.to_string(), record_type), Some(records));
        self
    }

    /// Answers `record_type` queries for `domain` with "no answer".
    pub fn no_answer(mut self, domain: &str, record_type: RecordType) -> Self {
        self.answers.insert((domain.to_string(), record_type), None);
        self
    }

    /// Queries received so far, in order.
    pub fn queries(&self) -> Vec<(String, RecordType)> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecordSource for StaticSource {
    async fn query(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Option<Vec<Record>>, DnsError> {
        self.queries
            .lock()
            .unwrap()
            .push((domain.to_string(), record_type));
        self.answers
            .get(&(domain.to_string(), record_type))
            .cloned()
            .ok_or_else(|| DnsError::LookupFailed {
                domain: domain.to_string(),
                record_type: record_type.to_string(),
                message: "NXDOMAIN".to_string(),
            })
    }
}

fn name(text: &str) -> Name {
    Name::from_ascii(text).unwrap()
}

#[allow(dead_code)]
pub fn a(owner: &str, ip: [u8; 4]) -> Record {
    Record::from_rdata(name(owner), 300, RData::A(A(Ipv4Addr::from(ip))))
}

#[allow(dead_code)]
pub fn cname(owner: &str, target: &str) -> Record {
    Record::from_rdata(name(owner), 300, RData::CNAME(CNAME(name(target))))
}

#[allow(dead_code)]
pub fn mx(owner: &str, preference: u16, exchange: &str) -> Record {
    Record::from_rdata(
        name(owner),
        300,
        RData::MX(MX::new(preference, name(exchange))),
    )
}
