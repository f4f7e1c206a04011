//! Expected-records configuration file.
//!
//! The file is a JSON object keyed by domain. Each domain maps record type
//! names (case-insensitive) to one of:
//! - an array of strings (A, AAAA, TXT, NS, ...)
//! - an object of preference -> array of exchange hostnames (MX)
//! - `null`, meaning no record of that type is expected
//!
//! Key order is preserved at every level; it decides query order and the
//! order of discrepancies in the report.

use std::fmt;
use std::marker::PhantomData;
use std::path::Path;

use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;
use serde_json::error::Category;

use crate::dns::{parse_record_type, PreferenceMap, RecordValue};
use crate::error_handling::UsageError;

/// One record type to check for a domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedRecord {
    /// Record type as written in the config file
    pub record_type: String,
    /// Expected value, as written (not yet sorted)
    pub expected: RecordValue,
}

/// Expected records for one domain, in config order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedRecordSet {
    /// Domain name to query
    pub domain: String,
    /// Record types to check
    pub records: Vec<ExpectedRecord>,
}

/// The whole config file, in config order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpectedConfig {
    /// Domains to check
    pub domains: Vec<ExpectedRecordSet>,
}

impl ExpectedConfig {
    /// Number of domains in the config.
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    /// True when the config lists no domain.
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// Parses a config document.
    ///
    /// Every record type name is validated here so that a typo is reported
    /// before any query is sent.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error for invalid JSON or an unexpected shape,
    /// wrapped by [`load_expected`] into the matching `UsageError`.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let raw: Entries<Entries<RecordValue>> = serde_json::from_str(text)?;
        let domains = raw
            .0
            .into_iter()
            .map(|(domain, records)| ExpectedRecordSet {
                domain,
                records: records
                    .0
                    .into_iter()
                    .map(|(record_type, expected)| ExpectedRecord {
                        record_type,
                        expected,
                    })
                    .collect(),
            })
            .collect();
        Ok(Self { domains })
    }

    /// Checks that every record type name is a DNS record type.
    ///
    /// # Errors
    ///
    /// Returns `UsageError::UnknownRecordType` for the first unknown name.
    pub fn validate(&self) -> Result<(), UsageError> {
        for set in &self.domains {
            for record in &set.records {
                if parse_record_type(&record.record_type).is_err() {
                    return Err(UsageError::UnknownRecordType {
                        domain: set.domain.clone(),
                        record_type: record.record_type.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Reads, parses and validates the config file at `path`.
///
/// # Errors
///
/// - `UsageError::Unreadable` if the file cannot be read
/// - `UsageError::MalformedJson` if it is not valid JSON
/// - `UsageError::InvalidConfig` if it is JSON of the wrong shape
/// - `UsageError::UnknownRecordType` if a record type name is unknown
pub fn load_expected(path: &Path) -> Result<ExpectedConfig, UsageError> {
    let text = std::fs::read_to_string(path).map_err(|source| UsageError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let config = ExpectedConfig::from_json(&text).map_err(|source| match source.classify() {
        Category::Data => UsageError::InvalidConfig {
            path: path.to_path_buf(),
            source,
        },
        Category::Io | Category::Syntax | Category::Eof => UsageError::MalformedJson {
            path: path.to_path_buf(),
            source,
        },
    })?;

    config.validate()?;
    log::debug!(
        "Loaded {} domain(s) from {}",
        config.len(),
        path.display()
    );
    Ok(config)
}

/// JSON object entries in document order.
struct Entries<V>(Vec<(String, V)>);

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Entries<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
            type Value = Entries<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries: Vec<(String, V)> = Vec::new();
                while let Some((key, value)) = map.next_entry::<String, V>()? {
                    // Later duplicates win, as with any JSON object reader
                    match entries.iter_mut().find(|(existing, _)| *existing == key) {
                        Some(entry) => entry.1 = value,
                        None => entries.push((key, value)),
                    }
                }
                Ok(Entries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

impl<'de> Deserialize<'de> for RecordValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RecordValueVisitor;

        impl<'de> Visitor<'de> for RecordValueVisitor {
            type Value = RecordValue;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("null, an array of strings, or an object of preference -> array of strings")
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(RecordValue::Absent)
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(RecordValue::Absent)
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut values = Vec::new();
                while let Some(value) = seq.next_element::<String>()? {
                    values.push(value);
                }
                Ok(RecordValue::List(values))
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut preferences = PreferenceMap::new();
                while let Some((preference, exchanges)) =
                    map.next_entry::<String, Vec<String>>()?
                {
                    preferences.insert(preference, exchanges);
                }
                Ok(RecordValue::Preferences(preferences))
            }
        }

        deserializer.deserialize_any(RecordValueVisitor)
    }
}
