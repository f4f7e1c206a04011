//! Comparable record values.
//!
//! Both sides of a check are reduced to a [`RecordValue`]: the expected side is
//! read from the config file, the actual side is built from a raw answer
//! section by [`normalize_answer`].

use std::fmt;

use hickory_resolver::proto::rr::{RData, Record, RecordType};

/// A normalized set of records for one (domain, record type) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValue {
    /// Textual record values (A, AAAA, TXT, NS, ...)
    List(Vec<String>),
    /// MX records grouped by preference
    Preferences(PreferenceMap),
    /// No record expected, or none found
    Absent,
}

impl RecordValue {
    /// Returns the value with its list sorted, for record types where the
    /// config author's ordering is not significant.
    ///
    /// Maps, `Absent` and empty lists are returned unchanged.
    pub fn sorted(&self) -> RecordValue {
        match self {
            RecordValue::List(values) if !values.is_empty() => {
                let mut values = values.clone();
                values.sort();
                RecordValue::List(values)
            }
            other => other.clone(),
        }
    }

    /// True for `Absent`.
    pub fn is_absent(&self) -> bool {
        matches!(self, RecordValue::Absent)
    }
}

impl fmt::Display for RecordValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordValue::List(values) => write_list(f, values),
            RecordValue::Preferences(map) => fmt::Display::fmt(map, f),
            RecordValue::Absent => f.write_str("None"),
        }
    }
}

/// MX exchanges keyed by preference.
///
/// Keys keep their insertion order for display; equality ignores key order.
/// Exchange lists are compared in exact order and never sorted.
#[derive(Debug, Clone, Default)]
pub struct PreferenceMap {
    entries: Vec<(String, Vec<String>)>,
}

impl PreferenceMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `exchange` to the bucket for `preference`, creating the bucket
    /// at the end if it does not exist yet.
    pub fn push(&mut self, preference: impl Into<String>, exchange: impl Into<String>) {
        let preference = preference.into();
        let exchange = exchange.into();
        match self.entries.iter_mut().find(|(key, _)| *key == preference) {
            Some((_, exchanges)) => exchanges.push(exchange),
            None => self.entries.push((preference, vec![exchange])),
        }
    }

    /// Sets the whole bucket for `preference`, replacing any existing one in place.
    pub fn insert(&mut self, preference: impl Into<String>, exchanges: Vec<String>) {
        let preference = preference.into();
        match self.entries.iter_mut().find(|(key, _)| *key == preference) {
            Some((_, existing)) => *existing = exchanges,
            None => self.entries.push((preference, exchanges)),
        }
    }

    /// Exchanges for `preference`, in stored order.
    pub fn get(&self, preference: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(key, _)| key == preference)
            .map(|(_, exchanges)| exchanges.as_slice())
    }

    /// Number of distinct preferences.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no preference is present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over (preference, exchanges) in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(key, exchanges)| (key.as_str(), exchanges.as_slice()))
    }
}

impl PartialEq for PreferenceMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(preference, exchanges)| other.get(preference) == Some(exchanges))
    }
}

impl Eq for PreferenceMap {}

impl fmt::Display for PreferenceMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (preference, exchanges)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write_quoted(f, preference)?;
            f.write_str(": ")?;
            write_list(f, exchanges)?;
        }
        f.write_str("}")
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, values: &[String]) -> fmt::Result {
    f.write_str("[")?;
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write_quoted(f, value)?;
    }
    f.write_str("]")
}

/// Writes `value` single-quoted, switching to double quotes when the text
/// contains a single quote but no double quote. Other control characters
/// are written as `\xNN`.
fn write_quoted(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    let quote = if value.contains('\'') && !value.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(value.len() + 2);
    out.push(quote);
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => out.push_str(&format!("\\x{:02x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push(quote);
    f.write_str(&out)
}

/// Builds the comparable value for `record_type` from a raw answer section.
///
/// - A/AAAA answers that contain a CNAME are `Absent`, whatever addresses the
///   resolver followed the alias to.
/// - MX records are grouped by preference in answer order.
/// - Everything else becomes a sorted, deduplicated list of record texts.
/// - Only records of `record_type` are considered; an empty result is `Absent`.
pub fn normalize_answer(record_type: RecordType, answer: &[Record]) -> RecordValue {
    if matches!(record_type, RecordType::A | RecordType::AAAA)
        && answer
            .iter()
            .any(|record| record.record_type() == RecordType::CNAME)
    {
        return RecordValue::Absent;
    }

    let rdatas = answer
        .iter()
        .filter(|record| record.record_type() == record_type)
        .filter_map(|record| record.data());

    if record_type == RecordType::MX {
        let mut map = PreferenceMap::new();
        for rdata in rdatas {
            if let RData::MX(mx) = rdata {
                map.push(mx.preference().to_string(), mx.exchange().to_string());
            }
        }
        return if map.is_empty() {
            RecordValue::Absent
        } else {
            RecordValue::Preferences(map)
        };
    }

    let mut values: Vec<String> = rdatas.map(record_text).collect();
    values.sort();
    values.dedup();

    if values.is_empty() {
        RecordValue::Absent
    } else {
        RecordValue::List(values)
    }
}

/// Zone-file text of a record.
///
/// TXT records are rendered as their character-strings, each double-quoted
/// and separated by a space, with `"`, `\` and non-printable bytes escaped.
pub fn record_text(rdata: &RData) -> String {
    match rdata {
        RData::TXT(txt) => txt
            .iter()
            .map(|bytes| quote_character_string(bytes))
            .collect::<Vec<String>>()
            .join(" "),
        other => other.to_string(),
    }
}

fn quote_character_string(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() + 2);
    out.push('"');
    for &byte in bytes {
        match byte {
            b'"' | b'\\' => {
                out.push('\\');
                out.push(byte as char);
            }
            0x20..=0x7e => out.push(byte as char),
            _ => out.push_str(&format!("\\{:03}", byte)),
        }
    }
    out.push('"');
    out
}
