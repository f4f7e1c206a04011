//! Check verdicts in monitoring-plugin form.
//!
//! A run produces exactly one status line and one exit code:
//! `OK` (0) when every domain matches, `CRITICAL` (2) when any record differs,
//! `UNKNOWN` (3) when the check could not be performed.

use crate::check::Discrepancy;
use crate::config::DISCREPANCY_SEPARATOR;

/// Service state of a monitoring check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceState {
    /// Everything matches
    Ok,
    /// Part of the plugin convention; this check never reports it
    Warning,
    /// At least one discrepancy
    Critical,
    /// Usage error or failed query
    Unknown,
}

impl ServiceState {
    /// Process exit status for this state.
    pub fn exit_code(self) -> i32 {
        match self {
            ServiceState::Ok => 0,
            ServiceState::Warning => 1,
            ServiceState::Critical => 2,
            ServiceState::Unknown => 3,
        }
    }

    /// Status word that starts the output line.
    pub fn label(self) -> &'static str {
        match self {
            ServiceState::Ok => "OK",
            ServiceState::Warning => "WARNING",
            ServiceState::Critical => "CRITICAL",
            ServiceState::Unknown => "UNKNOWN",
        }
    }
}

/// Result of checking every domain in the config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    /// Number of domains in the config
    pub domains_checked: usize,
    /// All discrepancies, domain-major then record-type order
    pub discrepancies: Vec<Discrepancy>,
}

impl CheckReport {
    /// `Critical` if anything differs, `Ok` otherwise.
    pub fn state(&self) -> ServiceState {
        if self.discrepancies.is_empty() {
            ServiceState::Ok
        } else {
            ServiceState::Critical
        }
    }

    /// The single status line for this report.
    pub fn summary(&self) -> String {
        match self.state() {
            ServiceState::Ok => format!(
                "{} - {} domains checked",
                ServiceState::Ok.label(),
                self.domains_checked
            ),
            state => format!(
                "{} - {}",
                state.label(),
                self.discrepancies
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<String>>()
                    .join(DISCREPANCY_SEPARATOR)
            ),
        }
    }
}

/// Status line for a check that could not complete.
pub fn unknown_line(reason: &impl std::fmt::Display) -> String {
    format!("{} - {}", ServiceState::Unknown.label(), reason)
}
