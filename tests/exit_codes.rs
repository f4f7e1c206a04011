//! Tests for exit code policies.

use dns_monitor::check::Discrepancy;
use dns_monitor::report::unknown_line;
use dns_monitor::{CheckReport, DnsError, RecordValue, ServiceState};

fn mismatch(domain: &str) -> Discrepancy {
    Discrepancy {
        domain: domain.to_string(),
        record_type: "NS".to_string(),
        expected: RecordValue::List(vec!["ns1.example.net.".to_string()]),
        actual: RecordValue::List(vec!["ns9.example.net.".to_string()]),
    }
}

#[test]
fn test_no_discrepancies_exit_zero() {
    let report = CheckReport {
        domains_checked: 10,
        discrepancies: Vec::new(),
    };
    assert_eq!(report.state().exit_code(), 0);
}

#[test]
fn test_any_discrepancy_exit_two() {
    let report = CheckReport {
        domains_checked: 10,
        discrepancies: vec![mismatch("example.com")],
    };
    assert_eq!(report.state().exit_code(), 2);
}

#[test]
fn test_summary_label_matches_state() {
    let report = CheckReport {
        domains_checked: 1,
        discrepancies: vec![mismatch("example.com")],
    };
    assert!(report.summary().starts_with(report.state().label()));
}

#[test]
fn test_dns_failure_line_is_unknown() {
    let err = DnsError::LookupFailed {
        domain: "example.com".to_string(),
        record_type: "NS".to_string(),
        message: "request timed out".to_string(),
    };
    assert_eq!(
        unknown_line(&err),
        "UNKNOWN - DNS query failed for example.com NS: request timed out"
    );
    assert_eq!(ServiceState::Unknown.exit_code(), 3);
}

#[test]
fn test_warning_is_not_produced_by_reports() {
    for discrepancies in [Vec::new(), vec![mismatch("a.example"), mismatch("b.example")]] {
        let report = CheckReport {
            domains_checked: 2,
            discrepancies,
        };
        assert_ne!(report.state(), ServiceState::Warning);
    }
}
