//! Tests for the JSON snapshot surface used by the `waitline` binary

use chrono::{TimeZone, Utc};
use waitline::estimator::WeightedWaitTimeEstimator;
use waitline::snapshot::{parse_reports, render_estimates, resolve_now, SnapshotQuery};

const SNAPSHOT: &str = r#"[
    {
        "id": "8e1b5a8c-9d0e-4f1a-8b78-c9d0e1f2a3b4",
        "venueId": "lantern-lounge",
        "minutes": 12,
        "timestamp": "2026-10-16T22:50:00Z",
        "upvotes": 1
    },
    {
        "id": "9f2c6b9d-0e1f-4a2b-9c89-d0e1f2a3b4c5",
        "venueId": "lantern-lounge",
        "minutes": "soon",
        "category": "Very Long Line",
        "timestamp": "2026-10-16T22:55:00Z"
    },
    {
        "id": "a03d7cae-1f2a-4b3c-8d90-e1f2a3b4c5d6",
        "venueId": "pier-7",
        "category": "No Line",
        "timestamp": "2026-10-16T22:40:00Z"
    }
]"#;

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 16, 23, 0, 0).unwrap()
}

#[test]
fn test_parse_reports() {
    let reports = parse_reports(SNAPSHOT).unwrap();
    assert_eq!(reports.len(), 3);
    assert_eq!(reports[2].venue_id, "pier-7");
}

#[test]
fn test_parse_reports_rejects_non_array() {
    let error = parse_reports(r#"{"reports": []}"#).unwrap_err();
    assert!(error.to_string().starts_with("Invalid report input"));
}

#[test]
fn test_resolve_now() {
    assert_eq!(resolve_now(Some("2026-10-16T23:00:00Z")).unwrap(), now());
    assert_eq!(
        resolve_now(Some("2026-10-17T01:00:00+02:00")).unwrap(),
        now()
    );
    assert!(resolve_now(Some("tonight")).is_err());

    let before = Utc::now();
    let resolved = resolve_now(None).unwrap();
    assert!(resolved >= before);
}

#[test]
fn test_render_all_venues() {
    let reports = parse_reports(SNAPSHOT).unwrap();
    let estimator = WeightedWaitTimeEstimator::default();

    let output =
        render_estimates(&estimator, &reports, now(), &SnapshotQuery::default()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["lantern-lounge"]["minutes"], 12);
    assert_eq!(value["lantern-lounge"]["category"], "Medium Line");
    assert_eq!(value["pier-7"]["minutes"], 0);
    assert_eq!(value["pier-7"]["category"], "No Line");
}

#[test]
fn test_render_single_venue() {
    let reports = parse_reports(SNAPSHOT).unwrap();
    let estimator = WeightedWaitTimeEstimator::default();
    let query = SnapshotQuery {
        venue: Some("pier-7".to_string()),
        detailed: false,
    };

    let output = render_estimates(&estimator, &reports, now(), &query).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["minutes"], 0);
    assert_eq!(value["category"], "No Line");
}

#[test]
fn test_render_detailed_lists_exclusions() {
    let reports = parse_reports(SNAPSHOT).unwrap();
    let estimator = WeightedWaitTimeEstimator::default();
    let query = SnapshotQuery {
        venue: Some("lantern-lounge".to_string()),
        detailed: true,
    };

    let output = render_estimates(&estimator, &reports, now(), &query).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["result"]["minutes"], 12);
    assert_eq!(value["contributions"].as_array().unwrap().len(), 1);
    assert_eq!(value["exclusions"][0]["reason"], "malformed_reading");
    assert_eq!(
        value["exclusions"][0]["report_id"],
        "9f2c6b9d-0e1f-4a2b-9c89-d0e1f2a3b4c5"
    );
}

#[test]
fn test_render_detailed_requires_venue() {
    let reports = parse_reports(SNAPSHOT).unwrap();
    let estimator = WeightedWaitTimeEstimator::default();
    let query = SnapshotQuery {
        venue: None,
        detailed: true,
    };

    assert!(render_estimates(&estimator, &reports, now(), &query).is_err());
}

#[test]
fn test_render_unknown_venue_is_zero_state() {
    let reports = parse_reports(SNAPSHOT).unwrap();
    let estimator = WeightedWaitTimeEstimator::default();
    let query = SnapshotQuery {
        venue: Some("nowhere".to_string()),
        detailed: false,
    };

    let output = render_estimates(&estimator, &reports, now(), &query).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["minutes"], 0);
}
