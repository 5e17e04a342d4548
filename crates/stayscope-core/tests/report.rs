use stayscope_core::models::report::{Report, ReportStatus, UNKNOWN_LOCATION};

#[test]
fn processing_uses_request_id_and_location() {
    let report = Report::processing(Some("r1".to_string()), Some("Istanbul".to_string()));

    assert_eq!(report.id, "r1");
    assert_eq!(report.location, "Istanbul");
    assert_eq!(report.status, ReportStatus::Processing);
    assert_eq!(report.hotel_count, 0);
    assert_eq!(report.phone_number_count, 0);
}

#[test]
fn processing_mints_id_when_absent() {
    let a = Report::processing(None, Some("Istanbul".to_string()));
    let b = Report::processing(None, Some("Istanbul".to_string()));

    assert!(!a.id.is_empty());
    assert_ne!(a.id, b.id);
}

#[test]
fn processing_defaults_missing_location_to_unknown() {
    let report = Report::processing(Some("r1".to_string()), None);

    assert_eq!(report.location, UNKNOWN_LOCATION);
}

#[test]
fn undecodable_is_terminal_error_with_unknown_location() {
    let report = Report::undecodable();

    assert_eq!(report.status, ReportStatus::Error);
    assert_eq!(report.location, UNKNOWN_LOCATION);
    assert_eq!(report.hotel_count, 0);
    assert_eq!(report.phone_number_count, 0);
    assert!(!report.id.is_empty());
}

#[test]
fn completed_sets_counts_and_keeps_identity() {
    let initial = Report::processing(Some("r1".to_string()), Some("Istanbul".to_string()));
    let request_date = initial.request_date;

    let done = initial.completed(2, 5);

    assert_eq!(done.status, ReportStatus::Completed);
    assert_eq!(done.hotel_count, 2);
    assert_eq!(done.phone_number_count, 5);
    assert_eq!(done.id, "r1");
    assert_eq!(done.location, "Istanbul");
    assert_eq!(done.request_date, request_date);
}

#[test]
fn failed_keeps_counts_at_zero() {
    let failed = Report::processing(Some("r1".to_string()), Some("Istanbul".to_string())).failed();

    assert_eq!(failed.status, ReportStatus::Error);
    assert_eq!(failed.hotel_count, 0);
    assert_eq!(failed.phone_number_count, 0);
    assert_eq!(failed.location, "Istanbul");
}

#[test]
fn status_serializes_as_pascal_case_strings() {
    let report = Report::processing(Some("r1".to_string()), Some("Istanbul".to_string()));
    let json = serde_json::to_value(&report).expect("serializable");

    assert_eq!(json["status"], "Processing");
    assert_eq!(json["hotelCount"], 0);
    assert_eq!(json["phoneNumberCount"], 0);
    assert!(json["requestDate"].is_string());

    let done = serde_json::to_value(report.completed(1, 1)).expect("serializable");
    assert_eq!(done["status"], "Completed");
}

#[test]
fn report_round_trips_through_json() {
    let report = Report::processing(Some("r1".to_string()), Some("Istanbul".to_string()));
    let json = serde_json::to_string(&report).expect("serializable");
    let back: Report = serde_json::from_str(&json).expect("deserializable");

    assert_eq!(back, report);
}
