use crate::DateCriteria;

use chrono::{TimeZone, Utc};

/// **VALUE**: Verifies the single wire-formatting rule for date criteria.
///
/// **WHY THIS MATTERS**: The search endpoint expects day-first timestamps; an
/// ISO-formatted date silently matches nothing on the remote side.
///
/// **BUG THIS CATCHES**: Would catch a format string drifting away from
/// `%d/%m/%Y %H:%M:%S`.
#[test]
fn given_date_when_formatted_then_uses_day_first_wire_format() {
    // GIVEN: A concrete timestamp
    let date = Utc.with_ymd_and_hms(2024, 3, 7, 14, 30, 5).unwrap();
    let criteria = DateCriteria::from(date);

    // WHEN: Formatting for the wire
    // THEN: Day-first, zero-padded
    assert_eq!(criteria.to_wire(), "07/03/2024 14:30:05");
}

#[test]
fn given_facet_label_when_formatted_then_passes_through_verbatim() {
    let criteria = DateCriteria::from("Last 3 Months");

    assert_eq!(criteria.to_wire(), "Last 3 Months");
}

#[test]
fn given_date_criteria_when_serialized_then_produces_wire_string() {
    let date = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();

    let json = serde_json::to_string(&DateCriteria::from(date)).expect("serializes");

    assert_eq!(json, "\"02/01/2024 03:04:05\"");
}

/// Decoding distinguishes parseable dates from facet labels; anything that
/// is not a recognised timestamp stays a label.
#[test]
fn given_wire_strings_when_deserialized_then_dates_and_facets_are_distinguished() {
    let date: DateCriteria = serde_json::from_str("\"07/03/2024 14:30:05\"").expect("decodes");
    let facet: DateCriteria = serde_json::from_str("\"Last 3 Months\"").expect("decodes");

    assert!(matches!(date, DateCriteria::Date(_)));
    assert_eq!(facet, DateCriteria::Facet("Last 3 Months".to_string()));
}

#[test]
fn given_days_ago_when_constructed_then_yields_past_date() {
    let criteria = DateCriteria::days_ago(90);

    match criteria {
        DateCriteria::Date(date) => assert!(date < Utc::now()),
        DateCriteria::Facet(label) => panic!("expected a date, got facet {label}"),
    }
}
