use crate::search_request::{SearchOption, SearchRequest, SearchType};

/// Defaults mirror what the remote API treats as a sensible first search:
/// most recent activity window, smart profile-and-CV matching, first page
/// of fifty sorted by relevancy.
#[test]
fn given_default_request_then_carries_documented_defaults() {
    let request = SearchRequest::default();

    assert!(request.sort.descending);
    assert_eq!(request.sort.column, "Relevancy");
    assert_eq!(request.page.max_records, 50);
    assert_eq!(request.page.page, 1);
    assert!(request.last_activity_date.is_some());
    assert_eq!(request.search_type, Some(SearchType::ProfileAndCv));
    assert_eq!(request.search_option, Some(SearchOption::SmartSearch));
    assert!(request.salary.is_none());
    assert!(request.current_location.is_none());
}

#[test]
fn given_default_salary_range_then_spans_zero_to_max() {
    let salary = crate::search_request::SalaryRange::default();

    assert_eq!(salary.salary_rate_type, "Annual Salary");
    assert_eq!(salary.from, 0.0);
    assert_eq!(salary.to, 999_999.0);
    assert!(salary.unspecified.is_none());
}

#[test]
fn given_request_json_with_unknown_fields_when_decoded_then_succeeds() {
    let request: SearchRequest = serde_json::from_str(
        r#"{ "search_text": "rust developer", "somebody_elses_field": 42 }"#,
    )
    .expect("unknown fields are ignored");

    assert_eq!(request.search_text.as_deref(), Some("rust developer"));
}
