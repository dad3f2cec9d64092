use crate::HttpStatusCode;

#[test]
fn given_401_when_checked_then_is_unauthorized_and_client_error() {
    let status = HttpStatusCode::from(401);

    assert!(status.is_unauthorized());
    assert!(status.is_client_error());
    assert!(!status.is_server_error());
}

#[test]
fn given_4xx_and_5xx_when_categorised_then_ranges_do_not_overlap() {
    assert!(HttpStatusCode(400).is_client_error());
    assert!(HttpStatusCode(499).is_client_error());
    assert!(!HttpStatusCode(500).is_client_error());

    assert!(HttpStatusCode(500).is_server_error());
    assert!(HttpStatusCode(599).is_server_error());
    assert!(!HttpStatusCode(399).is_server_error());

    assert!(!HttpStatusCode(400).is_unauthorized());
}

#[test]
fn given_status_when_displayed_then_shows_numeric_code() {
    assert_eq!(format!("{}", HttpStatusCode(422)), "422");
}
