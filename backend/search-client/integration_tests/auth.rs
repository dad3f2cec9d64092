use crate::helpers::{TEST_APPLICATION, TEST_USER, brand, mount_token_endpoint};

use search_client::SearchApiClient;
use search_client::error::SearchApiError;

use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Verifies one authenticate call signs in against every
/// configured brand and aggregates the expiries.
///
/// **WHY THIS MATTERS**: The whole point of the bundle is that a caller
/// refreshes once for all brands; the aggregate expiry must be the
/// shortest individual one or a stale token gets used on the short-lived
/// brand.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - Only the first brand gets a token request
/// - Tokens land under the wrong brand name
/// - The expiry aggregation takes the longest instead of the shortest
#[tokio::test]
async fn given_two_brands_when_authenticate_then_both_tokens_bundled() {
    // GIVEN: Two brands with different-lived tokens
    let server_a = MockServer::start().await;
    let server_b = MockServer::start().await;
    mount_token_endpoint(&server_a, "bearer-a", 1200).await;
    mount_token_endpoint(&server_b, "bearer-b", 900).await;

    let client = SearchApiClient::new(
        TEST_APPLICATION,
        vec![
            brand("BrandA", &server_a.uri()),
            brand("BrandB", &server_b.uri()),
        ],
    )
    .expect("Failed to build client");

    // WHEN: One sign-in call
    let token = client
        .authenticate(TEST_USER, "session-1")
        .await
        .expect("Authentication failed")
        .expect("Expected a session token");

    // THEN: Both brands are covered and the shortest expiry wins
    assert_eq!(token.token_for("BrandA"), Some("bearer-a"));
    assert_eq!(token.token_for("BrandB"), Some("bearer-b"));
    assert_eq!(token.expires(), 900);
    assert_eq!(token.user(), TEST_USER);
    assert_eq!(token.session(), "session-1");
}

/// **VALUE**: Verifies the exact credential form each brand receives.
///
/// **WHY THIS MATTERS**: The token endpoint silently rejects a request
/// missing any of the grant fields; the device id in particular must be
/// the application name joined to the session with a plus.
///
/// **BUG THIS CATCHES**: A renamed form field or a device id built from
/// the wrong parts, which only ever fails against the real service.
#[tokio::test]
async fn given_brand_when_authenticate_then_credential_form_complete() {
    let server = MockServer::start().await;

    let body = r#"{"access_token": "bearer-1", "token_type": "bearer", "expires_in": 1200}"#;
    Mock::given(method("POST"))
        .and(path("/authorisationserver/token"))
        .and(body_string_contains("grant_type=password"))
        .and(body_string_contains("scope=CVDatabase"))
        .and(body_string_contains("client_id=BrandA-client"))
        .and(body_string_contains("client_secret=BrandA-secret"))
        .and(body_string_contains("username=recruiter%40firm.example"))
        .and(body_string_contains("password=hunter2"))
        .and(body_string_contains(format!(
            "client_device_id={TEST_APPLICATION}%2Bsession-1"
        )))
        .and(body_string_contains(format!("client_user_id={TEST_USER}")))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let client = SearchApiClient::new(TEST_APPLICATION, vec![brand("BrandA", &server.uri())])
        .expect("Failed to build client");

    let token = client
        .authenticate(TEST_USER, "session-1")
        .await
        .expect("Authentication failed");

    assert!(token.is_some());
}

/// **VALUE**: Verifies sign-in is fail-fast: a rejecting brand stops the
/// sequence before later brands are contacted, and no partial bundle
/// leaks out.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - A rejected brand is skipped and a partial bundle returned
/// - Later brands are still contacted after a rejection
/// - The structured rejection body is dropped from the error
#[tokio::test]
async fn given_rejecting_brand_when_authenticate_then_fail_fast() {
    // GIVEN: The first brand rejects, the second must never be reached
    let server_a = MockServer::start().await;
    let server_b = MockServer::start().await;

    let rejection = r#"{"error": "invalid_client", "error_description": "Unknown client"}"#;
    Mock::given(method("POST"))
        .and(path("/authorisationserver/token"))
        .respond_with(ResponseTemplate::new(400).set_body_raw(rejection, "application/json"))
        .mount(&server_a)
        .await;

    Mock::given(method("POST"))
        .and(path("/authorisationserver/token"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server_b)
        .await;

    let client = SearchApiClient::new(
        TEST_APPLICATION,
        vec![
            brand("BrandA", &server_a.uri()),
            brand("BrandB", &server_b.uri()),
        ],
    )
    .expect("Failed to build client");

    // WHEN: Sign-in hits the rejecting brand
    let error = client
        .authenticate(TEST_USER, "session-1")
        .await
        .expect_err("Expected authentication to fail");

    // THEN: The structured rejection is surfaced
    let SearchApiError::Authentication { detail, .. } = error else {
        panic!("expected Authentication, got {error}");
    };
    let detail = detail.expect("Expected the rejection body to be decoded");
    assert_eq!(detail.error.as_deref(), Some("invalid_client"));
    assert_eq!(detail.error_description.as_deref(), Some("Unknown client"));
}

/// **VALUE**: Verifies a client with no brands authenticates to nothing
/// rather than erroring.
#[tokio::test]
async fn given_no_brands_when_authenticate_then_none() {
    let client =
        SearchApiClient::new(TEST_APPLICATION, Vec::new()).expect("Failed to build client");

    let token = client
        .authenticate(TEST_USER, "session-1")
        .await
        .expect("Authentication should not fail");

    assert!(token.is_none());
}
