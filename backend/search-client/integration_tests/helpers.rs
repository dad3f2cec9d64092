//! Test helpers for the candidate-search integration tests.
//!
//! Each wiremock server plays one brand endpoint: the token endpoint
//! lives at the root and the data endpoints under /CandidateSearchApi.

use search_client::SearchApiClient;
use search_client::config::BrandSettings;
use search_client::token::SessionToken;

use common::RedactedSecret;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Application name carried in every client_device_id header.
pub const TEST_APPLICATION: &str = "candidate-search-tests";

/// Recruiter the session belongs to.
pub const TEST_USER: &str = "recruiter-7";

/// Test helper: brand settings pointing at a mock server.
pub fn brand(name: &str, url: &str) -> BrandSettings {
    BrandSettings {
        name: name.to_string(),
        url: url.to_string(),
        client_id: format!("{name}-client"),
        client_secret: RedactedSecret::new(format!("{name}-secret")),
        recruiter_username: "recruiter@firm.example".to_string(),
        recruiter_password: RedactedSecret::new("hunter2"),
    }
}

/// Test helper: mount a token endpoint issuing a fixed bearer token.
pub async fn mount_token_endpoint(server: &MockServer, access_token: &str, expires_in: i32) {
    let body = format!(
        r#"{{"access_token": "{access_token}", "token_type": "bearer", "expires_in": {expires_in}}}"#
    );

    Mock::given(method("POST"))
        .and(path("/authorisationserver/token"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .mount(server)
        .await;
}

/// Test helper: a one-brand client already signed in against the server.
/// The brand is named "BrandA" and its bearer token is "bearer-1".
pub async fn authenticated_client(server: &MockServer) -> (SearchApiClient, SessionToken) {
    mount_token_endpoint(server, "bearer-1", 1200).await;

    let client = SearchApiClient::new(TEST_APPLICATION, vec![brand("BrandA", &server.uri())])
        .expect("Failed to build client");

    let session = uuid::Uuid::new_v4().to_string();
    let token = client
        .authenticate(TEST_USER, &session)
        .await
        .expect("Authentication against mock brand failed")
        .expect("Expected a session token");

    (client, token)
}
