use crate::helpers::{TEST_USER, authenticated_client};

use search_client::classify::EXPIRED_TOKEN_MESSAGE;
use search_client::error::SearchApiError;

use models::dictionary::Dictionary;
use models::search_request::SearchRequest;

use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Verifies the full search exchange: routing, security
/// headers, flag query parameters, the capitalised request body and the
/// capitalised response.
///
/// **WHY THIS MATTERS**: This is the one round trip every consumer makes
/// constantly; any drift in path, headers or casing breaks it against
/// the real service while passing type checks locally.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - The bearer token or security headers go missing
/// - The include flags stop reaching the query string
/// - The request body ships snake_case keys the service ignores
/// - The response keys stop being mapped back to the document types
#[tokio::test]
async fn given_brand_when_search_then_request_and_response_mapped() {
    let server = MockServer::start().await;
    let (client, token) = authenticated_client(&server).await;

    let response_body = r#"{
        "Candidates": [{"Id": 482, "Relevancy": 97, "ForeName": "Jane", "Surname": "Doe"}],
        "TotalResultsCount": 1,
        "Facets": [{"Type": "Towns", "Items": [{"Count": 1, "Value": "Leeds", "IsSelected": false}]}]
    }"#;

    Mock::given(method("POST"))
        .and(path("/CandidateSearchApi/Search"))
        .and(query_param("includeFacets", "true"))
        .and(query_param("includeCandidatesActivity", "true"))
        .and(header("Authorization", "bearer bearer-1"))
        .and(header("client_user_id", TEST_USER))
        .and(header("Content-Type", "application/json"))
        .and(body_string_contains(r#""SearchType":"ProfileAndCV""#))
        .and(body_string_contains(r#""SearchText":"rust developer""#))
        .respond_with(ResponseTemplate::new(200).set_body_raw(response_body, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let mut search = SearchRequest {
        search_text: Some("rust developer".to_string()),
        ..SearchRequest::default()
    };

    let response = client
        .search(&token, "BrandA", &mut search, true, true)
        .await
        .expect("Search failed")
        .expect("Expected a search response");

    assert_eq!(response.total_results_count, 1);
    assert_eq!(response.candidates[0].id, 482);
    assert_eq!(response.candidates[0].fore_name.as_deref(), Some("Jane"));
    assert_eq!(response.facets[0].kind, "Towns");
}

/// **VALUE**: Verifies the flag-free search path carries no query
/// string at all.
///
/// **BUG THIS CATCHES**: `includeFacets=false` being sent explicitly,
/// which the service treats differently from the parameter being absent.
#[tokio::test]
async fn given_no_flags_when_search_then_bare_path() {
    let server = MockServer::start().await;
    let (client, token) = authenticated_client(&server).await;

    let empty = r#"{"Candidates": [], "TotalResultsCount": 0, "Facets": []}"#;
    Mock::given(method("POST"))
        .and(path("/CandidateSearchApi/Search"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(empty, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let mut search = SearchRequest::default();
    let response = client
        .search(&token, "BrandA", &mut search, false, false)
        .await
        .expect("Search failed")
        .expect("Expected a search response");

    assert_eq!(response.total_results_count, 0);

    // The mock's path matcher is exact, so reaching it proves no query
    // string was attached; the received request confirms it.
    let requests = server.received_requests().await.unwrap();
    let search_request = requests
        .iter()
        .find(|request| request.url.path() == "/CandidateSearchApi/Search")
        .unwrap();
    assert!(search_request.url.query().is_none());
}

/// **VALUE**: Verifies conflicting filters are normalised before the
/// request leaves the client.
///
/// **BUG THIS CATCHES**: The clean step running after serialisation, or
/// not at all, letting a rejectable filter combination out the door.
#[tokio::test]
async fn given_conflicting_filters_when_search_then_request_cleaned() {
    let server = MockServer::start().await;
    let (client, token) = authenticated_client(&server).await;

    let empty = r#"{"Candidates": [], "TotalResultsCount": 0, "Facets": []}"#;
    Mock::given(method("POST"))
        .and(path("/CandidateSearchApi/Search"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(empty, "application/json"))
        .mount(&server)
        .await;

    let mut search = SearchRequest {
        radius: Some(10),
        travel_time: Some(30),
        ..SearchRequest::default()
    };

    client
        .search(&token, "BrandA", &mut search, false, false)
        .await
        .expect("Search failed");

    // No anchor, so both location measures were dropped in place
    assert!(search.radius.is_none());
    assert!(search.travel_time.is_none());
}

/// **VALUE**: Verifies candidate retrieval by id hits the right path
/// and maps the document back, dates included.
#[tokio::test]
async fn given_candidate_id_when_candidate_then_document_mapped() {
    let server = MockServer::start().await;
    let (client, token) = authenticated_client(&server).await;

    let body = r#"{
        "Id": 482,
        "Relevancy": 97,
        "ForeName": "Jane",
        "Surname": "Doe",
        "IsAnonymous": false,
        "LastActiveDate": "28/08/2026 09:15:00"
    }"#;

    Mock::given(method("GET"))
        .and(path("/CandidateSearchApi/Candidate/482"))
        .and(header("Authorization", "bearer bearer-1"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let candidate = client
        .candidate(&token, "BrandA", 482)
        .await
        .expect("Candidate call failed")
        .expect("Expected a candidate");

    assert_eq!(candidate.id, 482);
    assert_eq!(candidate.surname.as_deref(), Some("Doe"));
    let last_active = candidate.last_active_date.expect("Expected a date");
    assert_eq!(last_active.to_rfc3339(), "2026-08-28T09:15:00+00:00");
}

/// **VALUE**: Verifies the quota endpoint path and document mapping.
#[tokio::test]
async fn given_brand_when_quota_then_document_mapped() {
    let server = MockServer::start().await;
    let (client, token) = authenticated_client(&server).await;

    let body = r#"{"CompanyUsesCredit": true, "CandidatesViewed": 12, "CandidatesRemaining": 88}"#;
    Mock::given(method("GET"))
        .and(path("/CandidateSearchApi/Usage/Quota"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let quota = client
        .quota(&token, "BrandA")
        .await
        .expect("Quota call failed")
        .expect("Expected a quota document");

    assert!(quota.company_uses_credit);
    assert_eq!(quota.candidates_viewed, Some(12));
    assert_eq!(quota.candidates_remaining, Some(88));
}

/// **VALUE**: Verifies dictionaries are addressed by their canonical
/// capitalised name in the path.
#[tokio::test]
async fn given_dictionary_name_when_dictionary_then_values_returned() {
    let server = MockServer::start().await;
    let (client, token) = authenticated_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/CandidateSearchApi/Dictionary/Languages"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"["English", "French", "German"]"#, "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let values = client
        .dictionary(&token, "BrandA", Dictionary::Languages)
        .await
        .expect("Dictionary call failed")
        .expect("Expected dictionary values");

    assert_eq!(values, ["English", "French", "German"]);
}

/// **VALUE**: Verifies an unconfigured brand yields no data instead of
/// an error.
///
/// **WHY THIS MATTERS**: Federated callers iterate brands from their own
/// lists; a brand this client does not carry must degrade to "nothing
/// from here", not abort the whole sweep.
#[tokio::test]
async fn given_unknown_brand_when_quota_then_none() {
    let server = MockServer::start().await;
    let (client, token) = authenticated_client(&server).await;

    let quota = client
        .quota(&token, "NoSuchBrand")
        .await
        .expect("Unknown brand must not error");

    assert!(quota.is_none());
}

/// **VALUE**: Verifies a 401 on a data call surfaces as the expired
/// token error, the signal callers re-authenticate on.
#[tokio::test]
async fn given_expired_token_when_quota_then_authentication_error() {
    let server = MockServer::start().await;
    let (client, token) = authenticated_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/CandidateSearchApi/Usage/Quota"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let error = client
        .quota(&token, "BrandA")
        .await
        .expect_err("Expected the call to fail");

    let SearchApiError::Authentication { message, .. } = error else {
        panic!("expected Authentication, got {error}");
    };
    assert_eq!(message, EXPIRED_TOKEN_MESSAGE);
}

/// **VALUE**: Verifies a structured service rejection on a data call is
/// classified with its status attached.
#[tokio::test]
async fn given_service_rejection_when_search_then_service_error() {
    let server = MockServer::start().await;
    let (client, token) = authenticated_client(&server).await;

    let rejection = r#"{"error": "server_error", "error_description": "Index offline"}"#;
    Mock::given(method("POST"))
        .and(path("/CandidateSearchApi/Search"))
        .respond_with(ResponseTemplate::new(500).set_body_raw(rejection, "application/json"))
        .mount(&server)
        .await;

    let mut search = SearchRequest::default();
    let error = client
        .search(&token, "BrandA", &mut search, false, false)
        .await
        .expect_err("Expected the call to fail");

    let SearchApiError::Service { detail, status, .. } = error else {
        panic!("expected Service, got {error}");
    };
    assert_eq!(detail.error.as_deref(), Some("server_error"));
    assert_eq!(status.0, 500);
}
