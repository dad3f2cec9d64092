// Unit tests for the two wire codecs
// Tests the pure casing transforms, the tree walk, and enum slug handling

use crate::codec::case::{lower_delimited, pascal_from_delimited};
use crate::codec::{slug, verbatim};

use models::dictionary::Dictionary;
use models::search_request::{SearchRequest, SearchType};
use models::search_response::SearchResponse;
use models::wire::WireEnum;

use serde_json::Value;

// ============================================
// UNIT TESTS: Casing Transforms
// ============================================

/// **VALUE**: Verifies the lowercase transform on the key shapes the
/// service actually sends.
///
/// **WHY THIS MATTERS**: The snake_case codec derives every field name
/// from this one function; an off-by-one at a word boundary corrupts
/// every decoded document at once.
///
/// **BUG THIS CATCHES**: A boundary rule regression (lower-to-upper or
/// letter/digit) silently renaming fields so serde fills defaults.
#[test]
fn given_capitalised_keys_when_lower_delimited_then_words_are_separated() {
    assert_eq!(lower_delimited("ExpiresIn", '_'), "expires_in");
    assert_eq!(lower_delimited("AccessToken", '_'), "access_token");
    assert_eq!(lower_delimited("TotalResultsCount", '_'), "total_results_count");
    assert_eq!(lower_delimited("ModelState", '_'), "model_state");

    // Consecutive capitals stay one word
    assert_eq!(lower_delimited("ProfileAndCV", '-'), "profile-and-cv");

    // Digit runs separate on both sides
    assert_eq!(lower_delimited("Over200K", '-'), "over-200-k");

    // Already-lowercase input is a fixed point
    assert_eq!(lower_delimited("expires_in", '_'), "expires_in");
    assert_eq!(lower_delimited("error_description", '_'), "error_description");
}

/// **VALUE**: Verifies the capitalising transform mirrors the lowercase
/// one for ordinary words and digit runs.
///
/// **WHY THIS MATTERS**: Requests are encoded with this function; a
/// mismatch with the service's expected field names makes every filter
/// silently ignored remotely.
///
/// **BUG THIS CATCHES**: Digit runs not terminating a word, yielding
/// "Over200k" instead of "Over200K".
#[test]
fn given_delimited_text_when_pascal_from_delimited_then_words_are_capitalised() {
    assert_eq!(pascal_from_delimited("expires_in", '_'), "ExpiresIn");
    assert_eq!(pascal_from_delimited("search_text", '_'), "SearchText");
    assert_eq!(pascal_from_delimited("over-200-k", '-'), "Over200K");
    assert_eq!(pascal_from_delimited("profile-and-cv", '-'), "ProfileAndCv");
}

// ============================================
// UNIT TESTS: Enum Slugs
// ============================================

/// **VALUE**: Verifies slug round-trips for every dictionary name and
/// search type, including the ones whose wire form has consecutive
/// capitals.
///
/// **WHY THIS MATTERS**: `ProfileAndCV` slugs to `profile-and-cv` but
/// naive re-capitalisation gives `ProfileAndCv`; the round trip only
/// closes through case-insensitive canonical matching.
///
/// **BUG THIS CATCHES**: A parse path that compares slugs case
/// sensitively and loses every variant containing an acronym.
#[test]
fn given_every_variant_when_slug_round_trip_then_canonical_member_returns() {
    for &variant in Dictionary::VARIANTS {
        let slugged = slug::enum_to_slug(variant);
        assert_eq!(slug::enum_from_slug::<Dictionary>(&slugged), Some(variant));
    }

    assert_eq!(slug::enum_to_slug(SearchType::ProfileAndCv), "profile-and-cv");
    assert_eq!(
        slug::enum_from_slug::<SearchType>("profile-and-cv"),
        Some(SearchType::ProfileAndCv)
    );
}

/// **VALUE**: Verifies the tolerant decode contract: empty, "null" and
/// unknown slugs all come back as `None`.
///
/// **BUG THIS CATCHES**: The literal string "null" - which the service
/// emits for unset enumerations - decoding as an error or a variant.
#[test]
fn given_absent_or_unknown_slug_when_enum_from_slug_then_none() {
    assert_eq!(slug::enum_from_slug::<SearchType>(""), None);
    assert_eq!(slug::enum_from_slug::<SearchType>("null"), None);
    assert_eq!(slug::enum_from_slug::<SearchType>("NULL"), None);
    assert_eq!(slug::enum_from_slug::<SearchType>("no-such-thing"), None);
}

// ============================================
// UNIT TESTS: Document Encoding
// ============================================

/// **VALUE**: Verifies an encoded search request carries capitalised
/// field names, canonical enum values, and no null-valued fields.
///
/// **WHY THIS MATTERS**: The service treats an explicit `null` field
/// differently from an absent one, and it matches `SearchType` values
/// exactly - `"ProfileAndCV"`, capital V.
///
/// **BUG THIS CATCHES**: Null retention after the tree walk, or enum
/// serialisation losing the acronym casing.
#[test]
fn given_default_request_when_verbatim_encode_then_capitalised_and_null_free() {
    let request = SearchRequest::default();
    let payload = verbatim::encode(&request).unwrap();
    let tree: Value = serde_json::from_slice(&payload).unwrap();
    let object = tree.as_object().unwrap();

    assert_eq!(object["SearchType"], "ProfileAndCV");
    assert_eq!(object["SearchOption"], "SmartSearch");
    assert_eq!(object["Sort"]["Column"], "Relevancy");
    assert_eq!(object["Page"]["MaxRecords"], 50);

    // Unset optionals are absent, not null
    assert!(!object.contains_key("Salary"));
    assert!(!object.contains_key("SearchText"));
    assert!(object.values().all(|value| !value.is_null()));
}

/// **VALUE**: Verifies a capitalised service response decodes into the
/// snake_case document types, unknown fields ignored.
///
/// **BUG THIS CATCHES**: The decode-side key walk drifting from the
/// struct field names, which serde would paper over with defaults.
#[test]
fn given_capitalised_response_when_verbatim_decode_then_fields_land() {
    let body = br#"{
        "Candidates": [],
        "TotalResultsCount": 1742,
        "Facets": [
            {"Type": "Towns", "Items": [{"Count": 12, "Value": "Leeds", "IsSelected": false}]}
        ],
        "SomethingNew": true
    }"#;

    let response: SearchResponse = verbatim::decode(body).unwrap();
    assert_eq!(response.total_results_count, 1742);
    assert_eq!(response.facets.len(), 1);
    assert_eq!(response.facets[0].kind, "Towns");
    assert_eq!(response.facets[0].items[0].value, "Leeds");
    assert!(!response.facets[0].items[0].is_selected);
}

/// **VALUE**: Verifies the snake_case codec against a real token body.
///
/// **BUG THIS CATCHES**: The slug codec accidentally re-casing keys that
/// are already snake_case.
#[test]
fn given_token_body_when_slug_decode_then_fields_land() {
    let body = br#"{"access_token": "abc123", "token_type": "bearer", "expires_in": 1200}"#;
    let token: models::auth::TokenResponse = slug::decode(body).unwrap();
    assert_eq!(token.access_token, "abc123");
    assert_eq!(token.token_type.as_deref(), Some("bearer"));
    assert_eq!(token.expires_in, 1200);
}
