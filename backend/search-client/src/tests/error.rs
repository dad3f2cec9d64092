// Unit tests for error conversion location capture

use crate::codec::slug;
use crate::error::{CodecError, SearchApiError};

use models::auth::TokenResponse;

/// **VALUE**: Verifies `CodecError::from` records where the conversion
/// was invoked, not the inside of the `From` impl.
///
/// **WHY THIS MATTERS**: Codec failures are raised from two codecs and
/// the classifier; the embedded location is the only way to tell which
/// call path produced a given log line.
///
/// **BUG THIS CATCHES**: `#[track_caller]` dropped from the `From`
/// impl, pinning every JSON error to the same line in `error/codec.rs`.
#[test]
fn given_json_error_when_converted_then_call_site_recorded() {
    let json_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();

    let expected_line = line!() + 1;
    let error = CodecError::from(json_error);

    let CodecError::Json { location, .. } = error;
    assert!(location.file.contains("tests/error.rs"), "got {}", location.file);
    assert_eq!(location.line, expected_line);
}

/// **VALUE**: Verifies a decode failure inside a codec points at the
/// codec's own `?` site.
///
/// **BUG THIS CATCHES**: The conversion happening somewhere other than
/// the decoding function, which would misattribute every malformed-body
/// failure.
#[test]
fn given_malformed_payload_when_decoded_then_codec_site_recorded() {
    let error = slug::decode::<TokenResponse>(b"{ truncated").unwrap_err();

    let CodecError::Json { location, .. } = error;
    assert!(location.file.contains("codec/slug.rs"), "got {}", location.file);
}

/// **VALUE**: Verifies the same capture shape on the client-level error.
#[test]
fn given_url_error_when_converted_then_call_site_recorded() {
    let parse_error = url::Url::parse("not a url").unwrap_err();

    let expected_line = line!() + 1;
    let error = SearchApiError::from(parse_error);

    let SearchApiError::UrlParse { location, .. } = error else {
        panic!("expected UrlParse, got {error}");
    };
    assert!(location.file.contains("tests/error.rs"), "got {}", location.file);
    assert_eq!(location.line, expected_line);
}
