// Unit tests for brand configuration loading

use crate::config::{BrandSettings, RawBrandSettings};

fn complete_raw(name: Option<&str>) -> RawBrandSettings {
    RawBrandSettings {
        name: name.map(str::to_string),
        url: Some("https://brand-a.example".to_string()),
        client_id: Some("client-1".to_string()),
        client_secret: Some("secret-1".to_string()),
        recruiter_username: Some("recruiter@firm.example".to_string()),
        recruiter_password: Some("hunter2".to_string()),
    }
}

/// **VALUE**: Verifies incomplete entries are excluded rather than
/// carried forward half-filled.
///
/// **WHY THIS MATTERS**: A brand without credentials would fail on every
/// authenticate call and poison the fail-fast bundle for the brands that
/// are configured properly.
///
/// **BUG THIS CATCHES**: Empty strings passing the presence check and
/// producing a brand that can never sign in.
#[test]
fn given_incomplete_entries_when_from_raw_then_excluded() {
    let missing_secret = RawBrandSettings {
        client_secret: None,
        ..complete_raw(Some("BrandB"))
    };
    let empty_username = RawBrandSettings {
        recruiter_username: Some(String::new()),
        ..complete_raw(Some("BrandC"))
    };

    let brands = BrandSettings::from_raw([
        complete_raw(Some("BrandA")),
        missing_secret,
        empty_username,
    ]);

    assert_eq!(brands.len(), 1);
    assert_eq!(brands[0].name, "BrandA");
}

/// **VALUE**: Verifies a nameless entry is still usable, addressed by
/// its URL.
#[test]
fn given_entry_without_name_when_from_raw_then_url_is_the_name() {
    let brands = BrandSettings::from_raw([complete_raw(None)]);

    assert_eq!(brands.len(), 1);
    assert_eq!(brands[0].name, "https://brand-a.example");
}

/// **VALUE**: Verifies the capitalised key aliases configuration sources
/// conventionally use are accepted alongside snake_case.
///
/// **BUG THIS CATCHES**: An alias dropped from one field, silently
/// nulling it and excluding the whole brand.
#[test]
fn given_capitalised_keys_when_deserialize_then_fields_land() {
    let json = r#"[{
        "Name": "BrandA",
        "Url": "https://brand-a.example",
        "ClientID": "client-1",
        "ClientSecret": "secret-1",
        "RecruiterUsername": "recruiter@firm.example",
        "RecruiterPassword": "hunter2"
    }]"#;

    let raw: Vec<RawBrandSettings> = serde_json::from_str(json).unwrap();
    let brands = BrandSettings::from_raw(raw);

    assert_eq!(brands.len(), 1);
    assert_eq!(brands[0].client_id, "client-1");
    assert_eq!(brands[0].client_secret.as_str(), "secret-1");
    assert_eq!(brands[0].recruiter_username, "recruiter@firm.example");
}

/// **VALUE**: Verifies credentials do not leak through Debug output.
#[test]
fn given_brand_when_debug_formatted_then_secrets_redacted() {
    let brands = BrandSettings::from_raw([complete_raw(Some("BrandA"))]);
    let formatted = format!("{:?}", brands[0]);

    assert!(!formatted.contains("secret-1"));
    assert!(!formatted.contains("hunter2"));
}
