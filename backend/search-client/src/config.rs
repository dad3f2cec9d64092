//! Brand endpoint configuration.

use common::RedactedSecret;

use serde::Deserialize;

/// One configured brand of the candidate-search service. Immutable once
/// loaded; owned by the client for its lifetime.
#[derive(Debug, Clone)]
pub struct BrandSettings {
    /// The name operations use to select this brand.
    pub name: String,

    /// Base URL of the brand's recruiter site.
    pub url: String,

    /// The aggregator's client id for this brand.
    pub client_id: String,

    /// The aggregator's client secret for this brand.
    pub client_secret: RedactedSecret,

    /// The recruiter's username with this brand.
    pub recruiter_username: String,

    /// The recruiter's password with this brand.
    pub recruiter_password: RedactedSecret,
}

/// A brand entry as read from an external configuration source, where
/// every field may be missing. The aliases accept the capitalised key
/// style such sources conventionally use.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawBrandSettings {
    #[serde(alias = "Name")]
    pub name: Option<String>,

    #[serde(alias = "Url")]
    pub url: Option<String>,

    #[serde(alias = "ClientID", alias = "ClientId")]
    pub client_id: Option<String>,

    #[serde(alias = "ClientSecret")]
    pub client_secret: Option<String>,

    #[serde(alias = "RecruiterUsername")]
    pub recruiter_username: Option<String>,

    #[serde(alias = "RecruiterPassword")]
    pub recruiter_password: Option<String>,
}

impl BrandSettings {
    /// Keep only complete entries; an entry missing any required field is
    /// silently excluded. The name falls back to the URL when absent.
    pub fn from_raw(raw: impl IntoIterator<Item = RawBrandSettings>) -> Vec<Self> {
        raw.into_iter().filter_map(Self::from_entry).collect()
    }

    fn from_entry(entry: RawBrandSettings) -> Option<Self> {
        let url = entry.url.filter(|value| !value.is_empty())?;
        let client_id = entry.client_id.filter(|value| !value.is_empty())?;
        let client_secret = entry.client_secret.filter(|value| !value.is_empty())?;
        let recruiter_username = entry.recruiter_username.filter(|value| !value.is_empty())?;
        let recruiter_password = entry.recruiter_password.filter(|value| !value.is_empty())?;

        let name = entry
            .name
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| url.clone());

        Some(Self {
            name,
            url,
            client_id,
            client_secret: RedactedSecret::new(client_secret),
            recruiter_username,
            recruiter_password: RedactedSecret::new(recruiter_password),
        })
    }
}
