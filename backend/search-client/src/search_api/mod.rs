//! The federated client itself.

mod clean;

pub(crate) use clean::clean;

use crate::archive;
use crate::classify::classify_failure;
use crate::codec::{slug, verbatim};
use crate::config::BrandSettings;
use crate::error::SearchApiError;
use crate::token::SessionToken;
use crate::{CANDIDATE_SEARCH_API_PREFIX, CV_DATABASE_SCOPE, TOKEN_ENDPOINT_PATH};

use common::ErrorLocation;
use models::auth::TokenResponse;
use models::cv::CvFile;
use models::dictionary::Dictionary;
use models::errors::ServiceErrorDetail;
use models::found_candidate::FoundCandidate;
use models::quota::QuotaResponse;
use models::search_request::SearchRequest;
use models::search_response::SearchResponse;
use models::wire::WireEnum;

use std::collections::HashMap;
use std::panic::Location;
use std::time::Duration;

use log::{error, info, warn};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use url::Url;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const CLIENT_USER_ID_HEADER: &str = "client_user_id";
const CLIENT_DEVICE_ID_HEADER: &str = "client_device_id";

/// Ceiling for the aggregate expiry; brands reporting more are clamped.
const DEFAULT_TOKEN_LIFETIME_SECONDS: i32 = 3600;

/// Client for the federated candidate-search API.
///
/// Holds one shared HTTP connection pool; create it once and reuse it
/// across all calls. Every individual exchange is bounded by a 30 second
/// timeout and never retried - callers own retry policy.
pub struct SearchApiClient {
    client: Client,
    application: String,
    brands: Vec<BrandSettings>,
}

impl SearchApiClient {
    /// Create a client over the given brands. `application` names this
    /// caller in the device-id header sent with every request.
    pub fn new(
        application: impl Into<String>,
        brands: Vec<BrandSettings>,
    ) -> Result<Self, SearchApiError> {
        let client = Client::builder().timeout(DEFAULT_TIMEOUT).build()?;

        if !brands.is_empty() {
            let names: Vec<&str> = brands.iter().map(|brand| brand.name.as_str()).collect();
            info!("Candidate-search brands configured: {}", names.join(", "));
        }

        Ok(Self {
            client,
            application: application.into(),
            brands,
        })
    }

    /// Exchange recruiter credentials for a bearer token on every
    /// configured brand, sequentially.
    ///
    /// Fails fast: the first brand that rejects its credentials aborts the
    /// whole call and no partial token bundle is returned. With no brands
    /// configured there is nothing to authenticate and `Ok(None)` comes
    /// back.
    pub async fn authenticate(
        &self,
        user: &str,
        session: &str,
    ) -> Result<Option<SessionToken>, SearchApiError> {
        if self.brands.is_empty() {
            return Ok(None);
        }

        let device_id = self.device_id(session);
        let mut tokens = HashMap::new();
        let mut expires = DEFAULT_TOKEN_LIFETIME_SECONDS;

        for brand in &self.brands {
            let token_url = join_url(&brand.url, TOKEN_ENDPOINT_PATH)?;
            let form = [
                ("client_id", brand.client_id.as_str()),
                ("client_secret", brand.client_secret.as_str()),
                ("client_user_id", user),
                ("username", brand.recruiter_username.as_str()),
                ("password", brand.recruiter_password.as_str()),
                ("grant_type", "password"),
                ("scope", CV_DATABASE_SCOPE),
                ("client_device_id", device_id.as_str()),
            ];

            let response = self.client.post(token_url).form(&form).send().await?;
            let status = response.status();

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let detail = slug::decode::<ServiceErrorDetail>(body.as_bytes()).ok();
                return Err(SearchApiError::Authentication {
                    message: detail
                        .as_ref()
                        .map(ToString::to_string)
                        .unwrap_or_else(|| format!("HTTP {status}")),
                    detail,
                    location: ErrorLocation::from(Location::caller()),
                });
            }

            let payload = response.bytes().await?;
            let token: TokenResponse = slug::decode(&payload)?;
            tokens.insert(brand.name.clone(), token.access_token);

            // Take the shortest expiration across brands
            expires = expires.min(token.expires_in);
        }

        Ok(Some(SessionToken::new(user, session, tokens, expires)))
    }

    /// Run a candidate search against one brand.
    ///
    /// The filter document is normalised in place before transmission -
    /// conflicting filter dimensions are cleared, not rejected - so the
    /// caller must not assume `search` is unchanged afterwards.
    pub async fn search(
        &self,
        token: &SessionToken,
        source: &str,
        search: &mut SearchRequest,
        include_facets: bool,
        include_candidates_activity: bool,
    ) -> Result<Option<SearchResponse>, SearchApiError> {
        clean(search);

        let path = match (include_facets, include_candidates_activity) {
            (true, true) => "Search?includeFacets=true&includeCandidatesActivity=true",
            (true, false) => "Search?includeFacets=true",
            (false, true) => "Search?includeCandidatesActivity=true",
            (false, false) => "Search",
        };

        let body = verbatim::encode(search)?;
        self.request_json(token, source, Method::POST, path, Some(body))
            .await
    }

    /// Get the candidate detail from a brand.
    ///
    /// Calling this will use the quota or bill for the candidate.
    pub async fn candidate(
        &self,
        token: &SessionToken,
        source: &str,
        id: i64,
    ) -> Result<Option<FoundCandidate>, SearchApiError> {
        self.request_json(token, source, Method::GET, &format!("Candidate/{id}"), None)
            .await
    }

    /// Download the CVs for a set of candidates.
    ///
    /// Calling this will use the quota or bill for the candidates. An
    /// unresolved brand yields an empty collection.
    pub async fn cv(
        &self,
        token: &SessionToken,
        source: &str,
        ids: &[i64],
    ) -> Result<Vec<CvFile>, SearchApiError> {
        let joined = ids
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");

        let Some(response) = self
            .request_raw(token, source, Method::GET, &format!("cv/{joined}"), None)
            .await?
        else {
            return Ok(Vec::new());
        };

        let payload = response.bytes().await?;
        Ok(archive::parse_cv_archive(&payload)?)
    }

    /// Download a single candidate's CV.
    ///
    /// The archive entry whose parsed id matches is preferred. When no
    /// entry matches but the archive is not empty, the first entry is
    /// returned with its id forced to the requested one - entry names are
    /// not reliable enough to throw content away over.
    pub async fn cv_single(
        &self,
        token: &SessionToken,
        source: &str,
        id: i64,
    ) -> Result<Option<CvFile>, SearchApiError> {
        let files = self.cv(token, source, &[id]).await?;

        // Try for a matching id first
        if let Some(matched) = files.iter().find(|file| file.id == id) {
            return Ok(Some(matched.clone()));
        }

        let Some(mut fallback) = files.into_iter().next() else {
            return Ok(None);
        };

        warn!(
            "CV file id not matched: {id}!={} {}",
            fallback.id, fallback.filename
        );
        fallback.id = id;
        Ok(Some(fallback))
    }

    /// Get the quota available to the given token on one brand.
    pub async fn quota(
        &self,
        token: &SessionToken,
        source: &str,
    ) -> Result<Option<QuotaResponse>, SearchApiError> {
        self.request_json(token, source, Method::GET, "Usage/Quota", None)
            .await
    }

    /// Fetch one controlled-vocabulary dictionary from a brand.
    pub async fn dictionary(
        &self,
        token: &SessionToken,
        source: &str,
        dictionary: Dictionary,
    ) -> Result<Option<Vec<String>>, SearchApiError> {
        let path = format!("Dictionary/{}", dictionary.as_wire());
        self.request_json(token, source, Method::GET, &path, None)
            .await
    }

    /// Issue an authenticated request to one brand and decode a JSON
    /// response through the verbatim codec.
    async fn request_json<R: DeserializeOwned>(
        &self,
        token: &SessionToken,
        source: &str,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Option<R>, SearchApiError> {
        let Some(response) = self.request_raw(token, source, method, path, body).await? else {
            return Ok(None);
        };

        let payload = response.bytes().await?;
        Ok(Some(verbatim::decode(&payload)?))
    }

    /// Issue an authenticated request to one brand.
    ///
    /// An unknown brand or a brand missing from the token bundle yields
    /// `Ok(None)` - federated callers expect partial coverage, so "no data
    /// from this source" is not an error. Non-2xx responses are classified
    /// into typed errors and propagated.
    async fn request_raw(
        &self,
        token: &SessionToken,
        source: &str,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Option<reqwest::Response>, SearchApiError> {
        let Some((brand, bearer)) = self.resolve(token, source) else {
            return Ok(None);
        };

        let url = join_url(&brand.url, &format!("{CANDIDATE_SEARCH_API_PREFIX}/{path}"))?;

        let mut request = self
            .client
            .request(method, url)
            .header(reqwest::header::AUTHORIZATION, format!("bearer {bearer}"))
            .header(CLIENT_USER_ID_HEADER, token.user())
            .header(CLIENT_DEVICE_ID_HEADER, self.device_id(token.session()));

        if let Some(body) = body {
            request = request
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body);
        }

        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(Some(response));
        }

        let body = response.text().await.unwrap_or_default();
        Err(classify_failure(status, &body))
    }

    /// Case-insensitive lookup of a brand and its bearer token.
    fn resolve<'a>(
        &'a self,
        token: &'a SessionToken,
        source: &str,
    ) -> Option<(&'a BrandSettings, &'a str)> {
        let Some(brand) = self
            .brands
            .iter()
            .find(|brand| brand.name.eq_ignore_ascii_case(source))
        else {
            error!("No brand configured for {source}");
            return None;
        };

        let Some(bearer) = token.token_for(&brand.name) else {
            let available: Vec<&str> = token.brands().collect();
            error!(
                "Session token not found for {}, available: {}",
                brand.name,
                available.join(", ")
            );
            return None;
        };

        Some((brand, bearer))
    }

    fn device_id(&self, session: &str) -> String {
        format!("{}+{}", self.application, session)
    }
}

/// Join a relative path under a brand's base URL, tolerating a trailing
/// slash on the base.
fn join_url(base: &str, path: &str) -> Result<Url, SearchApiError> {
    Ok(Url::parse(&format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path
    ))?)
}
