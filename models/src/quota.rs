//! Usage quota document.

use crate::wire;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Quota available to the authenticated recruiter on one brand.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuotaResponse {
    pub company_uses_credit: bool,

    pub candidates_viewed: Option<i32>,

    pub candidates_remaining: Option<i32>,

    #[serde(deserialize_with = "wire::datetime_opt")]
    pub quota_refresh_date: Option<DateTime<Utc>>,
}
