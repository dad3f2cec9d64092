//! Candidate detail document returned by the Search and Candidate endpoints.

use crate::wire;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

crate::wire_enum! {
    /// Rate a salary figure is quoted at.
    SalaryRate {
        Annual => "Annual",
        Day => "Day",
        Hour => "Hour",
    }
}

crate::wire_enum! {
    /// Who last viewed a candidate's profile.
    ViewedBy {
        None => "None",
        Me => "Me",
        OtherRecruiter => "OtherRecruiter",
    }
}

/// A salary figure with its quoting rate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateSalary {
    #[serde(deserialize_with = "wire::enum_opt")]
    pub rate_type: Option<SalaryRate>,

    pub lower_value: f64,

    pub upper_value: f64,
}

/// Application activity counts. Absent when the candidate has asked for
/// their application data to be hidden.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateApplications {
    /// Applications since the last-activity date in the search criteria.
    pub count: i32,

    /// Date used for calculating the applications count.
    #[serde(deserialize_with = "wire::datetime_opt")]
    pub since: Option<DateTime<Utc>>,

    #[serde(deserialize_with = "wire::enum_opt")]
    pub rate_type: Option<SalaryRate>,
}

/// Applications grouped by normalised job title.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationSummary {
    /// Aggregated salaries.
    pub salary: Option<String>,

    /// Aggregated locations.
    pub locations: Option<Vec<String>>,

    pub normalised_job_title: Option<String>,

    /// Number of applications for the normalised job title.
    pub quantity: i32,
}

/// When and by whom this candidate was last viewed by our company.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateViewInfo {
    #[serde(deserialize_with = "wire::datetime_opt")]
    pub view_date: Option<DateTime<Utc>>,

    #[serde(deserialize_with = "wire::enum_opt")]
    pub viewed_by: Option<ViewedBy>,

    /// Profile updated since the view date.
    pub updated_since_viewed: bool,
}

/// A link published on a candidate's profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WebsiteLink {
    #[serde(rename = "type")]
    pub kind: Option<String>,

    pub url: Option<String>,
}

/// A candidate as returned in search results or from the Candidate
/// endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FoundCandidate {
    pub id: i64,

    pub relevancy: i32,

    pub fore_name: Option<String>,

    pub surname: Option<String>,

    pub desired_job_title: Option<String>,

    pub current_job_title: Option<String>,

    pub work_experience: Option<String>,

    pub title: Option<String>,

    pub personal_summary: Option<String>,

    pub cv_snippet: Option<String>,

    pub key_skills: Option<String>,

    pub landline_phone: Option<String>,

    pub mobile_phone: Option<String>,

    pub email: Option<String>,

    /// Anonymised profile: no name, phone or email, and no CV preview or
    /// download available.
    pub is_anonymous: bool,

    pub website_links: Option<Vec<WebsiteLink>>,

    /// Candidate's current location.
    pub current_location: Option<String>,

    pub desired_locations: Option<Vec<String>>,

    /// Distance from the postcode in the search criteria; always 0 when no
    /// postcode was given.
    pub distance: f64,

    pub current_salary: Option<CandidateSalary>,

    pub desired_salary: Option<CandidateSalary>,

    /// Absent when the candidate has hidden their application data.
    pub applications_data: Option<CandidateApplications>,

    /// Details of when this candidate was last viewed by us.
    pub view_info: Option<CandidateViewInfo>,

    /// Summary of applications grouped by normalised job title. Absent
    /// when the candidate has hidden their application data.
    pub applications_summary: Option<Vec<ApplicationSummary>>,

    /// Minutes to reach the searched location by car. Only for travel-time
    /// searches, otherwise always 0.
    pub travel_time_by_car: i32,

    /// Minutes to reach the searched location by public transport. Only
    /// for travel-time searches, otherwise always 0.
    pub travel_time_by_public_transport: i32,

    /// Last application or profile update, whichever is more recent.
    #[serde(deserialize_with = "wire::datetime_opt")]
    pub last_active_date: Option<DateTime<Utc>>,

    /// Requested job types, values from /Dictionary/JobTypes.
    pub job_type: Option<Vec<String>>,

    /// When the candidate registered their profile.
    #[serde(deserialize_with = "wire::datetime_opt")]
    pub registered: Option<DateTime<Utc>>,
}
