//! Search filter/sort/paging document sent to the Search endpoint.

use crate::date_criteria::DateCriteria;
use crate::wire;

use serde::{Deserialize, Serialize};

crate::wire_enum! {
    /// What the search text is matched against.
    SearchType {
        JobTitle => "JobTitle",
        ProfileAndCv => "ProfileAndCV",
    }
}

crate::wire_enum! {
    /// How the search text is interpreted.
    SearchOption {
        SmartSearch => "SmartSearch",
        ExactMatch => "ExactMatch",
    }
}

/// How to sort the results.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SortCriteria {
    /// True if descending.
    pub descending: bool,

    /// Allowed values: /Dictionary/SortColumns
    pub column: String,
}

impl Default for SortCriteria {
    fn default() -> Self {
        Self {
            descending: true,
            column: "Relevancy".to_string(),
        }
    }
}

/// How many records and what page number.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PageCriteria {
    /// Max number of candidates to be returned, between 1 and 50.
    pub max_records: i32,

    /// 1-indexed results page to be returned.
    pub page: i32,
}

impl Default for PageCriteria {
    fn default() -> Self {
        Self {
            max_records: 50,
            page: 1,
        }
    }
}

/// Explicit salary range filter. Mutually exclusive with the salary facet
/// selections on [`SearchRequest`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SalaryRange {
    /// Allowed values: /Dictionary/SalaryRateType
    pub salary_rate_type: String,

    /// Salary min range.
    pub from: f64,

    /// Salary max range.
    pub to: f64,

    /// Include candidates with unspecified salaries. Defaults to false
    /// remotely when omitted.
    pub unspecified: Option<bool>,
}

impl Default for SalaryRange {
    fn default() -> Self {
        Self {
            salary_rate_type: "Annual Salary".to_string(),
            from: 0.0,
            to: 999_999.0,
            unspecified: None,
        }
    }
}

/// Targeted search block scoping the text search to specific CV regions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetedSearch {
    /// Allowed values: /Dictionary/JobTitleType
    pub job_title_type: String,

    pub search_job_titles: Option<String>,

    pub search_skills: Option<String>,

    pub search_cv_profile: Option<String>,

    /// Allowed values: /Dictionary/CvProfileType
    pub cv_profile_type: String,
}

impl Default for TargetedSearch {
    fn default() -> Self {
        Self {
            job_title_type: "Current".to_string(),
            search_job_titles: None,
            search_skills: None,
            search_cv_profile: None,
            cv_profile_type: "Both".to_string(),
        }
    }
}

/// Search request to send to the Search endpoint.
///
/// Several filter dimensions are mutually exclusive on the remote side;
/// the client normalises conflicts away before transmission rather than
/// letting the whole request be rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchRequest {
    /// How to sort the results.
    pub sort: SortCriteria,

    /// How many records and what page number.
    pub page: PageCriteria,

    /// Date of last candidate activity. Either date or facet string.
    pub last_activity_date: Option<DateCriteria>,

    #[serde(deserialize_with = "wire::enum_opt")]
    pub search_type: Option<SearchType>,

    #[serde(deserialize_with = "wire::enum_opt")]
    pub search_option: Option<SearchOption>,

    /// The boolean search text.
    pub search_text: Option<String>,

    /// Optional salary limits.
    pub salary: Option<SalaryRange>,

    /// Facet parameter, values returned in the "SalaryHour" facet.
    pub salary_hour: Option<Vec<String>>,

    /// Facet parameter, values returned in the "SalaryDay" facet.
    pub salary_day: Option<Vec<String>>,

    /// Facet parameter, values returned in the "SalaryAnnual" facet.
    pub salary_annual: Option<Vec<String>>,

    /// Facet parameter, values returned in the "JD" facet.
    pub job_description: Option<Vec<String>>,

    /// Facet parameter, values returned in the "Discipline" facet.
    pub discipline: Option<Vec<String>>,

    /// Allowed values: /Dictionary/Languages
    pub languages: Option<Vec<String>>,

    /// Allowed values: /Dictionary/EducationLevel or the
    /// "HighestLevelOfEducation" facet.
    pub highest_level_of_education: Option<Vec<String>>,

    /// Allowed values: /Dictionary/Countries or the "Countries" facet.
    pub countries: Option<Vec<String>>,

    /// Allowed values: /Dictionary/JobHours or the "JobHours" facet.
    pub job_hours: Option<Vec<String>>,

    /// Allowed values: /Dictionary/DesiredLocations. Cannot be combined
    /// with a current-location search.
    pub desired_location: Option<Vec<String>>,

    /// Facet parameter, values returned in the "Towns" facet. Not
    /// available when searching by desired location.
    pub towns: Option<Vec<String>>,

    /// Allowed values: /Dictionary/WorkEligibility
    pub eligibility: Option<Vec<String>>,

    /// Location anchor: /Dictionary/SearchableLocations or a full or
    /// outward postcode. Requires a radius or a travel time.
    pub current_location: Option<String>,

    /// Distance in miles from the current location.
    pub radius: Option<i32>,

    /// Travel time in minutes from the current location, range [5, 180].
    pub travel_time: Option<i32>,

    /// Include candidates with no desired location, assumed willing to
    /// relocate. Only meaningful with a current location.
    pub willing_to_relocate: Option<bool>,

    /// Allowed values: /Dictionary/HideCandidatesViewed
    pub hide_candidates_viewed_since: Option<String>,

    /// Facet parameter, values returned in the "DrivingLicence" facet.
    pub driving_licence: Option<Vec<String>>,

    /// Facet parameter, values returned in the "GraduationYear" facet.
    pub graduation_year: Option<Vec<String>>,

    /// Facet parameter, values returned in the "NoticePeriod" facet.
    pub notice_period: Option<Vec<String>>,

    pub targeted_search: Option<TargetedSearch>,

    /// Role types looked for, allowed values: /Dictionary/JobTypes
    pub job_type_profile: Option<Vec<String>>,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            sort: SortCriteria::default(),
            page: PageCriteria::default(),
            last_activity_date: Some(DateCriteria::days_ago(90)),
            search_type: Some(SearchType::ProfileAndCv),
            search_option: Some(SearchOption::SmartSearch),
            search_text: None,
            salary: None,
            salary_hour: None,
            salary_day: None,
            salary_annual: None,
            job_description: None,
            discipline: None,
            languages: None,
            highest_level_of_education: None,
            countries: None,
            job_hours: None,
            desired_location: None,
            towns: None,
            eligibility: None,
            current_location: None,
            radius: None,
            travel_time: None,
            willing_to_relocate: None,
            hide_candidates_viewed_since: None,
            driving_licence: None,
            graduation_year: None,
            notice_period: None,
            targeted_search: None,
            job_type_profile: None,
        }
    }
}
