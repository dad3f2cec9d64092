//! Search result document returned by the Search endpoint.

use crate::found_candidate::FoundCandidate;

use serde::{Deserialize, Serialize};

/// One page of search results, with optional facet aggregates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    pub candidates: Vec<FoundCandidate>,

    pub total_results_count: i32,

    /// Present only when facets were requested.
    pub facets: Vec<Facet>,
}

/// A server-reported aggregate over one filterable dimension.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Facet {
    /// Unique facet type strong name.
    #[serde(rename = "type")]
    pub kind: String,

    /// Aggregated counts in this facet.
    pub items: Vec<FacetItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FacetItem {
    /// Total number of candidates with this value selected in their profile.
    pub count: i32,

    /// Value for the facet.
    pub value: String,

    /// Whether this facet value was used in the request document.
    pub is_selected: bool,
}
