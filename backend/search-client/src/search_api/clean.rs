//! Pre-flight normalisation of the search filter document.
//!
//! Several filter dimensions are mutually exclusive on the remote side and
//! a conflicting request is rejected wholesale. Dropping the weaker side of
//! each conflict keeps the search serviceable, at the cost of silently
//! ignoring part of what the caller asked for - each drop is logged.

use models::search_request::SearchRequest;

use std::ops::RangeInclusive;

use log::warn;

/// Travel time the remote accepts, in minutes.
const TRAVEL_TIME_MINUTES: RangeInclusive<i32> = 5..=180;

/// Resolve conflicting filter dimensions in place.
pub(crate) fn clean(request: &mut SearchRequest) {
    clean_salary(request);
    clean_location(request);
}

/// An explicit salary range cannot be combined with salary facet
/// selections, and an inverted range is meaningless.
fn clean_salary(request: &mut SearchRequest) {
    let Some(salary) = &request.salary else {
        return;
    };

    if salary.from > salary.to {
        warn!(
            "Salary range inverted ({} > {}), dropping the range",
            salary.from, salary.to
        );
        request.salary = None;
        return;
    }

    if has_values(&request.salary_annual)
        || has_values(&request.salary_day)
        || has_values(&request.salary_hour)
    {
        warn!("Salary facets selected, dropping the explicit salary range");
        request.salary = None;
    }
}

/// A current-location anchor needs exactly one of radius or travel time,
/// and cannot be combined with desired-location or town facets.
fn clean_location(request: &mut SearchRequest) {
    if request.current_location.is_none() {
        if request.radius.take().is_some() {
            warn!("Radius given without a current location, dropping it");
        }
        if request.travel_time.take().is_some() {
            warn!("Travel time given without a current location, dropping it");
        }
        return;
    }

    if let Some(radius) = request.radius {
        if radius < 0 {
            warn!("Negative radius {radius}, dropping it");
            request.radius = None;
        }
    }

    if let Some(travel_time) = request.travel_time {
        if !TRAVEL_TIME_MINUTES.contains(&travel_time) {
            warn!(
                "Travel time {travel_time} outside {}..={} minutes, dropping it",
                TRAVEL_TIME_MINUTES.start(),
                TRAVEL_TIME_MINUTES.end()
            );
            request.travel_time = None;
        }
    }

    match (request.radius, request.travel_time) {
        (None, None) => {
            warn!("Current location without radius or travel time, dropping it");
            request.current_location = None;
            return;
        }
        (Some(_), Some(_)) => {
            // Radius wins when both are given
            warn!("Both radius and travel time given, dropping the travel time");
            request.travel_time = None;
        }
        _ => {}
    }

    if has_values(&request.desired_location) {
        warn!("Desired locations selected alongside a current location, dropping them");
        request.desired_location = None;
    }

    if has_values(&request.towns) {
        warn!("Town facets selected alongside a current location, dropping them");
        request.towns = None;
    }
}

fn has_values(facet: &Option<Vec<String>>) -> bool {
    facet.as_ref().is_some_and(|values| !values.is_empty())
}
