//! Controlled-vocabulary dictionaries exposed by the service.

crate::wire_enum! {
    /// A dictionary of allowed filter values, fetched per brand. The wire
    /// path segment is the canonical capitalised name.
    Dictionary {
        CareerStructureSectors => "CareerStructureSectors",
        CatererEmployerTypes => "CatererEmployerTypes",
        CatererJobTypes => "CatererJobTypes",
        Countries => "Countries",
        EducationLevel => "EducationLevel",
        TotalJobsIndustrySectors => "TotalJobsIndustrySectors",
        JobHours => "JobHours",
        CareerStructureJobRoles => "CareerStructureJobRoles",
        JobTypes => "JobTypes",
        Languages => "Languages",
        CatererPositions => "CatererPositions",
        SalaryRateType => "SalaryRateType",
        WorkEligibility => "WorkEligibility",
        SortColumns => "SortColumns",
        SearchableLocations => "SearchableLocations",
        HideCandidatesViewed => "HideCandidatesViewed",
        JobTitleType => "JobTitleType",
        CvProfileType => "CvProfileType",
    }
}
