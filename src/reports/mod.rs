//! Report aggregation over the loaded intake records.
//!
//! Every function here is pure: it reads a slice of [`AnimalRecord`]s plus
//! the caller's filters and returns fresh values. Empty input yields empty
//! output rather than an error.
//!
//! [`AnimalRecord`]: crate::record::AnimalRecord

pub mod distribution;
pub mod shelters;
pub mod tier;
pub mod types;
pub mod views;
pub mod yearly;

#[cfg(test)]
mod test_support;

pub use distribution::{categorical_distribution, cross_tabulation, outcome_distribution};
pub use shelters::{shelter_adoption_summary, shelters_in_tier, tier_counts, tier_shelters, top_n};
pub use tier::{AdoptionTier, BAD_THRESHOLD, GOOD_THRESHOLD};
pub use types::{CategoryField, ClassCount, CrossTab, LabelCount, ShelterSummary, TierCounts, YearCount};
pub use views::{AdvancedReport, OutcomeReport, OverviewReport};
pub use yearly::{
    YearSelection, available_years, count_by_year, default_selection, distinct_shelter_count,
    distinct_shelters_by_year, filter_by_years,
};
