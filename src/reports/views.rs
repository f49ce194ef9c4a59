//! Per-page report bundles.
//!
//! Each view gathers everything one dashboard page needs for a given filter
//! state, so a front end can render it from a single value.

use serde::Serialize;

use crate::error::ReportError;
use crate::record::AnimalRecord;
use crate::reports::distribution::{categorical_distribution, cross_tabulation, outcome_distribution};
use crate::reports::shelters::{
    shelter_adoption_summary, shelters_in_tier, tier_counts, tier_shelters, top_n,
};
use crate::reports::tier::AdoptionTier;
use crate::reports::types::{ClassCount, CrossTab, LabelCount, ShelterSummary, TierCounts, YearCount};
use crate::reports::yearly::{count_by_year, distinct_shelter_count, distinct_shelters_by_year};

/// Animal and shelter counts for the selected years.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewReport {
    pub total_animals: usize,
    pub animal_years: Vec<i32>,
    pub yearly_animals: Vec<YearCount>,
    pub selected_animals: usize,
    /// Distinct shelter locations over the whole dataset, regardless of years.
    pub total_shelters: usize,
    pub shelter_years: Vec<i32>,
    pub yearly_shelters: Vec<YearCount>,
}

impl OverviewReport {
    pub fn build(records: &[AnimalRecord], animal_years: &[i32], shelter_years: &[i32]) -> Self {
        let yearly_animals = count_by_year(records, animal_years);
        let selected_animals = yearly_animals.iter().map(|c| c.count).sum();

        Self {
            total_animals: records.len(),
            animal_years: animal_years.to_vec(),
            yearly_animals,
            selected_animals,
            total_shelters: distinct_shelter_count(records),
            shelter_years: shelter_years.to_vec(),
            yearly_shelters: distinct_shelters_by_year(records, shelter_years),
        }
    }
}

/// Outcome, neuter and sex breakdowns plus the adoption ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutcomeReport {
    pub outcomes: Vec<ClassCount>,
    pub neuter: Vec<LabelCount>,
    pub sex: Vec<LabelCount>,
    pub outcome_by_neuter: CrossTab,
    pub outcome_by_sex: CrossTab,
    pub adoption_ranking: Vec<ShelterSummary>,
}

impl OutcomeReport {
    pub fn build(records: &[AnimalRecord]) -> Result<Self, ReportError> {
        Ok(Self {
            outcomes: outcome_distribution(records),
            neuter: categorical_distribution(records, "neuterYn")?,
            sex: categorical_distribution(records, "sexCd")?,
            outcome_by_neuter: cross_tabulation(records, "processStateClass", "neuterYn")?,
            outcome_by_sex: cross_tabulation(records, "processStateClass", "sexCd")?,
            adoption_ranking: shelter_adoption_summary(records),
        })
    }
}

/// Tiered shelter ranking with one tier selected for the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvancedReport {
    pub ranking: Vec<ShelterSummary>,
    pub tier_counts: TierCounts,
    pub selected_tier: AdoptionTier,
    pub selected: Vec<ShelterSummary>,
    pub top: Vec<ShelterSummary>,
}

impl AdvancedReport {
    pub fn build(records: &[AnimalRecord], tier: AdoptionTier, top: usize) -> Self {
        let ranking = tier_shelters(shelter_adoption_summary(records));

        Self {
            tier_counts: tier_counts(&ranking),
            selected_tier: tier,
            selected: shelters_in_tier(&ranking, tier),
            top: top_n(&ranking, top).to_vec(),
            ranking,
        }
    }
}
