use std::collections::HashMap;

use crate::record::{AnimalRecord, ProcessStateClass};
use crate::reports::tier::AdoptionTier;
use crate::reports::types::{ShelterSummary, TierCounts};

/// Adoptions per (shelter name, latitude, longitude), largest first.
///
/// Only records whose outcome class is `Alive` count. The sort is stable:
/// shelters with equal adoptions keep the order in which they first appear.
/// The returned summaries have no tier yet; see [`tier_shelters`].
pub fn shelter_adoption_summary(records: &[AnimalRecord]) -> Vec<ShelterSummary> {
    let mut index: HashMap<(&str, u64, u64), usize> = HashMap::new();
    let mut summaries: Vec<ShelterSummary> = Vec::new();

    for record in records
        .iter()
        .filter(|r| r.process_state_class == ProcessStateClass::Alive)
    {
        let (lat, lng) = record.coordinate_key();
        let key = (record.shelter_name.as_str(), lat, lng);

        match index.get(&key).copied() {
            Some(i) => summaries[i].adoptions += 1,
            None => {
                index.insert(key, summaries.len());
                summaries.push(ShelterSummary {
                    shelter_name: record.shelter_name.clone(),
                    latitude: record.latitude,
                    longitude: record.longitude,
                    adoptions: 1,
                    adoption_tier: None,
                });
            }
        }
    }

    summaries.sort_by(|a, b| b.adoptions.cmp(&a.adoptions));
    summaries
}

/// Assigns [`AdoptionTier`] to every summary from its adoption count.
pub fn tier_shelters(summaries: Vec<ShelterSummary>) -> Vec<ShelterSummary> {
    summaries
        .into_iter()
        .map(|s| ShelterSummary {
            adoption_tier: Some(AdoptionTier::from_adoptions(s.adoptions)),
            ..s
        })
        .collect()
}

/// The first `n` summaries, or all of them when fewer exist.
pub fn top_n(summaries: &[ShelterSummary], n: usize) -> &[ShelterSummary] {
    &summaries[..n.min(summaries.len())]
}

/// Shelters per tier. Summaries without a tier are rated on the fly.
pub fn tier_counts(summaries: &[ShelterSummary]) -> TierCounts {
    summaries
        .iter()
        .fold(TierCounts::default(), |mut counts, summary| {
            match tier_of(summary) {
                AdoptionTier::Good => counts.good += 1,
                AdoptionTier::Okay => counts.okay += 1,
                AdoptionTier::Bad => counts.bad += 1,
            }
            counts
        })
}

/// Summaries in `tier`, keeping their order.
pub fn shelters_in_tier(summaries: &[ShelterSummary], tier: AdoptionTier) -> Vec<ShelterSummary> {
    summaries
        .iter()
        .filter(|s| tier_of(s) == tier)
        .cloned()
        .collect()
}

fn tier_of(summary: &ShelterSummary) -> AdoptionTier {
    summary
        .adoption_tier
        .unwrap_or_else(|| AdoptionTier::from_adoptions(summary.adoptions))
}
