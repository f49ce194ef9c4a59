use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::record::AnimalRecord;
use crate::reports::types::YearCount;

/// Default year filters for the overview page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearSelection {
    pub animal_years: Vec<i32>,
    pub shelter_years: Vec<i32>,
}

/// Distinct years in order of first appearance.
pub fn available_years(records: &[AnimalRecord]) -> Vec<i32> {
    let mut seen = HashSet::new();
    records
        .iter()
        .map(AnimalRecord::year)
        .filter(|year| seen.insert(*year))
        .collect()
}

/// Picks the overview defaults from `years`: the fourth year (or the last one
/// when fewer exist) for animal counts and the first four for shelter counts.
pub fn default_selection(years: &[i32]) -> YearSelection {
    let animal_years = years.get(3).or_else(|| years.last()).copied();
    YearSelection {
        animal_years: animal_years.into_iter().collect(),
        shelter_years: years.iter().take(4).copied().collect(),
    }
}

pub fn filter_by_years<'a>(
    records: &'a [AnimalRecord],
    years: &[i32],
) -> impl Iterator<Item = &'a AnimalRecord> {
    let years: HashSet<i32> = years.iter().copied().collect();
    records.iter().filter(move |r| years.contains(&r.year()))
}

/// Selected years in caller order, first occurrence wins.
fn unique_in_order(years: &[i32]) -> Vec<i32> {
    let mut seen = HashSet::new();
    years.iter().copied().filter(|y| seen.insert(*y)).collect()
}

/// Number of records per selected year, in the order of `selected_years`.
/// A selected year with no records reports 0.
pub fn count_by_year(records: &[AnimalRecord], selected_years: &[i32]) -> Vec<YearCount> {
    if records.is_empty() {
        return Vec::new();
    }

    let mut counts: HashMap<i32, usize> = HashMap::new();
    for record in filter_by_years(records, selected_years) {
        *counts.entry(record.year()).or_default() += 1;
    }

    unique_in_order(selected_years)
        .into_iter()
        .map(|year| YearCount {
            year,
            count: counts.get(&year).copied().unwrap_or(0),
        })
        .collect()
}

/// Number of unique (latitude, longitude) pairs across all records.
///
/// This ignores any year filter. The overview shows it next to the filtered
/// panels as a global figure.
pub fn distinct_shelter_count(records: &[AnimalRecord]) -> usize {
    records
        .iter()
        .map(AnimalRecord::coordinate_key)
        .collect::<HashSet<_>>()
        .len()
}

/// Number of distinct shelter names per selected year.
pub fn distinct_shelters_by_year(
    records: &[AnimalRecord],
    selected_years: &[i32],
) -> Vec<YearCount> {
    if records.is_empty() {
        return Vec::new();
    }

    let mut names: HashMap<i32, HashSet<&str>> = HashMap::new();
    for record in filter_by_years(records, selected_years) {
        names
            .entry(record.year())
            .or_default()
            .insert(record.shelter_name.as_str());
    }

    unique_in_order(selected_years)
        .into_iter()
        .map(|year| YearCount {
            year,
            count: names.get(&year).map_or(0, HashSet::len),
        })
        .collect()
}
