use std::path::Path;
use std::sync::Arc;

use shelter_report::loader::{DatasetCache, load_boundaries, load_records};
use shelter_report::map::{adoption_markers, tier_markers};
use shelter_report::record::ProcessStateClass;
use shelter_report::reports::{
    AdoptionTier, AdvancedReport, OutcomeReport, OverviewReport, TierCounts, YearCount,
    available_years, categorical_distribution, count_by_year, default_selection,
    distinct_shelter_count, outcome_distribution, shelter_adoption_summary,
};

const RECORDS: &str = "tests/fixtures/shelter_records.csv";
const PROVINCES: &str = "tests/fixtures/provinces.json";

#[test]
fn test_full_pipeline() {
    let records = load_records(Path::new(RECORDS)).expect("Failed to load records");
    assert_eq!(records.len(), 10);
    assert_eq!(records[0].shelter_name, "서울동물복지지원센터");
    assert_eq!(records[5].shelter_name, "대구유기동물보호소");

    let years = available_years(&records);
    assert_eq!(years, vec![2021, 2022, 2023, 2024]);

    let selection = default_selection(&years);
    assert_eq!(
        count_by_year(&records, &selection.animal_years),
        vec![YearCount { year: 2024, count: 3 }]
    );
    assert_eq!(distinct_shelter_count(&records), 4);

    let outcomes = outcome_distribution(&records);
    assert_eq!(outcomes[0].class, ProcessStateClass::Alive);
    assert_eq!(outcomes[0].count, 7);

    let neuter = categorical_distribution(&records, "neuterYn").unwrap();
    assert_eq!(neuter[0].label, "Yes");
    assert_eq!(neuter[0].count, 4);

    let ranking = shelter_adoption_summary(&records);
    let names: Vec<_> = ranking.iter().map(|s| s.shelter_name.as_str()).collect();
    assert_eq!(
        names,
        vec!["부산동물보호센터", "서울동물복지지원센터", "광주동물보호소"]
    );
    assert_eq!(ranking[0].adoptions, 3);
}

#[test]
fn test_report_views() {
    let records = load_records(Path::new(RECORDS)).unwrap();

    let overview = OverviewReport::build(&records, &[2024], &[2021, 2022, 2023, 2024]);
    assert_eq!(overview.selected_animals, 3);
    assert_eq!(
        overview.yearly_shelters.iter().map(|c| c.count).collect::<Vec<_>>(),
        vec![1, 1, 1, 2]
    );

    let outcome = OutcomeReport::build(&records).unwrap();
    assert_eq!(outcome.outcome_by_neuter.total(), records.len());
    assert_eq!(
        outcome.outcome_by_neuter.get(ProcessStateClass::Death, "알 수 없음"),
        1
    );

    let advanced = AdvancedReport::build(&records, AdoptionTier::Bad, 15);
    assert_eq!(advanced.tier_counts, TierCounts { good: 0, okay: 0, bad: 3 });
    assert_eq!(advanced.top.len(), 3);
    assert_eq!(advanced.selected.len(), 3);

    assert_eq!(adoption_markers(&outcome.adoption_ranking).features.len(), 3);
    assert_eq!(tier_markers(&advanced.selected).features.len(), 3);
}

#[test]
fn test_cached_reload_is_value_equal() {
    let mut cache = DatasetCache::new();
    let first = cache.load_records(RECORDS).unwrap();
    let second = cache.load_records(RECORDS).unwrap();
    assert!(Arc::ptr_eq(&first, &second));

    let uncached = load_records(Path::new(RECORDS)).unwrap();
    assert_eq!(*first, uncached);
}

#[test]
fn test_boundaries_pass_through() {
    let boundary = load_boundaries(Path::new(PROVINCES)).unwrap();
    assert_eq!(boundary.feature_count(), 2);

    let value = serde_json::to_value(&boundary).unwrap();
    assert_eq!(value["features"][1]["properties"]["CTP_KOR_NM"], "부산광역시");
}
