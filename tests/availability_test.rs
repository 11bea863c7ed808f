//! Tests for merging stored surveys with generated top-ups.

mod common;

use std::collections::HashMap;

use nyota::generator::{self, MIN_SURVEYS_PER_COMPANY, SurveyGenerator};
use nyota::models::survey::{PersistedSurvey, Survey};
use common::{builtin, seeded, small_catalog, stored};

fn counts_by_company(surveys: &[Survey]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for s in surveys {
        *counts.entry(s.company().unwrap_or_default().to_string()).or_insert(0) += 1;
    }
    counts
}

#[test]
fn test_empty_store_fills_every_banking_company() {
    let catalog = builtin();
    let mut generator = SurveyGenerator::new(&catalog, seeded(20));
    let surveys = generator.ensure_surveys_available(Vec::new(), "banking");

    assert_eq!(surveys.len(), 48);
    assert!(surveys.iter().all(Survey::is_generated));
    assert!(surveys.iter().all(|s| s.industry() == Some("banking")));
    let counts = counts_by_company(&surveys);
    assert_eq!(counts.len(), 12);
    assert!(counts.values().all(|&n| n == MIN_SURVEYS_PER_COMPANY));
}

#[test]
fn test_single_stored_survey_kept_and_topped_up() {
    let catalog = builtin();
    let original = stored("db-kcb-1", Some("KCB Bank"));
    let mut generator = SurveyGenerator::new(&catalog, seeded(21));
    let surveys = generator.ensure_surveys_available(vec![original.clone()], "banking");

    assert_eq!(surveys.len(), 48);
    let kept: Vec<_> = surveys.iter().filter(|s| !s.is_generated()).collect();
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0], &Survey::Persisted(original));

    let kcb_generated = surveys
        .iter()
        .filter(|s| s.is_generated() && s.company() == Some("KCB Bank"))
        .count();
    assert_eq!(kcb_generated, 3);

    let counts = counts_by_company(&surveys);
    for company in &catalog.find_industry("banking").unwrap().companies {
        assert_eq!(counts[&company.name], 4, "{}", company.name);
    }
}

#[test]
fn test_output_grouped_in_catalog_order_stored_first() {
    let catalog = builtin();
    let mut generator = SurveyGenerator::new(&catalog, seeded(22));
    let input = vec![stored("db-eq", Some("Equity Bank")), stored("db-kcb", Some("KCB Bank"))];
    let surveys = generator.ensure_surveys_available(input, "banking");

    let order: Vec<&str> = catalog
        .companies("banking")
        .iter()
        .flat_map(|c| std::iter::repeat_n(c.name.as_str(), 4))
        .collect();
    let actual: Vec<&str> = surveys.iter().map(|s| s.company().unwrap()).collect();
    assert_eq!(actual, order);

    assert_eq!(surveys[0].id(), "db-kcb");
    assert_eq!(surveys[4].id(), "db-eq");
}

#[test]
fn test_companies_at_threshold_get_no_top_up() {
    let catalog = builtin();
    let input: Vec<PersistedSurvey> = (0..6)
        .map(|i| stored(&format!("db-ncba-{i}"), Some("NCBA Bank")))
        .collect();
    let mut generator = SurveyGenerator::new(&catalog, seeded(23));
    let surveys = generator.ensure_surveys_available(input, "banking");

    let ncba: Vec<_> = surveys.iter().filter(|s| s.company() == Some("NCBA Bank")).collect();
    assert_eq!(ncba.len(), 6);
    assert!(ncba.iter().all(|s| !s.is_generated()));
    assert_eq!(surveys.len(), 6 + 11 * 4);
}

#[test]
fn test_foreign_and_companyless_surveys_dropped() {
    let catalog = builtin();
    let input = vec![
        stored("db-water", Some("Nairobi Water")),
        stored("db-none", None),
        stored("db-case", Some("kcb bank")),
        stored("db-kcb", Some("KCB Bank")),
    ];
    let mut generator = SurveyGenerator::new(&catalog, seeded(24));
    let surveys = generator.ensure_surveys_available(input, "banking");

    let ids: Vec<&str> = surveys.iter().map(Survey::id).collect();
    assert!(!ids.contains(&"db-water"));
    assert!(!ids.contains(&"db-none"));
    assert!(!ids.contains(&"db-case"));
    assert!(ids.contains(&"db-kcb"));
    assert_eq!(surveys.len(), 48);
}

#[test]
fn test_repeated_calls_keep_shape_but_not_ids() {
    let catalog = builtin();
    let input = vec![stored("db-kcb", Some("KCB Bank"))];
    let first = generator::ensure_surveys_available(&catalog, input.clone(), "banking");
    let second = generator::ensure_surveys_available(&catalog, input, "banking");

    for surveys in [&first, &second] {
        let counts = counts_by_company(surveys);
        assert_eq!(counts.len(), 12);
        assert!(counts.values().all(|&n| n >= MIN_SURVEYS_PER_COMPANY));
    }

    let first_generated: Vec<&str> = first
        .iter()
        .filter(|s| s.is_generated())
        .map(Survey::id)
        .collect();
    assert!(second
        .iter()
        .filter(|s| s.is_generated())
        .all(|s| !first_generated.contains(&s.id())));
}

#[test]
fn test_unknown_industry_serves_fallback() {
    let catalog = builtin();
    let input = vec![stored("db-kcb", Some("KCB Bank"))];
    let mut generator = SurveyGenerator::new(&catalog, seeded(25));
    let surveys = generator.ensure_surveys_available(input, "astrology");

    assert_eq!(surveys.len(), 5);
    assert!(surveys.iter().all(Survey::is_generated));
    for s in &surveys {
        let industry = catalog.find_industry(s.industry().unwrap()).expect("known industry");
        assert!(industry.has_company(s.company().unwrap()));
    }
}

#[test]
fn test_fallback_count_is_configurable() {
    let catalog = builtin();
    let surveys = SurveyGenerator::new(&catalog, seeded(26))
        .with_fallback_count(2)
        .ensure_surveys_available(Vec::new(), "");
    assert_eq!(surveys.len(), 2);
}

#[test]
fn test_small_catalog_threshold() {
    let catalog = small_catalog();
    let mut generator = SurveyGenerator::new(&catalog, seeded(27));
    let surveys = generator.ensure_surveys_available(Vec::new(), "dairy");
    assert_eq!(surveys.len(), 2 * MIN_SURVEYS_PER_COMPANY);
    for s in &surveys {
        // Three templates plus the suggestion question at most
        assert_eq!(s.questions().len(), 4);
    }
}
