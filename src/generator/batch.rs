use std::ops::RangeInclusive;

use rand::Rng;
use rand::seq::SliceRandom;

use super::SurveyGenerator;
use crate::catalog::Industry;
use crate::models::survey::SyntheticSurvey;

pub const SURVEYS_PER_COMPANY: RangeInclusive<usize> = 4..=8;
pub const DEFAULT_FALLBACK_COUNT: usize = 5;

impl<R: Rng> SurveyGenerator<'_, R> {
    /// Fresh surveys for every company of an industry, shuffled together.
    /// An unknown industry yields nothing.
    pub fn generate_surveys_for_industry(&mut self, industry_id: &str) -> Vec<SyntheticSurvey> {
        let catalog = self.catalog;
        let Some(industry) = catalog.find_industry(industry_id) else {
            log::debug!("No industry '{}' to generate surveys for", industry_id);
            return Vec::new();
        };

        let mut surveys = Vec::new();
        for company in &industry.companies {
            let count = self.rng.random_range(SURVEYS_PER_COMPANY);
            surveys.extend(self.generate_surveys_for_company(&company.name, &industry.id, count));
        }
        surveys.shuffle(&mut self.rng);
        surveys
    }

    /// One survey each for a random company in up to `count` random industries.
    pub fn generate_fallback_surveys(&mut self, count: usize) -> Vec<SyntheticSurvey> {
        let catalog = self.catalog;
        let mut industries: Vec<&Industry> = catalog.industries().iter().collect();
        industries.shuffle(&mut self.rng);

        let mut surveys = Vec::with_capacity(count.min(industries.len()));
        for industry in industries.into_iter().take(count) {
            if industry.companies.is_empty() {
                continue;
            }
            let company = &industry.companies[self.rng.random_range(0..industry.companies.len())];
            surveys.extend(self.generate_surveys_for_company(&company.name, &industry.id, 1));
        }
        surveys
    }
}
