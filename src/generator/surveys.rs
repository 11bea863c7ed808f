use std::collections::HashSet;
use std::ops::RangeInclusive;

use rand::Rng;

use super::{SurveyGenerator, pick_unused};
use crate::catalog::substitute;
use crate::models::survey::SyntheticSurvey;

pub const DEFAULT_COMPANY_BATCH: usize = 5;
/// Payout in Ksh, whole shillings.
pub const PAYOUT_RANGE: RangeInclusive<u32> = 32..=74;
pub const QUESTIONS_PER_SURVEY: RangeInclusive<usize> = 5..=8;

impl<R: Rng> SurveyGenerator<'_, R> {
    /// Build `count` surveys about one company.
    ///
    /// Titles are not repeated within the batch until every title template
    /// has been used once. Descriptions, payouts and question counts are
    /// drawn independently per survey.
    pub fn generate_surveys_for_company(
        &mut self,
        company: &str,
        industry_id: &str,
        count: usize,
    ) -> Vec<SyntheticSurvey> {
        let catalog = self.catalog;
        let titles = catalog.titles();
        let descriptions = catalog.descriptions();

        let mut used_titles = HashSet::new();
        let mut surveys = Vec::with_capacity(count);
        for _ in 0..count {
            let title = if titles.is_empty() {
                company.to_string()
            } else {
                let index = pick_unused(&mut self.rng, titles.len(), &used_titles)
                    .unwrap_or_else(|| self.rng.random_range(0..titles.len()));
                used_titles.insert(index);
                substitute(&titles[index], company)
            };

            let description = if descriptions.is_empty() {
                String::new()
            } else {
                let index = self.rng.random_range(0..descriptions.len());
                substitute(&descriptions[index], company)
            };

            let payout = self.rng.random_range(PAYOUT_RANGE);
            let question_count = self.rng.random_range(QUESTIONS_PER_SURVEY);
            let questions = self.generate_questions(company, question_count);

            surveys.push(SyntheticSurvey {
                id: self.next_survey_id(),
                title,
                description,
                payout,
                company: company.to_string(),
                industry: industry_id.to_string(),
                questions,
            });
        }

        log::debug!("Generated {} surveys for {} ({})", surveys.len(), company, industry_id);
        surveys
    }

    /// `gen_<unix millis>_<10 hex chars>`.
    fn next_survey_id(&mut self) -> String {
        let suffix: [u8; 5] = self.rng.random();
        format!(
            "gen_{}_{}",
            chrono::Utc::now().timestamp_millis(),
            hex::encode(suffix)
        )
    }
}
