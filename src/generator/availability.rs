use std::collections::HashMap;

use rand::Rng;

use super::SurveyGenerator;
use crate::models::survey::{PersistedSurvey, Survey};

/// Every company in the requested industry ends up with at least this many surveys.
pub const MIN_SURVEYS_PER_COMPANY: usize = 4;

impl<R: Rng> SurveyGenerator<'_, R> {
    /// Merge stored surveys with synthesized ones so each company of the
    /// industry has at least [`MIN_SURVEYS_PER_COMPANY`].
    ///
    /// Output is grouped by company in catalog order, stored surveys first
    /// within each group. Stored surveys for companies outside the industry
    /// (or with no company) are dropped. An unknown industry returns the
    /// fallback batch instead. Synthesized members differ on every call.
    pub fn ensure_surveys_available<I>(&mut self, persisted: I, industry_id: &str) -> Vec<Survey>
    where
        I: IntoIterator<Item = PersistedSurvey>,
    {
        let catalog = self.catalog;
        let Some(industry) = catalog.find_industry(industry_id) else {
            log::debug!("Unknown industry '{}', serving fallback surveys", industry_id);
            let count = self.fallback_count;
            return self
                .generate_fallback_surveys(count)
                .into_iter()
                .map(Survey::from)
                .collect();
        };

        let mut buckets: Vec<(&str, Vec<Survey>)> = industry
            .companies
            .iter()
            .map(|c| (c.name.as_str(), Vec::new()))
            .collect();
        let slots: HashMap<&str, usize> = buckets
            .iter()
            .enumerate()
            .map(|(i, (name, _))| (*name, i))
            .collect();

        let mut dropped = 0usize;
        for survey in persisted {
            let slot = survey.company.as_deref().and_then(|c| slots.get(c).copied());
            match slot {
                Some(i) => buckets[i].1.push(Survey::from(survey)),
                None => dropped += 1,
            }
        }
        if dropped > 0 {
            log::debug!("Dropped {} stored surveys not matching {}", dropped, industry.id);
        }

        for (company, bucket) in buckets.iter_mut() {
            if bucket.len() >= MIN_SURVEYS_PER_COMPANY {
                continue;
            }
            let needed = MIN_SURVEYS_PER_COMPANY - bucket.len();
            bucket.extend(
                self.generate_surveys_for_company(company, &industry.id, needed)
                    .into_iter()
                    .map(Survey::from),
            );
        }

        buckets.into_iter().flat_map(|(_, surveys)| surveys).collect()
    }
}
