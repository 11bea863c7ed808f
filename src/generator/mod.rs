//! Survey synthesis and the per-company availability guarantee.
//!
//! [`SurveyGenerator`] borrows a [`Catalog`] and owns a random source. All
//! state lives in the generator value, so concurrent requests each build
//! their own and never coordinate. Tests pass a seeded
//! [`rand::rngs::StdRng`]; the server uses the thread-local generator.
//!
//! Operations are total: unknown industries, exhausted template pools and
//! unmatched persisted rows are ordinary branches, never errors.

mod availability;
mod batch;
mod questions;
mod surveys;

pub use availability::MIN_SURVEYS_PER_COMPANY;
pub use batch::{DEFAULT_FALLBACK_COUNT, SURVEYS_PER_COMPANY};
pub use questions::SUGGESTION_TEMPLATE;
pub use surveys::{DEFAULT_COMPANY_BATCH, PAYOUT_RANGE, QUESTIONS_PER_SURVEY};

use std::collections::HashSet;

use rand::Rng;
use rand::rngs::ThreadRng;

use crate::catalog::Catalog;
use crate::models::survey::{PersistedSurvey, Survey, SyntheticSurvey};

/// Rejection draws before switching to a direct draw among unused indices.
const REJECTION_DRAWS: usize = 8;

pub struct SurveyGenerator<'c, R> {
    catalog: &'c Catalog,
    rng: R,
    fallback_count: usize,
}

impl<'c, R: Rng> SurveyGenerator<'c, R> {
    pub fn new(catalog: &'c Catalog, rng: R) -> Self {
        Self {
            catalog,
            rng,
            fallback_count: DEFAULT_FALLBACK_COUNT,
        }
    }

    /// Number of fallback surveys served when the requested industry is unknown.
    pub fn with_fallback_count(mut self, count: usize) -> Self {
        self.fallback_count = count;
        self
    }
}

impl<'c> SurveyGenerator<'c, ThreadRng> {
    pub fn with_thread_rng(catalog: &'c Catalog) -> Self {
        Self::new(catalog, rand::rng())
    }
}

/// Draw an index in `0..len` not yet in `used`, or `None` once every index
/// is taken. Uniform over the unused indices and always terminates.
pub(crate) fn pick_unused<R: Rng + ?Sized>(
    rng: &mut R,
    len: usize,
    used: &HashSet<usize>,
) -> Option<usize> {
    if used.len() >= len {
        return None;
    }
    for _ in 0..REJECTION_DRAWS {
        let index = rng.random_range(0..len);
        if !used.contains(&index) {
            return Some(index);
        }
    }
    let remaining: Vec<usize> = (0..len).filter(|i| !used.contains(i)).collect();
    Some(remaining[rng.random_range(0..remaining.len())])
}

pub fn ensure_surveys_available(
    catalog: &Catalog,
    persisted: Vec<PersistedSurvey>,
    industry_id: &str,
) -> Vec<Survey> {
    SurveyGenerator::with_thread_rng(catalog).ensure_surveys_available(persisted, industry_id)
}

pub fn generate_surveys_for_industry(catalog: &Catalog, industry_id: &str) -> Vec<SyntheticSurvey> {
    SurveyGenerator::with_thread_rng(catalog).generate_surveys_for_industry(industry_id)
}

pub fn generate_fallback_surveys(catalog: &Catalog, count: usize) -> Vec<SyntheticSurvey> {
    SurveyGenerator::with_thread_rng(catalog).generate_fallback_surveys(count)
}

pub fn generate_surveys_for_company(
    catalog: &Catalog,
    company: &str,
    industry_id: &str,
    count: usize,
) -> Vec<SyntheticSurvey> {
    SurveyGenerator::with_thread_rng(catalog)
        .generate_surveys_for_company(company, industry_id, count)
}
