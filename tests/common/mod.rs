//! Shared test infrastructure for generator and API tests.
//!
//! - `seeded()` - reproducible random source
//! - `ZeroRng` - degenerate source that always draws the lowest value
//! - `small_catalog()` - tiny pools for exhaustion tests
//! - `stored()` - persisted survey builder
#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use nyota::catalog::{Catalog, Company, Industry, QuestionPool, QuestionTemplate};
use nyota::models::survey::{GeneratedQuestion, PersistedSurvey};

// ============================================================================
// RANDOM SOURCES
// ============================================================================

pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Every draw is zero, so every uniform pick lands on the first index.
/// Rejection sampling against this source never succeeds on its own.
pub struct ZeroRng;

impl RngCore for ZeroRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(0);
    }
}

// ============================================================================
// CATALOGS
// ============================================================================

pub fn builtin() -> Catalog {
    Catalog::builtin()
}

fn company(name: &str, code: &str, color: &str) -> Company {
    Company { name: name.into(), code: code.into(), color: color.into() }
}

/// One industry, two companies, two titles, three question templates.
pub fn small_catalog() -> Catalog {
    let industries = vec![Industry {
        id: "dairy".to_string(),
        name: "Dairy".to_string(),
        companies: vec![
            company("Brookside Dairy", "BD", "210 75% 50%"),
            company("KCC", "KCC", "0 70% 50%"),
        ],
    }];
    let titles = vec!["{company} Survey".to_string(), "About {company}".to_string()];
    let descriptions = vec!["Tell {company} what you think.".to_string()];
    let questions = QuestionPool {
        kind: "general".to_string(),
        templates: vec![
            QuestionTemplate {
                template: "Do you buy from {company}?".into(),
                options: vec!["Yes".into(), "No".into()],
            },
            QuestionTemplate {
                template: "Rate {company} milk".into(),
                options: vec!["Good".into(), "Fair".into(), "Poor".into()],
            },
            QuestionTemplate {
                template: "A question with no placeholder".into(),
                options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
            },
        ],
    };
    Catalog::new(industries, titles, descriptions, questions).expect("valid small catalog")
}

// ============================================================================
// STORED SURVEYS
// ============================================================================

pub fn stored(id: &str, company: Option<&str>) -> PersistedSurvey {
    PersistedSurvey {
        id: id.to_string(),
        title: format!("Stored survey {id}"),
        description: "From the database".to_string(),
        payout: 120.0,
        company: company.map(str::to_string),
        industry: Some("banking".to_string()),
        questions: vec![GeneratedQuestion::free_text("Anything else?".to_string())],
    }
}
