use std::time::Duration;

use sqlx::PgPool;

use crate::catalog::Catalog;
use crate::generator::SurveyGenerator;
use crate::models::survey::{self, PersistedSurvey};

const STORE_TIMEOUT: Duration = Duration::from_secs(3);

/// Shared, read-only application state handed to every handler.
pub struct AppState {
    pub catalog: Catalog,
    pub pool: Option<PgPool>,
    pub fallback_count: usize,
}

impl AppState {
    pub fn new(catalog: Catalog, pool: Option<PgPool>, fallback_count: usize) -> Self {
        Self { catalog, pool, fallback_count }
    }

    /// Generator for one request, backed by the thread-local random source.
    pub fn generator(&self) -> SurveyGenerator<'_, rand::rngs::ThreadRng> {
        SurveyGenerator::with_thread_rng(&self.catalog).with_fallback_count(self.fallback_count)
    }

    /// Stored surveys for an industry. Storage failures and slow queries
    /// degrade to an empty list so the dashboard still gets generated surveys.
    pub async fn stored_surveys(&self, industry_id: &str) -> Vec<PersistedSurvey> {
        let Some(pool) = &self.pool else {
            return Vec::new();
        };
        let fetch = survey::find_active_by_industry(pool, industry_id);
        match tokio::time::timeout(STORE_TIMEOUT, fetch).await {
            Ok(Ok(rows)) => rows,
            Ok(Err(e)) => {
                log::error!("Failed to load stored surveys for {}: {}", industry_id, e);
                Vec::new()
            }
            Err(_) => {
                log::warn!(
                    "Stored surveys for {} took longer than {:?}, skipping",
                    industry_id,
                    STORE_TIMEOUT
                );
                Vec::new()
            }
        }
    }
}
