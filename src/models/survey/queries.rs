use sqlx::PgPool;

use super::types::{GeneratedQuestion, PersistedSurvey};

#[derive(Debug, sqlx::FromRow)]
struct SurveyRow {
    id: String,
    title: String,
    description: String,
    payout: f64,
    company: Option<String>,
    industry: Option<String>,
    questions: Option<String>,
}

impl From<SurveyRow> for PersistedSurvey {
    fn from(row: SurveyRow) -> Self {
        let questions = match row.questions.as_deref() {
            None | Some("") => Vec::new(),
            Some(json) => serde_json::from_str::<Vec<GeneratedQuestion>>(json).unwrap_or_else(|e| {
                log::warn!("Survey {} has unreadable questions: {}", row.id, e);
                Vec::new()
            }),
        };
        PersistedSurvey {
            id: row.id,
            title: row.title,
            description: row.description,
            payout: row.payout,
            company: row.company,
            industry: row.industry,
            questions,
        }
    }
}

/// Active stored surveys for one industry, oldest first.
pub async fn find_active_by_industry(
    pool: &PgPool,
    industry_id: &str,
) -> Result<Vec<PersistedSurvey>, sqlx::Error> {
    let rows = sqlx::query_as::<_, SurveyRow>(
        "SELECT id::TEXT AS id, title, \
                COALESCE(description, '') AS description, \
                payout::FLOAT8 AS payout, \
                company, industry, \
                questions::TEXT AS questions \
         FROM surveys \
         WHERE active = TRUE AND industry = $1 \
         ORDER BY created_at"
    )
    .bind(industry_id)
    .fetch_all(pool)
    .await?;
    Ok(rows.into_iter().map(PersistedSurvey::from).collect())
}
