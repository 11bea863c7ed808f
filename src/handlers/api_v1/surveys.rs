use std::collections::HashMap;

use actix_web::{HttpResponse, web};

use super::{ListResponse, parse_count};
use crate::errors::AppError;
use crate::generator::DEFAULT_COMPANY_BATCH;
use crate::state::AppState;

/// GET /api/v1/surveys - Dashboard catalog for the user's industry.
/// Query params: industry. Unknown or missing industry serves fallback surveys.
pub async fn available(
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    let industry_id = query.get("industry").map(|s| s.trim()).unwrap_or("");

    let stored = if state.catalog.find_industry(industry_id).is_some() {
        state.stored_surveys(industry_id).await
    } else {
        Vec::new()
    };
    let stored_count = stored.len();

    let surveys = state.generator().ensure_surveys_available(stored, industry_id);
    log::debug!(
        "Serving {} surveys for '{}' ({} stored rows offered)",
        surveys.len(),
        industry_id,
        stored_count
    );
    Ok(HttpResponse::Ok().json(ListResponse::new(surveys)))
}

/// GET /api/v1/surveys/refresh - A fresh, fully generated batch, ignoring storage.
/// Query params: industry (required).
pub async fn refresh(
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    let industry_id = query
        .get("industry")
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::BadRequest("industry is required".to_string()))?;

    let surveys = state.generator().generate_surveys_for_industry(industry_id);
    Ok(HttpResponse::Ok().json(ListResponse::new(surveys)))
}

/// GET /api/v1/surveys/fallback - Surveys from random industries.
/// Query params: count (default from FALLBACK_SURVEY_COUNT).
pub async fn fallback(
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    let count = parse_count(&query, state.fallback_count)?;
    let surveys = state.generator().generate_fallback_surveys(count);
    Ok(HttpResponse::Ok().json(ListResponse::new(surveys)))
}

/// GET /api/v1/industries/{id}/companies/{company}/surveys - Top-up batch for one company.
/// Query params: count (default 5).
pub async fn for_company(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    let (industry_id, company_name) = path.into_inner();
    let company = state
        .catalog
        .find_company(&industry_id, &company_name)
        .ok_or(AppError::NotFound)?;
    let count = parse_count(&query, DEFAULT_COMPANY_BATCH)?;

    let surveys = state
        .generator()
        .generate_surveys_for_company(&company.name, &industry_id, count);
    Ok(HttpResponse::Ok().json(ListResponse::new(surveys)))
}
