use actix_web::{HttpResponse, web};
use serde::Serialize;

use super::ListResponse;
use crate::catalog::Industry;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct ApiIndustrySummary {
    pub id: String,
    pub name: String,
    pub company_count: usize,
}

impl From<&Industry> for ApiIndustrySummary {
    fn from(i: &Industry) -> Self {
        ApiIndustrySummary {
            id: i.id.clone(),
            name: i.name.clone(),
            company_count: i.companies.len(),
        }
    }
}

/// GET /api/v1/industries - All industries a user can pick from.
pub async fn list(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let items: Vec<ApiIndustrySummary> = state
        .catalog
        .industries()
        .iter()
        .map(ApiIndustrySummary::from)
        .collect();
    Ok(HttpResponse::Ok().json(ListResponse::new(items)))
}

/// GET /api/v1/industries/{id} - One industry with its companies.
pub async fn read(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let industry = state.catalog.find_industry(&id).ok_or(AppError::NotFound)?;
    Ok(HttpResponse::Ok().json(industry))
}
