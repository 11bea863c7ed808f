pub mod industries;
pub mod surveys;

use std::collections::HashMap;

use actix_web::web;
use serde::Serialize;

use crate::errors::AppError;

/// Largest batch a single request may ask the generator for.
pub const MAX_BATCH: usize = 50;

/// List wrapper for API responses.
#[derive(Serialize, Debug, Clone)]
pub struct ListResponse<T: Serialize> {
    pub items: Vec<T>,
    pub total: usize,
}

impl<T: Serialize> ListResponse<T> {
    pub fn new(items: Vec<T>) -> Self {
        let total = items.len();
        Self { items, total }
    }
}

/// Read the `count` query param: default when absent, clamped to 1..=MAX_BATCH.
fn parse_count(query: &HashMap<String, String>, default: usize) -> Result<usize, AppError> {
    match query.get("count") {
        None => Ok(default.clamp(1, MAX_BATCH)),
        Some(raw) => raw
            .trim()
            .parse::<usize>()
            .map(|n| n.clamp(1, MAX_BATCH))
            .map_err(|_| {
                AppError::BadRequest(format!("count must be a positive integer, got '{raw}'"))
            }),
    }
}

/// Configure API v1 routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/industries")
            .route("", web::get().to(industries::list))
            .route("/{id}", web::get().to(industries::read))
            .route(
                "/{id}/companies/{company}/surveys",
                web::get().to(surveys::for_company),
            ),
    );
    // /surveys/refresh and /surveys/fallback BEFORE any /surveys/{...} route
    cfg.service(
        web::scope("/surveys")
            .route("", web::get().to(surveys::available))
            .route("/refresh", web::get().to(surveys::refresh))
            .route("/fallback", web::get().to(surveys::fallback)),
    );
}
