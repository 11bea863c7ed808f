pub mod catalog;
pub mod config;
pub mod db;
pub mod errors;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod state;

use actix_web::{HttpResponse, web};

/// Mount the JSON API and the JSON 404 fallback. Shared by the server and tests.
pub fn configure_app(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/v1").configure(handlers::api_v1::configure))
        .default_service(web::to(|| async {
            HttpResponse::NotFound().json(serde_json::json!({ "error": "Not found" }))
        }));
}
