use actix_web::{App, HttpServer, middleware, web};

use nyota::catalog::Catalog;
use nyota::config::AppConfig;
use nyota::db;
use nyota::state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env();

    let catalog = match &config.catalog_path {
        Some(path) => Catalog::load(path).map_err(|e| {
            log::error!("Failed to load catalog from {}: {}", path, e);
            std::io::Error::other(e.to_string())
        })?,
        None => Catalog::builtin(),
    };
    log::info!("Catalog ready: {} industries", catalog.industries().len());

    // Stored surveys are optional; without them every survey is generated
    let pool = match &config.database_url {
        Some(url) => match db::init_pool(url) {
            Ok(pool) => Some(pool),
            Err(e) => {
                log::error!("Invalid DATABASE_URL, serving generated surveys only: {}", e);
                None
            }
        },
        None => {
            log::warn!("No DATABASE_URL set, serving generated surveys only");
            None
        }
    };

    let state = web::Data::new(AppState::new(catalog, pool, config.fallback_count));

    log::info!("Starting server at http://{}", config.bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(nyota::configure_app)
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
