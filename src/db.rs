use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

/// Create the read pool for stored surveys. Connections are opened on first
/// use, so the server starts even while the database is unreachable.
pub fn init_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(8)
        .connect_lazy(database_url)?;
    log::info!("Survey store pool configured");
    Ok(pool)
}
