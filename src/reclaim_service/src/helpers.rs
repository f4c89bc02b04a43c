use reclaim_adapters::config::ReclaimServiceSetting;
use secrecy::ExposeSecret;
use sqlx::{PgPool, postgres::PgPoolOptions};

/// Build the PostgreSQL pool from settings and run pending migrations.
///
/// # Panics
/// Panics if the pool cannot be created or a migration fails.
pub async fn configure_postgresql() -> PgPool {
    let config = ReclaimServiceSetting::load();
    let db_url = config.postgres.url.expose_secret();

    let pg_pool = get_postgres_pool(db_url)
        .await
        .expect("Failed to create Postgres connection pool");

    sqlx::migrate!()
        .run(&pg_pool)
        .await
        .expect("Failed to run migrations");

    pg_pool
}

pub async fn get_postgres_pool(url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new().max_connections(5).connect(url).await
}
