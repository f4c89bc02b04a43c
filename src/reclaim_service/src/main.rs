use color_eyre::eyre::Result;
use reclaim_adapters::{
    Argon2PasswordHasher, PostgresItemStore, PostgresUserStore, config::ReclaimServiceSetting,
};
use reclaim_service::{ReclaimService, helpers::configure_postgresql};
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    color_eyre::install().expect("Failed to install color_eyre");
    init_tracing().expect("Failed to initialize tracing");

    let config = ReclaimServiceSetting::load();

    let pg_pool = configure_postgresql().await;

    let user_store = PostgresUserStore::new(pg_pool.clone());
    let item_store = PostgresItemStore::new(pg_pool);
    let password_hasher = Argon2PasswordHasher::new();

    let service = ReclaimService::new(user_store, password_hasher, item_store);

    let listener = tokio::net::TcpListener::bind(&config.app.address).await?;

    service
        .run_standalone(listener, config.app.allowed_origins.clone())
        .await?;

    Ok(())
}

fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
