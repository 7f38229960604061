use anyhow::Context;
use api::settings::{Backend, Settings};
use api::AppState;
use axum::Router;
use store::Repository;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::new().context("Failed to load settings")?;

    let router = match settings.storage.backend {
        Backend::Memory => {
            tracing::warn!("Using the in-memory store; data is lost on restart");
            let state = AppState::new(Repository::new(store::MemoryStore::new()));
            web::app(state, tower_sessions::MemoryStore::default(), &settings.session)
        }
        Backend::Postgres => postgres_app(&settings).await?,
    };

    let addr = settings.server.address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}

#[cfg(feature = "postgres")]
async fn postgres_app(settings: &Settings) -> anyhow::Result<Router> {
    use tower_sessions_sqlx_store::PostgresStore;

    let pool = api::db::get_pool(&settings.database)
        .await
        .context("Failed to connect to database")?;
    api::db::run_migrations(pool)
        .await
        .context("Failed to run migrations")?;

    let session_store = PostgresStore::new(pool.clone());
    session_store
        .migrate()
        .await
        .context("Failed to create the session table")?;

    let state = AppState::new(Repository::new(api::db::PgStore::new(pool.clone())));
    Ok(web::app(state, session_store, &settings.session))
}

#[cfg(not(feature = "postgres"))]
async fn postgres_app(_settings: &Settings) -> anyhow::Result<Router> {
    anyhow::bail!("storage.backend = \"postgres\" needs the `postgres` feature")
}
