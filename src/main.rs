//! Server: load settings, make sure the database and schema exist, serve the API.

use cryptid_tracker::{app, apply_migrations, connect, ensure_database_exists, AppState, Settings};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("cryptid_tracker=info,tower_http=info")),
        )
        .init();

    if settings.uses_default_secret() {
        tracing::warn!(environment = %settings.environment, "JWT_SECRET_KEY is the default value");
    }

    ensure_database_exists(&settings.database_url).await?;
    let pool = connect(&settings).await?;
    apply_migrations(&pool).await?;

    let bind_addr = settings.bind_addr;
    tracing::info!(app = %settings.app_name, environment = %settings.environment, "starting");
    let state = AppState::new(pool, settings);

    let listener = TcpListener::bind(bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
