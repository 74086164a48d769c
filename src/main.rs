//! Pokédex API server: reads `DB_*` settings (and `.env`), then serves on 0.0.0.0:5000.

use pokedex_api::{serve, AppState, DbConfig, MySqlCatalog, Provisioner, ServerConfig};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("pokedex_api=info,tower_http=info")),
        )
        .init();

    let db_config = DbConfig::from_env()?;
    tracing::info!(config = ?db_config, "database settings loaded");
    let state = AppState::new(MySqlCatalog::new(Provisioner::new(db_config)));

    let server_config = ServerConfig::default();
    let listener = TcpListener::bind(server_config.bind_addr).await?;
    serve(listener, state).await?;
    Ok(())
}
