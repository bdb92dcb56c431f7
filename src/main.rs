use color_eyre::eyre::Result;
use tracing::info;

use chimichangapp::config::ServerConfig;
use chimichangapp::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,chimichangapp=debug".into()),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let app = chimichangapp::app(AppState::seeded());

    let listener = tokio::net::TcpListener::bind(config.addr).await?;

    info!("Server started successfully");
    info!("Address: http://{}", config.addr);
    info!("Documentation: http://{}/docs", config.addr);
    info!("OpenAPI spec: http://{}/api.json", config.addr);

    axum::serve(listener, app).await?;

    Ok(())
}
