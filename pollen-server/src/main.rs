use std::net::SocketAddr;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use pollen_server::config::ServerConfig;
use pollen_server::provider::{LivePollenSource, MockPollenSource, PollenSource};
use pollen_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env();

    let result = match &config.mock_dir {
        Some(dir) => {
            info!(dir = %dir.display(), "serving canned payloads");
            match MockPollenSource::from_dir(dir) {
                Ok(source) => serve(source, &config).await,
                Err(e) => Err(e.to_string().into()),
            }
        }
        None => match LivePollenSource::new(config.dwd(), config.hexal()) {
            Ok(source) => serve(source, &config).await,
            Err(e) => Err(e.to_string().into()),
        },
    };

    if let Err(e) = result {
        error!(error = %e, "server stopped");
        std::process::exit(1);
    }
}

async fn serve<S: PollenSource>(
    source: S,
    config: &ServerConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState::new(source);
    let app = create_router(state, &config.assets_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, assets = %config.assets_dir.display(), "pollen server listening");

    axum::serve(listener, app).await?;
    Ok(())
}
