use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use commute_server::config::{MapsSource, ServerConfig};
use commute_server::maps::{FixtureMappingService, GoogleMapsClient};
use commute_server::planner::{CommutePlanner, MappingService};
use commute_server::store::MemoryStore;
use commute_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("commute_server=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;

    // Pick the mapping service
    let maps: Arc<dyn MappingService> = match &config.maps {
        MapsSource::Google(maps_config) => {
            tracing::info!(base_url = %maps_config.base_url, "using Google Directions API");
            Arc::new(GoogleMapsClient::new(maps_config.clone())?)
        }
        MapsSource::Fixtures(dir) => {
            tracing::warn!(dir = ?dir, "using recorded directions fixtures");
            Arc::new(FixtureMappingService::from_dir(dir)?)
        }
    };

    let state = AppState::new(
        MemoryStore::new(config.history_limit),
        CommutePlanner::new(maps),
    );
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!("Commute planner listening on http://{}", config.addr);
    tracing::info!("API Endpoints:");
    tracing::info!("  GET   /health                      - Health check");
    tracing::info!("  POST  /users                       - Add a user");
    tracing::info!("  PATCH /users/:username/preferences - Update preferences");
    tracing::info!("  POST  /users/:username/events      - Add events");
    tracing::info!("  POST  /users/:username/route       - Plan a commute");
    tracing::info!("  POST  /chat/:room/messages         - Send a chat message");

    axum::serve(listener, app).await?;
    Ok(())
}
