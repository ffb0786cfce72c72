use nhl_gamelog_proxy::config::ServerConfig;
use nhl_gamelog_proxy::server;
use nhl_gamelog_proxy::state::AppState;
use nhl_gamelog_proxy::upstream::NhlApiClient;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nhl_gamelog_proxy=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();
    let client = NhlApiClient::new(config.upstream_base_url.clone());
    let state = Arc::new(AppState::new(Arc::new(client)));

    server::serve(&config, state).await
}
