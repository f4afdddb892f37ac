use std::{net::SocketAddr, sync::Arc};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use smart_field_backend::{
    config::Config,
    create_app,
    external::AgroApiClient,
    services::{ChatLog, FallbackGateway, FieldStore},
    storage::KvStore,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "field_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting Smart Field Server");
    tracing::info!("Environment: {}", config.environment);

    // Open the field store, seeding defaults on first run
    let data_file = config.storage.resolve_data_file()?;
    tracing::info!("Field data file: {}", data_file.display());
    let kv = KvStore::open(data_file)?;
    let store = FieldStore::open(kv)?;
    tracing::info!("Field store ready with {} fields", store.list().len());

    // Upstream agronomic API client and gateway with synthetic fallback
    let upstream = AgroApiClient::new(config.upstream.base_url.clone());
    let gateway = FallbackGateway::new(upstream.clone());

    // Create application state
    let state = AppState {
        store: Arc::new(store),
        gateway: Arc::new(gateway),
        upstream,
        chat_log: Arc::new(ChatLog::new()),
        config: Arc::new(config.clone()),
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
