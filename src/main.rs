mod config;
mod models;
mod routes;
mod services;
mod usecases;

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::services::iptv_org::{DatasetClient, IptvOrgChannelRepository};
use crate::services::IptvService;

/// Application state shared across handlers
pub struct AppState {
    pub config: Config,
    pub service: IptvService,
    pub start_time: Instant,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "iptv_catalog=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    // Load configuration
    let config = Config::from_env();
    let port = config.port;

    tracing::info!("Starting IPTV Catalog v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.node_env);

    // One repository (and cache) for the whole process
    let client = DatasetClient::new(
        config.endpoints.clone(),
        &config.user_agent,
        config.fetch_timeout_ms,
    )?;
    tracing::info!("Dataset endpoints: {:?}", client.endpoints());

    let repository = Arc::new(IptvOrgChannelRepository::new(client));
    let service = IptvService::new(repository);
    tracing::info!("Catalog service initialized");

    // Build application state
    let state = Arc::new(AppState {
        config,
        service,
        start_time: Instant::now(),
    });

    // Build router
    let app = Router::new()
        // Health endpoints
        .route("/", get(routes::health::root))
        .route("/health", get(routes::health::health_check))
        .route("/metrics", get(routes::health::metrics))
        .route("/ready", get(routes::health::ready))
        .route("/live", get(routes::health::live))
        // Catalog endpoints
        .route("/api/countries", get(routes::catalog::get_countries))
        .route("/api/countries/flat", get(routes::catalog::get_country_list))
        .route("/api/categories", get(routes::catalog::get_categories))
        .route("/api/channels", get(routes::catalog::get_channels))
        // Admin endpoints (protected by ADMIN_KEY)
        .route("/api/admin/cache/clear", post(routes::admin::clear_cache))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
