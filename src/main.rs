use std::net::SocketAddr;
use std::sync::Arc;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use recip_api::config::Config;
use recip_api::contact::LogContactRecorder;
use recip_api::db::Database;
use recip_api::db_storage::PgReportStore;
use recip_api::handlers::AppState;

/// Main entry point for the application.
///
/// Initializes logging, configuration and the database pool, then serves the
/// API and pages with CORS, body limits and per-IP rate limiting.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "recip_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize database connection pool
    let db = Database::new(&config.database_url, config.db_max_connections).await?;
    tracing::info!("Database connection pool established");

    if config.run_migrations {
        db.migrate().await?;
    }

    // Build application state
    let app_state = Arc::new(AppState::new(
        Arc::new(PgReportStore::new(db.pool.clone())),
        Arc::new(LogContactRecorder),
    ));

    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(config.rate_limit_per_second)
            .burst_size(config.rate_limit_burst)
            .key_extractor(SmartIpKeyExtractor)
            .finish()
            .ok_or_else(|| anyhow::anyhow!("Invalid rate limit configuration"))?,
    );
    tracing::info!(
        "Rate limiting: {} req/sec per IP, burst of {}",
        config.rate_limit_per_second,
        config.rate_limit_burst
    );

    // Health check stays outside the rate limiter
    let protected_routes = recip_api::routes().layer(GovernorLayer {
        config: governor_conf,
    });
    let app = recip_api::build_router(app_state, protected_routes);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
