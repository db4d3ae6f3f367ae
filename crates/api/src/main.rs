use std::net::SocketAddr;
use std::sync::Arc;

use locmap_core::icons::{verify_icons, AssetDir};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use locmap_api::config::ServerConfig;
use locmap_api::router::build_app_router;
use locmap_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "locmap_api=debug,locmap_db=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = %config.port,
        cohort_years = ?config.cohort_years,
        "Loaded server configuration"
    );

    // --- Storage ---
    let store = locmap_db::open_store(&config.data_dir)
        .await
        .expect("Failed to open data directory");
    locmap_db::health_check(&store)
        .await
        .expect("Storage health check failed");
    tracing::info!(data_dir = %config.data_dir.display(), "Record store opened");

    // --- Icon assets ---
    let assets = AssetDir::new(&config.assets_dir);
    for check in verify_icons(&assets).iter().filter(|c| !c.exists) {
        tracing::warn!(asset = %check.asset, "Marker icon missing; generic marker will be used");
    }

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("Invalid HOST:PORT combination");

    let state = AppState {
        store: Arc::new(store),
        config: Arc::new(config.clone()),
        assets: Arc::new(assets),
    };
    let app = build_app_router(state, &config);

    // --- Start server ---
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");
    tracing::info!(%addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for SIGINT (Ctrl-C) or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
