//! HTTP surface: image and stats API plus the interactive page.

pub mod api;
pub mod config;
pub mod page;
pub mod problem;
pub mod state;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

pub use self::config::ServerConfig;
pub use self::state::AppState;

/// All routes with request tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page::index))
        .route("/api/image", get(api::image))
        .route("/api/stats", get(api::stats))
        .route("/api/devices", get(api::devices))
        .route("/health", get(api::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `config.bind` and serve until `shutdown` resolves.
pub async fn serve(
    config: ServerConfig,
    shutdown: impl std::future::Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    use anyhow::Context as _;

    let bind = config.bind;
    let app = build_router(AppState::with_system_clock(config));
    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("failed to bind {bind}"))?;
    tracing::info!(bind_addr = %bind, "lifeweeks server started");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("server error")?;
    Ok(())
}
