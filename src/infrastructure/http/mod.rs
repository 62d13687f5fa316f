use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::controllers::{health, podcast::PodcastController};
use crate::infrastructure::auth::{api_key_middleware, request_id_middleware};
use crate::infrastructure::config::Config;

/// Build the application router.
///
/// One route table serves both deployment modes: with `require_api_key` the
/// generation and download routes are wrapped in the API key check, and
/// `/health` always stays open.
pub fn build_router(config: Arc<Config>, podcast_controller: Arc<PodcastController>) -> Router {
    let mut podcast_routes = Router::new()
        .route("/generate-podcast", post(PodcastController::generate_podcast))
        .route("/generate-transcript", post(PodcastController::generate_transcript))
        .route("/audio/*file_path", get(PodcastController::download))
        .with_state(podcast_controller);

    if config.require_api_key {
        podcast_routes = podcast_routes.route_layer(middleware::from_fn_with_state(
            config.clone(),
            api_key_middleware,
        ));
    }

    Router::new()
        .route("/health", get(health::health))
        .merge(podcast_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(request_id_middleware)),
        )
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    podcast_controller: Arc<PodcastController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(config.clone(), podcast_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!(
        require_api_key = config.require_api_key,
        "Server listening on {}",
        listener.local_addr()?
    );

    axum::serve(listener, app).await?;

    Ok(())
}
