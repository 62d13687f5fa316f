use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use podcast_gateway::controllers::podcast::PodcastController;
use podcast_gateway::domain::podcast::PodcastService;
use podcast_gateway::domain::transcript::ResilientTextReader;
use podcast_gateway::infrastructure::artifacts::ArtifactRegistry;
use podcast_gateway::infrastructure::config::{Config, LogFormat};
use podcast_gateway::infrastructure::engine::CommandEngine;
use podcast_gateway::infrastructure::http::start_http_server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Podcast Gateway on {}:{}",
        config.host,
        config.port
    );

    if !config.require_api_key {
        tracing::warn!("API key check disabled; generation endpoints are open");
    }
    if config.legacy_path_downloads {
        tracing::warn!("Legacy path downloads enabled; /audio accepts raw filesystem paths");
    }

    let engine = CommandEngine::from_command_line(&config.engine_command)
        .ok_or("ENGINE_COMMAND must not be empty")?
        .with_timeout(config.engine_timeout());
    tracing::info!(
        program = engine.program(),
        timeout = ?engine.timeout(),
        "Podcast engine configured"
    );

    let reader = ResilientTextReader::with_encodings(config.transcript_encodings.clone());
    let encodings: Vec<&str> = reader
        .encodings()
        .iter()
        .map(|encoding| encoding.as_str())
        .collect();
    tracing::info!(encodings = ?encodings, "Transcript reader configured");
    if !reader.encodings().iter().any(|encoding| encoding.is_total()) {
        tracing::warn!("No single-byte fallback encoding configured; some transcripts will fail to decode");
    }

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    let engine = Arc::new(engine);
    let reader = Arc::new(reader);
    let artifacts = Arc::new(ArtifactRegistry::new(config.artifact_ttl()));

    let podcast_service = Arc::new(PodcastService::new(
        engine,
        reader,
        artifacts,
        config.legacy_path_downloads,
    ));

    let podcast_controller = Arc::new(PodcastController::new(podcast_service));

    // Start HTTP server with all routes
    start_http_server(config, podcast_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "podcast_gateway=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "podcast_gateway=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
