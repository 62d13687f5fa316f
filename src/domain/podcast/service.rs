use super::credentials::EngineCredentials;
use super::dto::UserPodcastRequest;
use super::error::{OutputKind, PodcastServiceError};
use super::normalizer::normalize;
use crate::domain::transcript::TextReader;
use crate::infrastructure::artifacts::{ArtifactId, ArtifactRegistry};
use crate::infrastructure::engine::PodcastEngine;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const FALLBACK_AUDIO_NAME: &str = "podcast.mp3";

#[derive(Debug, Clone)]
pub struct GeneratedAudio {
    pub path: PathBuf,
    pub file_name: String,
    pub artifact_id: ArtifactId,
}

pub struct PodcastService {
    engine: Arc<dyn PodcastEngine>,
    reader: Arc<dyn TextReader>,
    artifacts: Arc<ArtifactRegistry>,
    legacy_path_downloads: bool,
}

impl PodcastService {
    pub fn new(
        engine: Arc<dyn PodcastEngine>,
        reader: Arc<dyn TextReader>,
        artifacts: Arc<ArtifactRegistry>,
        legacy_path_downloads: bool,
    ) -> Self {
        Self {
            engine,
            reader,
            artifacts,
            legacy_path_downloads,
        }
    }
}

#[async_trait]
pub trait PodcastServiceApi: Send + Sync {
    /// Generate an audio episode and register it for later download
    async fn generate_audio(
        &self,
        request: &UserPodcastRequest,
    ) -> Result<GeneratedAudio, PodcastServiceError>;

    /// Generate a transcript only and return its decoded text
    async fn generate_transcript(
        &self,
        request: &UserPodcastRequest,
    ) -> Result<String, PodcastServiceError>;

    /// Map a download reference (artifact handle, or a raw path when legacy
    /// downloads are enabled) to an existing file
    async fn resolve_download(&self, reference: &str) -> Result<PathBuf, PodcastServiceError>;
}

#[async_trait]
impl PodcastServiceApi for PodcastService {
    async fn generate_audio(
        &self,
        request: &UserPodcastRequest,
    ) -> Result<GeneratedAudio, PodcastServiceError> {
        tracing::info!(
            url_count = request.urls.len(),
            podcast_name = %request.name,
            tts_model = %request.tts_model,
            longform = request.is_long_form,
            "Podcast generation requested"
        );

        let path = self.run_engine(request, false).await?;
        self.ensure_output(&path, OutputKind::Audio).await?;

        let artifact_id = self.artifacts.register(&path).await;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| FALLBACK_AUDIO_NAME.to_string());

        tracing::info!(
            path = %path.display(),
            artifact_id = %artifact_id,
            "Podcast audio generated"
        );

        Ok(GeneratedAudio {
            path,
            file_name,
            artifact_id,
        })
    }

    async fn generate_transcript(
        &self,
        request: &UserPodcastRequest,
    ) -> Result<String, PodcastServiceError> {
        tracing::info!(
            url_count = request.urls.len(),
            podcast_name = %request.name,
            "Transcript generation requested"
        );

        let path = self.run_engine(request, true).await?;
        self.ensure_output(&path, OutputKind::Transcript).await?;

        let transcript = self.reader.read_text(&path).await?;

        tracing::info!(
            path = %path.display(),
            transcript_length = transcript.len(),
            "Transcript generated"
        );

        Ok(transcript)
    }

    async fn resolve_download(&self, reference: &str) -> Result<PathBuf, PodcastServiceError> {
        let path = match self.artifacts.resolve(reference).await {
            Some(path) => path,
            None if self.legacy_path_downloads => {
                // Raw paths give clients read access to any file the server can see
                tracing::warn!(
                    requested_path = %reference,
                    "Serving download by raw filesystem path"
                );
                PathBuf::from(reference)
            }
            None => return Err(PodcastServiceError::FileNotFound),
        };

        if !is_file(&path).await {
            return Err(PodcastServiceError::FileNotFound);
        }

        Ok(path)
    }
}

impl PodcastService {
    /// Run the engine on the blocking pool with this request's own credentials.
    /// The engine enforces its own deadline, so the task is always awaited.
    async fn run_engine(
        &self,
        request: &UserPodcastRequest,
        transcript_only: bool,
    ) -> Result<PathBuf, PodcastServiceError> {
        let internal = normalize(request);
        let credentials = EngineCredentials::from(request);
        let engine = self.engine.clone();

        let path = tokio::task::spawn_blocking(move || {
            engine.generate_podcast(&internal, &credentials, transcript_only)
        })
        .await
        .map_err(|e| PodcastServiceError::Internal(format!("engine task failed: {}", e)))??;

        tracing::debug!(path = %path.display(), transcript_only, "Engine returned output path");

        Ok(path)
    }

    async fn ensure_output(&self, path: &Path, kind: OutputKind) -> Result<(), PodcastServiceError> {
        if is_file(path).await {
            Ok(())
        } else {
            Err(PodcastServiceError::MissingOutput {
                kind,
                path: path.to_path_buf(),
            })
        }
    }
}

async fn is_file(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|metadata| metadata.is_file())
        .unwrap_or(false)
}
