use axum::{
    body::Body,
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, HeaderValue, StatusCode},
    Json,
};
use std::sync::Arc;

use crate::{
    controllers::file_response::{audio_file_response, file_name_of, Disposition},
    domain::podcast::{PodcastService, PodcastServiceApi, TranscriptResponse, UserPodcastRequest},
    error::{AppError, AppResult},
};

pub const X_ARTIFACT_ID: &str = "x-artifact-id";

pub struct PodcastController {
    podcast_service: Arc<PodcastService>,
}

impl PodcastController {
    pub fn new(podcast_service: Arc<PodcastService>) -> Self {
        Self { podcast_service }
    }

    /// POST /generate-podcast - Generate an episode and return the audio
    pub async fn generate_podcast(
        State(controller): State<Arc<PodcastController>>,
        payload: Result<Json<UserPodcastRequest>, JsonRejection>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        let Json(request) = payload?;

        let audio = controller.podcast_service.generate_audio(&request).await?;

        let disposition = if request.stream_output {
            Disposition::Inline
        } else {
            Disposition::Attachment
        };

        let (status, mut headers, body) =
            audio_file_response(&audio.path, &audio.file_name, disposition).await?;

        if let Ok(value) = HeaderValue::from_str(&audio.artifact_id.to_string()) {
            headers.insert(X_ARTIFACT_ID, value);
        }

        Ok((status, headers, body))
    }

    /// POST /generate-transcript - Generate the dialogue script only
    pub async fn generate_transcript(
        State(controller): State<Arc<PodcastController>>,
        payload: Result<Json<UserPodcastRequest>, JsonRejection>,
    ) -> AppResult<Json<TranscriptResponse>> {
        let Json(request) = payload?;

        let transcript = controller
            .podcast_service
            .generate_transcript(&request)
            .await?;

        Ok(Json(TranscriptResponse { transcript }))
    }

    /// GET /audio/{file_path} - Download a generated file by handle or path
    pub async fn download(
        State(controller): State<Arc<PodcastController>>,
        Path(file_path): Path<String>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        if file_path.is_empty() {
            return Err(AppError::NotFound("File not found".to_string()));
        }

        let path = controller
            .podcast_service
            .resolve_download(&file_path)
            .await?;

        audio_file_response(&path, &file_name_of(&path), Disposition::Attachment).await
    }
}
