use crate::domain::transcript::TextReadError;
use crate::error::AppError;
use crate::infrastructure::engine::EngineError;
use std::path::PathBuf;

/// Which kind of output a generation run was expected to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Audio,
    Transcript,
}

#[derive(Debug, thiserror::Error)]
pub enum PodcastServiceError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("engine reported {path} but no such file exists")]
    MissingOutput { kind: OutputKind, path: PathBuf },
    #[error(transparent)]
    TranscriptRead(#[from] TextReadError),
    #[error("file not found")]
    FileNotFound,
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<PodcastServiceError> for AppError {
    fn from(err: PodcastServiceError) -> Self {
        match err {
            PodcastServiceError::Engine(e) => AppError::Engine(e),
            PodcastServiceError::MissingOutput { kind, path } => {
                tracing::warn!(path = %path.display(), "Engine output missing on disk");
                match kind {
                    OutputKind::Audio => {
                        AppError::NotFound("Generated audio file not found".to_string())
                    }
                    OutputKind::Transcript => {
                        AppError::NotFound("Generated transcript not found".to_string())
                    }
                }
            }
            PodcastServiceError::TranscriptRead(e) => AppError::TranscriptRead(e),
            PodcastServiceError::FileNotFound => AppError::NotFound("File not found".to_string()),
            PodcastServiceError::Internal(msg) => AppError::Internal(msg),
        }
    }
}
