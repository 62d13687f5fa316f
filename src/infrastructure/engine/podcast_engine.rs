use crate::domain::podcast::{EngineCredentials, GeneratePodcastRequest};
use std::path::PathBuf;
use std::time::Duration;

/// Exit code a bridge uses to signal a temporary failure (sysexits EX_TEMPFAIL)
pub const EXIT_TEMPFAIL: i32 = 75;

/// Whether retrying the same request could plausibly succeed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Transient,
    Permanent,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureKind::Transient => write!(f, "transient"),
            FailureKind::Permanent => write!(f, "permanent"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to launch podcast engine: {0}")]
    Launch(#[source] std::io::Error),
    #[error("podcast engine I/O error: {0}")]
    Io(#[source] std::io::Error),
    #[error("podcast engine exited with {status}: {stderr}")]
    Failed {
        code: Option<i32>,
        status: String,
        stderr: String,
    },
    #[error("podcast engine did not report an output path")]
    NoOutputPath,
    #[error("failed to encode engine request: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("podcast engine timed out after {0:?}")]
    TimedOut(Duration),
}

impl EngineError {
    /// Non-zero exit; `code` is `None` when the process was killed by a signal
    pub fn failed(code: Option<i32>, stderr: impl Into<String>) -> Self {
        let status = match code {
            Some(code) => format!("code {}", code),
            None => "signal".to_string(),
        };
        EngineError::Failed {
            code,
            status,
            stderr: stderr.into(),
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            EngineError::Io(_) | EngineError::TimedOut(_) => FailureKind::Transient,
            EngineError::Failed { code: Some(EXIT_TEMPFAIL), .. } => FailureKind::Transient,
            EngineError::Launch(_)
            | EngineError::Failed { .. }
            | EngineError::NoOutputPath
            | EngineError::Encode(_) => FailureKind::Permanent,
        }
    }
}

/// The podcast generation engine.
///
/// Turns source text and URLs into either an audio file or, with
/// `transcript_only`, a plain-text transcript, and returns the path of the
/// produced file. Implementations may block for minutes; callers must run
/// them off the async executor.
///
/// Credentials are passed per call and must not leak into process-wide state.
/// Implementations own their deadline and must stop the work they started
/// when it passes, returning [`EngineError::TimedOut`].
pub trait PodcastEngine: Send + Sync {
    fn generate_podcast(
        &self,
        request: &GeneratePodcastRequest,
        credentials: &EngineCredentials,
        transcript_only: bool,
    ) -> Result<PathBuf, EngineError>;
}
