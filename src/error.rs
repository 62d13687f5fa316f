use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::transcript::TextReadError;
use crate::infrastructure::engine::EngineError;

/// Scheme advertised on 401 responses
pub const API_KEY_AUTH_SCHEME: &str = "ApiKey";

/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request body or parameters rejected before reaching the engine
    #[error("{message}")]
    Validation { status: StatusCode, message: String },

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Engine(#[source] EngineError),

    #[error("Error reading transcript: {}", transcript_read_reason(.0))]
    TranscriptRead(#[source] TextReadError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

fn transcript_read_reason(err: &TextReadError) -> String {
    match err {
        TextReadError::Undecodable { .. } => "Unsupported file encoding".to_string(),
        TextReadError::Io { source, .. } => source.to_string(),
    }
}

/// Error response structure - simplified to just message + status code
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { status, .. } => *status,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Engine(_) | Self::TranscriptRead(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Convert to simplified error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            message: self.to_string(),
        }
    }
}

impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        AppError::Validation {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

/// Implement IntoResponse for automatic conversion in handlers
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            AppError::Engine(source) => tracing::error!(
                error = %self,
                failure_kind = %source.kind(),
                source = ?source,
                status = %status.as_u16(),
                "Request failed"
            ),
            AppError::TranscriptRead(source) => tracing::error!(
                error = %self,
                source = ?source,
                status = %status.as_u16(),
                "Request failed"
            ),
            _ if status.is_server_error() => tracing::error!(
                error = %self,
                status = %status.as_u16(),
                "Request failed"
            ),
            _ => tracing::warn!(
                error = %self,
                status = %status.as_u16(),
                "Request rejected"
            ),
        }

        let error_response = self.to_response();
        let mut response = (status, Json(error_response)).into_response();

        if status == StatusCode::UNAUTHORIZED {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static(API_KEY_AUTH_SCHEME),
            );
        }

        response
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
