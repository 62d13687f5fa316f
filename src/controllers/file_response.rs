use axum::{
    body::Body,
    http::{header, HeaderMap, HeaderValue, StatusCode},
};
use std::path::Path;
use tokio_util::io::ReaderStream;

use crate::error::{AppError, AppResult};

pub const AUDIO_MEDIA_TYPE: &str = "audio/mpeg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Inline,
    Attachment,
}

impl Disposition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Disposition::Inline => "inline",
            Disposition::Attachment => "attachment",
        }
    }
}

/// Build a Content-Disposition value. Names that need escaping are sent as
/// an RFC 5987 `filename*` parameter.
pub fn content_disposition(disposition: Disposition, file_name: &str) -> String {
    let encoded = urlencoding::encode(file_name);
    if encoded == file_name {
        format!("{}; filename=\"{}\"", disposition.as_str(), file_name)
    } else {
        format!("{}; filename*=utf-8''{}", disposition.as_str(), encoded)
    }
}

/// Stream a file from disk as an audio response
pub async fn audio_file_response(
    path: &Path,
    file_name: &str,
    disposition: Disposition,
) -> AppResult<(StatusCode, HeaderMap, Body)> {
    let file = tokio::fs::File::open(path).await.map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => AppError::NotFound("File not found".to_string()),
        _ => AppError::Internal(format!("failed to open {}: {}", path.display(), e)),
    })?;
    let length = file.metadata().await.ok().map(|metadata| metadata.len());

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(AUDIO_MEDIA_TYPE));
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&content_disposition(disposition, file_name))
            .map_err(|e| AppError::Internal(format!("invalid content disposition: {}", e)))?,
    );
    if let Some(length) = length {
        headers.insert(header::CONTENT_LENGTH, HeaderValue::from(length));
    }

    Ok((
        StatusCode::OK,
        headers,
        Body::from_stream(ReaderStream::new(file)),
    ))
}

/// Last path component of a download reference
pub fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "download".to_string())
}
