use super::encoding::{TextEncoding, DEFAULT_ENCODINGS};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum TextReadError {
    #[error("unable to read {path} with any of these encodings: {tried}")]
    Undecodable { path: PathBuf, tried: String },
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Loads a generated text artifact whose encoding is not known up front.
#[async_trait]
pub trait TextReader: Send + Sync {
    async fn read_text(&self, path: &Path) -> Result<String, TextReadError>;
}

/// Tries each configured encoding in order and returns the first successful
/// decode. This is a best-effort fallback, not encoding detection: with a
/// total encoding (latin1) in the list, decoding never fails.
#[derive(Debug, Clone)]
pub struct ResilientTextReader {
    encodings: Vec<TextEncoding>,
}

impl ResilientTextReader {
    pub fn new() -> Self {
        Self::with_encodings(DEFAULT_ENCODINGS.to_vec())
    }

    pub fn with_encodings(encodings: Vec<TextEncoding>) -> Self {
        Self { encodings }
    }

    pub fn encodings(&self) -> &[TextEncoding] {
        &self.encodings
    }

    /// Decode raw bytes, returning the text and the encoding that accepted it
    pub fn decode(&self, bytes: &[u8]) -> Option<(String, TextEncoding)> {
        self.encodings.iter().find_map(|encoding| {
            encoding.decode(bytes).map(|text| (text, *encoding))
        })
    }

    fn tried(&self) -> String {
        let labels: Vec<&str> = self.encodings.iter().map(TextEncoding::as_str).collect();
        format!("[{}]", labels.join(", "))
    }
}

impl Default for ResilientTextReader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextReader for ResilientTextReader {
    async fn read_text(&self, path: &Path) -> Result<String, TextReadError> {
        let bytes = tokio::fs::read(path).await.map_err(|source| TextReadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        match self.decode(&bytes) {
            Some((text, encoding)) => {
                if encoding != TextEncoding::Utf8 {
                    tracing::debug!(
                        path = %path.display(),
                        encoding = %encoding,
                        "Transcript decoded with fallback encoding"
                    );
                }
                Ok(text)
            }
            None => Err(TextReadError::Undecodable {
                path: path.to_path_buf(),
                tried: self.tried(),
            }),
        }
    }
}
