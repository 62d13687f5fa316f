use super::dto::UserPodcastRequest;
use std::process::Command;

pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const ELEVENLABS_API_KEY: &str = "ELEVENLABS_API_KEY";

/// Provider keys supplied by the caller of a single request.
///
/// These are never written to the server's own environment. Each engine
/// invocation receives its own copy, so concurrent requests cannot observe
/// each other's keys.
#[derive(Clone, PartialEq, Eq)]
pub struct EngineCredentials {
    pub gemini_api_key: String,
    pub openai_api_key: String,
    pub elevenlabs_api_key: Option<String>,
}

impl EngineCredentials {
    /// Environment variables the engine expects, in a stable order.
    /// `None` means the variable must be unset for this invocation.
    pub fn env_vars(&self) -> [(&'static str, Option<&str>); 3] {
        [
            (GEMINI_API_KEY, Some(self.gemini_api_key.as_str())),
            (OPENAI_API_KEY, Some(self.openai_api_key.as_str())),
            (ELEVENLABS_API_KEY, self.elevenlabs_api_key.as_deref()),
        ]
    }

    /// Install the keys into a child process environment
    pub fn apply_to(&self, command: &mut Command) {
        for (name, value) in self.env_vars() {
            match value {
                Some(value) => {
                    command.env(name, value);
                }
                None => {
                    command.env_remove(name);
                }
            }
        }
    }
}

impl From<&UserPodcastRequest> for EngineCredentials {
    fn from(request: &UserPodcastRequest) -> Self {
        Self {
            gemini_api_key: request.google_key.clone(),
            openai_api_key: request.openai_key.clone(),
            elevenlabs_api_key: request
                .elevenlabs_key
                .clone()
                .filter(|key| !key.is_empty()),
        }
    }
}

impl std::fmt::Debug for EngineCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineCredentials")
            .field("gemini_api_key", &"<redacted>")
            .field("openai_api_key", &"<redacted>")
            .field(
                "elevenlabs_api_key",
                &self.elevenlabs_api_key.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}
