use serde::{Deserialize, Serialize};

/// Voice identifiers for the two speakers of a generated episode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceConfig {
    /// Voice used for the questioning host (e.g. "alloy")
    pub question: String,
    /// Voice used for the answering guest (e.g. "echo")
    pub answer: String,
}

/// Request body for POST /generate-podcast and POST /generate-transcript
///
/// This is the flat, client-facing schema. It is translated into a
/// [`GeneratePodcastRequest`](super::model::GeneratePodcastRequest) by
/// [`normalize`](super::normalizer::normalize) before the engine sees it.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPodcastRequest {
    /// Serve the audio inline instead of as a download
    #[serde(default)]
    pub stream_output: bool,
    pub google_key: String,
    pub openai_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevenlabs_key: Option<String>,
    pub urls: Vec<String>,
    pub text: String,
    pub name: String,
    pub tagline: String,
    pub creativity: f64,
    pub conversation_style: Vec<String>,
    pub roles_person1: String,
    pub roles_person2: String,
    pub dialogue_structure: Vec<String>,
    pub tts_model: String,
    pub is_long_form: bool,
    pub engagement_techniques: Vec<String>,
    pub user_instructions: String,
    pub output_language: String,
    pub voices: VoiceConfig,
}

// Hand-written so provider keys never end up in logs.
impl std::fmt::Debug for UserPodcastRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserPodcastRequest")
            .field("stream_output", &self.stream_output)
            .field("google_key", &"<redacted>")
            .field("openai_key", &"<redacted>")
            .field(
                "elevenlabs_key",
                &self.elevenlabs_key.as_ref().map(|_| "<redacted>"),
            )
            .field("urls", &self.urls)
            .field("text_length", &self.text.len())
            .field("name", &self.name)
            .field("tagline", &self.tagline)
            .field("creativity", &self.creativity)
            .field("conversation_style", &self.conversation_style)
            .field("roles_person1", &self.roles_person1)
            .field("roles_person2", &self.roles_person2)
            .field("dialogue_structure", &self.dialogue_structure)
            .field("tts_model", &self.tts_model)
            .field("is_long_form", &self.is_long_form)
            .field("engagement_techniques", &self.engagement_techniques)
            .field("user_instructions", &self.user_instructions)
            .field("output_language", &self.output_language)
            .field("voices", &self.voices)
            .finish()
    }
}

/// Response for POST /generate-transcript
#[derive(Debug, Serialize, Deserialize)]
pub struct TranscriptResponse {
    pub transcript: String,
}

/// Response for GET /health
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
