use serde::{Deserialize, Serialize};

pub const DEFAULT_TTS_MODEL: &str = "openai";
pub const DEFAULT_OUTPUT_LANGUAGE: &str = "German";
pub const DEFAULT_CREATIVITY: f64 = 1.0;

fn default_tts_model() -> Option<String> {
    Some(DEFAULT_TTS_MODEL.to_string())
}

fn default_output_language() -> Option<String> {
    Some(DEFAULT_OUTPUT_LANGUAGE.to_string())
}

fn default_creativity() -> Option<f64> {
    Some(DEFAULT_CREATIVITY)
}

/// Parameters controlling how the engine scripts the dialogue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationConfig {
    #[serde(default)]
    pub roles_person1: Option<String>,
    #[serde(default)]
    pub roles_person2: Option<String>,
    #[serde(default)]
    pub podcast_name: Option<String>,
    #[serde(default)]
    pub podcast_tagline: Option<String>,
    #[serde(default = "default_creativity")]
    pub creativity: Option<f64>,
    #[serde(default)]
    pub user_instructions: Option<String>,
    /// Free-form TTS settings, handed to the engine untouched
    #[serde(default)]
    pub text_to_speech: Option<serde_json::Value>,
    #[serde(default = "default_output_language")]
    pub output_language: Option<String>,
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self {
            roles_person1: None,
            roles_person2: None,
            podcast_name: None,
            podcast_tagline: None,
            creativity: default_creativity(),
            user_instructions: None,
            text_to_speech: None,
            output_language: default_output_language(),
        }
    }
}

/// Input accepted by the podcast engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratePodcastRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub urls: Option<Vec<String>>,
    #[serde(default)]
    pub image_paths: Option<Vec<String>>,
    #[serde(default = "default_tts_model")]
    pub tts_model: Option<String>,
    #[serde(default)]
    pub conversation_config: Option<ConversationConfig>,
    #[serde(default)]
    pub longform: bool,
}

impl Default for GeneratePodcastRequest {
    fn default() -> Self {
        Self {
            text: None,
            urls: None,
            image_paths: None,
            tts_model: default_tts_model(),
            conversation_config: None,
            longform: false,
        }
    }
}
