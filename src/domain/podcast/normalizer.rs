use super::dto::UserPodcastRequest;
use super::model::{ConversationConfig, GeneratePodcastRequest};
use serde_json::json;

/// Translate the client-facing request into the engine's schema.
///
/// Pure and total: every field lands in exactly one place (except
/// `output_language`, which the engine receives both on the conversation
/// config and inside the TTS bundle). No defaults are filled in here and
/// `image_paths` is always `None`. Credentials and `stream_output` are not
/// part of the engine schema.
pub fn normalize(request: &UserPodcastRequest) -> GeneratePodcastRequest {
    let text_to_speech = json!({
        "voices": {
            "question": request.voices.question,
            "answer": request.voices.answer,
        },
        "engagement_techniques": request.engagement_techniques,
        "conversation_style": request.conversation_style,
        "dialogue_structure": request.dialogue_structure,
        "output_language": request.output_language,
    });

    GeneratePodcastRequest {
        text: Some(request.text.clone()),
        urls: Some(request.urls.clone()),
        image_paths: None,
        tts_model: Some(request.tts_model.clone()),
        longform: request.is_long_form,
        conversation_config: Some(ConversationConfig {
            roles_person1: Some(request.roles_person1.clone()),
            roles_person2: Some(request.roles_person2.clone()),
            podcast_name: Some(request.name.clone()),
            podcast_tagline: Some(request.tagline.clone()),
            creativity: Some(request.creativity),
            user_instructions: Some(request.user_instructions.clone()),
            text_to_speech: Some(text_to_speech),
            output_language: Some(request.output_language.clone()),
        }),
    }
}

impl From<&UserPodcastRequest> for GeneratePodcastRequest {
    fn from(request: &UserPodcastRequest) -> Self {
        normalize(request)
    }
}
