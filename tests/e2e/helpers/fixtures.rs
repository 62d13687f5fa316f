use serde_json::{json, Value};

/// A complete, valid request body for the generation endpoints
pub fn podcast_request() -> Value {
    json!({
        "google_key": "google-test-key",
        "openai_key": "openai-test-key",
        "elevenlabs_key": "elevenlabs-test-key",
        "urls": ["https://example.com/article"],
        "text": "",
        "name": "Japan Arts Podcast",
        "tagline": "Because Art is Everywhere",
        "creativity": 0.8,
        "conversation_style": ["engaging", "fast-paced"],
        "roles_person1": "Abstract Art Ph.D.",
        "roles_person2": "Creative Abstract Artist",
        "dialogue_structure": ["Introduction", "Main Discussion", "Conclusion"],
        "tts_model": "openai",
        "is_long_form": false,
        "engagement_techniques": ["rhetorical questions", "anecdotes"],
        "user_instructions": "Keep it under ten minutes",
        "output_language": "English",
        "voices": { "question": "alloy", "answer": "echo" }
    })
}

/// Same request with a different set of provider keys
pub fn podcast_request_with_keys(google: &str, openai: &str) -> Value {
    let mut body = podcast_request();
    body["google_key"] = json!(google);
    body["openai_key"] = json!(openai);
    body
}

/// Fake MP3 payload: an ID3 header followed by filler bytes
pub fn fake_mp3() -> Vec<u8> {
    let mut bytes = b"ID3\x04\x00\x00\x00\x00\x00\x00".to_vec();
    bytes.extend(std::iter::repeat(0xFFu8).take(512));
    bytes
}
