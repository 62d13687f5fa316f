use crate::helpers::{
    fixtures::podcast_request, mock_engine::EngineBehavior, TestContext, TestOptions,
};
use hyper::StatusCode;
use podcast_gateway::domain::transcript::TextEncoding;
use serde_json::json;

#[tokio::test]
async fn it_should_return_transcript_text() {
    let transcript = "<Person1>Welcome to Japan Arts Podcast!</Person1>\n<Person2>Danke schön.</Person2>";
    let ctx = TestContext::with_behavior(EngineBehavior::Produce(transcript.as_bytes().to_vec()))
        .await
        .unwrap();

    let response = ctx
        .client
        .post("/generate-transcript", &podcast_request())
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.body, Some(json!({ "transcript": transcript })));

    let calls = ctx.engine.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].transcript_only);
}

#[tokio::test]
async fn it_should_decode_legacy_encoded_transcripts() {
    // "Café" in cp1252, which is not valid UTF-8
    let ctx = TestContext::with_behavior(EngineBehavior::Produce(vec![0x43, 0x61, 0x66, 0xE9]))
        .await
        .unwrap();

    let response = ctx
        .client
        .post("/generate-transcript", &podcast_request())
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.body, Some(json!({ "transcript": "Café" })));
}

#[tokio::test]
async fn it_should_return_empty_transcript_for_empty_file() {
    let ctx = TestContext::with_behavior(EngineBehavior::Produce(Vec::new()))
        .await
        .unwrap();

    let response = ctx
        .client
        .post("/generate-transcript", &podcast_request())
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.body, Some(json!({ "transcript": "" })));
}

#[tokio::test]
async fn it_should_report_decode_failure_distinctly() {
    // Only UTF-8 configured, so invalid bytes cannot fall back
    let ctx = TestContext::start(TestOptions {
        behavior: EngineBehavior::Produce(vec![0xC3, 0x28, 0xFF]),
        encodings: vec![TextEncoding::Utf8],
        ..TestOptions::default()
    })
    .await
    .unwrap();

    let response = ctx
        .client
        .post("/generate-transcript", &podcast_request())
        .await
        .unwrap();

    response
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .assert_error_message("Error reading transcript: Unsupported file encoding");
}

#[tokio::test]
async fn it_should_return_not_found_when_transcript_is_missing() {
    let ctx = TestContext::with_behavior(EngineBehavior::MissingOutput)
        .await
        .unwrap();

    let response = ctx
        .client
        .post("/generate-transcript", &podcast_request())
        .await
        .unwrap();

    response
        .assert_status(StatusCode::NOT_FOUND)
        .assert_error_message("Generated transcript not found");
}

#[tokio::test]
async fn it_should_return_server_error_when_engine_fails() {
    let ctx = TestContext::with_behavior(EngineBehavior::Fail(75, "upstream timeout".to_string()))
        .await
        .unwrap();

    let response = ctx
        .client
        .post("/generate-transcript", &podcast_request())
        .await
        .unwrap();

    response
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .assert_error_message("upstream timeout");
}
