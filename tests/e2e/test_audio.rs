use crate::helpers::{fixtures::{fake_mp3, podcast_request}, TestContext, TestOptions};
use hyper::StatusCode;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_download_by_artifact_handle(ctx: &TestContext) {
    let generated = ctx
        .client
        .post("/generate-podcast", &podcast_request())
        .await
        .unwrap();
    generated.assert_status(StatusCode::OK);
    let artifact_id = generated.header("x-artifact-id").unwrap().clone();

    let response = ctx
        .client
        .get(&format!("/audio/{}", artifact_id))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    response.assert_header("content-type", "audio/mpeg");
    assert_eq!(response.body_bytes, fake_mp3());
    assert!(response
        .header("content-disposition")
        .unwrap()
        .starts_with("attachment; filename=\"podcast_"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_download_by_raw_path_in_legacy_mode(ctx: &TestContext) {
    let file = ctx.output_dir.path().join("episode.mp3");
    std::fs::write(&file, b"ID3-legacy").unwrap();

    // Absolute path after the prefix, as legacy clients send it
    let response = ctx
        .client
        .get(&format!("/audio/{}", file.display()))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    response.assert_header("content-disposition", "attachment; filename=\"episode.mp3\"");
    assert_eq!(response.body_bytes, b"ID3-legacy".to_vec());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_not_found_for_missing_file(ctx: &TestContext) {
    let missing = ctx.output_dir.path().join("missing.mp3");

    let response = ctx
        .client
        .get(&format!("/audio/{}", missing.display()))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::NOT_FOUND)
        .assert_error_message("File not found");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_not_found_for_unknown_handle(ctx: &TestContext) {
    let response = ctx
        .client
        .get(&format!("/audio/{}", uuid::Uuid::new_v4()))
        .await
        .unwrap();

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn it_should_refuse_raw_paths_when_legacy_downloads_are_off() {
    let ctx = TestContext::start(TestOptions {
        legacy_path_downloads: false,
        ..TestOptions::default()
    })
    .await
    .unwrap();

    let file = ctx.output_dir.path().join("episode.mp3");
    std::fs::write(&file, b"ID3").unwrap();

    let response = ctx
        .client
        .get(&format!("/audio/{}", file.display()))
        .await
        .unwrap();

    response.assert_status(StatusCode::NOT_FOUND);
}
