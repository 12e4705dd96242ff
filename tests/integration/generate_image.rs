//! Integration tests for the /generate-image endpoint
//!
//! Covers:
//! - Successful generation with image and text parts
//! - Prompt enhancement from the previous response text
//! - Request validation (missing prompt, malformed JSON)
//! - Upstream failures and their effect on session memory
//! - Session isolation and the anonymous default user

use std::future::IntoFuture;
use std::time::Duration;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{constants::*, test_config, TestHarness};
use crate::mocks::gemini::{GeminiTestData, MockGemini};

const GENERIC_FAILURE: &str = "An error occurred during image generation.";

// =============================================================================
// Success path
// =============================================================================

#[tokio::test]
async fn test_first_request_is_sent_unchanged() {
    let gemini = MockGemini::start().await;
    gemini
        .mock_image_and_text(GeminiTestData::IMG1, "A fluffy orange cat")
        .await;
    let harness = TestHarness::new(&gemini);

    let response = harness
        .server
        .post("/generate-image")
        .json(&json!({ "prompt": "a cat", "userId": TEST_USER_ID }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body, json!({ "image": GeminiTestData::IMG1 }));

    assert_eq!(gemini.sent_prompts().await, vec!["a cat".to_string()]);
    assert_eq!(
        harness.session_text(TEST_USER_ID).as_deref(),
        Some("A fluffy orange cat")
    );
}

#[tokio::test]
async fn test_follow_up_prompt_carries_previous_keywords() {
    let gemini = MockGemini::start().await;
    gemini
        .mock_success_once(GeminiTestData::response(vec![
            GeminiTestData::image_part(GeminiTestData::IMG1),
            GeminiTestData::text_part("A fluffy orange cat"),
        ]))
        .await;
    gemini
        .mock_success_once(GeminiTestData::response(vec![
            GeminiTestData::image_part(GeminiTestData::IMG2),
            GeminiTestData::text_part("A small brown dog"),
        ]))
        .await;
    let harness = TestHarness::new(&gemini);

    harness
        .server
        .post("/generate-image")
        .json(&json!({ "prompt": "a cat", "userId": TEST_USER_ID }))
        .await
        .assert_status_ok();

    let response = harness
        .server
        .post("/generate-image")
        .json(&json!({ "prompt": "a dog", "userId": TEST_USER_ID }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["image"], GeminiTestData::IMG2);

    let prompts = gemini.sent_prompts().await;
    assert_eq!(prompts.len(), 2);
    assert_eq!(
        prompts[1],
        format!("a dog{}fluffy, orange, cat", KEYWORD_SUFFIX)
    );
    assert_eq!(
        harness.session_text(TEST_USER_ID).as_deref(),
        Some("A small brown dog")
    );
}

#[tokio::test]
async fn test_provider_request_shape() {
    let gemini = MockGemini::start().await;
    gemini.mock_image_only(GeminiTestData::IMG1).await;
    let harness = TestHarness::new(&gemini);

    harness
        .server
        .post("/generate-image")
        .json(&json!({ "prompt": "a lighthouse", "userId": TEST_USER_ID }))
        .await
        .assert_status_ok();

    let requests = gemini.received_requests().await;
    assert_eq!(requests.len(), 1);

    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["contents"][0]["role"], "user");
    assert_eq!(body["contents"][0]["parts"][0]["text"], "a lighthouse");
    assert_eq!(
        body["generationConfig"]["responseModalities"],
        json!(["IMAGE", "TEXT"])
    );
}

#[tokio::test]
async fn test_image_only_response_succeeds_without_touching_session() {
    let gemini = MockGemini::start().await;
    gemini.mock_image_only(GeminiTestData::IMG2).await;
    let harness = TestHarness::new(&gemini);
    harness.state.sessions.set(TEST_USER_ID, "A fluffy orange cat");

    let response = harness
        .server
        .post("/generate-image")
        .json(&json!({ "prompt": "a dog", "userId": TEST_USER_ID }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["image"], GeminiTestData::IMG2);
    assert_eq!(
        harness.session_text(TEST_USER_ID).as_deref(),
        Some("A fluffy orange cat")
    );
}

#[tokio::test]
async fn test_text_before_image_is_still_found() {
    let gemini = MockGemini::start().await;
    gemini
        .mock_success(GeminiTestData::response(vec![
            GeminiTestData::text_part("Here is your painting of a red barn"),
            GeminiTestData::image_part(GeminiTestData::IMG1),
        ]))
        .await;
    let harness = TestHarness::new(&gemini);

    let response = harness
        .server
        .post("/generate-image")
        .json(&json!({ "prompt": "a barn", "userId": TEST_USER_ID }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["image"], GeminiTestData::IMG1);
    assert_eq!(
        harness.session_text(TEST_USER_ID).as_deref(),
        Some("Here is your painting of a red barn")
    );
}

#[tokio::test]
async fn test_unpadded_image_data_is_accepted() {
    let gemini = MockGemini::start().await;
    gemini.mock_image_only("SU1HMQ").await;
    let harness = TestHarness::new(&gemini);

    let response = harness
        .server
        .post("/generate-image")
        .json(&json!({ "prompt": "a cat", "userId": TEST_USER_ID }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["image"], GeminiTestData::IMG1);
}

// =============================================================================
// Validation
// =============================================================================

#[tokio::test]
async fn test_missing_prompt_is_rejected_without_provider_call() {
    let gemini = MockGemini::start().await;
    gemini.expect_no_calls().await;
    let harness = TestHarness::new(&gemini);

    let response = harness.server.post("/generate-image").json(&json!({})).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body, json!({ "error": "Prompt is required." }));
}

#[tokio::test]
async fn test_empty_prompt_is_rejected() {
    let gemini = MockGemini::start().await;
    gemini.expect_no_calls().await;
    let harness = TestHarness::new(&gemini);

    let response = harness
        .server
        .post("/generate-image")
        .json(&json!({ "prompt": "", "userId": TEST_USER_ID }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Prompt is required.");
    assert!(harness.session_text(TEST_USER_ID).is_none());
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let gemini = MockGemini::start().await;
    gemini.expect_no_calls().await;
    let harness = TestHarness::new(&gemini);

    let response = harness
        .server
        .post("/generate-image")
        .text("{\"prompt\": \"a cat\"")
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid JSON in request.");
}

// =============================================================================
// Upstream failures
// =============================================================================

#[tokio::test]
async fn test_provider_error_status_leaves_session_unchanged() {
    let gemini = MockGemini::start().await;
    gemini.mock_error_status(500).await;
    let harness = TestHarness::new(&gemini);
    harness.state.sessions.set(TEST_USER_ID, "A fluffy orange cat");

    let response = harness
        .server
        .post("/generate-image")
        .json(&json!({ "prompt": "a dog", "userId": TEST_USER_ID }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body, json!({ "error": GENERIC_FAILURE }));
    assert_eq!(
        harness.session_text(TEST_USER_ID).as_deref(),
        Some("A fluffy orange cat")
    );
}

#[tokio::test]
async fn test_malformed_provider_body_is_generic_failure() {
    let gemini = MockGemini::start().await;
    gemini.mock_malformed_body().await;
    let harness = TestHarness::new(&gemini);

    let response = harness
        .server
        .post("/generate-image")
        .json(&json!({ "prompt": "a cat", "userId": TEST_USER_ID }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"], GENERIC_FAILURE);
    assert!(harness.session_text(TEST_USER_ID).is_none());
}

#[tokio::test]
async fn test_text_only_response_fails_but_updates_session() {
    let gemini = MockGemini::start().await;
    gemini
        .mock_text_only("I cannot draw that, but imagine a quiet harbor")
        .await;
    let harness = TestHarness::new(&gemini);

    let response = harness
        .server
        .post("/generate-image")
        .json(&json!({ "prompt": "a boat", "userId": TEST_USER_ID }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"], GENERIC_FAILURE);
    assert_eq!(
        harness.session_text(TEST_USER_ID).as_deref(),
        Some("I cannot draw that, but imagine a quiet harbor")
    );
}

#[tokio::test]
async fn test_no_candidates_is_generic_failure() {
    let gemini = MockGemini::start().await;
    gemini.mock_no_candidates().await;
    let harness = TestHarness::new(&gemini);

    let response = harness
        .server
        .post("/generate-image")
        .json(&json!({ "prompt": "a cat", "userId": TEST_USER_ID }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"], GENERIC_FAILURE);
}

#[tokio::test]
async fn test_provider_timeout_is_generic_failure() {
    let gemini = MockGemini::start().await;
    gemini.mock_slow_response(Duration::from_secs(3)).await;
    let mut config = test_config(&gemini.uri());
    config.provider_timeout = Duration::from_millis(200);
    let harness = TestHarness::with_config(config);

    let response = harness
        .server
        .post("/generate-image")
        .json(&json!({ "prompt": "a cat", "userId": TEST_USER_ID }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"], GENERIC_FAILURE);
}

#[tokio::test]
async fn test_missing_api_key_fails_without_provider_call() {
    let gemini = MockGemini::start().await;
    gemini.expect_no_calls().await;
    let mut config = test_config(&gemini.uri());
    config.gemini_api_key = None;
    let harness = TestHarness::with_config(config);

    let response = harness
        .server
        .post("/generate-image")
        .json(&json!({ "prompt": "a cat", "userId": TEST_USER_ID }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"], GENERIC_FAILURE);
}

// =============================================================================
// Sessions
// =============================================================================

#[tokio::test]
async fn test_missing_user_id_uses_anonymous_session() {
    let gemini = MockGemini::start().await;
    gemini
        .mock_image_and_text(GeminiTestData::IMG1, "A tall green cactus")
        .await;
    let harness = TestHarness::new(&gemini);

    harness
        .server
        .post("/generate-image")
        .json(&json!({ "prompt": "a cactus" }))
        .await
        .assert_status_ok();

    assert_eq!(
        harness.session_text(ANONYMOUS_USER_ID).as_deref(),
        Some("A tall green cactus")
    );
}

#[tokio::test]
async fn test_sessions_are_isolated_per_user() {
    let gemini = MockGemini::start().await;
    gemini
        .mock_image_and_text(GeminiTestData::IMG1, "A fluffy orange cat")
        .await;
    let harness = TestHarness::new(&gemini);
    harness.state.sessions.set(TEST_USER_ID, "A majestic lion");

    harness
        .server
        .post("/generate-image")
        .json(&json!({ "prompt": "a dog", "userId": OTHER_USER_ID }))
        .await
        .assert_status_ok();

    assert_eq!(gemini.sent_prompts().await, vec!["a dog".to_string()]);
    assert_eq!(
        harness.session_text(TEST_USER_ID).as_deref(),
        Some("A majestic lion")
    );
    assert_eq!(
        harness.session_text(OTHER_USER_ID).as_deref(),
        Some("A fluffy orange cat")
    );
}

#[tokio::test]
async fn test_concurrent_users_each_get_a_session() {
    let gemini = MockGemini::start().await;
    gemini
        .mock_image_and_text(GeminiTestData::IMG1, "A fluffy orange cat")
        .await;
    let harness = TestHarness::new(&gemini);

    let user_ids: Vec<String> = (0..8).map(|i| format!("user-{}", i)).collect();
    let requests = user_ids.iter().map(|user_id| {
        harness
            .server
            .post("/generate-image")
            .json(&json!({ "prompt": "a cat", "userId": user_id }))
            .into_future()
    });
    let responses = futures::future::join_all(requests).await;

    for response in &responses {
        response.assert_status_ok();
    }
    assert_eq!(harness.state.sessions.len(), user_ids.len());
    for user_id in &user_ids {
        assert_eq!(
            harness.session_text(user_id).as_deref(),
            Some("A fluffy orange cat")
        );
    }
}
