// Wire-level tests for the Gemini client against a local mock server.
// `ModelConfig.base_url` points reqwest at mockito, so these exercise
// the real request path without touching the hosted API.

use bridgegap_cli::api::{ApiError, GeminiClient, ModelConfig, TopicAnalyzer};
use bridgegap_cli::prompt;
use mockito::Matcher;

const GENERATE_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

fn test_client(base_url: &str) -> GeminiClient {
    let config = ModelConfig {
        model: "gemini-2.5-flash".into(),
        base_url: base_url.into(),
    };
    GeminiClient::new(config, "test-key".into()).expect("client should build")
}

#[test]
fn successful_analysis_returns_the_answer_text_unmodified() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", GENERATE_PATH)
        .match_query(Matcher::UrlEncoded("key".into(), "test-key".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r###"{
                "candidates": [{
                    "content": { "parts": [{ "text": "## Linear Algebra\nOne sentence." }], "role": "model" },
                    "finishReason": "STOP"
                }]
            }"###,
        )
        .expect(1)
        .create();

    let client = test_client(&server.url());
    let text = client.analyze("Eigenvalues").expect("analysis should succeed");
    assert_eq!(text, "## Linear Algebra\nOne sentence.");
    mock.assert();
}

#[test]
fn request_body_embeds_the_interpolated_prompt() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", GENERATE_PATH)
        .match_query(Matcher::Any)
        .match_body(Matcher::PartialJson(serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt::build_prompt("Eigenvalues") }] }]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{ "candidates": [{ "content": { "parts": [{ "text": "ok" }] } }] }"#)
        .create();

    let client = test_client(&server.url());
    client.analyze("Eigenvalues").expect("analysis should succeed");
    mock.assert();
}

#[test]
fn each_submission_issues_exactly_one_request() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", GENERATE_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{ "candidates": [{ "content": { "parts": [{ "text": "same answer" }] } }] }"#)
        .expect(2)
        .create();

    let client = test_client(&server.url());
    let first = client.analyze("Eigenvalues").expect("first call");
    let second = client.analyze("Eigenvalues").expect("second call");
    assert_eq!(first, second);
    mock.assert();
}

#[test]
fn endpoint_error_is_surfaced_with_status_and_body() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", GENERATE_PATH)
        .match_query(Matcher::Any)
        .with_status(429)
        .with_header("content-type", "application/json")
        .with_body(r#"{ "error": { "message": "quota exceeded" } }"#)
        .create();

    let client = test_client(&server.url());
    let err = client.analyze("CRISPR").expect_err("the call should fail");
    let shown = err.to_string();
    match err {
        ApiError::Endpoint { status, body } => {
            assert_eq!(status.as_u16(), 429);
            assert!(body.contains("quota exceeded"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    // what the user sees names both the status and the server's reason
    assert!(shown.contains("429"));
    assert!(shown.contains("quota exceeded"));
}

#[test]
fn response_without_answer_text_is_a_typed_error() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", GENERATE_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{ "candidates": [] }"#)
        .create();

    let client = test_client(&server.url());
    let err = client.analyze("Backpropagation").expect_err("no text to show");
    assert!(matches!(err, ApiError::MissingText));
}
