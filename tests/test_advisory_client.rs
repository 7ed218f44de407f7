//! Integration tests for the advisory boundary against a mock
//! generateContent endpoint.

mod common;

use common::*;
use pretty_assertions::assert_eq;
use promaster::advisory::{
    AdvisoryContext, AdvisoryOutcome, Advisor, EMPTY_REPLY_FALLBACK, ERROR_FALLBACK, GeminiClient,
};
use promaster::config::AdvisoryConfig;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GENERATE_PATH: &str = "/v1beta/models/test-model:generateContent";

fn advisor_at(
    base_uri: &str,
    api_key: Option<&str>,
    timeout_secs: u64,
) -> anyhow::Result<Advisor<GeminiClient>> {
    let config = AdvisoryConfig {
        endpoint: format!("{base_uri}/v1beta/models"),
        model: "test-model".to_string(),
        timeout_secs,
        ..AdvisoryConfig::default()
    };
    let client = GeminiClient::with_api_key(&config, api_key.map(str::to_string))?;
    Ok(Advisor::new(client))
}

fn advisor_for(server: &MockServer, api_key: Option<&str>) -> anyhow::Result<Advisor<GeminiClient>> {
    advisor_at(&server.uri(), api_key, 5)
}

fn context() -> AdvisoryContext {
    let mut store = worked_example_store();
    store.add_material(make_new_material("Semen Portland", 450.0, 65_000.0));
    AdvisoryContext {
        projects: store.projects().to_vec(),
        materials: store.materials().to_vec(),
    }
}

fn reply(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
}

#[tokio::test]
async fn test_advice_resolves_with_service_text() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_string_contains("Tower A (Ongoing)"))
        .and(body_string_contains("Semen Portland"))
        .and(body_string_contains("User question: \\\"Which project overruns?\\\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply(
            "  Bridge B has used its whole budget.\n",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let advisor = advisor_for(&server, Some("test-key"))?;
    let outcome = advisor.advise(&context(), "Which project overruns?").await;

    assert_eq!(
        outcome,
        AdvisoryOutcome::Resolved("Bridge B has used its whole budget.".to_string())
    );
    Ok(())
}

#[tokio::test]
async fn test_http_error_yields_error_fallback() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": { "code": 500, "message": "backend unavailable", "status": "INTERNAL" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let advisor = advisor_for(&server, Some("test-key"))?;
    let outcome = advisor.advise(&context(), "Status?").await;

    assert_eq!(outcome, AdvisoryOutcome::Failed(ERROR_FALLBACK.to_string()));
    Ok(())
}

#[tokio::test]
async fn test_empty_candidates_yield_empty_reply_fallback() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let advisor = advisor_for(&server, Some("test-key"))?;
    let outcome = advisor.advise(&context(), "Status?").await;

    assert_eq!(outcome, AdvisoryOutcome::Failed(EMPTY_REPLY_FALLBACK.to_string()));
    Ok(())
}

#[tokio::test]
async fn test_empty_query_is_still_sent() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(body_string_contains("User question: \\\"\\\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply("Please ask a question.")))
        .expect(1)
        .mount(&server)
        .await;

    let advisor = advisor_for(&server, Some("test-key"))?;
    let outcome = advisor.advise(&AdvisoryContext::default(), "").await;

    assert_eq!(outcome.text(), "Please ask a question.");
    Ok(())
}

#[tokio::test]
async fn test_missing_api_key_never_reaches_the_service() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply("unexpected")))
        .expect(0)
        .mount(&server)
        .await;

    let advisor = advisor_for(&server, None)?;
    let outcome = advisor.advise(&context(), "Status?").await;

    assert_eq!(outcome, AdvisoryOutcome::Failed(ERROR_FALLBACK.to_string()));
    Ok(())
}

#[tokio::test]
async fn test_malformed_success_body_yields_error_fallback() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .expect(1)
        .mount(&server)
        .await;

    let advisor = advisor_for(&server, Some("test-key"))?;
    let outcome = advisor.advise(&context(), "Status?").await;

    assert_eq!(outcome, AdvisoryOutcome::Failed(ERROR_FALLBACK.to_string()));
    Ok(())
}

#[tokio::test]
async fn test_slow_service_times_out_into_error_fallback() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(reply("too late"))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let advisor = advisor_at(&server.uri(), Some("test-key"), 1)?;
    let outcome = advisor.advise(&context(), "Status?").await;

    assert_eq!(outcome, AdvisoryOutcome::Failed(ERROR_FALLBACK.to_string()));
    Ok(())
}

#[tokio::test]
async fn test_unreachable_endpoint_yields_error_fallback() -> anyhow::Result<()> {
    // Reserve a port, then free it so nothing listens there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    let address = listener.local_addr()?;
    drop(listener);

    let advisor = advisor_at(&format!("http://{address}"), Some("test-key"), 5)?;
    let outcome = advisor.advise(&context(), "Status?").await;

    assert_eq!(outcome, AdvisoryOutcome::Failed(ERROR_FALLBACK.to_string()));
    Ok(())
}
