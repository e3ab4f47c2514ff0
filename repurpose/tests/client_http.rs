use repurpose::client::ChatCompletionClient;
use repurpose::load_config::{ModelSettings, Provider};
use repurpose_core::contract::{ChatMessage, ChatRequest, ModelClient, ModelError};
use repurpose_core::repurpose::{repurpose_blog_content, Platform};
use repurpose_core::sample::{SAMPLE_BLOG_POST, SAMPLE_TITLE};
use secrecy::SecretString;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings_for(server: &MockServer) -> ModelSettings {
    ModelSettings {
        provider: Provider::Groq,
        api_key: Some(SecretString::new("test-key".to_string())),
        base_url: server.uri(),
        model: Some("test-model".to_string()),
    }
}

fn summary_request() -> ChatRequest {
    ChatRequest {
        messages: vec![
            ChatMessage::system("Create a concise blog summary."),
            ChatMessage::user("Summarize this blog post: hello"),
        ],
        max_tokens: Some(250),
    }
}

#[tokio::test]
async fn test_complete_sends_openai_compatible_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "test-model",
            "max_tokens": 250,
            "messages": [
                {"role": "system", "content": "Create a concise blog summary."},
                {"role": "user", "content": "Summarize this blog post: hello"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "cmpl-1",
            "choices": [{"index": 0, "message": {"role": "assistant", "content": " A summary. "}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ChatCompletionClient::new(settings_for(&server)).expect("client");
    let response = client.complete(summary_request()).await.expect("completion");

    assert_eq!(response.first_text(), Some(" A summary. "));
}

#[tokio::test]
async fn test_complete_reports_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let client = ChatCompletionClient::new(settings_for(&server)).expect("client");
    let err = client.complete(summary_request()).await.unwrap_err();

    assert_eq!(
        err,
        ModelError::Status {
            status: 503,
            body: "overloaded".to_string()
        }
    );
}

#[tokio::test]
async fn test_complete_reports_undecodable_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = ChatCompletionClient::new(settings_for(&server)).expect("client");
    let err = client.complete(summary_request()).await.unwrap_err();

    assert!(matches!(err, ModelError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn test_complete_gives_up_on_slow_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"choices": [{"message": {"content": "late"}}]}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let client =
        ChatCompletionClient::with_timeout(settings_for(&server), Duration::from_millis(200))
            .expect("client");
    let err = client.complete(summary_request()).await.unwrap_err();

    assert!(matches!(err, ModelError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn test_complete_without_model_never_calls_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut settings = settings_for(&server);
    settings.model = None;
    let client = ChatCompletionClient::new(settings).expect("client");
    let err = client.complete(summary_request()).await.unwrap_err();

    assert_eq!(err, ModelError::NotConfigured("model"));
}

#[tokio::test]
async fn test_repurpose_over_http_uses_model_output() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"role": "assistant", "content": "generated"}}]
        })))
        .expect(5)
        .mount(&server)
        .await;

    let client = ChatCompletionClient::new(settings_for(&server)).expect("client");
    let bundle = repurpose_blog_content(&client, SAMPLE_BLOG_POST).await;

    assert_eq!(bundle.title, SAMPLE_TITLE);
    assert_eq!(bundle.summary, "generated");
    assert_eq!(bundle.email_newsletter, "generated");
    for platform in Platform::ALL {
        assert_eq!(bundle.social_media_posts.get(platform), Some("generated"));
    }
}

#[tokio::test]
async fn test_repurpose_over_failing_http_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(5)
        .mount(&server)
        .await;

    let client = ChatCompletionClient::new(settings_for(&server)).expect("client");
    let bundle = repurpose_blog_content(&client, SAMPLE_BLOG_POST).await;

    assert!(bundle.summary.ends_with("..."));
    assert!(bundle
        .social_media_posts
        .get(Platform::Linkedin)
        .unwrap()
        .contains("Read more: [LINK]"));
    assert!(bundle.email_newsletter.contains("Read full article: [LINK]"));
}
