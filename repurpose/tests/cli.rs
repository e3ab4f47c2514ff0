use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs::write;
use std::sync::{Arc, Mutex};
use tempfile::NamedTempFile;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{layer::Context, Layer, Registry};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SAMPLE_TITLE: &str = "The Future of Artificial Intelligence in Healthcare";

/// A command whose model endpoint refuses connections, so every field falls back.
fn offline_command() -> Command {
    let mut cmd = Command::cargo_bin("repurpose").expect("Binary exists");
    cmd.env("MODEL_SERVER", "GROQ")
        .env("GROQ_API_KEY", "test-key")
        .env("GROQ_MODEL", "test-model")
        .env("GROQ_BASE_URL", "http://127.0.0.1:9")
        .env("RUST_LOG", "warn");
    cmd
}

#[test]
fn demo_cli_prints_fallback_layout_when_model_unreachable() {
    offline_command()
        .arg("demo")
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with(format!("Title: {SAMPLE_TITLE}\n\nSummary:\n"))
                .and(predicate::str::contains("Social Media Posts:"))
                .and(predicate::str::contains("\nTWITTER:\n"))
                .and(predicate::str::contains("\nLINKEDIN:\n"))
                .and(predicate::str::contains("\nFACEBOOK:\n"))
                .and(predicate::str::contains("Read more: [LINK]"))
                .and(predicate::str::contains("Email Newsletter:"))
                .and(predicate::str::contains(format!("Subject: {SAMPLE_TITLE}"))),
        );
}

#[test]
fn run_cli_reads_post_from_file_as_json() {
    let post = NamedTempFile::new().expect("temp file");
    write(post.path(), "# AI Healthcare Future\n\nFirst.\n\nSecond.\n").unwrap();

    let output = offline_command()
        .arg("run")
        .arg("--input")
        .arg(post.path())
        .arg("--format")
        .arg("json")
        .output()
        .expect("run binary");
    assert!(output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(value["title"], "AI Healthcare Future");
    assert_eq!(value["summary"], "# AI Healthcare Future First.");
    let twitter = value["social_media_posts"]["twitter"].as_str().unwrap();
    assert!(twitter.ends_with("#healthcare #future"));
    assert!(!twitter.contains("#ai"));
    let keys: Vec<&String> = value["social_media_posts"].as_object().unwrap().keys().collect();
    assert_eq!(keys.len(), 3);
}

#[test]
fn run_cli_reads_post_from_stdin() {
    offline_command()
        .arg("run")
        .write_stdin("# Piped Title\n\nBody text")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Title: Piped Title\n"));
}

#[test]
fn run_cli_yaml_output_has_social_map() {
    offline_command()
        .args(["demo", "--format", "yaml"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains(format!("title: {SAMPLE_TITLE}"))
                .and(predicate::str::contains("social_media_posts:"))
                .and(predicate::str::contains("twitter:")),
        );
}

#[test]
fn cli_fails_on_unknown_provider() {
    offline_command()
        .args(["demo", "--provider", "acme"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported MODEL_SERVER: acme"));
}

#[test]
fn cli_fails_on_missing_input_file() {
    offline_command()
        .args(["run", "--input", "/definitely/not/here.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read blog post"));
}

#[tokio::test(flavor = "multi_thread")]
async fn demo_cli_uses_model_output_when_available() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"role": "assistant", "content": "from the model"}}]
        })))
        .expect(5)
        .mount(&server)
        .await;

    let mut cmd = offline_command();
    cmd.env("GROQ_BASE_URL", server.uri()).arg("demo");
    cmd.assert().success().stdout(
        predicate::str::contains("Summary:\nfrom the model\n")
            .and(predicate::str::contains("TWITTER:\nfrom the model\n"))
            .and(predicate::str::contains("Email Newsletter:\nfrom the model\n"))
            .and(predicate::str::contains("[LINK]").not()),
    );
}

/// Custom Layer to collect emitted event messages.
struct EventCollector {
    events: Arc<Mutex<Vec<String>>>,
}

impl<S> Layer<S> for EventCollector
where
    S: tracing::Subscriber,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        self.events.lock().unwrap().push(format!("{:?}", event));
    }
}

#[tokio::test]
async fn emits_trace_initialised_event() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let collector = EventCollector {
        events: events.clone(),
    };
    let subscriber = Registry::default().with(collector);
    let _guard = tracing::subscriber::set_default(subscriber);

    use repurpose::cli::{run, Cli, Commands, OutputFormat};

    // An unknown provider stops the run early, after the first event.
    let cli = Cli {
        command: Commands::Demo {
            format: OutputFormat::Text,
            provider: Some("not-a-provider".to_string()),
        },
    };

    let result = run(cli).await;
    assert!(result.is_err());

    let event_msgs = events.lock().unwrap();
    assert!(
        event_msgs.iter().any(|msg| msg.contains("trace_initialised")),
        "Expected a 'trace_initialised' trace event, got: {:?}",
        event_msgs
    );
}
