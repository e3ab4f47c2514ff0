/// `load_config` module: selects the model provider and reads its endpoint settings from the environment.
///
/// This module is the only place that touches provider environment variables.
///
/// # Responsibilities
/// - Resolve the provider name from `--provider` or `MODEL_SERVER` (default `GROQ`)
/// - Read `{PROVIDER}_API_KEY`, `{PROVIDER}_BASE_URL` and `{PROVIDER}_MODEL`
/// - Reject unknown provider names before any generation starts
///
/// Missing key or model is not an error here: generation then falls back to
/// templates for every field, and a warning says why.
///
/// # Errors
/// All errors use `anyhow::Error` and are surfaced at the CLI boundary.
use anyhow::Result;
use secrecy::SecretString;
use std::env;
use tracing::{error, info, warn};

pub const PROVIDER_ENV: &str = "MODEL_SERVER";
pub const DEFAULT_PROVIDER: &str = "GROQ";
pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// The chat-completion backends the tool knows how to address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    OptoGpt,
    Groq,
    Ngu,
    OpenAi,
}

impl Provider {
    /// Parse a provider name, ignoring case. Surrounding whitespace is not stripped.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_uppercase().as_str() {
            "OPTOGPT" => Some(Provider::OptoGpt),
            "GROQ" => Some(Provider::Groq),
            "NGU" => Some(Provider::Ngu),
            "OPENAI" => Some(Provider::OpenAi),
            _ => None,
        }
    }

    /// Prefix of the provider's environment variables.
    pub fn env_prefix(&self) -> &'static str {
        match self {
            Provider::OptoGpt => "OPTOGPT",
            Provider::Groq => "GROQ",
            Provider::Ngu => "NGU",
            Provider::OpenAi => "OPENAI",
        }
    }
}

/// Endpoint settings for one provider. Fixed for the lifetime of the process.
#[derive(Debug)]
pub struct ModelSettings {
    pub provider: Provider,
    pub api_key: Option<SecretString>,
    pub base_url: String,
    pub model: Option<String>,
}

fn read_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Resolve provider settings from the environment.
///
/// `provider_override` wins over `MODEL_SERVER` when given.
pub fn load_config(provider_override: Option<&str>) -> Result<ModelSettings> {
    let name = match provider_override {
        Some(name) => name.to_string(),
        // Set but empty is an unknown name, not a request for the default.
        None => env::var(PROVIDER_ENV).unwrap_or_else(|_| DEFAULT_PROVIDER.to_string()),
    };

    let provider = match Provider::from_name(&name) {
        Some(p) => p,
        None => {
            error!(provider = %name, "Unsupported model provider");
            anyhow::bail!("Unsupported {}: {}", PROVIDER_ENV, name);
        }
    };
    let prefix = provider.env_prefix();

    let api_key = read_var(&format!("{prefix}_API_KEY")).map(SecretString::new);
    if api_key.is_none() {
        warn!(provider = prefix, "{prefix}_API_KEY not set; model calls will fall back");
    }

    let base_url = match read_var(&format!("{prefix}_BASE_URL")) {
        Some(url) => url.trim_end_matches('/').to_string(),
        None => {
            if provider != Provider::OpenAi {
                warn!(provider = prefix, "{prefix}_BASE_URL not set; using {OPENAI_BASE_URL}");
            }
            OPENAI_BASE_URL.to_string()
        }
    };

    let model = read_var(&format!("{prefix}_MODEL"));
    if model.is_none() {
        warn!(provider = prefix, "{prefix}_MODEL not set; model calls will fall back");
    }

    info!(
        provider = prefix,
        base_url = %base_url,
        model = model.as_deref().unwrap_or("<unset>"),
        api_key_set = api_key.is_some(),
        "Model provider configured"
    );

    Ok(ModelSettings {
        provider,
        api_key,
        base_url,
        model,
    })
}
