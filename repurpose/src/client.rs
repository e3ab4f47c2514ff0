#![doc = "HTTP model client: implements the core `ModelClient` contract against an OpenAI-compatible chat-completions endpoint."]
//
//! # Chat completion client (CLI <-> Core)
//!
//! This module wires the [`ModelClient`] trait from `repurpose-core` to a real
//! network endpoint. Every provider the tool supports speaks the same
//! `POST {base_url}/chat/completions` dialect, so one client covers them all.
//!
//! - Construct [`ChatCompletionClient`] from [`ModelSettings`] (see `load_config`).
//! - Transport, HTTP status and decoding problems come back as [`ModelError`];
//!   the generation strategies decide what to do with them.

use async_trait::async_trait;
use repurpose_core::contract::{
    ChatChoice, ChatMessage, ChatRequest, ChatResponse, ModelClient, ModelError,
};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::load_config::ModelSettings;

/// Upper bound on one chat-completion round trip, connect through body.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Serialize)]
struct CompletionBody<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct CompletionReply {
    #[serde(default)]
    choices: Vec<ReplyChoice>,
}

#[derive(Debug, Deserialize)]
struct ReplyChoice {
    #[serde(default)]
    message: Option<ReplyMessage>,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    #[serde(default)]
    content: Option<String>,
}

impl From<CompletionReply> for ChatResponse {
    fn from(reply: CompletionReply) -> Self {
        ChatResponse {
            choices: reply
                .choices
                .into_iter()
                .map(|c| ChatChoice {
                    content: c.message.and_then(|m| m.content),
                })
                .collect(),
        }
    }
}

pub struct ChatCompletionClient {
    settings: ModelSettings,
    http: reqwest::Client,
}

impl ChatCompletionClient {
    pub fn new(settings: ModelSettings) -> Result<Self, ModelError> {
        Self::with_timeout(settings, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(settings: ModelSettings, timeout: Duration) -> Result<Self, ModelError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                tracing::error!(error = ?e, "Failed to build HTTP client");
                ModelError::Transport(e.to_string())
            })?;
        tracing::info!(
            provider = settings.provider.env_prefix(),
            base_url = %settings.base_url,
            timeout_secs = timeout.as_secs_f64(),
            "Initialized chat completion client"
        );
        Ok(Self { settings, http })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.settings.base_url)
    }
}

#[async_trait]
impl ModelClient for ChatCompletionClient {
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse, ModelError> {
        let model = self
            .settings
            .model
            .as_deref()
            .ok_or(ModelError::NotConfigured("model"))?;
        let api_key = self
            .settings
            .api_key
            .as_ref()
            .ok_or(ModelError::NotConfigured("api key"))?;

        let body = CompletionBody {
            model,
            messages: &request.messages,
            max_tokens: request.max_tokens,
        };

        tracing::debug!(
            url = %self.completions_url(),
            model,
            messages = request.messages.len(),
            max_tokens = ?request.max_tokens,
            "Sending chat completion request"
        );

        let response = self
            .http
            .post(self.completions_url())
            .bearer_auth(api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = ?e,
                    timed_out = e.is_timeout(),
                    "Chat completion request failed"
                );
                ModelError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = status.as_u16(),
                body = %body,
                "Chat completion endpoint returned an error"
            );
            return Err(ModelError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let reply: CompletionReply = response.json().await.map_err(|e| {
            tracing::error!(error = ?e, "Failed to decode chat completion response");
            ModelError::Decode(e.to_string())
        })?;

        tracing::info!(choices = reply.choices.len(), "Chat completion succeeded");
        Ok(reply.into())
    }
}
