//! # contract: the chat-completion boundary
//!
//! This module defines the single trait ([`ModelClient`]) the generation
//! strategies talk to, together with the plain request/response types that
//! cross it. Nothing in here knows about HTTP, providers or credentials; the
//! `repurpose` binary crate supplies the networked implementation.
//!
//! ## Interface
//! - A request is an ordered list of role/content messages plus an optional
//!   cap on output tokens. The model identifier belongs to the client's own
//!   configuration and is added by the implementation.
//! - A response carries zero or more choices; callers read the first one.
//! - Every failure mode (transport, status, decoding, missing configuration)
//!   is reported as a [`ModelError`].
//!
//! ## Mocking & Testing
//! - The trait is annotated for `mockall`, so `MockModelClient` is available
//!   to unit tests and, through the `test-export-mocks` feature, to
//!   integration tests and downstream crates.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

#[cfg(any(test, feature = "test-export-mocks"))]
use mockall::automock;

/// Who authored a message in a chat-completion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

/// One role/content pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// A chat-completion request as built by a generation strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    /// Messages in the order they are sent.
    pub messages: Vec<ChatMessage>,
    /// Upper bound on generated tokens. `None` leaves it to the provider.
    pub max_tokens: Option<u32>,
}

/// A single completion alternative.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatChoice {
    /// Text of the assistant message; providers may omit it.
    pub content: Option<String>,
}

/// Response of a chat-completion call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

impl ChatResponse {
    /// Convenience constructor for a response holding a single text choice.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            choices: vec![ChatChoice {
                content: Some(text.into()),
            }],
        }
    }

    /// Text of the first choice, if the provider returned one.
    pub fn first_text(&self) -> Option<&str> {
        self.choices.first().and_then(|c| c.content.as_deref())
    }
}

/// Anything that can go wrong talking to the model endpoint.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("endpoint returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not decode completion response: {0}")]
    Decode(String),

    #[error("model client is missing `{0}`")]
    NotConfigured(&'static str),
}

/// Trait for issuing chat-completion requests against a configured model.
///
/// Implemented by the HTTP client in the `repurpose` crate and by
/// `MockModelClient` in tests. The handle is read-only once built.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Send one request and return the provider's response.
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse, ModelError>;
}
