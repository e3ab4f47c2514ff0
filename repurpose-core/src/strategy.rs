//! Per-content-type generation: one model-backed attempt, then a
//! deterministic fallback.
//!
//! Each [`ContentKind`] knows its system instruction, how to phrase the user
//! prompt from a [`GenerationContext`], and how to build a template answer
//! when the model is unavailable. [`ContentKind::generate`] never fails.

use tracing::{info, warn};

use crate::contract::{ChatMessage, ChatRequest, ModelClient};
use crate::repurpose::GenerationContext;

pub const SUMMARY_MAX_CHARS: usize = 250;
pub const SUMMARY_MAX_TOKENS: u32 = 250;
pub const LINK_PLACEHOLDER: &str = "[LINK]";

const ELLIPSIS: &str = "...";
const PARAGRAPH_BREAK: &str = "\n\n";
const HASHTAG_MIN_CHARS: usize = 4;

/// The closed set of content types the pipeline produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Summary,
    SocialPost,
    Newsletter,
}

/// Which path produced a piece of content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generated {
    Model(String),
    Fallback(String),
}

impl Generated {
    pub fn text(&self) -> &str {
        match self {
            Generated::Model(t) | Generated::Fallback(t) => t,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Generated::Model(t) | Generated::Fallback(t) => t,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Generated::Fallback(_))
    }
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Summary => "summary",
            ContentKind::SocialPost => "social_post",
            ContentKind::Newsletter => "newsletter",
        }
    }

    pub fn system_instruction(&self) -> &'static str {
        match self {
            ContentKind::Summary => "Create a concise blog summary.",
            ContentKind::SocialPost => "Create engaging social media posts.",
            ContentKind::Newsletter => "Create an engaging email newsletter.",
        }
    }

    pub fn user_prompt(&self, ctx: &GenerationContext) -> String {
        match self {
            ContentKind::Summary => format!("Summarize this blog post: {}", ctx.blog_post),
            // TODO: tailor the prompt per platform; all three social posts currently share it.
            ContentKind::SocialPost => format!("Create social posts for: {}", ctx.title),
            ContentKind::Newsletter => format!("Create newsletter for blog: {}", ctx.blog_post),
        }
    }

    pub fn max_tokens(&self) -> Option<u32> {
        match self {
            ContentKind::Summary => Some(SUMMARY_MAX_TOKENS),
            ContentKind::SocialPost | ContentKind::Newsletter => None,
        }
    }

    /// The request sent to the model for this kind.
    pub fn request(&self, ctx: &GenerationContext) -> ChatRequest {
        ChatRequest {
            messages: vec![
                ChatMessage::system(self.system_instruction()),
                ChatMessage::user(self.user_prompt(ctx)),
            ],
            max_tokens: self.max_tokens(),
        }
    }

    /// Rule-based content built only from the context.
    pub fn fallback(&self, ctx: &GenerationContext) -> String {
        match self {
            ContentKind::Summary => summary_fallback(&ctx.blog_post),
            ContentKind::SocialPost => social_fallback(&ctx.title),
            ContentKind::Newsletter => newsletter_fallback(&ctx.title, &ctx.blog_post),
        }
    }

    /// Ask the model, and fall back to [`ContentKind::fallback`] on any error
    /// or empty answer.
    pub async fn generate<C>(&self, client: &C, ctx: &GenerationContext) -> Generated
    where
        C: ModelClient + ?Sized,
    {
        info!(kind = self.as_str(), "Requesting model generation");
        match client.complete(self.request(ctx)).await {
            Ok(response) => {
                let text = response.first_text().map(str::trim).unwrap_or_default();
                if !text.is_empty() {
                    info!(
                        kind = self.as_str(),
                        source = "model",
                        chars = text.chars().count(),
                        "Generated content"
                    );
                    return Generated::Model(text.to_string());
                }
                warn!(kind = self.as_str(), "Model returned no content");
            }
            Err(e) => {
                warn!(kind = self.as_str(), error = %e, "Model generation failed");
            }
        }
        let text = self.fallback(ctx);
        info!(
            kind = self.as_str(),
            source = "fallback",
            chars = text.chars().count(),
            "Generated content"
        );
        Generated::Fallback(text)
    }
}

fn paragraphs(text: &str) -> Vec<&str> {
    text.split(PARAGRAPH_BREAK).collect()
}

/// First two paragraphs, space-joined, cut to 250 characters plus an ellipsis.
pub fn summary_fallback(blog_post: &str) -> String {
    let joined = paragraphs(blog_post)
        .into_iter()
        .take(2)
        .collect::<Vec<_>>()
        .join(" ");
    if joined.chars().count() > SUMMARY_MAX_CHARS {
        let mut cut: String = joined.chars().take(SUMMARY_MAX_CHARS).collect();
        cut.push_str(ELLIPSIS);
        cut
    } else {
        joined
    }
}

/// Lower-cased `#` tags for every title word longer than three characters.
pub fn hashtags(title: &str) -> String {
    title
        .split_whitespace()
        .filter(|w| w.chars().count() >= HASHTAG_MIN_CHARS)
        .map(|w| format!("#{}", w.to_lowercase()))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn social_fallback(title: &str) -> String {
    format!(
        "{title}\n\nRead more: {LINK_PLACEHOLDER}\n\n{}",
        hashtags(title)
    )
}

pub fn newsletter_fallback(title: &str, blog_post: &str) -> String {
    let highlight = paragraphs(blog_post).get(1).copied().unwrap_or_default();
    format!(
        "\nSubject: {title}\n\n\
         Hi there!\n\n\
         Check out our latest blog post: {title}\n\n\
         Highlights:\n{highlight}\n\n\
         Read full article: {LINK_PLACEHOLDER}\n\n\
         Cheers!\n"
    )
}
