#![doc = "repurpose-core: parsing, generation strategies and orchestration for blog repurposing."]

//! This crate holds all pipeline logic and data models. It talks to a
//! language model only through the [`contract::ModelClient`] trait; the
//! networked client and the command line live in the `repurpose` crate.

pub mod contract;
pub mod document;
pub mod repurpose;
pub mod sample;
pub mod strategy;

pub use contract::{ChatMessage, ChatRequest, ChatResponse, ChatRole, ModelClient, ModelError};
pub use document::{parse_document, Document, Section};
pub use repurpose::{
    render_text, repurpose, repurpose_blog_content, GenerationContext, Platform, ResultBundle,
    SocialPosts,
};
pub use strategy::{ContentKind, Generated};
