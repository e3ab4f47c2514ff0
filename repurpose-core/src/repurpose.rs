//! High-level pipeline: parse → generate each content kind → assemble.
//!
//! This module provides the orchestration for one repurposing run. It:
//!   - Builds a single read-only [`GenerationContext`] from a parsed [`Document`]
//!   - Walks a fixed plan (summary, one social post per [`Platform`], newsletter)
//!     and awaits every generation strictly one after the other
//!   - Returns a fully populated [`ResultBundle`]
//!
//! # Error Handling
//! There is none to surface. Every strategy absorbs model failures and falls
//! back to a template, so the bundle is always complete. Which path produced
//! each field is logged, not returned.
//!
//! # Navigation
//! - Main entrypoints: [`repurpose`], [`repurpose_blog_content`]
//! - Rendering for the CLI: [`render_text`]

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use tracing::{debug, info};

use crate::contract::ModelClient;
use crate::document::{parse_document, Document, Section};
use crate::strategy::ContentKind;

/// Read-only input shared by every strategy during one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationContext {
    pub blog_post: String,
    pub title: String,
    pub sections: Vec<Section>,
}

impl GenerationContext {
    pub fn from_document(document: &Document) -> Self {
        Self {
            blog_post: document.raw.clone(),
            title: document.title.clone(),
            sections: document.sections.clone(),
        }
    }
}

/// Social networks a post is generated for, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Twitter,
    Linkedin,
    Facebook,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Twitter, Platform::Linkedin, Platform::Facebook];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Twitter => "twitter",
            Platform::Linkedin => "linkedin",
            Platform::Facebook => "facebook",
        }
    }
}

/// Platform name → post, kept in [`Platform::ALL`] order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialPosts(Vec<(Platform, String)>);

impl SocialPosts {
    pub fn get(&self, platform: Platform) -> Option<&str> {
        self.0
            .iter()
            .find(|(p, _)| *p == platform)
            .map(|(_, post)| post.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Platform, &str)> {
        self.0.iter().map(|(p, post)| (*p, post.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|(p, _)| p.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn insert(&mut self, platform: Platform, post: String) {
        match self.0.iter_mut().find(|(p, _)| *p == platform) {
            Some(slot) => slot.1 = post,
            None => self.0.push((platform, post)),
        }
    }
}

impl Serialize for SocialPosts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (platform, post) in &self.0 {
            map.serialize_entry(platform.as_str(), post)?;
        }
        map.end()
    }
}

/// Everything produced for one blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultBundle {
    pub title: String,
    pub summary: String,
    pub social_media_posts: SocialPosts,
    pub email_newsletter: String,
}

/// Generate all derivative content for an already parsed document.
pub async fn repurpose<C>(client: &C, document: &Document) -> ResultBundle
where
    C: ModelClient + ?Sized,
{
    info!(title = %document.title, sections = document.sections.len(), "[REPURPOSE] Starting run");
    let ctx = GenerationContext::from_document(document);

    let summary = ContentKind::Summary.generate(client, &ctx).await;

    let mut social_media_posts = SocialPosts::default();
    for platform in Platform::ALL {
        debug!(platform = platform.as_str(), "[REPURPOSE] Generating social post");
        let post = ContentKind::SocialPost.generate(client, &ctx).await;
        social_media_posts.insert(platform, post.into_text());
    }

    let newsletter = ContentKind::Newsletter.generate(client, &ctx).await;

    info!(
        summary_fallback = summary.is_fallback(),
        newsletter_fallback = newsletter.is_fallback(),
        "[REPURPOSE] Run complete"
    );

    ResultBundle {
        title: ctx.title,
        summary: summary.into_text(),
        social_media_posts,
        email_newsletter: newsletter.into_text(),
    }
}

/// Parse `blog_post` and repurpose it in one call.
pub async fn repurpose_blog_content<C>(client: &C, blog_post: &str) -> ResultBundle
where
    C: ModelClient + ?Sized,
{
    let document = parse_document(blog_post);
    repurpose(client, &document).await
}

/// Human-readable layout: title, summary, each social post, newsletter.
pub fn render_text(bundle: &ResultBundle) -> String {
    let mut out = format!(
        "Title: {}\n\nSummary:\n{}\n\nSocial Media Posts:\n",
        bundle.title, bundle.summary
    );
    for (platform, post) in bundle.social_media_posts.iter() {
        out.push_str(&format!("\n{}:\n{}\n", platform.as_str().to_uppercase(), post));
    }
    out.push_str(&format!("\nEmail Newsletter:\n{}\n", bundle.email_newsletter));
    out
}
