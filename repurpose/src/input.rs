//! Reading the blog post: from a file when a path is given, otherwise stdin.

use anyhow::{Context, Result};
use std::path::Path;
use tokio::io::AsyncReadExt;
use tracing::{error, info};

pub async fn read_blog_post(path: Option<&Path>) -> Result<String> {
    let text = match path {
        Some(path) => {
            info!(input = %path.display(), "Reading blog post from file");
            tokio::fs::read_to_string(path)
                .await
                .map_err(|e| {
                    error!(error = ?e, input = %path.display(), "Failed to read blog post");
                    e
                })
                .with_context(|| format!("Failed to read blog post {}", path.display()))?
        }
        None => {
            info!("Reading blog post from stdin");
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .context("Failed to read blog post from stdin")?;
            buf
        }
    };
    info!(chars = text.chars().count(), "Blog post loaded");
    Ok(text)
}
