///
/// This module implements the CLI interface for repurpose: command parsing,
/// argument exposure and the async `run` entrypoint.
///
/// All pipeline logic (parsing, strategies, orchestration) lives in the
/// [`repurpose-core`] crate. This module is glue: it loads provider settings,
/// builds the HTTP client, reads the post and prints the result.
///
/// ## How To Use
/// - From a shell: `repurpose run --input post.md`, or `repurpose demo`.
/// - Programmatically / in tests: call [`run`] with a constructed [`Cli`].
///
/// [`repurpose-core`]: ../../repurpose-core/
use crate::client::ChatCompletionClient;
use crate::input::read_blog_post;
use crate::load_config::load_config;
use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use repurpose_core::repurpose::{render_text, repurpose_blog_content, ResultBundle};
use repurpose_core::sample::SAMPLE_BLOG_POST;
use std::path::PathBuf;

/// CLI for repurpose: turn a markdown blog post into a summary, social posts and a newsletter.
#[derive(Parser)]
#[clap(
    name = "repurpose",
    version,
    about = "Repurpose a markdown blog post into a summary, social media posts and an email newsletter"
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Repurpose a blog post read from a file or stdin
    Run {
        /// Markdown file to read; stdin when omitted
        #[clap(long)]
        input: Option<PathBuf>,
        /// Output layout
        #[clap(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Model provider, overrides MODEL_SERVER
        #[clap(long)]
        provider: Option<String>,
    },
    /// Repurpose the built-in sample post
    Demo {
        /// Output layout
        #[clap(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Model provider, overrides MODEL_SERVER
        #[clap(long)]
        provider: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

pub fn render(bundle: &ResultBundle, format: OutputFormat) -> Result<String> {
    let out = match format {
        OutputFormat::Text => render_text(bundle),
        OutputFormat::Json => serde_json::to_string_pretty(bundle)? + "\n",
        OutputFormat::Yaml => serde_yaml::to_string(bundle)?,
    };
    Ok(out)
}

/// Async CLI entrypoint for integration tests and main()
pub async fn run(cli: Cli) -> Result<()> {
    tracing::info!("trace_initialised");

    let (text, format, settings) = match cli.command {
        Commands::Run {
            input,
            format,
            provider,
        } => {
            // Provider is checked before the input is read so a bad name fails fast.
            let settings = load_config(provider.as_deref())?;
            let text = read_blog_post(input.as_deref()).await?;
            (text, format, settings)
        }
        Commands::Demo { format, provider } => {
            let settings = load_config(provider.as_deref())?;
            (SAMPLE_BLOG_POST.to_string(), format, settings)
        }
    };

    let client = ChatCompletionClient::new(settings)
        .map_err(|e| anyhow::anyhow!("Failed to construct model client: {e}"))?;

    tracing::info!(command = "repurpose", "Starting repurposing");
    let bundle = repurpose_blog_content(&client, &text).await;
    tracing::info!(command = "repurpose", title = %bundle.title, "Repurposing complete");

    print!("{}", render(&bundle, format)?);
    Ok(())
}
