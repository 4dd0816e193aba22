//! dalle-demo - generate images with the `OpenAI` Images API and download them.

mod adapters;
mod cassette;
mod cli;
mod config;
mod console;
mod context;
mod error;
mod generate;
mod model;
mod output;
mod params;
mod ports;

use std::path::Path;
use std::process;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;
use crate::config::Config;
use crate::console::{banner, rule};
use crate::context::ServiceContext;
use crate::error::DemoError;
use crate::generate::generate_image;
use crate::model::{resolve_model, DEFAULT_MODEL};
use crate::output::{download_image, indexed_filename};
use crate::params::{validate_count, validate_prompt, ImageQuality, ImageSize};
use crate::ports::GenerationRequest;

/// File name prefix when neither the CLI nor the config file sets one.
const DEFAULT_OUTPUT_PREFIX: &str = "cybersecurity_demo";

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "dalle_demo=debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(cli: Cli) -> Result<(), DemoError> {
    banner("OpenAI DALL-E Image Generation Demo");
    println!();

    let config_path = config::discover_config_path(cli.config.as_deref());
    let config = Config::load(&config_path).map_err(DemoError::Config)?;
    tracing::debug!(path = %config_path.display(), "configuration loaded");

    let request = build_request(&cli, &config)?;
    let output_prefix = cli
        .output_prefix
        .clone()
        .or_else(|| config.defaults.output_prefix.clone())
        .unwrap_or_else(|| DEFAULT_OUTPUT_PREFIX.to_string());

    // Create context based on mode (live / recording / replaying)
    let replay_path = std::env::var("DALLE_DEMO_REPLAY").ok();
    let is_recording = std::env::var("DALLE_DEMO_REC").is_ok_and(|v| v == "true" || v == "1");

    let (ctx, recording_session) = if let Some(ref cassette_path) = replay_path {
        tracing::info!(cassette = %cassette_path, "replaying");
        (ServiceContext::replaying(Path::new(cassette_path))?, None)
    } else if is_recording {
        tracing::info!("recording mode enabled");
        let (ctx, session) = ServiceContext::recording(&config)?;
        (ctx, Some(session))
    } else {
        (ServiceContext::live(&config)?, None)
    };

    let result = generate_image(ctx.generator.as_ref(), &request).await;
    if let Ok(summary) = serde_json::to_string(&result) {
        tracing::debug!(%summary, "generation finished");
    }

    if result.is_success() {
        println!("\nGenerated Image Details:");
        println!("{}", rule('-', 60));
        for (i, image) in result.images().iter().enumerate() {
            let index = i + 1;
            println!("\nImage {index}:");
            println!("URL: {}", image.url.as_deref().unwrap_or("(none)"));
            if let Some(revised) = image.revised_prompt.as_deref().filter(|p| !p.is_empty()) {
                println!("Revised Prompt: {revised}");
            }

            let Some(url) = image.url.as_deref() else {
                tracing::warn!(index, "image has no URL");
                println!("✗ Error downloading image: no URL returned for this image");
                continue;
            };
            let filename = indexed_filename(&output_prefix, index);
            download_image(ctx.downloader.as_ref(), url, Some(&filename)).await;
        }
    }

    drop(ctx);
    if let Some(session) = recording_session {
        match session.finish() {
            Ok(path) => eprintln!("Cassette saved: {}", path.display()),
            Err(e) => eprintln!("Warning: failed to save cassette: {e}"),
        }
    }

    println!("\n{}", rule('=', 60));
    println!("Demo Complete!");
    println!("{}", rule('=', 60));

    Ok(())
}

/// Merge CLI flags over config defaults over built-in defaults and validate.
fn build_request(cli: &Cli, config: &Config) -> Result<GenerationRequest, DemoError> {
    let prompt = cli.resolve_prompt()?;
    validate_prompt(&prompt).map_err(DemoError::InvalidArgument)?;

    let defaults = &config.defaults;
    let model = cli.model.as_deref().or(defaults.model.as_deref()).unwrap_or(DEFAULT_MODEL);

    let size = match cli.size.as_deref().or(defaults.size.as_deref()) {
        Some(s) => s.parse::<ImageSize>().map_err(DemoError::InvalidArgument)?,
        None => ImageSize::default(),
    };
    let quality = match cli.quality.as_deref().or(defaults.quality.as_deref()) {
        Some(q) => q.parse::<ImageQuality>().map_err(DemoError::InvalidArgument)?,
        None => ImageQuality::default(),
    };
    let count = cli.count.or(defaults.count).unwrap_or(1);
    validate_count(count).map_err(DemoError::InvalidArgument)?;

    Ok(GenerationRequest { model: resolve_model(model), prompt, size, quality, count })
}
