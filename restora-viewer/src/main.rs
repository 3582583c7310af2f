use anyhow::{Context, Result};
use clap::Parser;
use restora_core::{ApiClient, Config};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod app;
mod dialogs;
mod document;
mod renderer;
mod scroll_animation;
mod subscriptions;
mod views;

use app::RestoraViewer;

#[derive(Parser, Debug)]
#[command(name = "restora", version, about = "View OCR results from a Restora backend")]
struct Args {
    /// Backend base URL, overriding the configured one
    #[arg(long, value_name = "URL")]
    backend_url: Option<String>,

    /// Config file (TOML, or JSON by extension)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("restora_viewer=debug,restora_core=debug,info")),
        )
        .init();

    let args = Args::parse();

    let config_path = args.config.or_else(Config::default_path);
    let config = match config_path.as_deref() {
        Some(path) if path.exists() => Config::load_or_default(path),
        _ => Config::default(),
    };

    let base_url = args
        .backend_url
        .unwrap_or_else(|| config.backend.base_url.clone());
    let client = ApiClient::new(&base_url)
        .with_context(|| format!("Invalid backend URL '{}'", base_url))?;
    tracing::info!("Starting Restora against {}", client.base_url());

    iced::application("Restora", RestoraViewer::update, RestoraViewer::view)
        .theme(RestoraViewer::theme)
        .subscription(RestoraViewer::subscription)
        .window_size((1280.0, 800.0))
        .run_with(move || RestoraViewer::new(config, config_path, client))?;

    Ok(())
}
