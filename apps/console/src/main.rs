use std::{io, path::PathBuf};

use anyhow::Result;
use app_core::ViewCoordinator;
use clap::Parser;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod backend_bridge;
mod config;
mod controller;
mod ui;

use backend_bridge::runtime::{spawn_line_reader, INPUT_QUEUE_CAPACITY};
use config::load_settings;
use ui::{OutputFormat, Renderer};

#[derive(Parser, Debug)]
#[command(about = "DevProd AI dashboard in the terminal")]
struct Args {
    /// TOML settings file (defaults to ./devprod.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print one JSON object per notification instead of text.
    #[arg(long)]
    json: bool,
    #[arg(long)]
    user_name: Option<String>,
    #[arg(long)]
    reply_delay_ms: Option<u64>,
    #[arg(long)]
    verification_delay_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings(args.config.as_deref())?;
    if let Some(v) = args.user_name {
        settings.user_name = v;
    }
    if let Some(v) = args.reply_delay_ms {
        settings.reply_delay_ms = v;
    }
    if let Some(v) = args.verification_delay_ms {
        settings.verification_delay_ms = v;
    }
    info!(?settings, "starting console");

    let mut coordinator = ViewCoordinator::new(settings.coordinator_options());
    let renderer = Renderer::new(if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    });

    let (line_tx, line_rx) = mpsc::channel(INPUT_QUEUE_CAPACITY);
    spawn_line_reader(io::BufReader::new(io::stdin()), line_tx);

    let mut stdout = io::stdout().lock();
    controller::orchestration::run(
        &mut coordinator,
        line_rx,
        settings.tick(),
        &renderer,
        &mut stdout,
    )
    .await?;

    Ok(())
}
