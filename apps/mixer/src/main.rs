use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use client_core::{
    config::{load_settings_from, normalize_server_url, DEFAULT_CONFIG_FILE},
    HttpTransport, MixerDriver, UiEvent,
};
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::mpsc,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod input;
mod terminal;

use input::{parse_line, Command, HELP};
use terminal::TerminalSurface;

#[derive(Parser, Debug)]
struct Args {
    /// Base url of the colors backend, e.g. http://localhost:3000
    #[arg(long)]
    server_url: Option<String>,
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let mut settings = load_settings_from(&args.config)
        .with_context(|| format!("failed to load settings from '{}'", args.config.display()))?;
    if let Some(url) = args.server_url {
        settings.server_url = normalize_server_url(&url)?;
    }
    info!(server_url = %settings.server_url, "starting color mixer");
    println!("{HELP}");

    let (ui_tx, ui_rx) = mpsc::channel::<UiEvent>(64);
    let driver = MixerDriver::new(
        &settings,
        Arc::new(HttpTransport::new()),
        TerminalSurface::stdout(),
    );
    let driver = tokio::spawn(driver.run(ui_rx));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_line(&line) {
            Some(Command::Ui(event)) => {
                if ui_tx.send(event).await.is_err() {
                    warn!("mixer stopped; ignoring input");
                    break;
                }
            }
            Some(Command::Quit) => break,
            Some(Command::Help) => println!("{HELP}"),
            None if line.trim().is_empty() => {}
            None => println!("unrecognized input '{}'\n{HELP}", line.trim()),
        }
    }

    // The driver answers outstanding requests before it returns.
    drop(ui_tx);
    driver.await.context("mixer task panicked")?;
    Ok(())
}
