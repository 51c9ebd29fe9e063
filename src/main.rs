//! Binary entrypoint for the fanart screensaver.
//!
//! Delegates all logic to the library crate; this file only wires host
//! signals, the settings source, the library catalog, and the surface
//! together.

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use fanart_screensaver::events::HostEvent;
use fanart_screensaver::host::{CatalogClient, ConsoleSurface, YamlSettings};
use fanart_screensaver::settings::Settings;
use fanart_screensaver::slideshow::Slideshow;

#[derive(Debug, Parser)]
#[command(name = "fanart-screensaver", about = "Movie fanart screensaver")]
struct Cli {
    /// Path to the raw YAML settings file
    #[arg(short, long, value_name = "FILE", default_value = "settings.yaml")]
    config: PathBuf,

    /// Path to the JSON library catalog (a VideoLibrary.GetMovies response)
    #[arg(short, long, value_name = "FILE", default_value = "library.json")]
    library: PathBuf,

    /// Presentation surface width in pixels
    #[arg(long, value_name = "PIXELS", default_value_t = 1920)]
    screen_width: u32,

    /// Presentation surface height in pixels
    #[arg(long, value_name = "PIXELS", default_value_t = 1080)]
    screen_height: u32,

    /// Deterministic RNG seed for movie selection
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("fanart_screensaver={level}")));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Settings resolution never aborts the run; an unreadable file just
    // means every field falls back to its default.
    let raw = match YamlSettings::from_yaml_file(&cli.config) {
        Ok(raw) => raw,
        Err(err) => {
            warn!("could not load settings ({err:#}); using defaults");
            YamlSettings::default()
        }
    };
    let settings = Settings::resolve(&raw);
    info!(?settings, "resolved settings");

    let cancel = CancellationToken::new();
    let (event_tx, mut event_rx) = mpsc::channel::<HostEvent>(16);

    // Ctrl-C is the host-wide abort signal.
    {
        let event_tx = event_tx.clone();
        tokio::spawn(async move {
            if let Err(err) = tokio::signal::ctrl_c().await {
                warn!("ctrl-c handler failed: {err}");
                return;
            }
            let _ = event_tx.send(HostEvent::AbortRequested).await;
        });
    }

    // Any byte on stdin counts as user activity.
    if io::stdin().is_terminal() {
        let event_tx = event_tx.clone();
        tokio::task::spawn_blocking(move || {
            let mut byte = [0u8; 1];
            match io::stdin().read(&mut byte) {
                Ok(_) => {
                    let _ = event_tx.blocking_send(HostEvent::Input);
                }
                Err(err) => warn!("stdin watcher failed: {err}"),
            }
        });
    } else {
        info!("stdin is not a terminal; only ctrl-c will stop the screensaver");
    }

    // Both cancellation sources are treated identically.
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if let Some(event) = event_rx.recv().await {
                info!(?event, "host event received; stopping screensaver");
                cancel.cancel();
            }
        });
    }

    let surface = ConsoleSurface::new(cli.screen_width, cli.screen_height);
    let client = CatalogClient::new(cli.library.clone());

    let mut slideshow = Slideshow::new(surface, settings, cancel.clone(), cli.seed);
    if slideshow.initialize(&client)? {
        slideshow.run().await?;
    } else {
        info!("nothing to display; exiting");
    }
    slideshow.shutdown();

    Ok(())
}
