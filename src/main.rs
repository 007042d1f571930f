#![allow(non_snake_case)]

mod app;
mod bridge;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use cardhub_core::logging::LogSetup;
use cardhub_core::{Catalog, InteractionConfig};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Catalog and tuning resolved from the command line before launch
#[derive(Debug, Clone)]
pub struct Launch {
    pub catalog: Catalog,
    pub config: InteractionConfig,
}

static LAUNCH: OnceLock<Launch> = OnceLock::new();

/// Get the launch settings (set from command line or built-in defaults)
pub fn get_launch() -> Launch {
    LAUNCH.get().cloned().unwrap_or_else(|| Launch {
        catalog: Catalog::builtin(),
        config: InteractionConfig::default(),
    })
}

/// Card Hub - filterable tool card grid
#[derive(Parser, Debug)]
#[command(name = "cardhub")]
#[command(about = "Card Hub - a filterable grid of tool cards")]
struct Args {
    /// Interaction config file (JSON); defaults to <config dir>/cardhub/config.json
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Catalog file (JSON) with tabs and cards; defaults to the built-in hub
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Also write JSONL logs under this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Instance name, used in the window title and log file name
    #[arg(short, long, default_value = "main")]
    instance: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut logging = LogSetup::new(&args.instance);
    if let Some(ref dir) = args.log_dir {
        logging = logging.to_dir(dir);
    }
    let log_path = logging.install().context("failed to initialise logging")?;

    let fallback = dirs::config_dir().map(|dir| dir.join("cardhub").join("config.json"));
    let config = InteractionConfig::load_or_default(args.config.as_deref(), fallback.as_deref());
    let catalog = Catalog::load_or_builtin(args.catalog.as_deref());

    tracing::info!(
        instance = %args.instance,
        cards = catalog.cards.len(),
        tabs = catalog.tabs.len(),
        log_file = ?log_path,
        "Starting Card Hub"
    );

    let title = if args.instance == "main" {
        catalog.title.clone()
    } else {
        format!("{} - {}", catalog.title, args.instance)
    };

    let _ = LAUNCH.set(Launch { catalog, config });

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 860.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
