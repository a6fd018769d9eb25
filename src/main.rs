use std::path::PathBuf;

use bevy::prelude::*;
use clap::Parser;

use neon_folio::{AppConfig, FolioPlugin, Portfolio};

/// Personal portfolio presentation: animated intro + neon particle backdrop.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Extra config layers applied on top of assets/config/app.ron,
    /// later files override earlier ones.
    #[arg(long)]
    config: Vec<PathBuf>,

    /// Portfolio content file (RON); falls back to the embedded profile.
    #[arg(long, default_value = "assets/content/profile.ron")]
    content: PathBuf,

    /// Fixed RNG seed for a deterministic particle field.
    #[arg(long)]
    seed: Option<u64>,

    /// Exit automatically after this many seconds (overrides config).
    #[arg(long)]
    auto_close: Option<f32>,
}

fn main() {
    let cli = Cli::parse();

    let mut layers = vec![PathBuf::from("assets/config/app.ron")];
    layers.extend(cli.config);
    let (mut cfg, used, errors) = AppConfig::load_layered(&layers);
    // The logger is not up yet; startup loader diagnostics go to stderr.
    for e in &errors {
        eprintln!("config: {e}");
    }
    if used.is_empty() {
        eprintln!("config: no layers loaded, using built-in defaults");
    }
    if let Some(seed) = cli.seed {
        cfg.background.seed = Some(seed);
    }
    if let Some(secs) = cli.auto_close {
        cfg.window.auto_close = secs;
    }

    let (portfolio, content_err) = Portfolio::load_or_embedded(&cli.content);
    if let Some(e) = content_err {
        eprintln!("content: {e}; using embedded profile");
    }

    App::new()
        .insert_resource(cfg.clone())
        .insert_resource(portfolio)
        .add_plugins(
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: cfg.window.title.clone(),
                    resolution: (cfg.window.width, cfg.window.height).into(),
                    resizable: true,
                    ..default()
                }),
                ..default()
            }),
        )
        .add_plugins(FolioPlugin)
        .run();
}
