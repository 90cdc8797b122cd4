//! mapkey - Entry Point
//!
//! Inspects the sample surface registries.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `mapkey keys [--json]` | List every binding with its description and aliases |
//! | `mapkey check` | Verify the closed key set is bound and every provider builds |
//! | `mapkey show <surface>` | Render one surface |

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mapkey::SurfaceKind;
use mapkey::commands;
use mapkey::context::AppContext;
use mapkey::infrastructure::logging::log_config_loaded;
use mapkey::infrastructure::{ConfigLoader, init_logging};

/// Command line interface for mapkey
#[derive(Parser, Debug)]
#[command(name = "mapkey")]
#[command(about = "mapkey - Keyed multi-binding registry inspector")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List registered keys
    Keys {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Verify that every surface is bound and builds
    Check,
    /// Render a surface (home, settings, about)
    Show {
        /// Surface to render
        surface: SurfaceKind,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load()?;
    init_logging(&config.logging)?;
    // Loading ran before a subscriber existed
    if let Some(path) = loader.resolve_config_path() {
        log_config_loaded(&path, path.exists());
    }

    let context = AppContext::new(config)?;
    let mut stdout = io::stdout().lock();

    match cli.command {
        Command::Keys { json } => commands::keys(&context, json, &mut stdout),
        Command::Check => commands::check(&context, &mut stdout),
        Command::Show { surface } => commands::show(&context, surface, &mut stdout),
    }
}
