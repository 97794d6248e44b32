use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cascade_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "cascade")]
#[command(author, version, about = "A terminal deck viewer with waterfall page navigation")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Deck directory to open (shorthand for `run`)
    deck: Option<PathBuf>,

    /// Override the transition cooldown, in milliseconds
    #[arg(long = "cooldown-ms")]
    cooldown_ms: Option<u64>,

    /// Override the wheel throttle window, in milliseconds
    #[arg(long = "throttle-ms")]
    throttle_ms: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the viewer
    Run {
        /// Deck directory (built-in demo deck when omitted)
        deck: Option<PathBuf>,
    },
    /// List the pages a deck would load
    List {
        /// Deck directory (built-in demo deck when omitted)
        deck: Option<PathBuf>,
    },
    /// Print the configuration file location
    ConfigPath,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration and apply command-line overrides
    let mut config = AppConfig::load()?;

    // Initialize logging; RUST_LOG wins over the configured level
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    if let Some(ms) = cli.cooldown_ms {
        config.navigator.cooldown_ms = ms;
    }
    if let Some(ms) = cli.throttle_ms {
        config.navigator.wheel_throttle_ms = ms;
    }

    match cli.command {
        Some(Commands::Run { deck }) => commands::run::run(config, deck.as_deref()),
        None => commands::run::run(config, cli.deck.as_deref()),
        Some(Commands::List { deck }) => commands::list::run(deck.as_deref()),
        Some(Commands::ConfigPath) => {
            println!("{}", AppConfig::config_path().display());
            Ok(())
        }
    }
}
