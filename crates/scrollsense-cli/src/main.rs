use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scrollsense_core::{AppConfig, HeaderBehavior};

mod commands;

#[derive(Parser)]
#[command(name = "scrollsense")]
#[command(author, version, about = "Scroll-reactive header demo and trace tool")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the terminal demo page
    Demo {
        /// Header behavior: hide-on-scroll, always-fixed, always-top
        #[arg(short, long)]
        behavior: Option<HeaderBehavior>,
    },
    /// Replay scroll offsets through the header and print the state after each one
    Trace(commands::trace::TraceArgs),
    /// Show the effective configuration
    Config {
        /// Write the default configuration file if none exists
        #[arg(long)]
        init: bool,
    },
}

fn init_logging(default_level: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    match cli.command {
        Some(Commands::Demo { behavior }) => {
            // Log lines would tear through the alternate screen
            init_logging("off");
            commands::demo::run(config, behavior)
        }
        None => {
            init_logging("off");
            commands::demo::run(config, None)
        }
        Some(Commands::Trace(args)) => {
            init_logging(&config.general.log_level);
            commands::trace::run(&config, args)
        }
        Some(Commands::Config { init }) => {
            init_logging(&config.general.log_level);
            commands::config::run(&config, init)
        }
    }
}
