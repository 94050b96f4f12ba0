use std::fs::{self, File};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use sortviz_core::{Algorithm, AppConfig, Speed};

mod commands;

#[derive(Parser)]
#[command(name = "sortviz")]
#[command(author, version, about = "Animated sorting algorithms in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Algorithm to use (e.g. `quick`, `merge_sort`)
    #[arg(short = 'a', long, global = true)]
    algorithm: Option<Algorithm>,

    /// Animation speed: slow, medium or fast
    #[arg(short = 's', long, global = true)]
    speed: Option<Speed>,

    /// Number of bars in a generated array
    #[arg(short = 'n', long, global = true)]
    size: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run,
    /// Sort one array without the TUI and print the result
    Sort {
        /// Comma-separated values to sort instead of a random array
        #[arg(short = 'v', long, value_delimiter = ',')]
        values: Option<Vec<u32>>,
        /// Delay between steps in milliseconds, overriding --speed
        #[arg(short = 'd', long)]
        delay_ms: Option<u64>,
        /// Print every step as a JSON line
        #[arg(short = 't', long)]
        trace: bool,
    },
    /// List the available algorithms
    List,
    /// Print the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration, then apply command line overrides
    let mut config = AppConfig::load()?;
    if let Some(algorithm) = cli.algorithm {
        config.engine.algorithm = algorithm;
    }
    if let Some(speed) = cli.speed {
        config.engine.speed = speed;
    }
    if let Some(size) = cli.size {
        config.engine.array_len = size;
    }
    config.engine.validate()?;

    let tui = matches!(cli.command, Some(Commands::Run) | None);
    init_logging(&config, tui)?;

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(Arc::new(config)).await,
        Some(Commands::Sort {
            values,
            delay_ms,
            trace,
        }) => commands::sort::run(&config, values, delay_ms, trace).await,
        Some(Commands::List) => commands::list::run(),
        Some(Commands::Config) => commands::config::run(&config),
    }
}

/// Install the tracing subscriber
///
/// The TUI owns the terminal, so it logs to a file in the data directory.
fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    if to_file {
        fs::create_dir_all(config.data_dir()).with_context(|| {
            format!("Failed to create data directory {}", config.data_dir().display())
        })?;
        let log_path = config.log_path();
        let file = File::create(&log_path)
            .with_context(|| format!("Failed to create log file {}", log_path.display()))?;
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
    Ok(())
}
