//! Snapfolio backtest command line
//!
//! Runs a synthetic backtest for a holdings file, or renders the detail
//! view of a previously generated history.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use serde::Serialize;
use snapfolio_backtesting::{
    BacktestEngine, BacktestingData, DailyPoint, EngineConfig, Holding, LookbackWindow,
};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "snapfolio-backtest")]
#[command(about = "Synthetic index backtesting for Snapfolio")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a 3-year synthetic history and period statistics
    Run {
        /// JSON array of holdings
        #[arg(long)]
        holdings: PathBuf,
        #[arg(long)]
        index_name: String,
        /// Seed for a reproducible history
        #[arg(long)]
        seed: Option<u64>,
        /// JSON engine config
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        output: Option<PathBuf>,
        #[arg(long)]
        pretty: bool,
    },
    /// Chart data for a lookback window of a saved history
    Detail {
        /// Saved `historical` array or full run output
        #[arg(long)]
        history: PathBuf,
        #[arg(long, default_value = "10Y")]
        period: LookbackWindow,
        #[arg(long)]
        output: Option<PathBuf>,
        #[arg(long)]
        pretty: bool,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum HistoryFile {
    Points(Vec<DailyPoint>),
    Run(BacktestingData),
}

impl HistoryFile {
    fn into_points(self) -> Vec<DailyPoint> {
        match self {
            HistoryFile::Points(points) => points,
            HistoryFile::Run(data) => data.historical,
        }
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            holdings,
            index_name,
            seed,
            config,
            output,
            pretty,
        } => {
            let mut engine_config = match config {
                Some(path) => EngineConfig::from_file(&path)
                    .with_context(|| format!("Failed to load config from {}", path.display()))?,
                None => EngineConfig::default(),
            };
            if seed.is_some() {
                engine_config.seed = seed;
            }
            let engine = BacktestEngine::new(engine_config)?;

            let stocks: Vec<Holding> = read_json(&holdings)?;
            info!("Loaded {} holdings for '{}'", stocks.len(), index_name);

            let data = engine.generate(&stocks, &index_name);
            write_json(&data, output.as_deref(), pretty)?;
        }
        Commands::Detail {
            history,
            period,
            output,
            pretty,
        } => {
            let points = read_json::<HistoryFile>(&history)?.into_points();
            info!("Loaded {} history points, rendering {}", points.len(), period);

            let engine = BacktestEngine::default();
            let detail = engine.detailed(&points, period);
            write_json(&detail, output.as_deref(), pretty)?;
        }
    }

    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}

fn write_json<T: Serialize>(value: &T, output: Option<&Path>, pretty: bool) -> Result<()> {
    let body = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    match output {
        Some(path) => {
            std::fs::write(path, body)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => println!("{body}"),
    }

    Ok(())
}
