use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use grid_snake::game::{FoodPolicy, GameConfig};
use grid_snake::modes::PlayMode;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Snake on a 10x10 grid")]
struct Cli {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Where new food may appear
    #[arg(long)]
    food_policy: Option<FoodPolicyArg>,

    /// Write logs to this file (the terminal is taken by the game)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum FoodPolicyArg {
    /// Never place food on the snake
    AvoidSnake,
    /// Any cell, the snake body included
    Uniform,
}

impl From<FoodPolicyArg> for FoodPolicy {
    fn from(arg: FoodPolicyArg) -> Self {
        match arg {
            FoodPolicyArg::AvoidSnake => FoodPolicy::AvoidSnake,
            FoodPolicyArg::Uniform => FoodPolicy::Uniform,
        }
    }
}

/// `RUST_LOG` when set and valid, otherwise `info`
fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create log file {:?}", path))?;

    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(policy) = cli.food_policy {
        config.food_policy = policy.into();
    }

    tracing::info!(?config, "configuration loaded");

    let mut play_mode = PlayMode::new(config);
    play_mode.run().await?;

    Ok(())
}
