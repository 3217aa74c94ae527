use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Side length of the square play field
pub const GRID_SIZE: i32 = 10;

/// Time between two simulation steps while running
pub const TICK_INTERVAL: Duration = Duration::from_millis(200);

/// How a new piece of food is placed after one is eaten
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FoodPolicy {
    /// Pick uniformly among the cells the snake does not cover
    #[default]
    AvoidSnake,
    /// Pick uniformly over the whole grid, the snake body included
    Uniform,
}

/// Configuration for the game
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Food placement policy
    pub food_policy: FoodPolicy,
    /// Seed for food placement; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Create a configuration with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Load a configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config {:?}", path))?;
        Ok(config)
    }
}
