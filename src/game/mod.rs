//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Adapters drive it through [`Game`] commands and read [`GameSnapshot`]s back.

pub mod action;
pub mod config;
pub mod engine;
pub mod machine;
pub mod state;

// Re-export commonly used types
pub use action::{Command, Direction};
pub use config::{FoodPolicy, GameConfig, GRID_SIZE, TICK_INTERVAL};
pub use engine::{GameEngine, StepResult};
pub use machine::{Game, GamePhase, GameSnapshot};
pub use state::{CollisionType, Position, Snake, World};
