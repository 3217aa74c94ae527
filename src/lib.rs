//! Grid Snake - a terminal snake game on a fixed 10x10 grid
//!
//! This library provides:
//! - Core game logic and phase state machine (game module)
//! - Tick driving tied to the running phase (driver module)
//! - Keyboard mapping (input module)
//! - TUI rendering (render module)
//! - Per-session play statistics (metrics module)
//! - The interactive play loop (modes module)

pub mod driver;
pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
