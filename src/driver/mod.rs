//! Tick driving for a running game
//!
//! The periodic timer exists only while the game is running. Leaving the
//! running phase drops it, and re-entering acquires a fresh one.

pub mod session;
pub mod ticker;

pub use session::Session;
pub use ticker::TickDriver;
