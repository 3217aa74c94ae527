//! Game phase state machine
//!
//! The world travels inside the phase variant, so only the `Running` arm can
//! hand it to the engine. Every other phase simply has nothing to step.

use serde::Serialize;
use std::mem;
use tracing::{debug, info};

use super::{
    action::{Command, Direction},
    config::GameConfig,
    engine::{GameEngine, StepResult},
    state::{Position, World},
};

/// Phase as seen by adapters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GamePhase {
    Start,
    Running,
    Paused,
    GameOver,
}

#[derive(Debug, Clone, PartialEq)]
enum Phase {
    Start(World),
    Running(World),
    Paused(World),
    GameOver(World),
}

impl Phase {
    fn kind(&self) -> GamePhase {
        match self {
            Phase::Start(_) => GamePhase::Start,
            Phase::Running(_) => GamePhase::Running,
            Phase::Paused(_) => GamePhase::Paused,
            Phase::GameOver(_) => GamePhase::GameOver,
        }
    }

    fn world(&self) -> &World {
        match self {
            Phase::Start(world)
            | Phase::Running(world)
            | Phase::Paused(world)
            | Phase::GameOver(world) => world,
        }
    }
}

impl Default for Phase {
    fn default() -> Self {
        Phase::Start(World::initial())
    }
}

/// Read-only view handed to the renderer each frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub phase: GamePhase,
    pub snake: Vec<Position>,
    pub food: Position,
    pub score: u32,
    pub high_score: u32,
}

/// A single game: its phase, its world and the engine that moves it
pub struct Game {
    phase: Phase,
    engine: GameEngine,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        Self::with_engine(GameEngine::new(config))
    }

    /// Start screen backed by an existing engine (keeps its high score)
    pub fn with_engine(engine: GameEngine) -> Self {
        Self {
            phase: Phase::Start(World::initial()),
            engine,
        }
    }

    /// Resume play from an arbitrary world
    pub fn running_with(engine: GameEngine, world: World) -> Self {
        Self {
            phase: Phase::Running(world),
            engine,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase.kind()
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running(_))
    }

    pub fn world(&self) -> &World {
        self.phase.world()
    }

    pub fn score(&self) -> u32 {
        self.world().score
    }

    pub fn high_score(&self) -> u32 {
        self.engine.high_score()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let world = self.world();
        GameSnapshot {
            phase: self.phase(),
            snake: world.snake.body.clone(),
            food: world.food,
            score: world.score,
            high_score: self.engine.high_score(),
        }
    }

    /// Dispatch an adapter command
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Start => self.start(),
            Command::Pause => self.pause(),
            Command::Reset => self.reset(),
            Command::StartAgain => self.start_again(),
            Command::SetDirection(direction) => self.set_direction(direction),
        }
    }

    /// Begin a fresh game. From any phase this discards the current world.
    pub fn start(&mut self) {
        let from = self.phase();
        self.phase = Phase::Running(World::initial());
        debug!(?from, "game started");
    }

    /// Toggle between running and paused. Ignored on the start and game over screens.
    pub fn pause(&mut self) {
        self.phase = match mem::take(&mut self.phase) {
            Phase::Running(world) => {
                debug!("game paused");
                Phase::Paused(world)
            }
            Phase::Paused(world) => {
                debug!("game resumed");
                Phase::Running(world)
            }
            other => {
                debug!(phase = ?other.kind(), "pause ignored");
                other
            }
        };
    }

    /// Back to the start screen with a fresh world
    pub fn reset(&mut self) {
        self.phase = Phase::Start(World::initial());
        debug!("game reset");
    }

    pub fn start_again(&mut self) {
        self.reset();
        self.start();
    }

    /// Request a new heading for the next tick. Only a running game listens
    /// for input.
    pub fn set_direction(&mut self, requested: Direction) {
        let Phase::Running(world) = &mut self.phase else {
            return;
        };

        if !world.snake.turn(requested) {
            debug!(?requested, current = ?world.snake.direction, "reversal rejected");
        }
    }

    /// Advance one tick. Returns `None` unless the game is running.
    pub fn tick(&mut self) -> Option<StepResult> {
        let Phase::Running(world) = &mut self.phase else {
            return None;
        };

        let result = self.engine.step(world);

        if let Some(collision) = result.collision {
            self.engine.record_score(world.score);
            info!(
                ?collision,
                score = world.score,
                high_score = self.engine.high_score(),
                "game over"
            );
            let world = mem::take(world);
            self.phase = Phase::GameOver(world);
        }

        Some(result)
    }
}
