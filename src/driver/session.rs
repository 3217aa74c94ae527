use std::future;
use std::time::Duration;

use super::ticker::TickDriver;
use crate::game::{Command, Game, GamePhase, GameSnapshot, StepResult, TICK_INTERVAL};

/// A game plus the tick driver whose lifetime follows the running phase.
///
/// Every command and every tick goes through here, so the driver is
/// re-synchronized with the phase right after each transition.
pub struct Session {
    game: Game,
    driver: Option<TickDriver>,
    period: Duration,
}

impl Session {
    pub fn new(game: Game) -> Self {
        Self::with_period(game, TICK_INTERVAL)
    }

    pub fn with_period(game: Game, period: Duration) -> Self {
        let mut session = Self {
            game,
            driver: None,
            period,
        };
        session.sync_driver();
        session
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn phase(&self) -> GamePhase {
        self.game.phase()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot()
    }

    /// Whether a tick driver is currently held
    pub fn is_ticking(&self) -> bool {
        self.driver.is_some()
    }

    pub fn apply(&mut self, command: Command) {
        self.game.apply(command);
        self.sync_driver();
    }

    /// Resolves on the next tick. Never resolves while no driver is held.
    pub async fn next_tick(&mut self) {
        match self.driver.as_mut() {
            Some(driver) => driver.tick().await,
            None => future::pending().await,
        }
    }

    /// Step the game for a tick that just fired
    pub fn on_tick(&mut self) -> Option<StepResult> {
        let result = self.game.tick();
        self.sync_driver();
        result
    }

    fn sync_driver(&mut self) {
        match (self.game.is_running(), self.driver.is_some()) {
            (true, false) => self.driver = Some(TickDriver::acquire(self.period)),
            (false, true) => self.driver = None,
            _ => {}
        }
    }
}
