use std::time::{Duration, Instant};

/// Play-time bookkeeping for the current process
pub struct GameMetrics {
    /// Running time of the current game, paused stretches excluded
    pub elapsed_time: Duration,
    pub games_played: u32,
    running_since: Option<Instant>,
    banked: Duration,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            elapsed_time: Duration::ZERO,
            games_played: 0,
            running_since: None,
            banked: Duration::ZERO,
        }
    }

    /// Clock is ticking only while the game runs
    pub fn set_running(&mut self, running: bool) {
        match (running, self.running_since) {
            (true, None) => self.running_since = Some(Instant::now()),
            (false, Some(since)) => {
                self.banked += since.elapsed();
                self.running_since = None;
            }
            _ => {}
        }
        self.update();
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.banked
            + self
                .running_since
                .map(|since| since.elapsed())
                .unwrap_or(Duration::ZERO);
    }

    pub fn on_game_start(&mut self) {
        self.banked = Duration::ZERO;
        self.running_since = Some(Instant::now());
        self.elapsed_time = Duration::ZERO;
    }

    pub fn on_game_over(&mut self) {
        self.set_running(false);
        self.games_played += 1;
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
