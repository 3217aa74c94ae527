use std::time::Duration;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

/// Periodic tick source held for the duration of one running stretch
pub struct TickDriver {
    interval: Interval,
}

impl TickDriver {
    /// Start ticking. The first tick fires one full period from now.
    pub fn acquire(period: Duration) -> Self {
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { interval }
    }

    pub fn period(&self) -> Duration {
        self.interval.period()
    }

    /// Wait for the next tick
    pub async fn tick(&mut self) {
        self.interval.tick().await;
    }
}
