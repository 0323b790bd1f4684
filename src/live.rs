//! Per-second counters for the live view.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;

use crate::dates::clock::Clock;
use crate::dates::stats::{LiveStats, live_stats_now};

/// Recomputes [`LiveStats`] from a clock once per period.
///
/// Nothing is carried between ticks; each snapshot is derived from the clock alone. Stop by
/// dropping the ticker.
pub struct LiveTicker {
    birth: NaiveDate,
    clock: Arc<dyn Clock>,
    period: Duration,
    interval: Option<tokio::time::Interval>,
}

impl LiveTicker {
    pub fn new(birth: NaiveDate, clock: Arc<dyn Clock>) -> Self {
        Self::with_period(birth, clock, Duration::from_secs(1))
    }

    pub fn with_period(birth: NaiveDate, clock: Arc<dyn Clock>, period: Duration) -> Self {
        Self {
            birth,
            clock,
            period,
            interval: None,
        }
    }

    /// Counters as of the clock's current instant.
    pub fn snapshot(&self) -> LiveStats {
        live_stats_now(self.birth, self.clock.as_ref())
    }

    /// Wait for the next tick and return a fresh snapshot. The first tick completes immediately.
    pub async fn tick(&mut self) -> LiveStats {
        let period = self.period;
        let interval = self.interval.get_or_insert_with(|| {
            let mut i = tokio::time::interval(period);
            i.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            i
        });
        interval.tick().await;
        self.snapshot()
    }
}
