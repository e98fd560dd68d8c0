use std::time::{Duration, Instant};

/// Fixed-period tick schedule driven by the frame loop. The first period
/// starts when the timer is first polled.
pub struct TickTimer {
    period: Duration,
    last_tick: Option<Instant>,
}

impl TickTimer {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            last_tick: None,
        }
    }

    pub fn restart(&mut self) {
        self.last_tick = None;
    }

    /// Consumes at most one due tick; a slow frame delays the next tick
    /// instead of queueing several.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.last_tick {
            None => {
                self.last_tick = Some(now);
                false
            }
            Some(last) if now.duration_since(last) >= self.period => {
                self.last_tick = Some(now);
                true
            }
            Some(_) => false,
        }
    }

    pub fn time_until_next(&self, now: Instant) -> Duration {
        match self.last_tick {
            Some(last) => self.period.saturating_sub(now.duration_since(last)),
            None => self.period,
        }
    }
}
