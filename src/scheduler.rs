use std::time::{Duration, Instant};

/// Single-slot tick timer.
///
/// At most one tick is pending at a time. Arming replaces the pending
/// deadline and cancelling clears it, so a paused game can never receive a
/// stale tick.
#[derive(Debug, Clone)]
pub struct TickScheduler {
    interval: Duration,
    pending: Option<Instant>,
}

impl TickScheduler {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            pending: None,
        }
    }

    /// Schedules the next tick one interval after `now`.
    pub fn arm(&mut self, now: Instant) {
        self.pending = Some(now + self.interval);
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time left until the pending tick, zero when overdue.
    #[must_use]
    pub fn time_until(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Consumes the pending tick when its deadline has passed.
    ///
    /// The slot is empty afterwards; the caller re-arms it if the game keeps running.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(deadline) if deadline <= now => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::TickScheduler;

    #[test]
    fn tick_fires_once_after_interval() {
        let start = Instant::now();
        let mut scheduler = TickScheduler::new(Duration::from_millis(240));
        scheduler.arm(start);

        assert!(!scheduler.take_due(start + Duration::from_millis(239)));
        assert!(scheduler.take_due(start + Duration::from_millis(240)));
        assert!(!scheduler.is_armed());
        assert!(!scheduler.take_due(start + Duration::from_millis(600)));
    }

    #[test]
    fn cancel_drops_pending_tick() {
        let start = Instant::now();
        let mut scheduler = TickScheduler::new(Duration::from_millis(100));
        scheduler.arm(start);
        scheduler.cancel();

        assert_eq!(scheduler.deadline(), None);
        assert!(!scheduler.take_due(start + Duration::from_secs(1)));
    }

    #[test]
    fn rearming_replaces_the_deadline() {
        let start = Instant::now();
        let mut scheduler = TickScheduler::new(Duration::from_millis(100));
        scheduler.arm(start);
        scheduler.arm(start + Duration::from_millis(50));

        assert_eq!(
            scheduler.deadline(),
            Some(start + Duration::from_millis(150))
        );
        assert_eq!(
            scheduler.time_until(start + Duration::from_millis(200)),
            Some(Duration::ZERO)
        );
    }
}
