use std::time::{Duration, Instant};

/// Fixed-cadence refresh deadline with explicit start and cancel.
///
/// The timer never sleeps or spawns anything: the owner polls it with the
/// current instant and hands [`next_deadline`](Self::next_deadline) to the
/// event loop as its wake-up time. A cancelled timer has no deadline, so the
/// loop can go fully idle.
///
/// Ticks that were missed while the loop was blocked are skipped rather than
/// replayed; the cadence restarts from the late poll.
#[derive(Debug, Clone)]
pub struct RefreshTimer {
    period: Duration,
    next: Option<Instant>,
    fired: u64,
}

impl RefreshTimer {
    /// Creates a stopped timer. Periods below one millisecond are raised to it.
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            next: None,
            fired: 0,
        }
    }

    /// Arms the timer; the first tick is due immediately.
    ///
    /// Starting a running timer restarts its cadence from `now`.
    pub fn start(&mut self, now: Instant) {
        self.next = Some(now);
    }

    /// Disarms the timer. Polls return `false` until the next `start`.
    pub fn cancel(&mut self) {
        self.next = None;
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.next.is_some()
    }

    #[inline]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// When the next tick is due, or `None` while cancelled.
    #[inline]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.next
    }

    /// Number of ticks fired since creation.
    #[inline]
    pub fn fired(&self) -> u64 {
        self.fired
    }

    /// Returns `true` when a tick is due at `now`, and re-arms for the next one.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(deadline) = self.next else {
            return false;
        };
        if now < deadline {
            return false;
        }

        let mut following = deadline + self.period;
        if following <= now {
            following = now + self.period;
        }

        self.next = Some(following);
        self.fired += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEC: Duration = Duration::from_secs(1);

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn stopped_timer_never_fires() {
        let mut timer = RefreshTimer::new(SEC);
        assert!(!timer.is_running());
        assert!(timer.next_deadline().is_none());
        assert!(!timer.poll(Instant::now()));
    }

    #[test]
    fn first_tick_is_immediate_then_once_per_period() {
        let t0 = Instant::now();
        let mut timer = RefreshTimer::new(SEC);
        timer.start(t0);

        assert!(timer.poll(t0));
        assert!(!timer.poll(t0));
        assert!(!timer.poll(t0 + ms(999)));
        assert!(timer.poll(t0 + SEC));
        assert!(!timer.poll(t0 + ms(1500)));
        assert!(timer.poll(t0 + ms(2000)));
        assert_eq!(timer.fired(), 3);
    }

    #[test]
    fn cadence_does_not_drift_with_late_polls() {
        let t0 = Instant::now();
        let mut timer = RefreshTimer::new(SEC);
        timer.start(t0);
        timer.poll(t0);

        assert!(timer.poll(t0 + ms(1040)));
        assert_eq!(timer.next_deadline(), Some(t0 + ms(2000)));
    }

    #[test]
    fn missed_ticks_are_skipped() {
        let t0 = Instant::now();
        let mut timer = RefreshTimer::new(SEC);
        timer.start(t0);
        timer.poll(t0);

        assert!(timer.poll(t0 + ms(5300)));
        assert!(!timer.poll(t0 + ms(5400)));
        assert_eq!(timer.next_deadline(), Some(t0 + ms(6300)));
        assert_eq!(timer.fired(), 2);
    }

    #[test]
    fn cancel_silences_until_restarted() {
        let t0 = Instant::now();
        let mut timer = RefreshTimer::new(SEC);
        timer.start(t0);
        timer.poll(t0);
        timer.cancel();

        assert!(!timer.poll(t0 + ms(10_000)));
        assert!(timer.next_deadline().is_none());

        timer.start(t0 + ms(10_000));
        assert!(timer.poll(t0 + ms(10_000)));
    }

    #[test]
    fn zero_period_is_raised() {
        assert_eq!(RefreshTimer::new(Duration::ZERO).period(), ms(1));
    }
}
