//! Deadline bookkeeping for the single-threaded event loop.
//!
//! Nothing in here sleeps or spawns. Owners ask "what is due at `now`?" and the
//! event loop asks "when is the next thing due?" so it can park inside
//! `crossterm::event::poll` for exactly that long. Time is always passed in,
//! which keeps every timer deterministic under test.

use std::time::{Duration, Instant};

/// Smallest period an [`Interval`] accepts.
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// A cancellable repeating schedule.
///
/// Starting an interval that is already running is a no-op, so callers can
/// start it on every gesture without resetting its phase.
#[derive(Debug, Clone)]
pub struct Interval {
    period: Duration,
    next_due: Option<Instant>,
}

impl Interval {
    /// Create a stopped interval with the given period.
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(MIN_PERIOD),
            next_due: None,
        }
    }

    /// Start firing one period after `now`. No-op if already running.
    pub fn start(&mut self, now: Instant) {
        if self.next_due.is_none() {
            self.next_due = Some(now + self.period);
        }
    }

    /// Cancel the schedule.
    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// When the next firing is due, if running.
    pub fn next_due(&self) -> Option<Instant> {
        self.next_due
    }

    /// Count the firings due by `now` and move the schedule past them.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let Some(mut due) = self.next_due else {
            return 0;
        };

        let mut fired = 0;
        while due <= now {
            fired += 1;
            due += self.period;
        }
        self.next_due = Some(due);
        fired
    }

    /// Fire at most once by `now`, dropping any periods missed during a stall.
    ///
    /// The schedule keeps its phase: the next firing is the first period
    /// boundary after `now`.
    pub fn poll_skip(&mut self, now: Instant) -> bool {
        let fired = self.poll(now);
        if fired > 1 {
            log::debug!("skipped {} missed firings", fired - 1);
        }
        fired > 0
    }
}

/// The earlier of two optional deadlines.
pub fn earliest(a: Option<Instant>, b: Option<Instant>) -> Option<Instant> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, None) => a,
        (None, b) => b,
    }
}
