use std::time::Duration;

/// Generation period used by the classic demo board
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(500);

/// Ticker turns host frame time into a number of due generations.
/// The host feeds it elapsed time; it never owns a clock or a thread.
#[derive(Clone, Debug, PartialEq)]
pub struct Ticker {
    interval: Duration,
    pending: Duration,
    max_catch_up: u32,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            pending: Duration::ZERO,
            max_catch_up: 4,
        }
    }

    /// Limit how many generations a single long frame may trigger
    pub fn with_max_catch_up(mut self, max_catch_up: u32) -> Self {
        self.max_catch_up = max_catch_up.max(1);
        self
    }

    pub const fn interval(&self) -> Duration {
        self.interval
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval.max(Duration::from_millis(1));
    }

    /// Accumulate elapsed time, returning how many generations are due
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.pending = self.pending.saturating_add(elapsed);

        let mut due = 0;
        while self.pending >= self.interval && due < self.max_catch_up {
            self.pending -= self.interval;
            due += 1;
        }
        // Drop backlog the cap refused to run
        if self.pending >= self.interval {
            self.pending = Duration::ZERO;
        }
        due
    }

    /// Forget any partially elapsed interval
    pub fn reset(&mut self) {
        self.pending = Duration::ZERO;
    }

    pub const fn pending(&self) -> Duration {
        self.pending
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}
