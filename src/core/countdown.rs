//! Tick-driven round countdown
//!
//! Stoppable and restartable. The caller advances it with elapsed
//! milliseconds and gets back how many whole-second boundaries were crossed,
//! which stands in for a per-second callback.

/// Countdown clock. Restart is always an explicit stop-then-start.
#[derive(Debug, Clone, Default)]
pub struct Countdown {
    total_ms: u32,
    remaining_ms: u32,
    running: bool,
    /// Cumulative time spent running, across restarts.
    elapsed_total_ms: u64,
}

impl Countdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the clock with `secs`. No-op if already running.
    pub fn start(&mut self, secs: u32) {
        if self.running {
            return;
        }
        self.total_ms = secs * 1000;
        self.remaining_ms = self.total_ms;
        self.running = self.total_ms > 0;
    }

    /// Idempotent. Remaining time is kept for inspection.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Advances the clock, returning the number of whole-second boundaries
    /// crossed. The boundary into zero is reported like any other, so the
    /// caller observes `remaining_seconds() == 0` exactly once.
    pub fn tick(&mut self, elapsed_ms: u32) -> u32 {
        if !self.running || elapsed_ms == 0 {
            return 0;
        }
        let before = self.remaining_ms;
        let after = before.saturating_sub(elapsed_ms);
        self.remaining_ms = after;
        self.elapsed_total_ms += u64::from(before - after);
        if after == 0 {
            self.running = false;
        }
        let secs_before = (before + 999) / 1000;
        let secs_after = (after + 999) / 1000;
        secs_before - secs_after
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// True once an armed countdown has run out.
    pub fn finished(&self) -> bool {
        self.total_ms > 0 && self.remaining_ms == 0
    }

    pub fn remaining_ms(&self) -> u32 {
        self.remaining_ms
    }

    /// Ceiling of the remaining time in seconds.
    pub fn remaining_seconds(&self) -> u32 {
        (self.remaining_ms + 999) / 1000
    }

    /// Cumulative running time formatted as "MM:SS".
    pub fn elapsed_split(&self) -> String {
        let total_secs = self.elapsed_total_ms / 1000;
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}
