use std::time::{Duration, Instant};

/// Measures the wall-clock span between a `start` and a `stop`.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    start: Instant,
    stop: Instant,
}

impl Stopwatch {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            stop: now,
        }
    }

    pub fn start(&mut self) {
        self.start = Instant::now();
    }

    pub fn stop(&mut self) {
        self.stop = Instant::now();
    }

    /// Time between the last `start` and the last `stop`. Zero if `stop`
    /// has not been called since `start`.
    pub fn elapsed(&self) -> Duration {
        self.stop.saturating_duration_since(self.start)
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}
