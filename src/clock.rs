use std::time::Instant;

/// Millisecond clock used to time trials.
pub trait Clock {
    /// Whole milliseconds since some fixed point. Must never go backwards.
    fn now_millis(&self) -> u64;
}

/// Monotonic wall clock, counting from when it was created.
///
/// Readings are truncated to the millisecond, so a trial's duration is the difference of two
/// truncated readings rather than a truncated difference. A 0.6 ms hash may read as 0 or 1 ms.
#[derive(Debug, Copy, Clone)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        // u64 milliseconds overflow after ~584 million years
        self.origin.elapsed().as_millis() as u64
    }
}
