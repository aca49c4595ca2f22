use tracing::info;

/// Gets told about every trial the calibrator runs.
///
/// Called once per trial, right after the hash returns and before the next one starts.
/// Any `FnMut(u32, u64)` closure is an observer.
///
/// # Examples
/// ```
/// use argon2_calibrate::IterationObserver;
///
/// let mut trials = Vec::new();
/// let mut observer = |iterations: u32, millis: u64| trials.push((iterations, millis));
/// observer.notify(1, 12);
/// observer.notify(2, 25);
///
/// assert_eq!(trials, vec![(1, 12), (2, 25)]);
/// ```
pub trait IterationObserver {
    /// `elapsed_millis` is how long the hash with `iterations` took.
    fn notify(&mut self, iterations: u32, elapsed_millis: u64);
}

/// Ignores every trial. Used when no observer is given.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct NoopObserver;

impl IterationObserver for NoopObserver {
    fn notify(&mut self, _iterations: u32, _elapsed_millis: u64) {}
}

/// Logs every trial at info level through `tracing`.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct TracingObserver;

impl IterationObserver for TracingObserver {
    fn notify(&mut self, iterations: u32, elapsed_millis: u64) {
        info!(iterations, elapsed_millis, "hash took {} ms", elapsed_millis);
    }
}

impl<F: FnMut(u32, u64)> IterationObserver for F {
    fn notify(&mut self, iterations: u32, elapsed_millis: u64) {
        self(iterations, elapsed_millis)
    }
}
