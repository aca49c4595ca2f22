//! Finds the largest argon2 iteration count (t_cost) that keeps a single hash within a time budget on the current machine.
//!
//! Hashing gets more expensive the more iterations it does, so the calibrator simply tries 1, 2, 3, ... iterations,
//! timing each hash, until one takes longer than allowed. The count before that one is the answer.
//! Memory cost and parallelism are picked up front by the caller, either directly or through a [MemoryProfile].
//!
//! Any hash function can be calibrated by implementing [Hasher], [Argon2Hasher] covers the `argon2` crate.
//! Each trial can be watched with an [IterationObserver], e.g. [TracingObserver] to log them.
//!
//! Calibration runs real hashes, on slow machines or with large memory costs it can take a while.
//! ## Example
//! ```no_run
//! use argon2_calibrate::{find_iterations_with_observer, Argon2Hasher, MemoryProfile, TracingObserver};
//!
//! fn main() {
//!     let profile = MemoryProfile::Medium;
//!
//!     let iterations = find_iterations_with_observer(
//!         &Argon2Hasher::default(),
//!         500,
//!         profile.memory_cost(),
//!         profile.parallelism(),
//!         &mut TracingObserver,
//!     )
//!     .expect("Couldn't hash password?");
//!
//!     if iterations == 0 {
//!         println!("Even a single iteration takes longer than 500 ms");
//!     } else {
//!         println!("Use t_cost={} with profile {:?}", iterations, profile);
//!     }
//! }
//! ```
use tracing::{debug, trace};

mod clock;
mod hasher;
mod observer;
mod profile;

pub use clock::{Clock, SystemClock};
pub use hasher::{Argon2Hasher, Hasher};
pub use observer::{IterationObserver, NoopObserver, TracingObserver};
pub use profile::{MemoryProfile, ProfileParseError};

/// What gets hashed during calibration. Only the cost is measured, so it's not a real credential.
pub const CALIBRATION_SECRET: &[u8] = b"password";

/// Time budget and fixed costs for one calibration.
///
/// # Examples
/// ```
/// use argon2_calibrate::{CalibrationRequest, MemoryProfile};
///
/// let request = CalibrationRequest::from_profile(250, MemoryProfile::High);
/// assert_eq!(request, CalibrationRequest::new(250, 1 << 20, 1));
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct CalibrationRequest {
    /// Longest a single hash may take, in milliseconds.
    pub max_millis: u64,
    /// Memory cost handed to the hasher unchanged, KiB for argon2.
    pub memory_cost: u32,
    /// Parallelism handed to the hasher unchanged.
    pub parallelism: u32,
}

impl CalibrationRequest {
    pub const fn new(max_millis: u64, memory_cost: u32, parallelism: u32) -> Self {
        Self {
            max_millis,
            memory_cost,
            parallelism,
        }
    }

    pub const fn from_profile(max_millis: u64, profile: MemoryProfile) -> Self {
        Self::new(max_millis, profile.memory_cost(), profile.parallelism())
    }
}

/// Finds the highest iteration count for which one hash takes at most `max_millis` milliseconds.
///
/// Returns 0 if even a single iteration is too slow. Errors from the hasher are returned as is,
/// e.g. when `memory_cost` or `parallelism` are out of range for it.
///
/// See [find_iterations_with_observer] to get told about each trial.
///
/// # Examples
/// ```no_run
/// let iterations = argon2_calibrate::find_iterations(
///     &argon2_calibrate::Argon2Hasher::default(),
///     1000,
///     64 << 10,
///     1,
/// )
/// .expect("Memory and parallelism are valid");
/// println!("t_cost={}", iterations);
/// ```
pub fn find_iterations<H: Hasher + ?Sized>(
    hasher: &H,
    max_millis: u64,
    memory_cost: u32,
    parallelism: u32,
) -> Result<u32, H::Error> {
    find_iterations_with_observer(
        hasher,
        max_millis,
        memory_cost,
        parallelism,
        &mut NoopObserver,
    )
}

/// Same as [find_iterations], but `observer` is notified with the iteration count and duration of every trial.
pub fn find_iterations_with_observer<H, O>(
    hasher: &H,
    max_millis: u64,
    memory_cost: u32,
    parallelism: u32,
    observer: &mut O,
) -> Result<u32, H::Error>
where
    H: Hasher + ?Sized,
    O: IterationObserver + ?Sized,
{
    calibrate(
        hasher,
        CalibrationRequest::new(max_millis, memory_cost, parallelism),
        observer,
        &SystemClock::new(),
    )
}

/// Runs the calibration for `request`, timing hashes with `clock`.
///
/// Tries iteration counts 1, 2, 3, ... in order, one hash each, until a hash takes longer than
/// `request.max_millis`. That last trial is always run to completion and reported to `observer`,
/// then the count before it is returned.
///
/// There is no upper bound: a generous budget with a cheap hasher runs for a long time.
/// Should every count up to `u32::MAX` fit, `u32::MAX` is returned.
///
/// A failing hash stops the calibration right away, no partial result is kept.
pub fn calibrate<H, O, C>(
    hasher: &H,
    request: CalibrationRequest,
    observer: &mut O,
    clock: &C,
) -> Result<u32, H::Error>
where
    H: Hasher + ?Sized,
    O: IterationObserver + ?Sized,
    C: Clock + ?Sized,
{
    let mut iterations: u32 = 1;

    loop {
        let start = clock.now_millis();
        hasher.hash(
            iterations,
            request.memory_cost,
            request.parallelism,
            CALIBRATION_SECRET,
        )?;
        let end = clock.now_millis();
        let elapsed = end.saturating_sub(start);

        trace!(iterations, elapsed, "calibration trial done");
        observer.notify(iterations, elapsed);

        if elapsed > request.max_millis {
            let found = iterations - 1;
            debug!(
                found,
                max_millis = request.max_millis,
                "{} iterations took {} ms, over the budget",
                iterations,
                elapsed
            );
            return Ok(found);
        }

        iterations = match iterations.checked_add(1) {
            Some(next) => next,
            None => {
                debug!("every iteration count fit within {} ms", request.max_millis);
                return Ok(u32::MAX);
            }
        };
    }
}
