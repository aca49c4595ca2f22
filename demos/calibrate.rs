use std::env;
use std::time::SystemTime;

use argon2_calibrate::{
    calibrate, Argon2Hasher, CalibrationRequest, MemoryProfile, SystemClock, TracingObserver,
};

// Used when no budget is given on the command line
const DEFAULT_MAX_MILLIS: u64 = 1000;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let mut args = env::args().skip(1);

    let max_millis = args
        .next()
        .map(|arg| arg.parse().expect("Budget must be a whole number of milliseconds"))
        .unwrap_or(DEFAULT_MAX_MILLIS);

    let profile = args
        .next()
        .map(|arg| MemoryProfile::try_from(arg).unwrap())
        .unwrap_or(MemoryProfile::Low);

    println!(
        "Calibrating argon2id with profile {:?} ({} KiB) for at most {} ms per hash",
        profile,
        profile.memory_cost(),
        max_millis
    );

    let total_start = SystemTime::now();
    let iterations = calibrate(
        &Argon2Hasher::default(),
        CalibrationRequest::from_profile(max_millis, profile),
        &mut TracingObserver,
        &SystemClock::new(),
    )
    .expect("Couldn't hash password?");

    if iterations == 0 {
        println!("A single iteration already takes longer than {} ms", max_millis);
    } else {
        println!("Use t_cost={}", iterations);
    }

    println!(
        "Took {} seconds to calibrate.",
        SystemTime::now()
            .duration_since(total_start)
            .expect("Clock ran backwards?")
            .as_secs_f64()
    );
}
