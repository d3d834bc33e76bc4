//! Wall-clock timing of a single multiplication call.

use std::time::{Duration, Instant};

use tracing::info;

/// A value together with how long it took to produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

impl<T> Timed<T> {
    /// Whole milliseconds elapsed.
    pub fn millis(&self) -> u128 {
        self.elapsed.as_millis()
    }

    /// Elapsed time in fractional milliseconds.
    pub fn millis_f64(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Runs `f` once and records its wall-clock duration.
///
/// Purely observational: the result of `f` is returned untouched.
pub fn time<T, F>(label: &str, f: F) -> Timed<T>
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let value = f();
    let elapsed = start.elapsed();
    info!(label, elapsed_ms = elapsed.as_secs_f64() * 1000.0, "timed run");
    Timed { value, elapsed }
}
