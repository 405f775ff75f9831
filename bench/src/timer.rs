use std::time::Instant;

/// Runs f and returns its output with the elapsed wall-clock time in seconds.
#[inline]
pub fn measure<T, F: FnOnce() -> T>(f: F) -> (T, f64) {
    let start: Instant = Instant::now();
    let out: T = f();
    let elapsed: f64 = start.elapsed().as_secs_f64();
    (out, elapsed)
}
