use instant::Instant;

/// Monotonic elapsed-time source for the frame loop.
///
/// `instant::Instant` maps to `performance.now()` on wasm and to
/// `std::time::Instant` elsewhere.
pub struct FrameClock {
    start: Instant,
    last: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last: now,
        }
    }

    /// Advance one frame, returning (elapsed since start, delta since last tick).
    /// Elapsed time is f64 so it keeps sub-millisecond resolution over long runs.
    pub fn tick(&mut self) -> (f64, f32) {
        let now = Instant::now();
        let dt = now - self.last;
        self.last = now;
        ((now - self.start).as_secs_f64(), dt.as_secs_f32())
    }
}
