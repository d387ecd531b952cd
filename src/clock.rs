/// Whole-second accumulator for the session timer.
/// Converts variable host frame time into one-second ticks.
#[derive(Clone, Debug)]
pub struct SessionClock {
    /// Length of one tick in seconds.
    period: f32,
    /// Time carried over from previous frames.
    accumulator: f32,
}

/// Upper bound on ticks produced by a single frame (e.g. after a stalled tab).
const MAX_TICKS_PER_FRAME: u32 = 10;

impl SessionClock {
    pub fn new(period: f32) -> Self {
        Self {
            period,
            accumulator: 0.0,
        }
    }

    /// Add frame time. Returns the number of whole periods that elapsed.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        if !frame_dt.is_finite() || frame_dt <= 0.0 {
            return 0;
        }
        self.accumulator += frame_dt;
        self.accumulator = self.accumulator.min(self.period * MAX_TICKS_PER_FRAME as f32);
        let ticks = (self.accumulator / self.period) as u32;
        self.accumulator -= ticks as f32 * self.period;
        ticks
    }

    /// Drop any partial period.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

impl Default for SessionClock {
    fn default() -> Self {
        Self::new(1.0)
    }
}
