//! Fixed-rate tick scheduling
//!
//! The host measures wall time per frame and asks `FixedStep` how many
//! simulation ticks to run. The simulation itself never sees time.

use std::time::Duration;

/// Longest frame the accumulator will absorb
const MAX_FRAME_SECS: f64 = 0.1;

/// Accumulator that converts elapsed time into whole ticks
#[derive(Debug, Clone)]
pub struct FixedStep {
    step_secs: f64,
    max_substeps: u32,
    accumulator: f64,
}

impl FixedStep {
    pub fn new(tick_rate_hz: f64, max_substeps: u32) -> Self {
        Self {
            step_secs: 1.0 / tick_rate_hz.max(1.0),
            max_substeps: max_substeps.max(1),
            accumulator: 0.0,
        }
    }

    /// Duration of one tick
    #[cfg(test)]
    fn step(&self) -> Duration {
        Duration::from_secs_f64(self.step_secs)
    }

    /// Add elapsed frame time and return how many ticks are due
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed.as_secs_f64().min(MAX_FRAME_SECS);

        let mut substeps = 0;
        while self.accumulator >= self.step_secs && substeps < self.max_substeps {
            self.accumulator -= self.step_secs;
            substeps += 1;
        }

        // Drop whatever we could not catch up on
        if substeps == self.max_substeps && self.accumulator >= self.step_secs {
            log::trace!("Dropping {:.4}s of backlog", self.accumulator);
            self.accumulator %= self.step_secs;
        }

        substeps
    }

    /// Time already banked toward the next tick
    #[cfg(test)]
    fn pending(&self) -> Duration {
        Duration::from_secs_f64(self.accumulator)
    }
}
