use std::time::Duration;

use super::SimTime;

/// Step timing snapshot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StepTime {
    /// Simulation timestamp of this step.
    pub now: SimTime,

    /// Step length, in seconds.
    pub dt: f32,

    /// Monotonic step counter.
    pub step_index: u64,
}

/// Fixed-step simulation clock producing `StepTime` snapshots.
///
/// Unlike a presentation clock this never reads the wall clock: every
/// `tick()` advances simulation time by exactly one step, so runs are
/// reproducible. The first tick reports the start time itself.
#[derive(Debug, Clone)]
pub struct StepClock {
    start: SimTime,
    next: SimTime,
    step: Duration,
    step_index: u64,
}

impl StepClock {
    /// Smallest accepted step; shorter steps are clamped up to it.
    pub const MIN_STEP: Duration = Duration::from_nanos(1);

    /// Creates a clock starting at [`SimTime::ZERO`].
    pub fn new(step: Duration) -> Self {
        Self::starting_at(SimTime::ZERO, step)
    }

    /// Creates a clock whose first tick reports `start`.
    pub fn starting_at(start: SimTime, step: Duration) -> Self {
        Self {
            start,
            next: start,
            step: step.max(Self::MIN_STEP),
            step_index: 0,
        }
    }

    /// Returns the fixed step.
    pub fn step(&self) -> Duration {
        self.step
    }

    /// Rewinds to the start time and step zero.
    pub fn reset(&mut self) {
        self.next = self.start;
        self.step_index = 0;
    }

    /// Advances the clock and returns a new `StepTime`.
    pub fn tick(&mut self) -> StepTime {
        let st = StepTime {
            now: self.next,
            dt: self.step.as_secs_f32(),
            step_index: self.step_index,
        };

        self.next = self.next + self.step;
        self.step_index = self.step_index.wrapping_add(1);

        st
    }
}

impl Default for StepClock {
    /// 1 ms steps, a common physics rate.
    fn default() -> Self {
        Self::new(Duration::from_millis(1))
    }
}
