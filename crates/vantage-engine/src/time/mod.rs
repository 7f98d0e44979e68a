//! Time subsystem.
//!
//! Simulation timestamps and a deterministic stepping clock, decoupled from
//! any wall clock. Intended usage:
//! - one `StepClock` per simulated world
//! - call `tick()` once per simulation step and pass `StepTime::now` to the
//!   rendering sensors

mod sim_time;
mod step_clock;

pub use sim_time::SimTime;
pub use step_clock::{StepClock, StepTime};
