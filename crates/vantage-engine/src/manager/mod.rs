//! Sensor manager.
//!
//! Owns the rendering sensors of one simulated world and drives them once per
//! simulation step. All sensors created by a manager share its
//! [`FrameEpoch`](crate::epoch::FrameEpoch), so the world's scene is prepared
//! once per step no matter how many sensors render.

mod error;
mod registry;
mod report;

pub use error::ManagerError;
pub use registry::{SensorId, SensorManager};
pub use report::ManagerReport;
