//! Per-entity render coordination.
//!
//! A [`RenderingSensor`] is the rendering side of one parent sensing entity.
//! Each simulation step the driver calls [`RenderingSensor::render`], which:
//! 1) gates on the sensor's own last render time (unless forced)
//! 2) prepares the shared scene through the [`FrameEpoch`](crate::epoch::FrameEpoch),
//!    at most once per timestamp across all sensors sharing it
//! 3) dispatches `render` + `post_render` to every renderable child, in order

mod error;
mod rendering;
mod report;

pub use error::RenderError;
pub use rendering::RenderingSensor;
pub use report::{FrameReport, RenderOutcome};
