//! Sensor handle types.
//!
//! Responsibilities:
//! - describe the render capability a child sensor may carry
//! - provide a closed set of sensor kinds so capability checks are a `match`
//!   rather than a runtime type query

mod capability;
mod handle;

pub use capability::{PassiveSensor, RenderSensor};
pub use handle::{SensorHandle, SensorKind};
