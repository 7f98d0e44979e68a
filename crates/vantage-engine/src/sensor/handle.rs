use core::fmt;
use std::sync::Arc;

use super::{PassiveSensor, RenderSensor};

/// Discriminant of a [`SensorHandle`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SensorKind {
    Camera,
    DepthCamera,
    ThermalCamera,
    GpuRays,
    Passive,
}

impl SensorKind {
    /// Whether handles of this kind receive render dispatch.
    #[inline]
    pub const fn is_renderable(self) -> bool {
        !matches!(self, SensorKind::Passive)
    }
}

/// Handle to an externally owned child sensor.
///
/// Extending the set of sensor kinds:
/// - add a variant here and to [`SensorKind`]
/// - route it in `kind()` and `as_renderable()`
///
/// Cloning a handle clones the `Arc`, not the sensor.
#[derive(Clone)]
pub enum SensorHandle {
    Camera(Arc<dyn RenderSensor>),
    DepthCamera(Arc<dyn RenderSensor>),
    ThermalCamera(Arc<dyn RenderSensor>),
    /// GPU ray casting (lidar-like) sensor; renders like a camera.
    GpuRays(Arc<dyn RenderSensor>),
    Passive(Arc<dyn PassiveSensor>),
}

impl SensorHandle {
    pub fn kind(&self) -> SensorKind {
        match self {
            SensorHandle::Camera(_) => SensorKind::Camera,
            SensorHandle::DepthCamera(_) => SensorKind::DepthCamera,
            SensorHandle::ThermalCamera(_) => SensorKind::ThermalCamera,
            SensorHandle::GpuRays(_) => SensorKind::GpuRays,
            SensorHandle::Passive(_) => SensorKind::Passive,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            SensorHandle::Camera(s)
            | SensorHandle::DepthCamera(s)
            | SensorHandle::ThermalCamera(s)
            | SensorHandle::GpuRays(s) => s.name(),
            SensorHandle::Passive(s) => s.name(),
        }
    }

    #[inline]
    pub fn is_renderable(&self) -> bool {
        self.kind().is_renderable()
    }

    /// Returns the render capability, or `None` for passive sensors.
    pub fn as_renderable(&self) -> Option<&dyn RenderSensor> {
        match self {
            SensorHandle::Camera(s)
            | SensorHandle::DepthCamera(s)
            | SensorHandle::ThermalCamera(s)
            | SensorHandle::GpuRays(s) => Some(s.as_ref()),
            SensorHandle::Passive(_) => None,
        }
    }
}

impl fmt::Debug for SensorHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SensorHandle")
            .field("kind", &self.kind())
            .field("name", &self.name())
            .finish()
    }
}
