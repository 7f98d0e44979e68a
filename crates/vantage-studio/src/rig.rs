//! Stand-in scene and sensors for headless runs.
//!
//! They do no drawing; they count calls so a run can be checked against the
//! expected once-per-step scene preparation.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use vantage_engine::sensor::{PassiveSensor, RenderSensor, SensorHandle};
use vantage_engine::scene::Scene;

pub struct CountingScene {
    name: String,
    pre_renders: AtomicU64,
}

impl CountingScene {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pre_renders: AtomicU64::new(0),
        }
    }

    pub fn pre_renders(&self) -> u64 {
        self.pre_renders.load(Ordering::Relaxed)
    }
}

impl Scene for CountingScene {
    fn name(&self) -> &str {
        &self.name
    }

    fn pre_render(&self) {
        self.pre_renders.fetch_add(1, Ordering::Relaxed);
    }
}

pub struct CountingCamera {
    name: String,
    frames: AtomicU64,
}

impl CountingCamera {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            frames: AtomicU64::new(0),
        }
    }
}

impl RenderSensor for CountingCamera {
    fn name(&self) -> &str {
        &self.name
    }

    fn render(&self) {
        self.frames.fetch_add(1, Ordering::Relaxed);
    }

    fn post_render(&self) {
        log::trace!("{}: frame {} ready", self.name, self.frames.load(Ordering::Relaxed));
    }
}

pub struct MountPoint {
    name: String,
}

impl PassiveSensor for MountPoint {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Builds the children of rig `rig`: `cameras` renderable sensors cycling
/// through the camera kinds, followed by `passive` mount points.
pub fn rig_sensors(rig: usize, cameras: usize, passive: usize) -> Vec<SensorHandle> {
    let mut out = Vec::with_capacity(cameras + passive);

    for i in 0..cameras {
        let cam: Arc<dyn RenderSensor> = Arc::new(CountingCamera::new(format!("rig{rig}/cam{i}")));
        out.push(match i % 4 {
            0 => SensorHandle::Camera(cam),
            1 => SensorHandle::DepthCamera(cam),
            2 => SensorHandle::ThermalCamera(cam),
            _ => SensorHandle::GpuRays(cam),
        });
    }

    for i in 0..passive {
        out.push(SensorHandle::Passive(Arc::new(MountPoint {
            name: format!("rig{rig}/mount{i}"),
        })));
    }

    out
}
