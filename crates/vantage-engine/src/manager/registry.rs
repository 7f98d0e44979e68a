use core::fmt;
use std::sync::{Arc, Weak};

use crate::coordinator::RenderingSensor;
use crate::epoch::FrameEpoch;
use crate::scene::Scene;
use crate::time::SimTime;

use super::{ManagerError, ManagerReport};

/// Stable identifier of a sensor within its manager. Never reused.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SensorId(u64);

impl fmt::Display for SensorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Owns and drives the rendering sensors of one world.
///
/// Sensors are driven in creation order. A scene bound with
/// [`set_scene`](Self::set_scene) is also bound to sensors created later.
#[derive(Debug)]
pub struct SensorManager {
    epoch: Arc<FrameEpoch>,
    scene: Option<Weak<dyn Scene>>,
    sensors: Vec<(SensorId, RenderingSensor)>,
    next_id: u64,
}

impl SensorManager {
    /// Creates a manager with its own fresh epoch.
    pub fn new() -> Self {
        Self::with_epoch(FrameEpoch::shared())
    }

    /// Creates a manager whose sensors share `epoch`.
    ///
    /// Use this when several managers render the same scene.
    pub fn with_epoch(epoch: Arc<FrameEpoch>) -> Self {
        Self {
            epoch,
            scene: None,
            sensors: Vec::new(),
            next_id: 0,
        }
    }

    pub fn epoch(&self) -> &Arc<FrameEpoch> {
        &self.epoch
    }

    pub fn len(&self) -> usize {
        self.sensors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sensors.is_empty()
    }

    /// Creates a rendering sensor bound to this manager's epoch (and scene,
    /// if one is set).
    pub fn create_sensor(&mut self, name: impl Into<String>) -> Result<SensorId, ManagerError> {
        let name = name.into();
        if self.sensor_by_name(&name).is_some() {
            return Err(ManagerError::DuplicateName(name));
        }

        let id = SensorId(self.next_id);
        self.next_id += 1;

        let mut sensor = RenderingSensor::new(name, self.epoch.clone());
        if let Some(scene) = self.scene.as_ref().and_then(Weak::upgrade) {
            sensor.set_scene(&scene);
        }

        log::debug!("sensor manager: created rendering sensor '{}' ({id})", sensor.name());
        self.sensors.push((id, sensor));
        Ok(id)
    }

    /// Removes and returns a sensor; ids of other sensors are unaffected.
    pub fn remove_sensor(&mut self, id: SensorId) -> Option<RenderingSensor> {
        let pos = self.sensors.iter().position(|(sid, _)| *sid == id)?;
        let (_, sensor) = self.sensors.remove(pos);
        log::debug!("sensor manager: removed rendering sensor '{}' ({id})", sensor.name());
        Some(sensor)
    }

    pub fn sensor(&self, id: SensorId) -> Option<&RenderingSensor> {
        self.sensors.iter().find(|(sid, _)| *sid == id).map(|(_, s)| s)
    }

    pub fn sensor_mut(&mut self, id: SensorId) -> Option<&mut RenderingSensor> {
        self.sensors.iter_mut().find(|(sid, _)| *sid == id).map(|(_, s)| s)
    }

    pub fn sensor_by_name(&self, name: &str) -> Option<&RenderingSensor> {
        self.sensors.iter().map(|(_, s)| s).find(|s| s.name() == name)
    }

    /// Sensors in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (SensorId, &RenderingSensor)> {
        self.sensors.iter().map(|(id, s)| (*id, s))
    }

    /// Binds `scene` to every current and future sensor.
    pub fn set_scene(&mut self, scene: &Arc<dyn Scene>) {
        self.scene = Some(Arc::downgrade(scene));
        for (_, sensor) in &mut self.sensors {
            sensor.set_scene(scene);
        }
    }

    /// Renders every sensor once at `now`.
    ///
    /// A failing sensor is counted in the report and does not stop the
    /// others; the sensor itself already logged the failure.
    pub fn run_once(&mut self, now: SimTime, force: bool) -> ManagerReport {
        let mut report = ManagerReport::default();

        for (_, sensor) in &mut self.sensors {
            match sensor.render(now, force) {
                Ok(outcome) => report.record(&outcome),
                Err(_) => report.failures += 1,
            }
        }

        log::debug!(
            "sensor manager: step {} rendered {}/{} sensors ({} gated, {} failed)",
            now,
            report.coordinators_rendered,
            self.sensors.len(),
            report.coordinators_gated,
            report.failures
        );

        report
    }
}

impl Default for SensorManager {
    fn default() -> Self {
        Self::new()
    }
}
