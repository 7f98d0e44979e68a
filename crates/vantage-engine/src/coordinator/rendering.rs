use std::sync::{Arc, Weak};

use crate::epoch::FrameEpoch;
use crate::scene::Scene;
use crate::sensor::SensorHandle;
use crate::time::SimTime;

use super::{FrameReport, RenderError, RenderOutcome};

/// Render coordinator for one parent sensing entity.
///
/// Owns the ordered child sensor handles and the entity's last render time;
/// shares the scene (weakly) and the [`FrameEpoch`] with every other
/// coordinator looking at the same world.
///
/// Two logical states:
/// - pending: the next `render(now, _)` acts
/// - satisfied for `T`: `render(now, false)` with `now <= T` is a no-op
///
/// `force = true` always acts, and may move the last render time backward.
#[derive(Debug)]
pub struct RenderingSensor {
    name: String,
    scene: Option<Weak<dyn Scene>>,
    last_render_time: SimTime,
    sensors: Vec<SensorHandle>,
    epoch: Arc<FrameEpoch>,
    manual_scene_update: bool,
}

impl RenderingSensor {
    /// Creates a coordinator with no scene and no children.
    pub fn new(name: impl Into<String>, epoch: Arc<FrameEpoch>) -> Self {
        Self {
            name: name.into(),
            scene: None,
            last_render_time: SimTime::MIN,
            sensors: Vec::new(),
            epoch,
            manual_scene_update: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn epoch(&self) -> &Arc<FrameEpoch> {
        &self.epoch
    }

    /// Binds the scene, replacing any previous binding.
    ///
    /// Only a weak reference is kept; the caller keeps the scene alive.
    pub fn set_scene(&mut self, scene: &Arc<dyn Scene>) {
        self.scene = Some(Arc::downgrade(scene));
    }

    /// Returns the bound scene, or `None` if unbound or already dropped.
    pub fn scene(&self) -> Option<Arc<dyn Scene>> {
        self.scene.as_ref().and_then(Weak::upgrade)
    }

    /// Attaches a child sensor after the existing ones.
    pub fn add_sensor(&mut self, handle: SensorHandle) {
        log::debug!(
            "rendering sensor '{}': attached {:?} '{}' at index {}",
            self.name,
            handle.kind(),
            handle.name(),
            self.sensors.len()
        );
        self.sensors.push(handle);
    }

    pub fn sensor_count(&self) -> usize {
        self.sensors.len()
    }

    /// Returns the child at `idx` in attachment order.
    ///
    /// An out-of-range index is logged and yields `None`.
    pub fn sensor(&self, idx: usize) -> Option<SensorHandle> {
        let handle = self.sensors.get(idx).cloned();
        if handle.is_none() {
            log::error!(
                "rendering sensor '{}': unable to get child sensor, index {} out of bounds ({} attached)",
                self.name,
                idx,
                self.sensors.len()
            );
        }
        handle
    }

    /// All children in attachment order.
    pub fn sensors(&self) -> &[SensorHandle] {
        &self.sensors
    }

    pub fn last_render_time(&self) -> SimTime {
        self.last_render_time
    }

    /// When enabled, `render` never prepares the scene nor advances the
    /// epoch; the owner prepares the scene itself (e.g. via
    /// [`FrameEpoch::refresh`]).
    pub fn set_manual_scene_update(&mut self, manual: bool) {
        self.manual_scene_update = manual;
    }

    pub fn manual_scene_update(&self) -> bool {
        self.manual_scene_update
    }

    /// Renders one frame at `now`.
    ///
    /// Returns [`RenderOutcome::Gated`] without touching anything when
    /// `force` is false and this sensor already rendered at `now` or later.
    /// Otherwise a live scene is required; without one an error is logged
    /// and returned, and no state changes.
    pub fn render(&mut self, now: SimTime, force: bool) -> Result<RenderOutcome, RenderError> {
        if !force && self.last_render_time >= now {
            log::trace!(
                "rendering sensor '{}': gated at {} (last render {})",
                self.name,
                now,
                self.last_render_time
            );
            return Ok(RenderOutcome::Gated);
        }

        let scene = self.live_scene().inspect_err(|err| log::error!("{err}"))?;

        // Scene graph update happens once per timestamp for all sensors
        // sharing the epoch.
        let scene_refreshed = !self.manual_scene_update && self.epoch.refresh(now, scene.as_ref());
        if scene_refreshed {
            log::debug!(
                "rendering sensor '{}': prepared scene '{}' for {}",
                self.name,
                scene.name(),
                now
            );
        }

        let mut report = FrameReport {
            scene_refreshed,
            ..FrameReport::default()
        };

        for handle in &self.sensors {
            match handle.as_renderable() {
                Some(rs) => {
                    log::trace!("rendering sensor '{}': render '{}'", self.name, rs.name());
                    rs.render();
                    rs.post_render();
                    report.sensors_rendered += 1;
                }
                None => report.sensors_skipped += 1,
            }
        }

        self.last_render_time = now;

        Ok(RenderOutcome::Rendered(report))
    }

    fn live_scene(&self) -> Result<Arc<dyn Scene>, RenderError> {
        let weak = self.scene.as_ref().ok_or_else(|| RenderError::SceneUnbound {
            sensor: self.name.clone(),
        })?;

        weak.upgrade().ok_or_else(|| RenderError::SceneExpired {
            sensor: self.name.clone(),
        })
    }
}
