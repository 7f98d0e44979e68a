use std::sync::Arc;

use parking_lot::Mutex;

use crate::scene::Scene;
use crate::time::SimTime;

/// Last-scene-update timestamp shared across rendering sensors.
///
/// The timestamp only moves forward. Every check-and-advance happens under
/// one lock, so concurrent callers with the same `now` cannot both win.
#[derive(Debug, Default)]
pub struct FrameEpoch {
    last_scene_update: Mutex<SimTime>,
}

impl FrameEpoch {
    /// Creates an epoch that has never seen a scene update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new epoch ready to be handed to several sensors.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Timestamp of the last scene update, or [`SimTime::MIN`] if none.
    pub fn last_scene_update(&self) -> SimTime {
        *self.last_scene_update.lock()
    }

    /// Advances to `now` if it is strictly newer than the recorded update.
    ///
    /// Returns whether the epoch advanced.
    pub fn try_advance(&self, now: SimTime) -> bool {
        let mut last = self.last_scene_update.lock();
        if now > *last {
            *last = now;
            true
        } else {
            false
        }
    }

    /// Prepares `scene` for `now` unless that already happened.
    ///
    /// The pre-render runs while the epoch is locked: a concurrent caller
    /// with the same timestamp waits for it to finish, then sees the epoch
    /// already advanced. `scene.pre_render()` must not call back into this
    /// epoch.
    ///
    /// Returns whether this call performed the refresh.
    pub fn refresh(&self, now: SimTime, scene: &dyn Scene) -> bool {
        let mut last = self.last_scene_update.lock();
        if now <= *last {
            return false;
        }

        scene.pre_render();
        *last = now;
        true
    }
}
