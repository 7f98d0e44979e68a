use crate::coordinator::RenderOutcome;

/// Aggregate of one `SensorManager::run_once` step.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct ManagerReport {
    /// Scene preparations performed this step (0 or 1 for a single scene).
    pub scene_refreshes: usize,
    pub coordinators_rendered: usize,
    pub coordinators_gated: usize,
    /// Child sensors that received render dispatch.
    pub sensors_rendered: usize,
    /// Coordinators whose `render` returned an error.
    pub failures: usize,
}

impl ManagerReport {
    pub(crate) fn record(&mut self, outcome: &RenderOutcome) {
        match outcome {
            RenderOutcome::Gated => self.coordinators_gated += 1,
            RenderOutcome::Rendered(r) => {
                self.coordinators_rendered += 1;
                self.sensors_rendered += r.sensors_rendered;
                if r.scene_refreshed {
                    self.scene_refreshes += 1;
                }
            }
        }
    }

    /// Folds another step's report into this one.
    pub fn accumulate(&mut self, other: &ManagerReport) {
        self.scene_refreshes += other.scene_refreshes;
        self.coordinators_rendered += other.coordinators_rendered;
        self.coordinators_gated += other.coordinators_gated;
        self.sensors_rendered += other.sensors_rendered;
        self.failures += other.failures;
    }
}
