use std::sync::Arc;

use anyhow::{Context, Result};
use vantage_engine::manager::{ManagerReport, SensorManager};
use vantage_engine::scene::Scene;
use vantage_engine::time::StepClock;

use crate::args::StudioConfig;
use crate::rig::{rig_sensors, CountingScene};

/// Totals of a finished run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub steps: u64,
    pub forced_steps: u64,
    pub scene_pre_renders: u64,
    pub totals: ManagerReport,
}

/// Builds the world described by `config` and steps it to completion.
pub fn run(config: &StudioConfig) -> Result<RunSummary> {
    anyhow::ensure!(config.rigs > 0, "at least one rig is required");

    let scene = Arc::new(CountingScene::new("studio"));
    let dyn_scene: Arc<dyn Scene> = scene.clone();

    let mut manager = SensorManager::new();
    manager.set_scene(&dyn_scene);

    for rig in 0..config.rigs {
        let name = format!("rig{rig}");
        let id = manager
            .create_sensor(name.as_str())
            .with_context(|| format!("failed to create {name}"))?;
        let sensor = manager
            .sensor_mut(id)
            .with_context(|| format!("{name} vanished after creation"))?;
        for handle in rig_sensors(rig, config.cameras_per_rig, config.passive_per_rig) {
            sensor.add_sensor(handle);
        }
    }

    log::info!(
        "running {} steps of {:?} with {} rigs ({} cameras, {} passive each)",
        config.steps,
        config.step,
        config.rigs,
        config.cameras_per_rig,
        config.passive_per_rig
    );

    let mut clock = StepClock::new(config.step);
    let mut summary = RunSummary::default();

    for _ in 0..config.steps {
        let step = clock.tick();
        let force = config.is_forced(step.step_index);
        let report = manager.run_once(step.now, force);

        summary.steps += 1;
        if force {
            summary.forced_steps += 1;
        }
        summary.totals.accumulate(&report);
    }

    summary.scene_pre_renders = scene.pre_renders();
    Ok(summary)
}
