//! Command line arguments.

use std::time::Duration;

use clap::Parser;

/// Headless driver stepping a simulated world with rendering sensors.
#[derive(Debug, Clone, Parser)]
#[command(name = "vantage-studio", version, about)]
pub struct Args {
    /// Number of simulation steps to run.
    #[arg(long, default_value_t = 100)]
    pub steps: u64,

    /// Simulation step length in milliseconds.
    #[arg(long, default_value_t = 16)]
    pub step_ms: u64,

    /// Rendering sensors (rigs) sharing the scene.
    #[arg(long, default_value_t = 4)]
    pub rigs: usize,

    /// Renderable cameras attached to each rig.
    #[arg(long, default_value_t = 2)]
    pub cameras: usize,

    /// Passive (non-rendering) sensors attached to each rig.
    #[arg(long, default_value_t = 1)]
    pub passive: usize,

    /// Force a render every N steps (0 disables forcing).
    #[arg(long, default_value_t = 0)]
    pub force_every: u64,

    /// Log filter in env_logger syntax; falls back to RUST_LOG.
    #[arg(long)]
    pub log: Option<String>,
}

/// Driver settings derived from [`Args`].
#[derive(Debug, Clone)]
pub struct StudioConfig {
    pub steps: u64,
    pub step: Duration,
    pub rigs: usize,
    pub cameras_per_rig: usize,
    pub passive_per_rig: usize,
    pub force_every: Option<u64>,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            steps: 100,
            step: Duration::from_millis(16),
            rigs: 4,
            cameras_per_rig: 2,
            passive_per_rig: 1,
            force_every: None,
        }
    }
}

impl From<&Args> for StudioConfig {
    fn from(args: &Args) -> Self {
        Self {
            steps: args.steps,
            step: Duration::from_millis(args.step_ms),
            rigs: args.rigs,
            cameras_per_rig: args.cameras,
            passive_per_rig: args.passive,
            force_every: (args.force_every > 0).then_some(args.force_every),
        }
    }
}

impl StudioConfig {
    /// Whether step `index` is a forced render.
    pub fn is_forced(&self, index: u64) -> bool {
        self.force_every.is_some_and(|k| index > 0 && index % k == 0)
    }
}
