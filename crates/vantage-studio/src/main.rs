use anyhow::Result;
use clap::Parser;
use vantage_engine::logging::{init_logging, LoggingConfig};

mod args;
mod rig;
mod studio;

use args::{Args, StudioConfig};

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(match &args.log {
        Some(filter) => LoggingConfig::with_filter(filter.as_str()),
        None => LoggingConfig::default(),
    });

    let config = StudioConfig::from(&args);
    let summary = studio::run(&config)?;

    log::info!(
        "{} steps ({} forced): {} scene preparations, {} sensor renders, {} rig renders gated",
        summary.steps,
        summary.forced_steps,
        summary.scene_pre_renders,
        summary.totals.sensors_rendered,
        summary.totals.coordinators_gated
    );

    anyhow::ensure!(
        summary.totals.failures == 0,
        "{} rig renders failed",
        summary.totals.failures
    );

    Ok(())
}
