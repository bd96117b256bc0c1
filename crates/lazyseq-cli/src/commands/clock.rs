//! `lazyseq clock` — the current instant in several time zones.

use tracing::instrument;

use lazyseq_core::showcase::ZonedClock;

use crate::{cli::ClockArgs, config::AppConfig, error::CliResult, output::OutputManager};

#[instrument(skip_all, fields(zones = args.zones.len()))]
pub fn execute(args: ClockArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let zones = if args.zones.is_empty() {
        config.tour.zones
    } else {
        args.zones
    };

    let lines = ZonedClock::now().with_zones(&zones)?.render();

    if output.is_json() {
        output.json(&lines)?;
        return Ok(());
    }
    for zoned in &lines {
        output.print(&format!("{:<18} {}", zoned.label, zoned.rendered))?;
    }
    Ok(())
}
