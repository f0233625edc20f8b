/*
 * Constellation
 *
 * An animated background of drifting particles. Particles bounce off the
 * edges of the surface, flee the cursor, and every pair close enough to each
 * other is joined by a thin line.
 *
 * Controls: Space pauses, R repopulates the field, D toggles the debug overlay.
 * Run with --debug for the control panel.
 */

use anyhow::{Context, Result};
use clap::Parser;

use constellation::app::{model, update};
use constellation::config::{Args, Settings, SETTINGS};

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = Settings::from_args(args).context("failed to load settings")?;

    if SETTINGS.set(settings).is_err() {
        anyhow::bail!("settings were already initialized");
    }

    nannou::app(model).update(update).run();

    Ok(())
}
