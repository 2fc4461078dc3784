//! Reset command implementation

use anyhow::{Result, bail};

use super::Engine;

/// Discard progress after explicit confirmation
pub fn reset_command(engine: &mut Engine, confirmed: bool) -> Result<()> {
    if !confirmed {
        bail!("Resetting erases all missions, XP and streaks. Re-run with --yes to confirm.");
    }

    engine.reset_progress()?;
    println!("Progress reset. Mission 1 is waiting.");
    Ok(())
}
