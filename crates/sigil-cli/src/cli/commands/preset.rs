//! Preset command handler.

use anyhow::{Result, bail};
use sigil_core::presets::Preset;
use sigil_core::store::{ConfigStore, UpdateOutcome};

/// Applies a preset by name and persists the result.
pub fn run(name: &str) -> Result<()> {
    let preset = match name.to_ascii_lowercase().as_str() {
        "full" => Preset::Full,
        "simple" => Preset::Simple,
        "wallet" => Preset::Wallet,
        other => bail!("Unknown preset '{other}'. Available: full, simple, wallet"),
    };

    let mut store = ConfigStore::load_default();
    match store.apply_preset(preset)? {
        UpdateOutcome::Applied => {
            println!(
                "Applied {} preset: {}",
                preset.display_name(),
                preset.description()
            );
            Ok(())
        }
        UpdateOutcome::Rejected { message } => bail!(message),
    }
}
