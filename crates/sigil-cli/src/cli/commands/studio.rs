//! Interactive studio (the default command).

use anyhow::Result;

#[cfg(feature = "tui")]
pub fn run() -> Result<()> {
    let store = sigil_core::store::ConfigStore::load_default();
    sigil_tui::run_studio(store)
}

#[cfg(not(feature = "tui"))]
pub fn run() -> Result<()> {
    anyhow::bail!(
        "This build does not include the studio.\n\
         Use the export, preset, and config subcommands instead."
    )
}
