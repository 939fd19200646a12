//! Export command handlers.

use anyhow::Result;
use sigil_core::export;
use sigil_core::store::ConfigStore;

pub enum Format {
    Json,
    Component,
}

/// Prints the selected export of the stored configuration to stdout.
pub fn run(format: Format) -> Result<()> {
    let store = ConfigStore::load_default();
    let out = match format {
        Format::Json => export::to_json(store.config())?,
        Format::Component => export::to_component_snippet(store.config()),
    };
    println!("{out}");
    Ok(())
}
