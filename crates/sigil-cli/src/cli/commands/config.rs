//! Config command handlers.

use anyhow::Result;
use sigil_core::config::{WidgetConfig, paths};
use sigil_core::export;
use sigil_core::store::{ConfigStorage, ConfigStore, FileStorage, STORAGE_KEY};

fn storage_path() -> std::path::PathBuf {
    paths::storage_dir().join(format!("{STORAGE_KEY}.json"))
}

pub fn path() -> Result<()> {
    println!("{}", storage_path().display());
    Ok(())
}

pub fn show() -> Result<()> {
    let store = ConfigStore::load_default();
    println!("{}", export::to_json(store.config())?);
    Ok(())
}

/// Overwrites the stored configuration with the built-in defaults.
pub fn reset() -> Result<()> {
    let storage = FileStorage::default_location();
    storage.write(STORAGE_KEY, &export::to_json(&WidgetConfig::default())?)?;
    println!("Configuration reset to defaults");
    Ok(())
}
