//! Configuration store: the single source of truth for the live config.
//!
//! Every mutation flows through `update`: validate the patch, shallow-merge
//! it, persist the full record under a fixed key, publish the new snapshot
//! to subscribers. Storage is injected behind `ConfigStorage` so the store
//! is testable without touching the user's home directory.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use tokio::sync::watch;

use crate::config::{ConfigPatch, WidgetConfig, paths};
use crate::presets::Preset;
use crate::{export, order, validation};

/// Fixed storage key for the persisted configuration.
pub const STORAGE_KEY: &str = "wallet-config";

/// Outcome of a store update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The patch validated, was merged, and was persisted.
    Applied,
    /// The patch failed validation; nothing changed.
    Rejected { message: String },
}

impl UpdateOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, UpdateOutcome::Applied)
    }
}

/// Key-value persistence boundary.
///
/// Keys map to small string payloads; the store keeps exactly one entry.
pub trait ConfigStorage {
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// File-backed storage: one `<key>.json` file per key under a directory.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Storage under the default Sigil home location.
    pub fn default_location() -> Self {
        Self::new(paths::storage_dir())
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl ConfigStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Some(contents))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create directory {}", self.dir.display()))?;

        // Atomic write (temp file + rename) to prevent corruption.
        let path = self.path_for(key);
        let tmp_path = path.with_extension("json.tmp");
        std::fs::write(&tmp_path, value)
            .with_context(|| format!("Failed to write {}", tmp_path.display()))?;
        std::fs::rename(&tmp_path, &path).with_context(|| {
            format!("Failed to rename {} to {}", tmp_path.display(), path.display())
        })?;
        Ok(())
    }
}

/// In-memory storage for tests.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConfigStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().expect("storage lock").get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .expect("storage lock")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Holds the current configuration and applies validated patch merges.
pub struct ConfigStore {
    config: WidgetConfig,
    storage: Box<dyn ConfigStorage>,
    tx: watch::Sender<WidgetConfig>,
}

impl ConfigStore {
    /// Loads the store, falling back to the built-in defaults when the
    /// stored value is absent or unparseable.
    pub fn load(storage: Box<dyn ConfigStorage>) -> Self {
        let config = match storage.read(STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(config) => config,
                Err(err) => {
                    tracing::warn!("stored configuration is unparseable, using defaults: {err}");
                    WidgetConfig::default()
                }
            },
            Ok(None) => WidgetConfig::default(),
            Err(err) => {
                tracing::warn!("failed to read stored configuration, using defaults: {err:#}");
                WidgetConfig::default()
            }
        };

        let (tx, _) = watch::channel(config.clone());
        Self {
            config,
            storage,
            tx,
        }
    }

    /// Loads from the default file-backed location.
    pub fn load_default() -> Self {
        Self::load(Box::new(FileStorage::default_location()))
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Subscribes to configuration snapshots published on every applied
    /// update.
    ///
    /// The bundled front ends drive the store synchronously and read
    /// [`config`](Self::config) directly; the channel is the seam for
    /// embedders that render from another task.
    pub fn subscribe(&self) -> watch::Receiver<WidgetConfig> {
        self.tx.subscribe()
    }

    /// Validates and applies a partial update.
    ///
    /// A validation failure rejects the whole patch without mutating
    /// state; storage I/O failure is an `Err` (the merged value stays in
    /// memory and the caller reports the failure).
    pub fn update(&mut self, patch: ConfigPatch) -> Result<UpdateOutcome> {
        let report = validation::validate(&patch);
        if let Some(message) = report.first_error() {
            return Ok(UpdateOutcome::Rejected {
                message: message.to_string(),
            });
        }

        patch.merge_into(&mut self.config);
        let raw = export::to_json(&self.config)?;
        self.storage.write(STORAGE_KEY, &raw)?;
        self.tx.send_replace(self.config.clone());
        Ok(UpdateOutcome::Applied)
    }

    /// Applies a preset as a single update.
    pub fn apply_preset(&mut self, preset: Preset) -> Result<UpdateOutcome> {
        self.update(preset.patch())
    }

    /// Resets the component order to the canonical sequence, regardless
    /// of the current enabled flags.
    pub fn reset_order(&mut self) -> Result<UpdateOutcome> {
        self.update(ConfigPatch {
            component_order: Some(order::CANONICAL_ORDER.to_vec()),
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::config::{AuthComponent, Theme};

    fn memory_store() -> (ConfigStore, MemoryStorage) {
        let storage = MemoryStorage::new();
        let store = ConfigStore::load(Box::new(storage.clone()));
        (store, storage)
    }

    #[test]
    fn test_load_missing_entry_returns_defaults() {
        let (store, _) = memory_store();
        assert_eq!(store.config(), &WidgetConfig::default());
    }

    #[test]
    fn test_load_unparseable_entry_returns_defaults() {
        let storage = MemoryStorage::new();
        storage.write(STORAGE_KEY, "{not json").unwrap();
        let store = ConfigStore::load(Box::new(storage));
        assert_eq!(store.config(), &WidgetConfig::default());
    }

    #[test]
    fn test_update_merges_and_persists() {
        let (mut store, storage) = memory_store();

        let outcome = store
            .update(ConfigPatch {
                theme: Some(Theme::Light),
                corner_radius: Some(20),
                ..Default::default()
            })
            .unwrap();
        assert!(outcome.is_applied());
        assert_eq!(store.config().theme, Theme::Light);
        assert_eq!(store.config().corner_radius, 20);

        // Round-trip: a fresh load reproduces the merged configuration.
        let reloaded = ConfigStore::load(Box::new(storage));
        assert_eq!(reloaded.config(), store.config());
    }

    #[test]
    fn test_rejected_update_changes_nothing() {
        let (mut store, storage) = memory_store();
        let before = store.config().clone();
        let stored_before = storage.read(STORAGE_KEY).unwrap();

        let outcome = store
            .update(ConfigPatch {
                corner_radius: Some(999),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(
            outcome,
            UpdateOutcome::Rejected {
                message: "Corner radius must be between 0 and 50 pixels".to_string()
            }
        );
        assert_eq!(store.config(), &before);
        assert_eq!(storage.read(STORAGE_KEY).unwrap(), stored_before);
    }

    #[test]
    fn test_rejection_reports_first_error_only() {
        let (mut store, _) = memory_store();
        let outcome = store
            .update(ConfigPatch {
                primary_color: Some("bad".to_string()),
                networks: Some(Vec::new()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(
            outcome,
            UpdateOutcome::Rejected {
                message: "Primary color must be a valid hex color (e.g., #9333EA)".to_string()
            }
        );
    }

    #[test]
    fn test_apply_wallet_preset_end_state() {
        let (mut store, _) = memory_store();
        store.apply_preset(Preset::Wallet).unwrap();

        let config = store.config();
        assert!(!config.email);
        assert!(!config.sms);
        assert!(!config.social);
        assert!(!config.passkey);
        assert!(config.external);
        assert_eq!(config.component_order, vec![AuthComponent::External]);
        assert_eq!(config.preset, Preset::Wallet);
    }

    #[test]
    fn test_reset_order_ignores_flags() {
        let (mut store, _) = memory_store();
        store.apply_preset(Preset::Wallet).unwrap();
        store.reset_order().unwrap();

        assert_eq!(
            store.config().component_order,
            order::CANONICAL_ORDER.to_vec()
        );
        // Flags are untouched by the reset.
        assert!(!store.config().email);
    }

    #[test]
    fn test_subscribers_see_applied_updates() {
        let (mut store, _) = memory_store();
        let mut rx = store.subscribe();

        store
            .update(ConfigPatch {
                theme: Some(Theme::Light),
                ..Default::default()
            })
            .unwrap();

        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().theme, Theme::Light);
    }

    #[test]
    fn test_subscribers_not_notified_on_rejection() {
        let (mut store, _) = memory_store();
        let mut rx = store.subscribe();

        store
            .update(ConfigPatch {
                networks: Some(Vec::new()),
                ..Default::default()
            })
            .unwrap();

        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_file_storage_round_trip() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("storage"));

        let mut store = ConfigStore::load(Box::new(FileStorage::new(
            dir.path().join("storage"),
        )));
        store
            .update(ConfigPatch {
                primary_color: Some("#112233".to_string()),
                ..Default::default()
            })
            .unwrap();

        let raw = storage.read(STORAGE_KEY).unwrap().expect("persisted entry");
        let on_disk: WidgetConfig = serde_json::from_str(&raw).unwrap();
        assert_eq!(on_disk, *store.config());

        let reloaded = ConfigStore::load(Box::new(storage));
        assert_eq!(reloaded.config().primary_color, "#112233");
    }
}
