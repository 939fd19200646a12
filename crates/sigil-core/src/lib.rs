//! Core state model for the Sigil widget configurator.
//!
//! Everything UI-independent lives here: the configuration record and its
//! partial-update type, the validation rules, the preset table, the
//! component order model, the export formatters, and the storage-backed
//! configuration store.

pub mod config;
pub mod export;
pub mod logging;
pub mod order;
pub mod presets;
pub mod store;
pub mod validation;
