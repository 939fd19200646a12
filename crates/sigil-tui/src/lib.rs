//! Full-screen TUI implementation for Sigil.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr};

use anyhow::Result;
pub use runtime::StudioRuntime;
use sigil_core::store::ConfigStore;

/// Runs the interactive configurator loop.
pub fn run_studio(store: ConfigStore) -> Result<()> {
    // The studio requires a terminal to render the TUI
    if !stderr().is_terminal() {
        anyhow::bail!(
            "The studio requires a terminal.\n\
             Use `sigil export --format json` for non-interactive output."
        );
    }

    let mut runtime = StudioRuntime::new(store)?;
    runtime.run()
}
