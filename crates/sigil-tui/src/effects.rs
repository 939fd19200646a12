//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O only (store mutation, clipboard, file reads), which
//! keeps the reducer pure: it mutates view state and returns effects,
//! never performs I/O directly.

use sigil_core::config::ConfigPatch;
use sigil_core::presets::Preset;

/// Which export format a copy action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    Json,
    Snippet,
}

impl CopyTarget {
    /// Toast shown when the copy lands on the clipboard.
    pub fn success_message(&self) -> &'static str {
        match self {
            CopyTarget::Json => "JSON copied to clipboard!",
            CopyTarget::Snippet => "React Component copied!",
        }
    }
}

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Validate, merge, and persist a partial configuration update.
    ApplyPatch {
        patch: ConfigPatch,
        /// Success toast, if the update warrants one.
        note: Option<String>,
    },

    /// Apply a named preset as a single update.
    ApplyPreset(Preset),

    /// Reset the component order to the canonical sequence.
    ResetOrder,

    /// Render an export and place it on the system clipboard.
    Copy(CopyTarget),

    /// Read an image file and store it as the custom logo data URL.
    LoadLogo { path: String },
}
