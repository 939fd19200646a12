//! UI event types.
//!
//! Events are inputs to the reducer: raw terminal input, the periodic
//! tick, and the results of effects the runtime executed against the
//! store or the clipboard.

use crate::effects::CopyTarget;

/// Events processed by the reducer.
#[derive(Debug)]
pub enum UiEvent {
    /// Periodic heartbeat; drives toast expiry.
    Tick,

    /// Raw terminal input.
    Terminal(crossterm::event::Event),

    /// A store update was validated, merged, and persisted.
    PatchApplied { note: Option<String> },

    /// A store update failed validation; nothing changed.
    PatchRejected { message: String },

    /// A validated update could not be persisted.
    StorageFailed { error: String },

    /// An export was placed on the system clipboard.
    ClipboardCopied { target: CopyTarget },

    /// The clipboard write failed.
    ClipboardFailed,

    /// A logo image file was read and stored on the configuration.
    LogoLoaded,

    /// The logo image file could not be read.
    LogoLoadFailed { error: String },
}
