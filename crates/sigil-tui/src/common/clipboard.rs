//! System clipboard access.

use anyhow::{Context, Result};

/// Thin wrapper over the system clipboard.
pub struct Clipboard;

impl Clipboard {
    /// Copies text to the system clipboard.
    pub fn copy(text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new().context("Failed to open clipboard")?;
        clipboard
            .set_text(text.to_string())
            .context("Failed to write clipboard")?;
        Ok(())
    }
}
