//! Shared helpers for the TUI.

pub mod clipboard;

pub use clipboard::Clipboard;
