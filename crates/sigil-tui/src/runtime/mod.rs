//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer stays pure and produces effects; this module executes them
//! against the store, the clipboard, and the filesystem, then feeds the
//! result events back through the reducer.

use std::io::Stdout;
use std::path::Path;

use anyhow::{Context, Result};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use crossterm::event;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use sigil_core::config::{ConfigPatch, CustomLogo};
use sigil_core::store::UpdateOutcome;
use sigil_core::{export, order};

use crate::common::Clipboard;
use crate::effects::{CopyTarget, UiEffect};
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Tick cadence while a toast is counting down or an edit is active.
pub const FRAME_DURATION: std::time::Duration = std::time::Duration::from_millis(16);

/// Poll duration when idle. Longer timeout reduces CPU usage when
/// nothing is happening.
pub const IDLE_POLL_DURATION: std::time::Duration = std::time::Duration::from_millis(100);

/// Full-screen TUI runtime.
///
/// Owns the terminal and state. Runs the event loop and executes effects.
/// Terminal state is guaranteed to be restored on drop, panic, or Ctrl+C.
pub struct StudioRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    last_tick: std::time::Instant,
}

impl StudioRuntime {
    /// Creates a new runtime around an already-loaded store.
    pub fn new(store: sigil_core::store::ConfigStore) -> Result<Self> {
        // Set up panic hook BEFORE entering alternate screen
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        Ok(Self {
            terminal,
            state: AppState::new(store),
            last_tick: std::time::Instant::now(),
        })
    }

    /// Runs the main event loop, restoring the terminal on exit.
    pub fn run(&mut self) -> Result<()> {
        let result = self.event_loop();
        let _ = terminal::restore_terminal();
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true; // Start dirty to ensure initial render

        while !self.state.should_quit {
            let events = self.collect_events()?;

            for event in events {
                // Only Tick triggers render - this caps frame rate at tick
                // cadence while terminal events batch to the next Tick.
                if matches!(&event, UiEvent::Tick) {
                    dirty = true;
                }
                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }

        Ok(())
    }

    /// Polls the terminal until the next tick is due, then emits Tick.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        // Fast cadence only while something on screen is time-sensitive.
        let needs_fast_poll =
            self.state.toast.is_visible() || self.state.sidebar.editing.is_some();
        let tick_interval = if needs_fast_poll {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        let poll_duration = tick_interval.saturating_sub(self.last_tick.elapsed());
        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            // Drain any remaining buffered events (non-blocking)
            while event::poll(std::time::Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = std::time::Instant::now();
        }

        Ok(events)
    }

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Feeds a result event back through the reducer.
    fn dispatch_event(&mut self, event: UiEvent) {
        let effects = update::update(&mut self.state, event);
        if !effects.is_empty() {
            self.execute_effects(effects);
        }
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => self.state.should_quit = true,
            UiEffect::ApplyPatch { patch, note } => self.apply_patch(patch, note),
            UiEffect::ApplyPreset(preset) => {
                let note = format!("Applied {} preset", preset.display_name());
                self.apply_patch(preset.patch(), Some(note));
            }
            UiEffect::ResetOrder => {
                let patch = ConfigPatch {
                    component_order: Some(order::CANONICAL_ORDER.to_vec()),
                    ..Default::default()
                };
                self.apply_patch(patch, Some("Component order reset".to_string()));
            }
            UiEffect::Copy(target) => self.copy_export(target),
            UiEffect::LoadLogo { path } => self.load_logo(&path),
        }
    }

    fn apply_patch(&mut self, patch: ConfigPatch, note: Option<String>) {
        match self.state.store.update(patch) {
            Ok(UpdateOutcome::Applied) => self.dispatch_event(UiEvent::PatchApplied { note }),
            Ok(UpdateOutcome::Rejected { message }) => {
                self.dispatch_event(UiEvent::PatchRejected { message });
            }
            Err(err) => {
                tracing::error!("failed to persist configuration: {err:#}");
                self.dispatch_event(UiEvent::StorageFailed {
                    error: format!("{err:#}"),
                });
            }
        }
    }

    fn copy_export(&mut self, target: CopyTarget) {
        let config = self.state.store.config();
        let result = match target {
            CopyTarget::Json => export::to_json(config).and_then(|text| Clipboard::copy(&text)),
            CopyTarget::Snippet => Clipboard::copy(&export::to_component_snippet(config)),
        };

        match result {
            Ok(()) => self.dispatch_event(UiEvent::ClipboardCopied { target }),
            Err(err) => {
                tracing::warn!("clipboard copy failed: {err:#}");
                self.dispatch_event(UiEvent::ClipboardFailed);
            }
        }
    }

    fn load_logo(&mut self, path: &str) {
        match read_logo_data_url(path) {
            Ok(data) => {
                let logo = CustomLogo {
                    enabled: true,
                    data: Some(data),
                    ..self.state.store.config().custom_logo.clone()
                };
                self.apply_patch(
                    ConfigPatch {
                        custom_logo: Some(logo),
                        ..Default::default()
                    },
                    None,
                );
                self.dispatch_event(UiEvent::LogoLoaded);
            }
            Err(err) => self.dispatch_event(UiEvent::LogoLoadFailed {
                error: format!("{err:#}"),
            }),
        }
    }
}

/// Reads an image file into the `data:` URL form the configuration stores.
fn read_logo_data_url(path: &str) -> Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read logo file {path}"))?;
    let mime = match Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    };
    Ok(format!("data:{mime};base64,{}", BASE64.encode(bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logo_data_url_encodes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logo.png");
        std::fs::write(&path, b"not-really-a-png").unwrap();

        let url = read_logo_data_url(path.to_str().unwrap()).unwrap();
        assert!(url.starts_with("data:image/png;base64,"));
        assert!(url.ends_with(&BASE64.encode(b"not-really-a-png")));
    }

    #[test]
    fn test_logo_data_url_missing_file() {
        assert!(read_logo_data_url("/definitely/not/here.png").is_err());
    }
}
