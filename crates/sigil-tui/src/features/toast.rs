//! Transient status toasts.
//!
//! One toast at a time: showing a new toast replaces whatever is on
//! screen, there is no queue. Expiry is driven by the runtime tick.

use std::time::{Duration, Instant};

use ratatui::style::Color;

/// Visual weight of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl Severity {
    /// How long a toast of this severity stays on screen.
    ///
    /// Errors linger longer so a rejected edit can be read.
    pub fn timeout(&self) -> Duration {
        match self {
            Severity::Error => Duration::from_millis(5000),
            _ => Duration::from_millis(2500),
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Severity::Success => Color::Green,
            Severity::Error => Color::Red,
            Severity::Warning => Color::Yellow,
            Severity::Info => Color::Cyan,
        }
    }
}

/// A toast currently on screen.
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
    shown_at: Instant,
}

impl Toast {
    fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= self.severity.timeout()
    }
}

/// Toast display state.
#[derive(Debug, Default)]
pub struct ToastState {
    current: Option<Toast>,
}

impl ToastState {
    /// Shows a toast, replacing any toast currently on screen.
    pub fn show(&mut self, message: impl Into<String>, severity: Severity) {
        self.current = Some(Toast {
            message: message.into(),
            severity,
            shown_at: Instant::now(),
        });
    }

    /// Clears the toast once its timeout elapses. Returns whether the
    /// display changed.
    pub fn tick(&mut self) -> bool {
        if self.current.as_ref().is_some_and(Toast::is_expired) {
            self.current = None;
            return true;
        }
        false
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_replaces_current_toast() {
        let mut state = ToastState::default();
        state.show("first", Severity::Success);
        state.show("second", Severity::Error);

        let toast = state.current().unwrap();
        assert_eq!(toast.message, "second");
        assert_eq!(toast.severity, Severity::Error);
    }

    #[test]
    fn test_errors_outlive_other_severities() {
        assert!(Severity::Error.timeout() > Severity::Success.timeout());
        assert_eq!(Severity::Success.timeout(), Duration::from_millis(2500));
        assert_eq!(Severity::Info.timeout(), Severity::Warning.timeout());
    }

    #[test]
    fn test_tick_keeps_fresh_toast() {
        let mut state = ToastState::default();
        state.show("fresh", Severity::Info);
        assert!(!state.tick());
        assert!(state.is_visible());
    }

    #[test]
    fn test_tick_without_toast_is_quiet() {
        let mut state = ToastState::default();
        assert!(!state.tick());
    }
}
