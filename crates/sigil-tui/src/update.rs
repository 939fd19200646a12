//! The reducer: `update(state, event) -> Vec<UiEffect>`.
//!
//! All keyboard handling lives here. The reducer mutates view state
//! (cursor, edits, toasts) directly but never touches the store; every
//! configuration change leaves as an effect for the runtime to execute.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use sigil_core::config::{
    AccountType, AuthComponent, ConfigPatch, CustomLogo, DeviceFrame, EditorMode, FontFamily,
    PersistenceMode, SessionDuration, Theme,
};
use sigil_core::order;
use sigil_core::presets::Preset;

use crate::effects::{CopyTarget, UiEffect};
use crate::events::UiEvent;
use crate::features::sidebar::{self, EditState, Row};
use crate::features::toast::Severity;
use crate::state::AppState;

/// Corner radius upper bound enforced by the keyboard stepper.
///
/// The shared validator allows up to 50; the stepper stops earlier so
/// the preview frame stays sensible at terminal cell sizes.
const CORNER_RADIUS_STEP_MAX: u32 = 50;

/// Processes one event, mutating view state and returning effects.
pub fn update(state: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            state.toast.tick();
            Vec::new()
        }
        UiEvent::Terminal(ev) => handle_terminal(state, ev),
        UiEvent::PatchApplied { note } => {
            if let Some(note) = note {
                state.toast.show(note, Severity::Success);
            }
            Vec::new()
        }
        UiEvent::PatchRejected { message } => {
            state.toast.show(message, Severity::Error);
            Vec::new()
        }
        UiEvent::StorageFailed { error } => {
            state.toast.show(format!("Failed to save: {error}"), Severity::Error);
            Vec::new()
        }
        UiEvent::ClipboardCopied { target } => {
            state.toast.show(target.success_message(), Severity::Success);
            Vec::new()
        }
        UiEvent::ClipboardFailed => {
            state
                .toast
                .show("Failed to copy. Please try again.", Severity::Error);
            Vec::new()
        }
        UiEvent::LogoLoaded => {
            state.toast.show("Logo loaded", Severity::Success);
            Vec::new()
        }
        UiEvent::LogoLoadFailed { error } => {
            state
                .toast
                .show(format!("Failed to load logo: {error}"), Severity::Error);
            Vec::new()
        }
    }
}

fn handle_terminal(state: &mut AppState, event: Event) -> Vec<UiEffect> {
    let Event::Key(key) = event else {
        return Vec::new();
    };
    if key.kind != KeyEventKind::Press {
        return Vec::new();
    }

    if state.sidebar.editing.is_some() {
        return handle_edit_key(state, key);
    }
    handle_global_key(state, key)
}

fn handle_global_key(state: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let rows = sidebar::rows(state.store.config());
    let row = rows.get(state.sidebar.cursor).copied();
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => vec![UiEffect::Quit],
        KeyCode::Char('q') => vec![UiEffect::Quit],

        KeyCode::Up | KeyCode::Char('k') => move_or_reorder(state, -1, &rows),
        KeyCode::Down | KeyCode::Char('j') => move_or_reorder(state, 1, &rows),

        KeyCode::Left | KeyCode::Char('h') => {
            row.map_or_else(Vec::new, |row| adjust(state, row, -1))
        }
        KeyCode::Right | KeyCode::Char('l') => {
            row.map_or_else(Vec::new, |row| adjust(state, row, 1))
        }

        KeyCode::Enter | KeyCode::Char(' ') => {
            row.map_or_else(Vec::new, |row| activate(state, row))
        }

        KeyCode::Char('g') => {
            if let Some(Row::OrderEntry(c)) = row {
                toggle_grab(state, c);
            }
            Vec::new()
        }
        KeyCode::Esc => {
            state.sidebar.grabbed = None;
            Vec::new()
        }

        KeyCode::Char('r') => vec![UiEffect::ResetOrder],

        KeyCode::Char('1') => vec![UiEffect::ApplyPreset(Preset::Full)],
        KeyCode::Char('2') => vec![UiEffect::ApplyPreset(Preset::Simple)],
        KeyCode::Char('3') => vec![UiEffect::ApplyPreset(Preset::Wallet)],

        KeyCode::Char('y') => vec![UiEffect::Copy(CopyTarget::Snippet)],
        KeyCode::Char('Y') => vec![UiEffect::Copy(CopyTarget::Json)],

        _ => Vec::new(),
    }
}

/// Up/Down either moves the cursor or, while an order entry is grabbed,
/// swaps it with its neighbor in `component_order`.
fn move_or_reorder(state: &mut AppState, delta: isize, rows: &[Row]) -> Vec<UiEffect> {
    if let Some(grabbed) = state.sidebar.grabbed {
        return reorder_grabbed(state, grabbed, delta);
    }
    state.sidebar.move_cursor(delta, rows.len());
    Vec::new()
}

fn reorder_grabbed(state: &mut AppState, grabbed: AuthComponent, delta: isize) -> Vec<UiEffect> {
    let current = &state.store.config().component_order;
    let Some(idx) = current.iter().position(|c| *c == grabbed) else {
        state.sidebar.grabbed = None;
        return Vec::new();
    };

    let Some(target_idx) = idx.checked_add_signed(delta).filter(|i| *i < current.len()) else {
        return Vec::new();
    };
    let target = current[target_idx];

    // The splice inserts before the target, so a downward move is
    // expressed as lifting the neighbor above the grabbed entry.
    let next = if delta > 0 {
        order::reorder(current, target, grabbed)
    } else {
        order::reorder(current, grabbed, target)
    };

    // Cursor follows the grabbed entry; the row list rebuilds from the
    // new order after the patch lands.
    state.sidebar.move_cursor(delta, usize::MAX);

    vec![UiEffect::ApplyPatch {
        patch: ConfigPatch {
            component_order: Some(next),
            ..Default::default()
        },
        note: None,
    }]
}

fn toggle_grab(state: &mut AppState, component: AuthComponent) {
    state.sidebar.grabbed = if state.sidebar.grabbed == Some(component) {
        None
    } else {
        Some(component)
    };
}

fn patch_effect(patch: ConfigPatch) -> Vec<UiEffect> {
    vec![UiEffect::ApplyPatch { patch, note: None }]
}

/// Left/Right on a selector row cycles its value; on the corner radius
/// row it steps the pixel value.
fn adjust(state: &mut AppState, row: Row, delta: i32) -> Vec<UiEffect> {
    let config = state.store.config();
    match row {
        Row::Preset => {
            let next = cycled(Preset::all(), config.preset, delta);
            vec![UiEffect::ApplyPreset(next)]
        }
        Row::Theme => patch_effect(ConfigPatch {
            theme: Some(cycled(Theme::all(), config.theme, delta)),
            ..Default::default()
        }),
        Row::FontFamily => patch_effect(ConfigPatch {
            font_family: Some(cycled(FontFamily::all(), config.font_family, delta)),
            ..Default::default()
        }),
        Row::AccountType => patch_effect(ConfigPatch {
            account_type: Some(cycled(AccountType::all(), config.account_type, delta)),
            ..Default::default()
        }),
        Row::Persistence => patch_effect(ConfigPatch {
            persistence: Some(cycled(PersistenceMode::all(), config.persistence, delta)),
            ..Default::default()
        }),
        Row::Duration => patch_effect(ConfigPatch {
            duration: Some(cycled(SessionDuration::all(), config.duration, delta)),
            ..Default::default()
        }),
        Row::Mode => patch_effect(ConfigPatch {
            mode: Some(cycled(EditorMode::all(), config.mode, delta)),
            ..Default::default()
        }),
        Row::Device => patch_effect(ConfigPatch {
            device: Some(cycled(DeviceFrame::all(), config.device, delta)),
            ..Default::default()
        }),
        Row::CornerRadius => {
            let next = config
                .corner_radius
                .saturating_add_signed(delta)
                .min(CORNER_RADIUS_STEP_MAX);
            if next == config.corner_radius {
                return Vec::new();
            }
            patch_effect(ConfigPatch {
                corner_radius: Some(next),
                ..Default::default()
            })
        }
        _ => Vec::new(),
    }
}

/// Enter/Space on a row: toggle, apply, grab, copy, or begin a text edit.
fn activate(state: &mut AppState, row: Row) -> Vec<UiEffect> {
    let config = state.store.config();
    match row {
        Row::AuthToggle(c) => {
            let enabled = Some(!c.is_enabled(config));
            let patch = match c {
                AuthComponent::Email => ConfigPatch { email: enabled, ..Default::default() },
                AuthComponent::Sms => ConfigPatch { sms: enabled, ..Default::default() },
                AuthComponent::Social => ConfigPatch { social: enabled, ..Default::default() },
                AuthComponent::Passkey => ConfigPatch { passkey: enabled, ..Default::default() },
                AuthComponent::External => ConfigPatch { external: enabled, ..Default::default() },
            };
            patch_effect(patch)
        }
        Row::Network(name) => {
            let mut networks = config.networks.clone();
            if let Some(idx) = networks.iter().position(|n| n == name) {
                networks.remove(idx);
            } else {
                networks.push(name.to_string());
            }
            // An empty selection is sent anyway; the validator rejects it
            // and the rejection message lands as an error toast.
            patch_effect(ConfigPatch {
                networks: Some(networks),
                ..Default::default()
            })
        }
        Row::Preset => vec![UiEffect::ApplyPreset(config.preset)],
        Row::ResetOrder => vec![UiEffect::ResetOrder],
        Row::OrderEntry(c) => {
            toggle_grab(state, c);
            Vec::new()
        }
        Row::Limits => patch_effect(ConfigPatch {
            limits: Some(!config.limits),
            ..Default::default()
        }),
        Row::Paymaster => patch_effect(ConfigPatch {
            paymaster: Some(!config.paymaster),
            ..Default::default()
        }),
        Row::AdvancedOptions => patch_effect(ConfigPatch {
            advanced_options: Some(!config.advanced_options),
            ..Default::default()
        }),
        Row::LogoEnabled => {
            let logo = CustomLogo {
                enabled: !config.custom_logo.enabled,
                ..config.custom_logo.clone()
            };
            patch_effect(ConfigPatch {
                custom_logo: Some(logo),
                ..Default::default()
            })
        }
        Row::CopySnippet => vec![UiEffect::Copy(CopyTarget::Snippet)],
        Row::CopyJson => vec![UiEffect::Copy(CopyTarget::Json)],
        Row::Theme
        | Row::FontFamily
        | Row::AccountType
        | Row::Persistence
        | Row::Duration
        | Row::Mode
        | Row::Device => adjust(state, row, 1),
        Row::PrimaryColor | Row::EntryPoint | Row::SpendingLimit | Row::Currency | Row::LogoPath => {
            if let Some(buffer) = row.edit_seed(config) {
                state.sidebar.editing = Some(EditState { row, buffer });
            }
            Vec::new()
        }
        Row::CornerRadius => Vec::new(),
    }
}

fn handle_edit_key(state: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let Some(edit) = state.sidebar.editing.as_mut() else {
        return Vec::new();
    };

    match key.code {
        KeyCode::Esc => {
            state.sidebar.editing = None;
            Vec::new()
        }
        KeyCode::Backspace => {
            edit.buffer.pop();
            Vec::new()
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            edit.buffer.push(c);
            Vec::new()
        }
        KeyCode::Enter => match state.sidebar.editing.take() {
            Some(edit) => commit_edit(state, edit),
            None => Vec::new(),
        },
        _ => Vec::new(),
    }
}

/// Turns a finished text edit into a patch (or a logo load).
///
/// Each field is patched alone, exactly as the panel it mirrors submits
/// it; in particular the entry point travels without the account type.
fn commit_edit(state: &mut AppState, edit: EditState) -> Vec<UiEffect> {
    let value = edit.buffer.trim().to_string();
    match edit.row {
        Row::PrimaryColor => patch_effect(ConfigPatch {
            primary_color: Some(value),
            ..Default::default()
        }),
        Row::EntryPoint => patch_effect(ConfigPatch {
            entry_point: Some(value),
            ..Default::default()
        }),
        Row::Currency => patch_effect(ConfigPatch {
            spending_limit_currency: Some(value),
            ..Default::default()
        }),
        Row::SpendingLimit => match value.parse::<f64>() {
            Ok(amount) => patch_effect(ConfigPatch {
                spending_limit: Some(amount),
                ..Default::default()
            }),
            Err(_) => {
                state
                    .toast
                    .show("Spending limit must be a number", Severity::Warning);
                Vec::new()
            }
        },
        Row::LogoPath => {
            if value.is_empty() {
                return Vec::new();
            }
            vec![UiEffect::LoadLogo { path: value }]
        }
        _ => Vec::new(),
    }
}

fn cycled<T: Copy + PartialEq>(all: &[T], current: T, delta: i32) -> T {
    let len = all.len() as i32;
    let idx = all.iter().position(|v| *v == current).unwrap_or(0) as i32;
    all[(idx + delta).rem_euclid(len) as usize]
}

#[cfg(test)]
mod tests {
    use sigil_core::store::{ConfigStore, MemoryStorage};

    use super::*;

    fn test_state() -> AppState {
        AppState::new(ConfigStore::load(Box::new(MemoryStorage::new())))
    }

    fn key(code: KeyCode) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn focus(state: &mut AppState, row: Row) {
        let rows = sidebar::rows(state.store.config());
        state.sidebar.focus(&rows, row);
    }

    #[test]
    fn test_quit_keys() {
        let mut state = test_state();
        let effects = update(&mut state, key(KeyCode::Char('q')));
        assert!(matches!(effects.as_slice(), [UiEffect::Quit]));

        let ctrl_c = UiEvent::Terminal(Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        let effects = update(&mut state, ctrl_c);
        assert!(matches!(effects.as_slice(), [UiEffect::Quit]));
    }

    #[test]
    fn test_navigation_moves_cursor() {
        let mut state = test_state();
        update(&mut state, key(KeyCode::Down));
        update(&mut state, key(KeyCode::Char('j')));
        assert_eq!(state.sidebar.cursor, 2);
        update(&mut state, key(KeyCode::Up));
        assert_eq!(state.sidebar.cursor, 1);
    }

    #[test]
    fn test_enter_on_auth_row_toggles_flag() {
        let mut state = test_state();
        focus(&mut state, Row::AuthToggle(AuthComponent::Email));

        let effects = update(&mut state, key(KeyCode::Enter));
        let [UiEffect::ApplyPatch { patch, note: None }] = effects.as_slice() else {
            panic!("expected a patch effect, got {effects:?}");
        };
        // Email is on by default, so the toggle turns it off.
        assert_eq!(patch.email, Some(false));
        assert!(patch.sms.is_none());
    }

    #[test]
    fn test_network_toggle_builds_replacement_list() {
        let mut state = test_state();
        focus(&mut state, Row::Network("Base"));

        let effects = update(&mut state, key(KeyCode::Enter));
        let [UiEffect::ApplyPatch { patch, .. }] = effects.as_slice() else {
            panic!("expected a patch effect");
        };
        assert_eq!(
            patch.networks,
            Some(vec!["Hyperion".to_string(), "Base".to_string()])
        );
    }

    #[test]
    fn test_removing_last_network_still_emits_patch() {
        // The empty list goes to the store, which rejects it with the
        // validator's message.
        let mut state = test_state();
        focus(&mut state, Row::Network("Hyperion"));

        let effects = update(&mut state, key(KeyCode::Enter));
        let [UiEffect::ApplyPatch { patch, .. }] = effects.as_slice() else {
            panic!("expected a patch effect");
        };
        assert_eq!(patch.networks, Some(Vec::new()));
    }

    #[test]
    fn test_selector_row_cycles_value() {
        let mut state = test_state();
        focus(&mut state, Row::Theme);

        let effects = update(&mut state, key(KeyCode::Right));
        let [UiEffect::ApplyPatch { patch, .. }] = effects.as_slice() else {
            panic!("expected a patch effect");
        };
        assert_eq!(patch.theme, Some(Theme::Light));
    }

    #[test]
    fn test_corner_radius_steps_and_clamps() {
        let mut state = test_state();
        focus(&mut state, Row::CornerRadius);

        let effects = update(&mut state, key(KeyCode::Right));
        let [UiEffect::ApplyPatch { patch, .. }] = effects.as_slice() else {
            panic!("expected a patch effect");
        };
        assert_eq!(patch.corner_radius, Some(13));
    }

    #[test]
    fn test_preset_digit_shortcuts() {
        let mut state = test_state();
        let effects = update(&mut state, key(KeyCode::Char('3')));
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::ApplyPreset(Preset::Wallet)]
        ));
    }

    #[test]
    fn test_copy_shortcuts() {
        let mut state = test_state();
        let effects = update(&mut state, key(KeyCode::Char('y')));
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::Copy(CopyTarget::Snippet)]
        ));
        let upper = UiEvent::Terminal(Event::Key(KeyEvent::new(
            KeyCode::Char('Y'),
            KeyModifiers::SHIFT,
        )));
        let effects = update(&mut state, upper);
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::Copy(CopyTarget::Json)]
        ));
    }

    #[test]
    fn test_edit_flow_commits_primary_color_alone() {
        let mut state = test_state();
        focus(&mut state, Row::PrimaryColor);

        update(&mut state, key(KeyCode::Enter));
        let editing = state.sidebar.editing.as_ref().unwrap();
        assert_eq!(editing.buffer, "#9333EA");

        // Clear the seed and type a new color.
        for _ in 0..7 {
            update(&mut state, key(KeyCode::Backspace));
        }
        for c in "#112233".chars() {
            update(&mut state, key(KeyCode::Char(c)));
        }
        let effects = update(&mut state, key(KeyCode::Enter));

        let [UiEffect::ApplyPatch { patch, .. }] = effects.as_slice() else {
            panic!("expected a patch effect");
        };
        assert_eq!(patch.primary_color.as_deref(), Some("#112233"));
        assert!(patch.entry_point.is_none());
        assert!(state.sidebar.editing.is_none());
    }

    #[test]
    fn test_edit_escape_discards() {
        let mut state = test_state();
        focus(&mut state, Row::Currency);
        update(&mut state, key(KeyCode::Enter));
        update(&mut state, key(KeyCode::Char('X')));
        let effects = update(&mut state, key(KeyCode::Esc));
        assert!(effects.is_empty());
        assert!(state.sidebar.editing.is_none());
    }

    #[test]
    fn test_non_numeric_limit_warns_without_patch() {
        let mut state = test_state();
        focus(&mut state, Row::SpendingLimit);
        update(&mut state, key(KeyCode::Enter));
        for _ in 0..4 {
            update(&mut state, key(KeyCode::Backspace));
        }
        for c in "lots".chars() {
            update(&mut state, key(KeyCode::Char(c)));
        }
        let effects = update(&mut state, key(KeyCode::Enter));
        assert!(effects.is_empty());
        assert_eq!(
            state.toast.current().unwrap().message,
            "Spending limit must be a number"
        );
    }

    #[test]
    fn test_grab_and_move_reorders() {
        let mut state = test_state();
        focus(&mut state, Row::OrderEntry(AuthComponent::Email));

        update(&mut state, key(KeyCode::Char('g')));
        assert_eq!(state.sidebar.grabbed, Some(AuthComponent::Email));

        let effects = update(&mut state, key(KeyCode::Down));
        let [UiEffect::ApplyPatch { patch, .. }] = effects.as_slice() else {
            panic!("expected a patch effect");
        };
        assert_eq!(
            patch.component_order.as_ref().unwrap()[..2],
            [AuthComponent::Sms, AuthComponent::Email]
        );
    }

    #[test]
    fn test_grabbed_entry_stops_at_the_edge() {
        let mut state = test_state();
        focus(&mut state, Row::OrderEntry(AuthComponent::Email));
        update(&mut state, key(KeyCode::Char('g')));

        // Email is already first; moving up emits nothing.
        let effects = update(&mut state, key(KeyCode::Up));
        assert!(effects.is_empty());
    }

    #[test]
    fn test_rejection_event_shows_error_toast() {
        let mut state = test_state();
        update(
            &mut state,
            UiEvent::PatchRejected {
                message: "At least one network must be selected".to_string(),
            },
        );
        let toast = state.toast.current().unwrap();
        assert_eq!(toast.message, "At least one network must be selected");
        assert_eq!(toast.severity, Severity::Error);
    }

    #[test]
    fn test_copy_result_toasts() {
        let mut state = test_state();
        update(
            &mut state,
            UiEvent::ClipboardCopied {
                target: CopyTarget::Snippet,
            },
        );
        assert_eq!(
            state.toast.current().unwrap().message,
            "React Component copied!"
        );

        update(&mut state, UiEvent::ClipboardFailed);
        assert_eq!(
            state.toast.current().unwrap().message,
            "Failed to copy. Please try again."
        );
    }

    #[test]
    fn test_applied_update_without_note_is_silent() {
        let mut state = test_state();
        update(&mut state, UiEvent::PatchApplied { note: None });
        assert!(!state.toast.is_visible());
    }
}
