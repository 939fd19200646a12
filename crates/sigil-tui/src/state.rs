//! Application state.

use sigil_core::store::ConfigStore;

use crate::features::sidebar::SidebarState;
use crate::features::toast::ToastState;

/// Everything the reducer mutates and the renderer reads.
///
/// The store is the model; the reducer treats it as read-only and routes
/// every mutation through effects so validation, persistence, and
/// publication stay in one place.
pub struct AppState {
    pub store: ConfigStore,
    pub sidebar: SidebarState,
    pub toast: ToastState,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(store: ConfigStore) -> Self {
        Self {
            store,
            sidebar: SidebarState::default(),
            toast: ToastState::default(),
            should_quit: false,
        }
    }
}
