//! Feature modules: sidebar, preview, toast.

pub mod preview;
pub mod sidebar;
pub mod toast;
