//! Usage: Pure logic with no Tauri or filesystem dependencies.

pub(crate) mod placement;
