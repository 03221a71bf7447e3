//! Usage: Application layer (Tauri-managed state, tray/window lifecycle, startup wiring).

pub(crate) mod app_state;
pub(crate) mod cleanup;
#[cfg(desktop)]
pub(crate) mod events;
pub(crate) mod logging;
pub(crate) mod navigation;
pub(crate) mod resident;
