//! Usage: Tauri commands exposed to the webview.

mod settings;

pub(crate) use settings::*;
