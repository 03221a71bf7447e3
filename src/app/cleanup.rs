//! Usage: Teardown on app exit (release the tray icon, flush settings).

use super::app_state::AppContext;
use crate::resident;
use std::sync::atomic::{AtomicBool, Ordering};
use tauri::Manager;

static CLEANUP_STARTED: AtomicBool = AtomicBool::new(false);

pub(crate) fn cleanup_before_exit(app: &tauri::AppHandle) {
    if CLEANUP_STARTED.swap(true, Ordering::SeqCst) {
        return;
    }

    tracing::info!("exit requested, cleaning up");
    resident::destroy_tray(app);

    if let Some(ctx) = app.try_state::<AppContext>() {
        if let Err(err) = ctx.flush_settings() {
            tracing::warn!("exit cleanup: failed to flush settings: {}", err);
        }
    }
}
