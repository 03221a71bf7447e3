//! Usage: Launch-at-login commands (the two synchronous calls the webview makes).

use crate::app_state::AppContext;
use crate::resident;

#[tauri::command]
pub(crate) fn get_launch_at_login(ctx: tauri::State<'_, AppContext>) -> bool {
    ctx.launch_at_login()
}

/// Resolves to `false` without side effects when login items are unsupported.
#[tauri::command]
pub(crate) fn set_launch_at_login(
    app: tauri::AppHandle,
    ctx: tauri::State<'_, AppContext>,
    value: bool,
) -> Result<bool, String> {
    if !ctx.set_launch_at_login(value)? {
        return Ok(false);
    }

    if let Err(err) = resident::update_menu(&app) {
        tracing::warn!("failed to refresh tray menu: {}", err);
    }
    Ok(true)
}
