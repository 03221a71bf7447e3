//! Usage: The application's event set and its single dispatcher.

use crate::app_state::AppContext;
use crate::placement::Rect;
use crate::resident;
use tauri::{Emitter, Manager};

pub(crate) const LAUNCH_AT_LOGIN_EVENT_NAME: &str = "settings:launch-at-login";

#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LaunchAtLoginPayload {
    pub(crate) launch_at_login: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum AppEvent {
    /// Left click on the tray icon, with the icon's bounds in physical pixels.
    TrayClick { tray: Rect },
    /// "Show/Hide" tray menu item; no icon bounds, so the window keeps its position.
    ToggleRequested,
    /// "Launch at startup" checkbox in the tray menu.
    CheckboxToggled,
    WindowCloseRequested,
    Quit,
}

pub(crate) fn dispatch(app: &tauri::AppHandle, event: AppEvent) {
    tracing::debug!(?event, "app event");

    match event {
        AppEvent::TrayClick { tray } => resident::toggle_main_window(app, Some(tray)),
        AppEvent::ToggleRequested => resident::toggle_main_window(app, None),
        AppEvent::CheckboxToggled => {
            let ctx = app.state::<AppContext>();
            let next = !ctx.launch_at_login();
            match ctx.set_launch_at_login(next) {
                Ok(true) => {
                    let payload = LaunchAtLoginPayload {
                        launch_at_login: next,
                    };
                    if let Err(err) = app.emit(LAUNCH_AT_LOGIN_EVENT_NAME, payload) {
                        tracing::warn!("failed to notify webview: {}", err);
                    }
                }
                Ok(false) => tracing::info!("launch-at-login toggle ignored on this platform"),
                Err(err) => tracing::error!("failed to persist launch-at-login: {}", err),
            }
            // Always rebuild so the checkbox snaps back to the stored value on refusal.
            if let Err(err) = resident::update_menu(app) {
                tracing::error!("failed to refresh tray menu: {}", err);
            }
        }
        // The window is kept alive for the next tray click.
        AppEvent::WindowCloseRequested => resident::hide_main_window(app),
        AppEvent::Quit => {
            tracing::info!("quit requested from tray");
            app.exit(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launch_at_login_payload_uses_settings_key_casing() {
        let payload = LaunchAtLoginPayload {
            launch_at_login: true,
        };
        assert_eq!(
            serde_json::to_value(payload).expect("serialize"),
            serde_json::json!({ "launchAtLogin": true })
        );
    }
}
