//! Usage: Desktop resident mode (tray icon, tray menu, main window show/hide).

use crate::app_state::AppContext;
use crate::navigation;
use crate::placement::{compute_position, Point, Rect, Size, Visibility};
use tauri::Manager;

pub(crate) const MAIN_WINDOW_LABEL: &str = "main";
pub(crate) const TRAY_ID: &str = "main-tray";
const TRAY_MENU_TOGGLE_ID: &str = "tray.toggle";
const TRAY_MENU_LAUNCH_AT_LOGIN_ID: &str = "tray.launch_at_login";
const TRAY_MENU_QUIT_ID: &str = "tray.quit";
const TRAY_MENU_TOGGLE_LABEL: &str = "Show/Hide";
const TRAY_MENU_LAUNCH_AT_LOGIN_LABEL: &str = "Launch at startup";
const TRAY_MENU_QUIT_LABEL: &str = "Quit";
const TRAY_MENU_QUIT_ACCELERATOR: &str = "CmdOrCtrl+Q";
const TRAY_TOOLTIP: &str = "Trayboard";

/// Window operations the tray needs; implemented by `tauri::WebviewWindow`.
pub(crate) trait TrayWindow {
    fn is_visible(&self) -> Result<bool, String>;
    fn outer_size(&self) -> Result<Size, String>;
    fn set_position(&self, at: Point) -> Result<(), String>;
    fn show(&self) -> Result<(), String>;
    fn hide(&self) -> Result<(), String>;
    fn set_visible_on_all_workspaces(&self, visible: bool) -> Result<(), String>;
    fn set_focus(&self) -> Result<(), String>;
}

/// Moves the window under the tray icon (when known), shows it and pulls focus onto the
/// current virtual desktop.
pub(crate) fn show<W: TrayWindow>(window: &W, tray: Option<Rect>) -> Result<(), String> {
    if let Some(tray) = tray {
        let at = compute_position(tray, window.outer_size()?);
        window.set_position(at)?;
    }

    window.show()?;
    // Pinning to every workspace first lets focus land on whichever desktop is active.
    window.set_visible_on_all_workspaces(true)?;
    window.set_focus()?;
    window.set_visible_on_all_workspaces(false)?;
    Ok(())
}

/// Flips the window between hidden and visible; returns the new state.
pub(crate) fn toggle<W: TrayWindow>(window: &W, tray: Option<Rect>) -> Result<Visibility, String> {
    let next = Visibility::from_visible(window.is_visible()?).toggled();
    match next {
        Visibility::Hidden => window.hide()?,
        Visibility::Visible => show(window, tray)?,
    }
    Ok(next)
}

/// What the tray context menu should display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TrayMenuState {
    /// Linux tray icons never report clicks, so the menu is the only way to the window.
    pub(crate) window_toggle_item: bool,
    pub(crate) launch_at_login_checked: bool,
    pub(crate) launch_at_login_enabled: bool,
}

impl TrayMenuState {
    pub(crate) fn from_context(ctx: &AppContext) -> Self {
        Self {
            window_toggle_item: cfg!(target_os = "linux"),
            launch_at_login_checked: ctx.launch_at_login(),
            launch_at_login_enabled: ctx.login_items_supported(),
        }
    }
}

/// Builds the main window from its `tauri.conf.json` entry (declared with `create: false`)
/// so in-page links to other sites open in the default browser.
pub fn create_main_window(app: &tauri::AppHandle) -> Result<(), String> {
    let config = app
        .config()
        .app
        .windows
        .iter()
        .find(|w| w.label == MAIN_WINDOW_LABEL)
        .ok_or_else(|| format!("window config `{MAIN_WINDOW_LABEL}` not found"))?;

    let nav_app = app.clone();
    let builder = tauri::WebviewWindowBuilder::from_config(app, config)
        .map_err(|e| format!("failed to read main window config: {e}"))?
        .on_navigation(move |url| navigation::allow_navigation(&nav_app, url));

    #[cfg(desktop)]
    let builder = {
        let popup_app = app.clone();
        builder.on_new_window(move |url, _features| {
            navigation::open_externally(&popup_app, &url);
            tauri::webview::NewWindowResponse::Deny
        })
    };

    builder
        .build()
        .map_err(|e| format!("failed to create main window: {e}"))?;
    Ok(())
}

#[cfg(desktop)]
impl<R: tauri::Runtime> TrayWindow for tauri::WebviewWindow<R> {
    fn is_visible(&self) -> Result<bool, String> {
        tauri::WebviewWindow::is_visible(self)
            .map_err(|e| format!("failed to query window visibility: {e}"))
    }

    fn outer_size(&self) -> Result<Size, String> {
        let size = tauri::WebviewWindow::outer_size(self)
            .map_err(|e| format!("failed to query window size: {e}"))?;
        Ok(Size {
            width: f64::from(size.width),
            height: f64::from(size.height),
        })
    }

    fn set_position(&self, at: Point) -> Result<(), String> {
        tauri::WebviewWindow::set_position(self, tauri::PhysicalPosition::new(at.x, at.y))
            .map_err(|e| format!("failed to move window: {e}"))
    }

    fn show(&self) -> Result<(), String> {
        tauri::WebviewWindow::show(self).map_err(|e| format!("failed to show window: {e}"))
    }

    fn hide(&self) -> Result<(), String> {
        tauri::WebviewWindow::hide(self).map_err(|e| format!("failed to hide window: {e}"))
    }

    fn set_visible_on_all_workspaces(&self, visible: bool) -> Result<(), String> {
        tauri::WebviewWindow::set_visible_on_all_workspaces(self, visible)
            .map_err(|e| format!("failed to set visible-on-all-workspaces: {e}"))
    }

    fn set_focus(&self) -> Result<(), String> {
        tauri::WebviewWindow::set_focus(self).map_err(|e| format!("failed to focus window: {e}"))
    }
}

#[cfg(not(desktop))]
pub fn setup_tray(_app: &tauri::AppHandle) -> Result<(), String> {
    Ok(())
}

#[cfg(not(desktop))]
pub fn update_menu(_app: &tauri::AppHandle) -> Result<(), String> {
    Ok(())
}

#[cfg(not(desktop))]
pub fn destroy_tray(_app: &tauri::AppHandle) {}

#[cfg(not(desktop))]
pub fn show_main_window(_app: &tauri::AppHandle) {}

#[cfg(not(desktop))]
pub fn on_window_event(_window: &tauri::Window, _event: &tauri::WindowEvent) {}

#[cfg(desktop)]
use crate::events::{self, AppEvent};
#[cfg(desktop)]
use tauri::menu::{CheckMenuItem, IsMenuItem, Menu, MenuItem, PredefinedMenuItem};
#[cfg(desktop)]
use tauri::tray::{MouseButton, MouseButtonState, TrayIconBuilder, TrayIconEvent};

#[cfg(desktop)]
fn menu_event(id: &str) -> Option<AppEvent> {
    match id {
        TRAY_MENU_TOGGLE_ID => Some(AppEvent::ToggleRequested),
        TRAY_MENU_LAUNCH_AT_LOGIN_ID => Some(AppEvent::CheckboxToggled),
        TRAY_MENU_QUIT_ID => Some(AppEvent::Quit),
        _ => None,
    }
}

#[cfg(desktop)]
fn build_menu(app: &tauri::AppHandle, state: TrayMenuState) -> Result<Menu<tauri::Wry>, String> {
    let toggle_item = state
        .window_toggle_item
        .then(|| {
            MenuItem::with_id(
                app,
                TRAY_MENU_TOGGLE_ID,
                TRAY_MENU_TOGGLE_LABEL,
                true,
                None::<&str>,
            )
        })
        .transpose()
        .map_err(|e| format!("failed to create tray toggle menu item: {e}"))?;
    let launch_item = CheckMenuItem::with_id(
        app,
        TRAY_MENU_LAUNCH_AT_LOGIN_ID,
        TRAY_MENU_LAUNCH_AT_LOGIN_LABEL,
        state.launch_at_login_enabled,
        state.launch_at_login_checked,
        None::<&str>,
    )
    .map_err(|e| format!("failed to create tray launch-at-login menu item: {e}"))?;
    let separator = PredefinedMenuItem::separator(app)
        .map_err(|e| format!("failed to create tray menu separator: {e}"))?;
    let quit_item = MenuItem::with_id(
        app,
        TRAY_MENU_QUIT_ID,
        TRAY_MENU_QUIT_LABEL,
        true,
        Some(TRAY_MENU_QUIT_ACCELERATOR),
    )
    .map_err(|e| format!("failed to create tray quit menu item: {e}"))?;

    let mut items: Vec<&dyn IsMenuItem<tauri::Wry>> = Vec::with_capacity(4);
    if let Some(toggle_item) = &toggle_item {
        items.push(toggle_item);
    }
    items.extend([
        &launch_item as &dyn IsMenuItem<tauri::Wry>,
        &separator,
        &quit_item,
    ]);

    Menu::with_items(app, &items)
        .map_err(|e| format!("failed to create tray menu: {e}"))
}

#[cfg(desktop)]
fn current_menu_state(app: &tauri::AppHandle) -> TrayMenuState {
    TrayMenuState::from_context(app.state::<AppContext>().inner())
}

/// Converts tray bounds reported by the OS into physical pixels.
#[cfg(desktop)]
fn tray_bounds(rect: &tauri::Rect, scale_factor: f64) -> Rect {
    let position = rect.position.to_physical::<f64>(scale_factor);
    let size = rect.size.to_physical::<f64>(scale_factor);
    Rect {
        x: position.x,
        y: position.y,
        width: size.width,
        height: size.height,
    }
}

#[cfg(desktop)]
pub(crate) fn main_window(app: &tauri::AppHandle) -> Option<tauri::WebviewWindow> {
    app.get_webview_window(MAIN_WINDOW_LABEL)
}

#[cfg(desktop)]
pub fn setup_tray(app: &tauri::AppHandle) -> Result<(), String> {
    let menu = build_menu(app, current_menu_state(app))?;

    #[cfg(target_os = "macos")]
    let icon_bytes = include_bytes!("../../icons/trayTemplate.png");
    #[cfg(not(target_os = "macos"))]
    let icon_bytes = include_bytes!("../../icons/32x32.png");

    let icon = tauri::image::Image::from_bytes(icon_bytes)
        .map_err(|e| format!("failed to load tray icon: {e}"))?;

    let tray_builder = TrayIconBuilder::with_id(TRAY_ID)
        .icon(icon)
        .tooltip(TRAY_TOOLTIP)
        .menu(&menu);

    #[cfg(target_os = "macos")]
    let tray_builder = tray_builder.icon_as_template(true);

    tray_builder
        .show_menu_on_left_click(false)
        .on_menu_event(|app, event| {
            if let Some(event) = menu_event(event.id().0.as_str()) {
                events::dispatch(app, event);
            }
        })
        .on_tray_icon_event(|tray, event| {
            // DoubleClick arrives as its own variant and is ignored; only a released left
            // click toggles the window.
            if let TrayIconEvent::Click {
                button: MouseButton::Left,
                button_state: MouseButtonState::Up,
                rect,
                ..
            } = event
            {
                let app = tray.app_handle();
                let scale_factor = main_window(app)
                    .and_then(|w| w.scale_factor().ok())
                    .unwrap_or(1.0);
                events::dispatch(
                    app,
                    AppEvent::TrayClick {
                        tray: tray_bounds(&rect, scale_factor),
                    },
                );
            }
        })
        .build(app)
        .map_err(|e| format!("failed to build tray icon: {e}"))?;

    tracing::info!("tray icon created");
    Ok(())
}

/// Rebuilds the context menu from the current settings and reapplies it.
#[cfg(desktop)]
pub fn update_menu(app: &tauri::AppHandle) -> Result<(), String> {
    let Some(tray) = app.tray_by_id(TRAY_ID) else {
        return Ok(());
    };

    let menu = build_menu(app, current_menu_state(app))?;
    tray.set_menu(Some(menu))
        .map_err(|e| format!("failed to apply tray menu: {e}"))
}

#[cfg(desktop)]
pub fn destroy_tray(app: &tauri::AppHandle) {
    if app.remove_tray_by_id(TRAY_ID).is_some() {
        tracing::info!("tray icon removed");
    }
}

#[cfg(desktop)]
pub(crate) fn toggle_main_window(app: &tauri::AppHandle, tray: Option<Rect>) {
    let Some(window) = main_window(app) else {
        tracing::warn!("main window not found");
        return;
    };

    match toggle(&window, tray) {
        Ok(state) => tracing::debug!(visible = state.is_visible(), "main window toggled"),
        Err(err) => tracing::error!("failed to toggle main window: {}", err),
    }
}

#[cfg(desktop)]
pub fn show_main_window(app: &tauri::AppHandle) {
    let Some(window) = main_window(app) else {
        return;
    };

    let _ = window.unminimize();
    if let Err(err) = show(&window, None) {
        tracing::error!("failed to show main window: {}", err);
    }
}

#[cfg(desktop)]
pub(crate) fn hide_main_window(app: &tauri::AppHandle) {
    let Some(window) = main_window(app) else {
        return;
    };

    if let Err(err) = TrayWindow::hide(&window) {
        tracing::error!("failed to hide main window: {}", err);
    }
}

#[cfg(desktop)]
pub fn on_window_event(window: &tauri::Window, event: &tauri::WindowEvent) {
    if window.label() != MAIN_WINDOW_LABEL {
        return;
    }

    let tauri::WindowEvent::CloseRequested { api, .. } = event else {
        return;
    };

    api.prevent_close();
    events::dispatch(window.app_handle(), AppEvent::WindowCloseRequested);
}
