mod app;
mod commands;
mod domain;
mod infra;
mod shared;

#[cfg(desktop)]
pub(crate) use app::events;
pub(crate) use app::{app_state, cleanup, logging, navigation, resident};
pub(crate) use domain::placement;
pub(crate) use infra::{app_paths, login_item, settings};

use app_state::AppContext;
use commands::*;
use settings::SettingsStore;
use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let builder = tauri::Builder::default();

    // single-instance must be registered first so a second launch exits before any setup.
    #[cfg(desktop)]
    let builder = builder
        .plugin(tauri_plugin_single_instance::init(|app, _argv, _cwd| {
            resident::show_main_window(app);
        }))
        .plugin(tauri_plugin_autostart::Builder::new().build());

    let app = builder
        .plugin(tauri_plugin_opener::init())
        .on_window_event(resident::on_window_event)
        .setup(|app| {
            logging::init(app.handle());

            let settings = SettingsStore::open(app.handle())?;
            tracing::info!(path = %settings.path().display(), "settings loaded");

            let ctx = AppContext::new(settings, login_item::for_platform(app.handle()));
            ctx.sync_login_item();
            app.manage(ctx);

            resident::create_main_window(app.handle())
                .inspect_err(|err| tracing::error!("main window setup failed: {}", err))?;
            // Without a tray the hidden window has no way to be shown.
            resident::setup_tray(app.handle())
                .inspect_err(|err| tracing::error!("system tray setup failed: {}", err))?;

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            get_launch_at_login,
            set_launch_at_login
        ])
        .build(tauri::generate_context!())
        .expect("error while building tauri application");

    app.run(|app_handle, event| match event {
        tauri::RunEvent::Exit => cleanup::cleanup_before_exit(app_handle),
        #[cfg(target_os = "macos")]
        tauri::RunEvent::Reopen {
            has_visible_windows: false,
            ..
        } => resident::show_main_window(app_handle),
        _ => {}
    });
}
