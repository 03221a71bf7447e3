//! Usage: The single application context (settings + login items) managed by Tauri.
//!
//! Built once in `setup` and registered with `app.manage`; handlers reach it through
//! `app.state::<AppContext>()` instead of process-wide globals.

use crate::login_item::LoginItems;
use crate::settings::{SettingsStore, LAUNCH_AT_LOGIN};
use crate::shared::mutex_ext::MutexExt;
use std::sync::Mutex;

pub(crate) struct AppContext {
    settings: Mutex<SettingsStore>,
    login_items: Box<dyn LoginItems>,
}

impl AppContext {
    pub(crate) fn new(settings: SettingsStore, login_items: Box<dyn LoginItems>) -> Self {
        Self {
            settings: Mutex::new(settings),
            login_items,
        }
    }

    pub(crate) fn launch_at_login(&self) -> bool {
        self.settings.lock_or_recover().get_bool(LAUNCH_AT_LOGIN)
    }

    pub(crate) fn login_items_supported(&self) -> bool {
        self.login_items.is_supported()
    }

    /// Returns `Ok(false)` without touching the store when the platform has no login items.
    pub(crate) fn set_launch_at_login(&self, value: bool) -> Result<bool, String> {
        if !self.login_items.is_supported() {
            tracing::info!(value, "launch-at-login change refused: unsupported platform");
            return Ok(false);
        }

        self.settings
            .lock_or_recover()
            .set_bool(LAUNCH_AT_LOGIN, value)?;

        if let Err(err) = self.login_items.apply(value) {
            tracing::warn!("login item update failed: {}", err);
        }

        tracing::info!(value, "launch-at-login updated");
        Ok(true)
    }

    /// Mirrors the persisted setting into the OS login item; called once at startup.
    pub(crate) fn sync_login_item(&self) {
        if !self.login_items.is_supported() {
            tracing::debug!("login items unsupported; skipping startup sync");
            return;
        }

        let enabled = self.launch_at_login();
        match self.login_items.apply(enabled) {
            Ok(()) => tracing::info!(enabled, "login item synced from settings"),
            Err(err) => tracing::warn!("login item sync failed: {}", err),
        }
    }

    pub(crate) fn flush_settings(&self) -> Result<(), String> {
        self.settings.lock_or_recover().flush()
    }
}
