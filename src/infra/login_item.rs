//! Usage: OS "start at login" registration (autostart plugin behind a small trait).

pub(crate) trait LoginItems: Send + Sync {
    /// Whether this platform can register the app as a login item at all.
    fn is_supported(&self) -> bool;

    fn apply(&self, enabled: bool) -> Result<(), String>;
}

/// Login items are only wired up on macOS and Windows; elsewhere the toggle is refused.
pub(crate) const fn platform_supported() -> bool {
    cfg!(any(target_os = "macos", target_os = "windows"))
}

pub(crate) struct UnsupportedLoginItems;

impl LoginItems for UnsupportedLoginItems {
    fn is_supported(&self) -> bool {
        false
    }

    fn apply(&self, _enabled: bool) -> Result<(), String> {
        Err("login items are not supported on this platform".to_string())
    }
}

#[cfg(desktop)]
pub(crate) struct AutostartLoginItems {
    app: tauri::AppHandle,
}

#[cfg(desktop)]
impl LoginItems for AutostartLoginItems {
    fn is_supported(&self) -> bool {
        platform_supported()
    }

    fn apply(&self, enabled: bool) -> Result<(), String> {
        use tauri_plugin_autostart::ManagerExt;

        let launcher = self.app.autolaunch();
        let current = launcher
            .is_enabled()
            .map_err(|e| format!("failed to query login item: {e}"))?;
        if current == enabled {
            return Ok(());
        }

        if enabled {
            launcher
                .enable()
                .map_err(|e| format!("failed to register login item: {e}"))
        } else {
            launcher
                .disable()
                .map_err(|e| format!("failed to unregister login item: {e}"))
        }
    }
}

#[cfg(desktop)]
pub(crate) fn for_platform(app: &tauri::AppHandle) -> Box<dyn LoginItems> {
    if platform_supported() {
        Box::new(AutostartLoginItems { app: app.clone() })
    } else {
        Box::new(UnsupportedLoginItems)
    }
}

#[cfg(not(desktop))]
pub(crate) fn for_platform(_app: &tauri::AppHandle) -> Box<dyn LoginItems> {
    Box::new(UnsupportedLoginItems)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_login_items_refuse_everything() {
        let items = UnsupportedLoginItems;
        assert!(!items.is_supported());
        assert!(items.apply(true).is_err());
        assert!(items.apply(false).is_err());
    }

    #[test]
    fn linux_is_not_a_supported_platform() {
        if cfg!(target_os = "linux") {
            assert!(!platform_supported());
        }
    }
}
