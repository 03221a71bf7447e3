//! Usage: Resolve per-user app data directory and related path helpers.

use std::path::PathBuf;
use tauri::Manager;

pub const APP_DOTDIR_NAME: &str = ".trayboard";
const APP_DOTDIR_NAME_ENV: &str = "TRAYBOARD_DOTDIR_NAME";
const SETTINGS_FILE_NAME: &str = "settings.json";
const LOGS_DIR_NAME: &str = "logs";

fn is_safe_dotdir_name(name: &str) -> bool {
    if name.is_empty() || name == "." || name == ".." {
        return false;
    }
    if !name.starts_with('.') {
        return false;
    }
    if name.contains('/') || name.contains('\\') {
        return false;
    }
    name.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_')
}

fn dotdir_name(env_value: Option<String>) -> String {
    env_value
        .map(|v| v.trim().to_string())
        .filter(|v| is_safe_dotdir_name(v))
        .unwrap_or_else(|| APP_DOTDIR_NAME.to_string())
}

pub fn app_data_dir(app: &tauri::AppHandle) -> Result<PathBuf, String> {
    let home_dir = app
        .path()
        .home_dir()
        .map_err(|e| format!("failed to resolve home dir: {e}"))?;

    let dir = home_dir.join(dotdir_name(std::env::var(APP_DOTDIR_NAME_ENV).ok()));
    std::fs::create_dir_all(&dir).map_err(|e| format!("failed to create app dir: {e}"))?;

    Ok(dir)
}

pub fn settings_path(app: &tauri::AppHandle) -> Result<PathBuf, String> {
    Ok(app_data_dir(app)?.join(SETTINGS_FILE_NAME))
}

pub fn logs_dir(app: &tauri::AppHandle) -> Result<PathBuf, String> {
    let dir = app_data_dir(app)?.join(LOGS_DIR_NAME);
    std::fs::create_dir_all(&dir).map_err(|e| format!("failed to create logs dir: {e}"))?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotdir_name_rejects_unsafe_values() {
        for bad in ["", ".", "..", "trayboard", ".a/b", ".a\\b", ".tray board", ".x$"] {
            assert!(!is_safe_dotdir_name(bad), "{bad:?} should be rejected");
        }
        for good in [".trayboard", ".trayboard-dev", ".tray_board.2"] {
            assert!(is_safe_dotdir_name(good), "{good:?} should be accepted");
        }
    }

    #[test]
    fn dotdir_name_falls_back_to_default() {
        assert_eq!(dotdir_name(None), APP_DOTDIR_NAME);
        assert_eq!(dotdir_name(Some("../etc".to_string())), APP_DOTDIR_NAME);
        assert_eq!(
            dotdir_name(Some("  .trayboard-dev ".to_string())),
            ".trayboard-dev"
        );
    }
}
