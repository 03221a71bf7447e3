//! Usage: Persisted application settings (flat key-value store with declared defaults).
//!
//! The on-disk blob is a single JSON object, e.g. `{ "launchAtLogin": false }`. Every
//! `set` is written through to disk before returning.

use crate::app_paths;
use crate::shared::fs::{read_optional_file, restore_interrupted_write, write_file_atomic};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

pub const LAUNCH_AT_LOGIN: &str = "launchAtLogin";
const DEFAULT_LAUNCH_AT_LOGIN: bool = false;

/// Declared defaults. Stored values must keep the JSON type of their default.
pub fn default_schema() -> Map<String, Value> {
    let mut schema = Map::new();
    schema.insert(
        LAUNCH_AT_LOGIN.to_string(),
        Value::Bool(DEFAULT_LAUNCH_AT_LOGIN),
    );
    schema
}

fn same_kind(a: &Value, b: &Value) -> bool {
    std::mem::discriminant(a) == std::mem::discriminant(b)
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn parse_settings_json(content: &[u8]) -> Result<Map<String, Value>, String> {
    let raw: Value = serde_json::from_slice(content)
        .map_err(|e| format!("failed to parse settings.json: {e}"))?;
    match raw {
        Value::Object(map) => Ok(map),
        other => Err(format!(
            "invalid settings.json: expected an object, found {}",
            kind_name(&other)
        )),
    }
}

#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    defaults: Map<String, Value>,
    values: Map<String, Value>,
}

impl SettingsStore {
    /// Opens `settings.json` in the app data dir with the default schema.
    pub fn open(app: &tauri::AppHandle) -> Result<Self, String> {
        Self::load(app_paths::settings_path(app)?, default_schema())
    }

    pub fn load(path: PathBuf, defaults: Map<String, Value>) -> Result<Self, String> {
        let mut values = defaults.clone();

        if restore_interrupted_write(&path)? {
            tracing::warn!(
                path = %path.display(),
                "settings file restored from backup left by an interrupted write"
            );
        }

        let Some(content) = read_optional_file(&path)? else {
            let store = Self {
                path,
                defaults,
                values,
            };
            // Best-effort: create settings.json on first run to make it discoverable/editable.
            if let Err(err) = store.flush() {
                tracing::warn!("failed to create default settings file: {}", err);
            }
            return Ok(store);
        };

        for (key, value) in parse_settings_json(&content)? {
            if let Some(default) = defaults.get(&key) {
                if !same_kind(default, &value) {
                    tracing::warn!(
                        key = %key,
                        expected = kind_name(default),
                        found = kind_name(&value),
                        "ignoring settings value with mismatched type"
                    );
                    continue;
                }
            }
            values.insert(key, value);
        }

        Ok(Self {
            path,
            defaults,
            values,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current value, or the declared default when never set.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key).or_else(|| self.defaults.get(key))
    }

    pub fn get_bool(&self, key: &str) -> bool {
        self.get(key).and_then(Value::as_bool).unwrap_or(false)
    }

    pub fn set(&mut self, key: &str, value: Value) -> Result<(), String> {
        if let Some(default) = self.defaults.get(key) {
            if !same_kind(default, &value) {
                return Err(format!(
                    "{key} must be a {}, got {}",
                    kind_name(default),
                    kind_name(&value)
                ));
            }
        }

        let previous = self.values.insert(key.to_string(), value);
        if let Err(err) = self.flush() {
            // Keep memory and disk in agreement when the write fails.
            match previous {
                Some(previous) => self.values.insert(key.to_string(), previous),
                None => self.values.remove(key),
            };
            return Err(err);
        }

        tracing::debug!(key = %key, "settings value written");
        Ok(())
    }

    pub fn set_bool(&mut self, key: &str, value: bool) -> Result<(), String> {
        self.set(key, Value::Bool(value))
    }

    pub fn flush(&self) -> Result<(), String> {
        let content = serde_json::to_vec_pretty(&self.values)
            .map_err(|e| format!("failed to serialize settings: {e}"))?;
        write_file_atomic(&self.path, &content)
    }
}

#[cfg(test)]
mod tests;
