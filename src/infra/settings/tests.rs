use super::*;
use crate::shared::fs::test_support::unique_tmp_dir;

fn open_in(dir: &Path) -> SettingsStore {
    SettingsStore::load(dir.join("settings.json"), default_schema()).expect("load settings")
}

#[test]
fn defaults_are_returned_before_any_set() {
    let dir = unique_tmp_dir("settings");
    let store = open_in(&dir);

    assert_eq!(store.get(LAUNCH_AT_LOGIN), Some(&Value::Bool(false)));
    assert!(!store.get_bool(LAUNCH_AT_LOGIN));
    assert_eq!(store.get("unknown"), None);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn first_load_creates_default_file() {
    let dir = unique_tmp_dir("settings");
    let store = open_in(&dir);

    let on_disk: Value =
        serde_json::from_slice(&std::fs::read(store.path()).expect("read")).expect("json");
    assert_eq!(on_disk, serde_json::json!({ "launchAtLogin": false }));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn set_then_get_returns_written_value() {
    let dir = unique_tmp_dir("settings");
    let mut store = open_in(&dir);

    store.set_bool(LAUNCH_AT_LOGIN, true).expect("set");
    assert!(store.get_bool(LAUNCH_AT_LOGIN));

    store.set_bool(LAUNCH_AT_LOGIN, false).expect("set");
    assert!(!store.get_bool(LAUNCH_AT_LOGIN));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn set_is_written_through_to_disk() {
    let dir = unique_tmp_dir("settings");
    let mut store = open_in(&dir);
    store.set_bool(LAUNCH_AT_LOGIN, true).expect("set");
    drop(store);

    let reopened = open_in(&dir);
    assert!(reopened.get_bool(LAUNCH_AT_LOGIN));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn set_rejects_value_with_wrong_type() {
    let dir = unique_tmp_dir("settings");
    let mut store = open_in(&dir);

    let err = store
        .set(LAUNCH_AT_LOGIN, Value::String("yes".to_string()))
        .expect_err("type mismatch");
    assert!(err.contains("boolean"), "{err}");
    assert!(!store.get_bool(LAUNCH_AT_LOGIN));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn keys_without_default_accept_any_type() {
    let dir = unique_tmp_dir("settings");
    let mut store = open_in(&dir);

    store
        .set("windowTheme", Value::String("dark".to_string()))
        .expect("set");
    assert_eq!(
        store.get("windowTheme"),
        Some(&Value::String("dark".to_string()))
    );
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn mismatched_file_value_falls_back_to_default() {
    let dir = unique_tmp_dir("settings");
    std::fs::write(
        dir.join("settings.json"),
        r#"{ "launchAtLogin": "true", "extra": 3 }"#,
    )
    .expect("write");

    let store = open_in(&dir);
    assert_eq!(store.get(LAUNCH_AT_LOGIN), Some(&Value::Bool(false)));
    assert_eq!(store.get("extra"), Some(&serde_json::json!(3)));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn corrupt_or_non_object_file_is_an_error() {
    let dir = unique_tmp_dir("settings");
    let path = dir.join("settings.json");

    std::fs::write(&path, "{ not json").expect("write");
    let err = SettingsStore::load(path.clone(), default_schema()).expect_err("corrupt");
    assert!(err.contains("failed to parse settings.json"), "{err}");

    std::fs::write(&path, "[true]").expect("write");
    let err = SettingsStore::load(path, default_schema()).expect_err("array");
    assert!(err.contains("expected an object"), "{err}");
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn backup_left_by_interrupted_write_is_recovered_on_load() {
    let dir = unique_tmp_dir("settings");
    std::fs::write(
        dir.join("settings.json.bak"),
        br#"{ "launchAtLogin": true }"#,
    )
    .expect("write bak");

    let store = open_in(&dir);
    assert!(store.get_bool(LAUNCH_AT_LOGIN));
    assert!(!dir.join("settings.json.bak").exists());

    let on_disk: Value =
        serde_json::from_slice(&std::fs::read(store.path()).expect("read")).expect("json");
    assert_eq!(on_disk, serde_json::json!({ "launchAtLogin": true }));
    let _ = std::fs::remove_dir_all(&dir);
}
