//! Usage: Small filesystem helpers (atomic writes, optional reads).

use std::path::{Path, PathBuf};

pub(crate) fn read_optional_file(path: &Path) -> Result<Option<Vec<u8>>, String> {
    if !path.exists() {
        return Ok(None);
    }
    std::fs::read(path)
        .map(Some)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))
}

fn sibling_path(path: &Path, suffix: &str) -> PathBuf {
    let file_name = path.file_name().and_then(|v| v.to_str()).unwrap_or("file");
    path.with_file_name(format!("{file_name}.{suffix}"))
}

/// Moves `<path>.bak` back into place when `path` is missing.
///
/// `write_file_atomic` holds the previous content only in the backup between its two
/// renames; returns `true` when such a leftover was restored.
pub(crate) fn restore_interrupted_write(path: &Path) -> Result<bool, String> {
    let backup_path = sibling_path(path, "bak");
    if path.exists() || !backup_path.exists() {
        return Ok(false);
    }

    std::fs::rename(&backup_path, path).map_err(|e| {
        format!(
            "failed to restore {} from {}: {e}",
            path.display(),
            backup_path.display()
        )
    })?;
    Ok(true)
}

pub(crate) fn write_file_atomic(path: &Path, bytes: &[u8]) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("failed to create dir {}: {e}", parent.display()))?;
    }

    let tmp_path = sibling_path(path, "tmp");
    let backup_path = sibling_path(path, "bak");

    std::fs::write(&tmp_path, bytes)
        .map_err(|e| format!("failed to write temp file {}: {e}", tmp_path.display()))?;

    if backup_path.exists() {
        let _ = std::fs::remove_file(&backup_path);
    }

    // Windows rename requires target not to exist.
    if path.exists() {
        std::fs::rename(path, &backup_path)
            .map_err(|e| format!("failed to back up {}: {e}", path.display()))?;
    }

    if let Err(e) = std::fs::rename(&tmp_path, path) {
        let _ = std::fs::rename(&backup_path, path);
        return Err(format!("failed to finalize file {}: {e}", path.display()));
    }

    if backup_path.exists() {
        let _ = std::fs::remove_file(&backup_path);
    }

    Ok(())
}


#[cfg(test)]
mod tests {
    use super::test_support::unique_tmp_dir;
    use super::*;

    #[test]
    fn unique_tmp_dir_is_unique_across_calls() {
        let a = unique_tmp_dir("fs");
        let b = unique_tmp_dir("fs");
        assert_ne!(a, b);
        let _ = std::fs::remove_dir_all(&a);
        let _ = std::fs::remove_dir_all(&b);
    }

    #[test]
    fn read_optional_file_missing_is_none() {
        let dir = unique_tmp_dir("fs");
        let path = dir.join("missing.txt");
        let out = read_optional_file(&path).expect("read_optional_file");
        assert!(out.is_none());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn write_file_atomic_creates_parent_and_writes_bytes() {
        let dir = unique_tmp_dir("fs");
        let path = dir.join("a").join("b").join("file.txt");
        write_file_atomic(&path, b"hello").expect("write_file_atomic");
        let got = read_optional_file(&path)
            .expect("read_optional_file")
            .expect("file exists");
        assert_eq!(got, b"hello");
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn write_file_atomic_replaces_and_leaves_no_temp_files() {
        let dir = unique_tmp_dir("fs");
        let path = dir.join("settings.json");
        write_file_atomic(&path, b"v1").expect("write v1");
        write_file_atomic(&path, b"v2").expect("write v2");

        assert_eq!(std::fs::read(&path).expect("read"), b"v2");
        assert!(!dir.join("settings.json.tmp").exists());
        assert!(!dir.join("settings.json.bak").exists());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn restore_interrupted_write_moves_orphaned_backup_into_place() {
        let dir = unique_tmp_dir("fs");
        let path = dir.join("settings.json");
        std::fs::write(dir.join("settings.json.bak"), b"v1").expect("write bak");

        assert_eq!(restore_interrupted_write(&path), Ok(true));
        assert_eq!(std::fs::read(&path).expect("read"), b"v1");
        assert!(!dir.join("settings.json.bak").exists());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn restore_interrupted_write_leaves_existing_file_alone() {
        let dir = unique_tmp_dir("fs");
        let path = dir.join("settings.json");
        std::fs::write(&path, b"v2").expect("write");
        std::fs::write(dir.join("settings.json.bak"), b"v1").expect("write bak");

        assert_eq!(restore_interrupted_write(&path), Ok(false));
        assert_eq!(std::fs::read(&path).expect("read"), b"v2");

        let missing = dir.join("other.json");
        assert_eq!(restore_interrupted_write(&missing), Ok(false));
        let _ = std::fs::remove_dir_all(&dir);
    }
}
