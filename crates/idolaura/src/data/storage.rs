//! JSON file persistence
//!
//! Shared file I/O for the local snapshot and the admin session.

use crate::config::app::NAME;
use crate::error::{Result, SiteError};
use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Get the application config directory path
pub fn config_dir() -> Result<PathBuf> {
    dirs::config_dir().map(|p| p.join(NAME)).ok_or_else(|| {
        SiteError::Storage(
            "could not determine config directory; HOME may not be set".to_string(),
        )
    })
}

/// Get the path of a data file in the config directory
pub fn data_path(filename: &str) -> Result<PathBuf> {
    Ok(config_dir()?.join(filename))
}

fn storage_err(action: &str, path: &Path, e: &std::io::Error) -> SiteError {
    let detail = match e.kind() {
        ErrorKind::PermissionDenied => "permission denied".to_string(),
        ErrorKind::NotFound => "path does not exist".to_string(),
        ErrorKind::ReadOnlyFilesystem => "filesystem is read-only".to_string(),
        _ => e.to_string(),
    };
    SiteError::Storage(format!("failed to {action} {path:?}: {detail}"))
}

/// Load a value from a JSON file at a specific path
///
/// Returns `None` if the file doesn't exist or is empty. A file that
/// exists but can't be read or parsed is an error.
pub fn load_from<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(storage_err("read", path, &e)),
    };

    if content.trim().is_empty() {
        return Ok(None);
    }

    let value = serde_json::from_str(&content)
        .map_err(|e| SiteError::Storage(format!("failed to parse {path:?}: {e}")))?;
    Ok(Some(value))
}

/// Save a value as pretty-printed JSON at a specific path
///
/// Creates parent directories if they don't exist.
pub fn save_to<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| storage_err("create directory", parent, &e))?;
        }
    }

    let content = serde_json::to_string_pretty(value)?;
    fs::write(path, content).map_err(|e| storage_err("write", path, &e))
}

/// Delete a file at a specific path; missing files are fine
pub fn delete_at(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(storage_err("delete", path, &e)),
    }
}

/// Load a value from a JSON file in the config directory
pub fn load<T: DeserializeOwned>(filename: &str) -> Result<Option<T>> {
    load_from(&data_path(filename)?)
}

/// Save a value to a JSON file in the config directory
pub fn save<T: Serialize>(filename: &str, value: &T) -> Result<()> {
    save_to(&data_path(filename)?, value)
}

/// Delete a data file from the config directory
pub fn delete(filename: &str) -> Result<()> {
    delete_at(&data_path(filename)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use std::env::temp_dir;
    use std::sync::atomic::{AtomicU32, Ordering};

    static TEST_COUNTER: AtomicU32 = AtomicU32::new(0);

    fn temp_path(name: &str) -> PathBuf {
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        temp_dir().join(format!("idolaura_storage_test_{}_{}.json", id, name))
    }

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Sample {
        name: String,
        count: u32,
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let path = temp_path("round_trip");
        let value = Sample {
            name: "snapshot".to_string(),
            count: 3,
        };

        save_to(&path, &value).unwrap();
        let loaded: Option<Sample> = load_from(&path).unwrap();
        assert_eq!(loaded, Some(value));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file() {
        let path = temp_path("missing");
        let loaded: Option<Sample> = load_from(&path).unwrap();
        assert_eq!(loaded, None);
    }

    #[test]
    fn test_load_empty_file_is_missing() {
        let path = temp_path("empty");
        fs::write(&path, "  \n ").unwrap();

        let loaded: Option<Sample> = load_from(&path).unwrap();
        assert_eq!(loaded, None);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_invalid_json_errors() {
        let path = temp_path("invalid");
        fs::write(&path, "not json at all").unwrap();

        let result: Result<Option<Sample>> = load_from(&path);
        assert!(result.is_err());
        let msg = result.unwrap_err().to_string();
        assert!(msg.contains("parse"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let root = temp_dir().join(format!("idolaura_storage_test_dir_{}", id));
        let path = root.join("nested").join("data.json");

        save_to(&path, &Sample { name: "n".into(), count: 1 }).unwrap();
        assert!(path.exists());

        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn test_delete_missing_is_ok() {
        let path = temp_path("delete_missing");
        delete_at(&path).unwrap();
    }

    #[test]
    fn test_delete_removes_file() {
        let path = temp_path("delete");
        fs::write(&path, "x").unwrap();
        delete_at(&path).unwrap();
        assert!(!path.exists());
    }
}
