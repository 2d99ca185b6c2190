//! Collection file bootstrap and whole-file JSON I/O.
//!
//! # Responsibility
//! - Create the parent directory and an empty-array file on demand.
//! - Read whole collection files permissively and write them loudly.
//!
//! # Invariants
//! - Bootstrap is idempotent and runs before every read and write, so
//!   an externally deleted file self-heals.
//! - Writes replace the entire file with indented JSON.

use super::{StoreError, StoreResult};
use log::{error, info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::time::Instant;

const EMPTY_COLLECTION_JSON: &str = "[]";

/// Guarantees the collection file and its parent directory exist.
///
/// # Errors
/// - Returns `StoreError::Io` when the directory or file cannot be
///   created.
pub fn ensure_collection_file(path: &Path) -> StoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    if !path.exists() {
        fs::write(path, EMPTY_COLLECTION_JSON).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!(
            "event=store_init module=store status=ok file={}",
            path.display()
        );
    }

    Ok(())
}

/// Reads a whole collection file as a JSON array of records.
///
/// Absent, unreadable or malformed storage degrades to an empty
/// collection instead of failing; the degradation is logged and masked.
pub fn read_collection<R: DeserializeOwned>(path: &Path) -> Vec<R> {
    if let Err(err) = ensure_collection_file(path) {
        warn!(
            "event=store_read module=store status=degraded file={} error={err}",
            path.display()
        );
        return Vec::new();
    }

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!(
                "event=store_read module=store status=degraded file={} error={err}",
                path.display()
            );
            return Vec::new();
        }
    };

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Vec::new();
    }

    match serde_json::from_slice(&bytes) {
        Ok(records) => records,
        Err(err) => {
            warn!(
                "event=store_read module=store status=degraded file={} error={err}",
                path.display()
            );
            Vec::new()
        }
    }
}

/// Serializes the full collection and overwrites the file.
///
/// # Errors
/// - Returns `StoreError::Io` when bootstrap or the overwrite fails.
/// - Returns `StoreError::Serialize` when encoding fails.
pub fn write_collection<R: Serialize>(path: &Path, records: &[R]) -> StoreResult<()> {
    let started_at = Instant::now();
    ensure_collection_file(path)?;

    let bytes = serde_json::to_vec_pretty(records).map_err(|source| StoreError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;

    match fs::write(path, &bytes) {
        Ok(()) => {
            info!(
                "event=store_write module=store status=ok file={} records={} duration_ms={}",
                path.display(),
                records.len(),
                started_at.elapsed().as_millis()
            );
            Ok(())
        }
        Err(source) => {
            error!(
                "event=store_write module=store status=error file={} duration_ms={} error={source}",
                path.display(),
                started_at.elapsed().as_millis()
            );
            Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ensure_collection_file, read_collection, write_collection};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn ensure_creates_parent_directory_and_empty_array_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/deep/records.json");

        ensure_collection_file(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");

        // A second run must leave existing content alone.
        fs::write(&path, "[\"kept\"]").unwrap();
        ensure_collection_file(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[\"kept\"]");
    }

    #[test]
    fn read_degrades_to_empty_for_missing_empty_and_corrupt_files() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("records.json");

        let missing: Vec<String> = read_collection(&path);
        assert!(missing.is_empty());

        fs::write(&path, "   \n").unwrap();
        let blank: Vec<String> = read_collection(&path);
        assert!(blank.is_empty());

        fs::write(&path, "{ definitely not json").unwrap();
        let corrupt: Vec<String> = read_collection(&path);
        assert!(corrupt.is_empty());

        fs::write(&path, "{\"an\":\"object\"}").unwrap();
        let non_array: Vec<String> = read_collection(&path);
        assert!(non_array.is_empty());
    }

    #[test]
    fn write_then_read_round_trips_in_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("records.json");

        let records = vec!["b".to_string(), "a".to_string(), "c".to_string()];
        write_collection(&path, &records).unwrap();

        let reloaded: Vec<String> = read_collection(&path);
        assert_eq!(reloaded, records);
    }

    #[test]
    fn write_produces_indented_multi_line_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("records.json");

        write_collection(&path, &["one".to_string(), "two".to_string()]).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains('\n'));
        assert!(raw.starts_with('['));
    }
}
