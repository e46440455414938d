//! Whole-file store accessor
//!
//! The collection lives in a single JSON array file. Loads read the file in
//! full; saves serialize the full collection, write it to a scratch file,
//! fsync, and rename over the live file. A save either replaces the whole
//! file or leaves it untouched.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::errors::{StoreError, StoreResult};

/// Store accessor for a single JSON collection file.
pub struct FileStore {
    /// Path to the collection file
    path: PathBuf,
}

impl FileStore {
    /// Creates an accessor for the collection file at `path`.
    ///
    /// The file itself is not touched; `load_all` fails until the file
    /// exists (see `initialize`).
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the collection file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns whether the collection file exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Creates parent directories and an empty collection file.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Write` if directories or the file cannot be
    /// created.
    pub fn initialize(&self) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::write(&self.path, e))?;
        }
        self.save_all::<serde_json::Value>(&[])
    }

    /// Reads the collection file in full and deserializes it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Read` if the file is missing or unreadable, and
    /// `StoreError::Format` if its content is not a valid JSON array of
    /// records.
    pub fn load_all<T: DeserializeOwned>(&self) -> StoreResult<Vec<T>> {
        let contents =
            fs::read_to_string(&self.path).map_err(|e| StoreError::read(&self.path, e))?;

        serde_json::from_str(&contents).map_err(|e| StoreError::format(&self.path, e))
    }

    /// Serializes the full collection and replaces the collection file.
    ///
    /// The file is pretty-printed with two-space indentation, so the layout
    /// stays stable for clients inspecting it directly.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Write` if the scratch file cannot be written or
    /// renamed over the live file.
    pub fn save_all<T: Serialize>(&self, records: &[T]) -> StoreResult<()> {
        let bytes = serde_json::to_vec_pretty(records)
            .map_err(|e| StoreError::write(&self.path, io::Error::new(io::ErrorKind::InvalidData, e)))?;

        // Write to a scratch file first; the live file is only ever
        // replaced by rename.
        let scratch_path = self.path.with_extension("json.tmp");
        {
            let mut file =
                File::create(&scratch_path).map_err(|e| StoreError::write(&self.path, e))?;
            file.write_all(&bytes)
                .map_err(|e| StoreError::write(&self.path, e))?;
            file.sync_all()
                .map_err(|e| StoreError::write(&self.path, e))?;
        }

        fs::rename(&scratch_path, &self.path).map_err(|e| StoreError::write(&self.path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, FileStore) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = FileStore::open(dir.path().join("books.json"));
        (dir, store)
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let (_dir, store) = temp_store();

        let result = store.load_all::<Value>();
        assert!(matches!(result, Err(StoreError::Read { .. })));
    }

    #[test]
    fn test_load_malformed_file_is_format_error() {
        let (_dir, store) = temp_store();
        fs::write(store.path(), "{ not an array").unwrap();

        let result = store.load_all::<Value>();
        assert!(matches!(result, Err(StoreError::Format { .. })));
    }

    #[test]
    fn test_initialize_creates_empty_collection() {
        let (_dir, store) = temp_store();

        store.initialize().unwrap();

        let records = store.load_all::<Value>().unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_save_replaces_whole_file() {
        let (_dir, store) = temp_store();
        store.save_all(&[json!({"id": "a"}), json!({"id": "b"})]).unwrap();
        store.save_all(&[json!({"id": "c"})]).unwrap();

        let records = store.load_all::<Value>().unwrap();
        assert_eq!(records, vec![json!({"id": "c"})]);
    }

    #[test]
    fn test_save_leaves_no_scratch_file() {
        let (dir, store) = temp_store();
        store.save_all(&[json!({"id": "a"})]).unwrap();

        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["books.json".to_string()]);
    }

    #[test]
    fn test_file_is_pretty_printed() {
        let (_dir, store) = temp_store();
        store.save_all(&[json!({"id": "a"})]).unwrap();

        let contents = fs::read_to_string(store.path()).unwrap();
        assert!(contents.contains("\n  {"));
    }
}
