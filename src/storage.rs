//! Key-value storage for saved games
//!
//! The game only needs to read and overwrite one record per key, so storage is
//! a tiny trait. `MemoryStorage` backs tests and practice games; `FileStorage`
//! keeps one file per key in a state directory.

use rustc_hash::FxHashMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Last-write-wins blob storage
pub trait Storage {
    /// Read the blob stored under `key`, if any
    ///
    /// # Errors
    /// Returns an I/O error if the backing store cannot be read.
    fn read(&self, key: &str) -> io::Result<Option<Vec<u8>>>;

    /// Replace the blob stored under `key`
    ///
    /// Readers never observe a partially written blob.
    ///
    /// # Errors
    /// Returns an I/O error if the backing store cannot be written.
    fn write(&mut self, key: &str, blob: &[u8]) -> io::Result<()>;
}

/// In-process storage
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    records: FxHashMap<String, Vec<u8>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> io::Result<Option<Vec<u8>>> {
        Ok(self.records.get(key).cloned())
    }

    fn write(&mut self, key: &str, blob: &[u8]) -> io::Result<()> {
        self.records.insert(key.to_string(), blob.to_vec());
        Ok(())
    }
}

/// One `<key>.json` file per key under a directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Use `dir` for records; it is created on first write
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> io::Result<Option<Vec<u8>>> {
        match fs::read(self.path_for(key)) {
            Ok(blob) => Ok(Some(blob)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn write(&mut self, key: &str, blob: &[u8]) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;

        // Write beside the target, then rename over it
        let mut temp_file = NamedTempFile::new_in(&self.dir)?;
        temp_file.write_all(blob)?;
        temp_file.as_file().sync_all()?;
        temp_file.persist(self.path_for(key)).map_err(|e| e.error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_read_missing() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.read("game").unwrap(), None);
    }

    #[test]
    fn memory_storage_last_write_wins() {
        let mut storage = MemoryStorage::new();
        storage.write("game", b"first").unwrap();
        storage.write("game", b"second").unwrap();

        assert_eq!(storage.read("game").unwrap(), Some(b"second".to_vec()));
        assert_eq!(storage.read("other").unwrap(), None);
    }

    #[test]
    fn file_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path().join("state"));

        assert_eq!(storage.read("game").unwrap(), None);

        storage.write("game", b"{\"a\":1}").unwrap();
        storage.write("game", b"{\"a\":2}").unwrap();

        assert_eq!(storage.read("game").unwrap(), Some(b"{\"a\":2}".to_vec()));
        assert!(dir.path().join("state").join("game.json").exists());
    }

    #[test]
    fn file_storage_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path());
        storage.write("game", b"data").unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }
}
