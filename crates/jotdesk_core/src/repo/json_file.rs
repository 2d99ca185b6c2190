//! JSON-array file implementation of the collection store.
//!
//! # Responsibility
//! - Perform read-all / mutate / write-all cycles over one JSON file.
//!
//! # Invariants
//! - Every operation re-reads the file; nothing is cached across calls.
//! - Failed and no-op operations leave the file untouched.
//! - No lock guards the gap between the read and the write of one
//!   operation; a second concurrent writer can interleave and lose an
//!   update. Accepted limitation for single-user local use.

use super::{CollectionStore, KeyedRecord, RepoError, RepoResult};
use crate::store::{read_collection, write_collection};
use log::info;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// Collection store over a single JSON-array file.
///
/// The instance owns its backing path and is the sole writer contract
/// for that file within the process.
#[derive(Debug)]
pub struct JsonFileCollection<R> {
    file_path: PathBuf,
    _record: PhantomData<fn() -> R>,
}

impl<R: KeyedRecord> JsonFileCollection<R> {
    /// Creates a store over the given collection file path.
    ///
    /// The file is not touched here; bootstrap runs lazily before every
    /// read and write.
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
            _record: PhantomData,
        }
    }

    /// Returns the backing file path.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

impl<R: KeyedRecord> CollectionStore<R> for JsonFileCollection<R> {
    fn list(&self) -> Vec<R> {
        read_collection(&self.file_path)
    }

    fn get_by_key(&self, key: &R::Key) -> Option<R> {
        self.list().into_iter().find(|record| record.key() == key)
    }

    fn add(&self, record: R) -> RepoResult<R, R::Key> {
        let mut records: Vec<R> = read_collection(&self.file_path);
        if records.iter().any(|existing| existing.key() == record.key()) {
            return Err(RepoError::DuplicateKey(record.key().clone()));
        }

        records.push(record.clone());
        write_collection(&self.file_path, &records)?;
        info!(
            "event=collection_add module=repo status=ok file={} key={}",
            self.file_path.display(),
            record.key()
        );
        Ok(record)
    }

    fn update(&self, key: &R::Key, patch: R::Patch) -> RepoResult<Option<R>, R::Key> {
        let mut records: Vec<R> = read_collection(&self.file_path);
        let Some(position) = records.iter().position(|record| record.key() == key) else {
            return Ok(None);
        };

        records[position].apply(patch);
        let updated = records[position].clone();
        write_collection(&self.file_path, &records)?;
        info!(
            "event=collection_update module=repo status=ok file={} key={key}",
            self.file_path.display()
        );
        Ok(Some(updated))
    }

    fn delete(&self, key: &R::Key) -> RepoResult<bool, R::Key> {
        let records: Vec<R> = read_collection(&self.file_path);
        let before = records.len();
        let remaining: Vec<R> = records
            .into_iter()
            .filter(|record| record.key() != key)
            .collect();

        if remaining.len() == before {
            return Ok(false);
        }

        write_collection(&self.file_path, &remaining)?;
        info!(
            "event=collection_delete module=repo status=ok file={} key={key}",
            self.file_path.display()
        );
        Ok(true)
    }
}
