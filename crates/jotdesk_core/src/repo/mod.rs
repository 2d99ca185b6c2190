//! Collection-store contracts over per-resource JSON files.
//!
//! # Responsibility
//! - Define the keyed-record binding and the store contract shared by
//!   all resource collections.
//! - Keep file-format details inside the JSON implementation.
//!
//! # Invariants
//! - The key field is unique across a collection at all times
//!   observable between operations.
//! - Absence ("not found") is an `Option`/`bool` value, never an error.

use crate::store::StoreError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

mod json_file;

pub use json_file::JsonFileCollection;

pub type RepoResult<T, K> = Result<T, RepoError<K>>;

/// Distinguished failures of collection-store operations.
#[derive(Debug)]
pub enum RepoError<K> {
    /// An `add` collided with an existing record key.
    DuplicateKey(K),
    /// The write path hit an unrecovered storage fault.
    Storage(StoreError),
}

impl<K: Display> Display for RepoError<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateKey(key) => write!(f, "record key `{key}` already exists"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl<K: Debug + Display> Error for RepoError<K> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::DuplicateKey(_) => None,
            Self::Storage(err) => Some(err),
        }
    }
}

impl<K> From<StoreError> for RepoError<K> {
    fn from(value: StoreError) -> Self {
        Self::Storage(value)
    }
}

/// Binding between a persisted record and its collection key and patch.
pub trait KeyedRecord: Clone + Serialize + DeserializeOwned {
    /// Unique key field type.
    type Key: Clone + PartialEq + Display;
    /// Mutable-field subset applied by `update`.
    type Patch;

    /// Returns the record's key field.
    fn key(&self) -> &Self::Key;

    /// Overwrites the mutable fields, leaving the key untouched.
    fn apply(&mut self, patch: Self::Patch);
}

/// Store contract shared by every resource collection.
///
/// Implementations re-read backing storage on every call; callers never
/// observe a stale in-memory view, even through multiple store
/// instances over the same path within one process.
pub trait CollectionStore<R: KeyedRecord> {
    /// Returns all records in on-disk order.
    fn list(&self) -> Vec<R>;

    /// Returns the first record with the given key, if any.
    fn get_by_key(&self, key: &R::Key) -> Option<R>;

    /// Appends a new record; rejects an existing key without writing.
    fn add(&self, record: R) -> RepoResult<R, R::Key>;

    /// Patches the record's mutable fields; `None` when the key is
    /// absent, in which case nothing is written.
    fn update(&self, key: &R::Key, patch: R::Patch) -> RepoResult<Option<R>, R::Key>;

    /// Removes the record; `false` when the key is absent, in which
    /// case nothing is written.
    fn delete(&self, key: &R::Key) -> RepoResult<bool, R::Key>;
}
