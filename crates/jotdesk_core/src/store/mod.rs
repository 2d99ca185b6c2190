//! JSON file storage bootstrap and whole-file primitives.
//!
//! # Responsibility
//! - Guarantee collection files exist before any access (lazy,
//!   idempotent bootstrap).
//! - Read and write whole JSON-array collection files.
//! - Resolve the per-resource file layout under one storage root.
//!
//! # Invariants
//! - Read paths never fail: absent or malformed storage degrades to an
//!   empty collection.
//! - Write paths never mask failures: every I/O or serialization error
//!   propagates to the caller.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod file;
mod layout;

pub use file::{ensure_collection_file, read_collection, write_collection};
pub use layout::StorageDir;

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage-layer fault raised on the write path.
#[derive(Debug)]
pub enum StoreError {
    /// Filesystem operation failed for the given path.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Collection could not be serialized to JSON.
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "storage i/o failure at `{}`: {source}", path.display())
            }
            Self::Serialize { path, source } => {
                write!(
                    f,
                    "failed to serialize collection for `{}`: {source}",
                    path.display()
                )
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Serialize { source, .. } => Some(source),
        }
    }
}
