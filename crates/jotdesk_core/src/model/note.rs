//! Note domain model.
//!
//! # Responsibility
//! - Define the persisted note record and its mutable-field patch.
//! - Bind notes to the generic collection-store contract.
//!
//! # Invariants
//! - `title` is the unique, case-sensitive collection key and is
//!   immutable after creation.
//! - Persisted field names are exactly `title` and `body`.

use crate::repo::KeyedRecord;
use serde::{Deserialize, Serialize};

/// Persisted note record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique, case-sensitive collection key.
    pub title: String,
    /// Free-form note text.
    pub body: String,
}

/// Mutable-field subset applied by note updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotePatch {
    /// Replacement note text.
    pub body: String,
}

impl Note {
    /// Creates a note from already-validated fields.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

impl KeyedRecord for Note {
    type Key = String;
    type Patch = NotePatch;

    fn key(&self) -> &Self::Key {
        &self.title
    }

    fn apply(&mut self, patch: Self::Patch) {
        self.body = patch.body;
    }
}
