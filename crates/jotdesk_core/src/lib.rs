//! Core domain logic for jotdesk.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod session;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::calculator::{BatteryType, Calculator, CalculatorPatch};
pub use model::note::{Note, NotePatch};
pub use repo::{CollectionStore, JsonFileCollection, KeyedRecord, RepoError, RepoResult};
pub use service::calculator_service::{CalculatorForm, CalculatorService, CalculatorServiceError};
pub use service::note_service::{NoteForm, NoteService, NoteServiceError};
pub use session::{CredentialSource, Session, StaticCredentials};
pub use store::{StorageDir, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
