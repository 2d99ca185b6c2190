//! Note use-case service.
//!
//! # Responsibility
//! - Validate raw note form input.
//! - Drive the note collection store on behalf of the controller layer.
//!
//! # Invariants
//! - `title` and `body` are trimmed before persistence and must be
//!   non-empty afterwards.
//! - A rejected form is echoed back with its raw values untouched.

use crate::model::note::{Note, NotePatch};
use crate::repo::{CollectionStore, RepoError};
use crate::service::required_text;
use crate::store::StoreError;
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Raw note form fields as submitted, before any normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteForm {
    /// Submitted title value, if any.
    pub title: Option<String>,
    /// Submitted body value, if any.
    pub body: Option<String>,
}

/// Service error for note use-cases.
#[derive(Debug)]
pub enum NoteServiceError {
    /// Form failed validation; carries the raw input for redisplay.
    Invalid(NoteForm),
    /// A note with the submitted title already exists.
    DuplicateTitle(String),
    /// Unrecovered storage fault on the write path.
    Storage(StoreError),
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(_) => write!(f, "note form failed validation"),
            Self::DuplicateTitle(title) => write!(f, "note title `{title}` already exists"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for NoteServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError<String>> for NoteServiceError {
    fn from(value: RepoError<String>) -> Self {
        match value {
            RepoError::DuplicateKey(title) => Self::DuplicateTitle(title),
            RepoError::Storage(err) => Self::Storage(err),
        }
    }
}

/// Note service facade over a collection store.
pub struct NoteService<S: CollectionStore<Note>> {
    store: S,
}

impl<S: CollectionStore<Note>> NoteService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Lists all notes in on-disk order.
    pub fn list_notes(&self) -> Vec<Note> {
        self.store.list()
    }

    /// Gets one note by exact, case-sensitive title.
    pub fn get_note(&self, title: &str) -> Option<Note> {
        self.store.get_by_key(&title.to_string())
    }

    /// Validates a submitted form and creates a note.
    ///
    /// # Errors
    /// - `Invalid` when a field is absent or empty after trimming.
    /// - `DuplicateTitle` when the trimmed title is already in use.
    /// - `Storage` when the write fails.
    pub fn create_note(&self, form: NoteForm) -> Result<Note, NoteServiceError> {
        let Some(fields) = validate_form(&form) else {
            warn!("event=note_validate module=service status=rejected op=create");
            return Err(NoteServiceError::Invalid(form));
        };

        Ok(self.store.add(Note::new(fields.title, fields.body))?)
    }

    /// Validates a submitted body and updates the note in place.
    ///
    /// The title is the immutable key and is taken from the call, not
    /// the form. Returns `Ok(None)` when no note has the given title.
    ///
    /// # Errors
    /// - `Invalid` when the body is absent or empty after trimming.
    /// - `Storage` when the write fails.
    pub fn update_note(
        &self,
        title: &str,
        form: NoteForm,
    ) -> Result<Option<Note>, NoteServiceError> {
        let Some(body) = required_text(form.body.as_deref()) else {
            warn!("event=note_validate module=service status=rejected op=update");
            return Err(NoteServiceError::Invalid(form));
        };

        let key = title.to_string();
        Ok(self.store.update(&key, NotePatch { body })?)
    }

    /// Deletes one note by exact title; `false` when no note matched.
    ///
    /// # Errors
    /// - `Storage` when the write fails.
    pub fn delete_note(&self, title: &str) -> Result<bool, NoteServiceError> {
        let key = title.to_string();
        Ok(self.store.delete(&key)?)
    }
}

/// Normalized, typed note fields produced by validation.
struct ValidNoteFields {
    title: String,
    body: String,
}

fn validate_form(form: &NoteForm) -> Option<ValidNoteFields> {
    let title = required_text(form.title.as_deref())?;
    let body = required_text(form.body.as_deref())?;
    Some(ValidNoteFields { title, body })
}

#[cfg(test)]
mod tests {
    use super::{validate_form, NoteForm};

    #[test]
    fn validate_form_trims_both_fields() {
        let form = NoteForm {
            title: Some("  Shopping  ".to_string()),
            body: Some(" milk ".to_string()),
        };
        let fields = validate_form(&form).expect("form should validate");
        assert_eq!(fields.title, "Shopping");
        assert_eq!(fields.body, "milk");
    }

    #[test]
    fn validate_form_rejects_missing_or_blank_fields() {
        assert!(validate_form(&NoteForm::default()).is_none());
        assert!(validate_form(&NoteForm {
            title: Some("Shopping".to_string()),
            body: Some("   ".to_string()),
        })
        .is_none());
        assert!(validate_form(&NoteForm {
            title: None,
            body: Some("milk".to_string()),
        })
        .is_none());
    }
}
