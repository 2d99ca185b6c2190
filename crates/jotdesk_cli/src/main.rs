//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `jotdesk_core` wiring.
//! - Report per-collection record counts for a local storage directory.

use jotdesk_core::{Calculator, CollectionStore, JsonFileCollection, Note, StorageDir};
use std::env;

fn main() {
    let root = env::args().nth(1).unwrap_or_else(|| "data".to_string());
    let layout = StorageDir::new(&root);

    let notes: JsonFileCollection<Note> = JsonFileCollection::new(layout.notes_file());
    let calculators: JsonFileCollection<Calculator> =
        JsonFileCollection::new(layout.calculators_file());

    println!("jotdesk_core version={}", jotdesk_core::core_version());
    println!("storage root={}", layout.root().display());
    println!("notes={}", notes.list().len());
    println!("calculators={}", calculators.list().len());
}
