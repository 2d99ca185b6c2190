//! Domain models for the two managed collections.
//!
//! # Responsibility
//! - Define the persisted record shapes and their mutable-field patches.
//! - Bind each record to the generic collection-store contract.
//!
//! # Invariants
//! - Record key fields (`title`, `oid`) never change after creation.
//! - Serialized field names match the on-disk schema exactly.

pub mod calculator;
pub mod note;
