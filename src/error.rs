//! Error types for catalog construction and filter requests
//!
//! I/O and application boundaries use `anyhow`; these enums cover the
//! conditions callers need to tell apart.

use thiserror::Error;

/// The catalog violates a precondition of the core (bad index, bad ordinal).
///
/// These are data errors from the loader. They are reported up front instead of
/// producing wrong groupings later.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(
        "Invalid catalog: task '{task_id}' references context index {index}, but only {available} context(s) exist"
    )]
    ContextOutOfRange {
        task_id: String,
        index: usize,
        available: usize,
    },

    #[error(
        "Invalid catalog: task '{task_id}' references person index {index}, but only {available} person(s) exist"
    )]
    PersonOutOfRange {
        task_id: String,
        index: usize,
        available: usize,
    },

    #[error("Invalid catalog: context '{0}' is listed more than once")]
    DuplicateContext(String),

    #[error("Invalid catalog: person '{0}' is listed more than once")]
    DuplicatePerson(String),

    #[error("Invalid catalog: priority ordinal {0} is out of range (0-3)")]
    PriorityOutOfRange(u8),

    #[error("Invalid catalog: effort ordinal {0} is out of range (0-4)")]
    EffortOutOfRange(u8),
}

/// A filter request named something the catalog doesn't know.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("Context '{name}' does not exist.\nAvailable contexts: {available}")]
    UnknownContext { name: String, available: String },

    #[error("Person '{name}' does not exist.\nAvailable people: {available}")]
    UnknownPerson { name: String, available: String },
}
