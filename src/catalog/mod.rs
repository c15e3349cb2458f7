//! Task catalog model
//!
//! - `task`: Task record, priority/effort enums, typed context/person ids
//! - `catalog_data`: Read-only catalog with validated references
//! - `serde_impl`: Deserialization from the exporter payload or a document

mod catalog_data;
mod serde_impl;
mod task;

pub use catalog_data::Catalog;
pub use task::{ContextId, Effort, PersonId, Priority, Task, local_date_today};
