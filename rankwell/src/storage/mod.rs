//! Storage abstractions and implementations
//!
//! Rankwell never owns documents; it ranks what a [`DocumentStore`] returns.
//!
//! ## Storage Implementations
//!
//! - **InMemoryStore**: A vector-backed store with WordPress-style filter
//!   semantics, used by the CLI and for testing

pub mod errors;
pub mod filters;
pub mod memory;
pub mod traits;

pub use errors::{StorageError, StorageResult};
pub use filters::{DocumentFilter, SortDirection, SortField, SortSpec};
pub use memory::InMemoryStore;
pub use traits::DocumentStore;
