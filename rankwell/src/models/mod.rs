//! Domain models for documents and taxonomy terms

pub mod document;
pub mod term;

pub use document::{Document, DocumentBuilder};
pub use term::{Term, TermField};
