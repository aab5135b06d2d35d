//! Core search functionality

pub mod search;

pub use search::{SearchHit, SearchResults, SearchService};
