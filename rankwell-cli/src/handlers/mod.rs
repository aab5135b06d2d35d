//! Command handlers for the Rankwell CLI

pub mod config;
pub mod search;

pub use config::handle_config_command;
pub use search::{handle_explain_command, handle_search_command};
