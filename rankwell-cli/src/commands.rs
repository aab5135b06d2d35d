//! Command enum definitions

use crate::args::*;
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Display version information
    Version,

    /// Search a corpus and print the ordered hits
    #[command(
        alias = "find",
        long_about = r#"
Search a JSON corpus of documents. The store filters by keyword, topics and
metadata values; with the default `relevance` sort the matches are then
scored by keyword occurrences and topic overlap and printed highest first.

Examples:
  rankwell search --corpus policies.json --keyword water --topics 5,9
  rankwell search --corpus policies.json --orderby enacted
"#
    )]
    Search(QueryArgs),

    /// Show how each hit's relevance score is assembled
    Explain(QueryArgs),

    /// Print the effective configuration
    Config,

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}
