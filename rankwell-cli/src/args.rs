//! Command argument structures

use clap::Args;
use std::path::PathBuf;

/// Arguments shared by `search` and `explain`
#[derive(Args, Debug, Clone, Default)]
pub struct QueryArgs {
    /// JSON file holding the document corpus
    #[arg(long, short = 'c')]
    pub corpus: PathBuf,

    /// Free-text keyword
    #[arg(long, short)]
    pub keyword: Option<String>,

    /// Comma-separated topic term identifiers (e.g. 5,9)
    #[arg(long, short)]
    pub topics: Option<String>,

    /// Comma-separated metadata values to filter on (e.g. law,regulation)
    #[arg(long = "types")]
    pub types: Option<String>,

    /// Sort token (relevance, title, pubdate, or a configured field sort)
    #[arg(long)]
    pub orderby: Option<String>,

    /// Override the title keyword weight
    #[arg(long)]
    pub title_weight: Option<f32>,

    /// Override the body keyword weight
    #[arg(long)]
    pub content_weight: Option<f32>,

    /// Override a taxonomy weight, as dimension=weight (repeatable)
    #[arg(long = "taxonomy-weight", value_name = "DIMENSION=WEIGHT")]
    pub taxonomy_weights: Vec<String>,

    /// Maximum number of hits to print
    #[arg(short, long)]
    pub limit: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[clap(name = "powershell")]
    Power,
    Elvish,
}

impl From<Shell> for clap_complete::Shell {
    fn from(shell: Shell) -> Self {
        match shell {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::Power => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}
