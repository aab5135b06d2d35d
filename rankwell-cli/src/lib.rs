pub mod args;
pub mod commands;
pub mod context;
pub mod handlers;
pub mod output;
pub mod request;

pub use context::RankwellCliContext;
pub use output::{
    CliColors, HitSummary, error_code, format_error, format_info, format_warning,
    output_error_json, print_breakdowns, print_hits, truncate_title,
};
pub use request::{build_request, parse_taxonomy_weight};
