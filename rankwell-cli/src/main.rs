use clap::{CommandFactory, Parser};
use is_terminal::IsTerminal;
use rankwell_cli::commands::Commands;
use rankwell_cli::handlers::*;
use rankwell_cli::output::output_error_json;
use rankwell_cli::RankwellCliContext;
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(name = "rankwell-cli")]
#[command(about = "Relevance-ranked document search", long_about = None)]
#[command(version = rankwell::VERSION)]
struct Cli {
    /// Configuration file (toml, yaml or json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format (table, json) - use json for tool integration
    #[arg(long, short, default_value = "table", global = true)]
    output: String,

    /// Verbose output (debug level logging)
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Quiet mode (suppress all logging output)
    #[arg(long, short, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    let cli_args = Cli::parse();

    let output_format = std::env::var("RANKWELL_OUTPUT").unwrap_or_else(|_| cli_args.output.clone());

    if output_format == "json" || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let log_level = if cli_args.quiet || output_format == "json" {
        Level::ERROR
    } else if cli_args.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli_args, &output_format).await {
        output_error_json(&e, &output_format);
        std::process::exit(1);
    }
}

async fn run(cli_args: Cli, output_format: &str) -> rankwell::Result<()> {
    match cli_args.command {
        Commands::Version => {
            println!("Rankwell CLI v{}", rankwell::VERSION);
        }

        Commands::Completions(args) => {
            let mut command = Cli::command();
            let name = command.get_name().to_string();
            clap_complete::generate(
                clap_complete::Shell::from(args.shell),
                &mut command,
                name,
                &mut std::io::stdout(),
            );
        }

        Commands::Config => {
            let ctx = RankwellCliContext::new(cli_args.config.as_deref())?;
            handle_config_command(&ctx)?;
        }

        Commands::Search(args) => {
            let ctx = RankwellCliContext::new(cli_args.config.as_deref())?;
            handle_search_command(args, &ctx, output_format).await?;
        }

        Commands::Explain(args) => {
            let ctx = RankwellCliContext::new(cli_args.config.as_deref())?;
            handle_explain_command(args, &ctx, output_format).await?;
        }
    }

    Ok(())
}
