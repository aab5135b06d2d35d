//! Search command handlers

use crate::args::QueryArgs;
use crate::context::RankwellCliContext;
use crate::output::{print_breakdowns, print_hits};
use crate::request::build_request;
use rankwell::core::SearchResults;

async fn run_query(args: &QueryArgs, ctx: &RankwellCliContext) -> rankwell::Result<SearchResults> {
    let request = build_request(args, &ctx.config.scoring)?;
    let service = ctx.service(&args.corpus).await?;
    service.search(&request).await
}

pub async fn handle_search_command(
    args: QueryArgs,
    ctx: &RankwellCliContext,
    output_format: &str,
) -> rankwell::Result<()> {
    let results = run_query(&args, ctx).await?;
    print_hits(&results, args.limit, output_format);
    Ok(())
}

pub async fn handle_explain_command(
    args: QueryArgs,
    ctx: &RankwellCliContext,
    output_format: &str,
) -> rankwell::Result<()> {
    let results = run_query(&args, ctx).await?;
    print_breakdowns(&results, args.limit, output_format);
    Ok(())
}
