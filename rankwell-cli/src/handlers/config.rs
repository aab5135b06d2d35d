//! Configuration command handler

use crate::context::RankwellCliContext;
use rankwell::RankwellError;

pub fn handle_config_command(ctx: &RankwellCliContext) -> rankwell::Result<()> {
    let rendered = serde_json::to_string_pretty(&ctx.config)
        .map_err(|e| RankwellError::Other(format!("Failed to render configuration: {}", e)))?;
    println!("{}", rendered);
    Ok(())
}
