use crate::graphql::build_schema;
use anyhow::Result;

use super::CommandContext;

pub fn handle_schema(ctx: CommandContext) -> Result<()> {
    let schema = build_schema(ctx.catalog);
    print!("{}", schema.sdl());
    Ok(())
}
