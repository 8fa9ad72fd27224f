use crate::graphql::build_schema;
use anyhow::Result;

use super::CommandContext;
use super::utils::{execute_and_print, parse_variables};

pub fn handle_query(ctx: CommandContext, query: String, variables: Option<String>) -> Result<()> {
    let schema = build_schema(ctx.catalog);
    let vars = parse_variables(variables)?;
    let request = async_graphql::Request::new(query).variables(vars);
    execute_and_print(&schema, request)
}
