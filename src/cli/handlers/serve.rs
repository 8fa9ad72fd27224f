use crate::graphql::{GRAPHQL_PATH, build_schema, run_server};
use anyhow::Result;
use colored::Colorize;
use std::net::IpAddr;

use super::CommandContext;

pub fn handle_serve(ctx: CommandContext, host: Option<IpAddr>, port: Option<u16>) -> Result<()> {
    let mut settings = ctx.config.server;
    if let Some(h) = host {
        settings.host = h;
    }
    if let Some(p) = port {
        settings.port = p;
    }

    let schema = build_schema(ctx.catalog);
    let url = format!("http://{}{}", settings.socket_addr(), GRAPHQL_PATH);

    println!("{} GraphQL server on {}", "Starting".green(), url.cyan());
    if settings.graphiql {
        println!("GraphiQL explorer: {}", url);
    }

    tokio::runtime::Runtime::new()?.block_on(run_server(schema, &settings))?;
    Ok(())
}
