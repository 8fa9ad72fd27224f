use anyhow::{Context, Result};
use clap::Parser;

use bookshelf::cli::handlers::{
    CommandContext, handle_mutate, handle_query, handle_schema, handle_serve,
};
use bookshelf::cli::{Cli, Commands};
use bookshelf::config::BookshelfConfig;
use bookshelf::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.clone());

    let cwd = std::env::current_dir()?;
    let (config, root) = BookshelfConfig::load(cli.config.as_deref(), &cwd)
        .context("Failed to load bookshelf configuration")?;
    let ctx = CommandContext::new(config, &root)?;

    match cli.command {
        Commands::Serve { host, port } => handle_serve(ctx, host, port),
        Commands::Query { query, variables } => handle_query(ctx, query, variables),
        Commands::Mutate {
            mutation,
            variables,
        } => handle_mutate(ctx, mutation, variables),
        Commands::Schema => handle_schema(ctx),
    }
}
