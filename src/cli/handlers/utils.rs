use anyhow::{Context, Result};

/// Parse the `--variables` argument, defaulting to no variables.
pub fn parse_variables(variables: Option<String>) -> Result<async_graphql::Variables> {
    match variables {
        Some(v) => serde_json::from_str(&v).context("Invalid --variables JSON"),
        None => Ok(async_graphql::Variables::default()),
    }
}

/// Run `request` on a throwaway runtime and print the response as JSON.
pub fn execute_and_print(
    schema: &crate::graphql::BookshelfSchema,
    request: async_graphql::Request,
) -> Result<()> {
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));
    if response.is_err() {
        tracing::debug!(errors = response.errors.len(), "GraphQL request returned errors");
    }
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
