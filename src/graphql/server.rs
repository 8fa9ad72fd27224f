use async_graphql::{
    http::{GraphiQLSource, parse_query_string},
    parser::{
        parse_query,
        types::{DocumentOperations, OperationType},
    },
};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, Uri, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use super::BookshelfSchema;
use crate::config::ServerSettings;
use crate::error::Result;

pub const GRAPHQL_PATH: &str = "/graphql";

#[derive(Clone)]
struct ServerState {
    schema: BookshelfSchema,
    graphiql: bool,
}

/// The HTTP surface: `GET` and `POST` on [`GRAPHQL_PATH`].
pub fn router(schema: BookshelfSchema, graphiql: bool) -> Router {
    Router::new()
        .route(GRAPHQL_PATH, get(graphql_get).post(graphql_post))
        .layer(TraceLayer::new_for_http())
        .with_state(ServerState { schema, graphiql })
}

/// Binds to the configured address and serves until Ctrl-C.
pub async fn run_server(schema: BookshelfSchema, settings: &ServerSettings) -> Result<()> {
    let addr = settings.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    let app = router(schema, settings.graphiql);

    tracing::info!("Listening on {}", listener.local_addr()?);
    if settings.graphiql {
        tracing::info!("GraphiQL: http://{}{}", addr, GRAPHQL_PATH);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}

async fn graphql_post(State(state): State<ServerState>, req: GraphQLRequest) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

/// Browsers get the explorer; everything else is a query in the URL.
/// Mutations are only accepted over POST.
async fn graphql_get(State(state): State<ServerState>, headers: HeaderMap, uri: Uri) -> Response {
    if state.graphiql && accepts_html(&headers) {
        return Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish()).into_response();
    }

    let query = uri.query().unwrap_or_default();
    if query.is_empty() {
        return (
            StatusCode::METHOD_NOT_ALLOWED,
            Json(serde_json::json!({
                "error": "GET requests need a `query` parameter. Use POST with Content-Type: application/json"
            })),
        )
            .into_response();
    }

    match parse_query_string(query) {
        Ok(request) if selects_mutation(&request) => {
            tracing::debug!("Rejected mutation sent over GET");
            (
                StatusCode::METHOD_NOT_ALLOWED,
                Json(serde_json::json!({
                    "error": "Can only perform a mutation operation from a POST request"
                })),
            )
                .into_response()
        }
        Ok(request) => GraphQLResponse::from(state.schema.execute(request).await).into_response(),
        Err(e) => {
            tracing::debug!("Rejected GET request: {}", e);
            (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

/// Whether the operation `request` would run is a mutation. Unparseable
/// documents fall through so execution reports the syntax error.
fn selects_mutation(request: &async_graphql::Request) -> bool {
    let Ok(document) = parse_query(&request.query) else {
        return false;
    };
    let is_mutation = |ty: OperationType| matches!(ty, OperationType::Mutation);
    match document.operations {
        DocumentOperations::Single(op) => is_mutation(op.node.ty),
        DocumentOperations::Multiple(ops) => match request.operation_name.as_deref() {
            Some(name) => ops
                .iter()
                .any(|(n, op)| n.as_str() == name && is_mutation(op.node.ty)),
            None => ops.values().any(|op| is_mutation(op.node.ty)),
        },
    }
}

fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("text/html"))
        .unwrap_or(false)
}
