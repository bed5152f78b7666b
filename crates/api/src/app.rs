use std::time::Duration;

use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use axum::{
    extract::{Request, State},
    http::{
        header::{HeaderValue, CONTENT_TYPE},
        Method, StatusCode,
    },
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::error::AppError;
use crate::gql::AppSchema;
use crate::state::AppState;

const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Build the Axum router with health endpoint and GraphQL
pub fn build_router(state: AppState, schema: AppSchema) -> Router {
    let config = state.config().clone();

    let mut graphql = post({
        let schema = schema.clone();
        move |req| graphql_handler(req, schema)
    });
    if config.playground_enabled {
        graphql = graphql.get(graphql_playground);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    Router::new()
        // Liveness check; also proves store connectivity.
        .route("/health", get(health))
        .route("/graphql", graphql)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([CONTENT_TYPE]),
        )
}

/// Reads the body with a size cap and rejects malformed JSON before it
/// reaches the executor.
async fn graphql_handler(req: Request, schema: AppSchema) -> Result<Response, AppError> {
    let (_parts, body) = req.into_parts();
    let body_bytes = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to read request body: {}", e)))?;

    let gql_request: async_graphql::Request = serde_json::from_slice(&body_bytes)
        .map_err(|e| AppError::BadRequest(format!("Invalid GraphQL request: {}", e)))?;

    let gql_response = schema.execute(gql_request).await;

    Ok(Json(gql_response).into_response())
}

async fn graphql_playground() -> impl IntoResponse {
    Html(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}

async fn health(State(state): State<AppState>) -> Result<&'static str, AppError> {
    state.store.ping().await?;
    Ok("ok")
}
