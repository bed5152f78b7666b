use std::sync::Arc;

use api::gql::{build_schema, AppSchema};
use api::{AppConfig, AppState, StorageBackend};
use async_graphql::{Request, Variables};
use infra::MemoryStore;
use serde_json::{json, Value};

pub fn setup_test_state() -> AppState {
    let config = AppConfig {
        storage: StorageBackend::Memory,
        ..AppConfig::default()
    };
    AppState::new(Arc::new(MemoryStore::new()), config)
}

pub fn setup_test_schema() -> AppSchema {
    build_schema(setup_test_state())
}

/// Helper function to execute GraphQL queries and mutations
pub async fn execute_graphql(
    schema: &AppSchema,
    query: &str,
    variables: Option<Variables>,
) -> async_graphql::Response {
    let mut request = Request::new(query);

    if let Some(vars) = variables {
        request = request.variables(vars);
    }

    schema.execute(request).await
}

/// Execute and return `data` as JSON, panicking on GraphQL errors.
pub async fn execute_ok(schema: &AppSchema, query: &str, variables: Value) -> Value {
    let response = execute_graphql(schema, query, Some(Variables::from_json(variables))).await;
    assert!(
        response.errors.is_empty(),
        "GraphQL errors: {:?}",
        response.errors
    );
    response.data.into_json().unwrap()
}

/// Execute and return the first error message, panicking on success.
#[allow(dead_code)]
pub async fn execute_err(schema: &AppSchema, query: &str, variables: Value) -> String {
    let response = execute_graphql(schema, query, Some(Variables::from_json(variables))).await;
    assert!(
        !response.errors.is_empty(),
        "expected GraphQL errors, got data: {:?}",
        response.data
    );
    response.errors[0].message.clone()
}

/// Create a map and return its ID
#[allow(dead_code)]
pub async fn create_test_map(schema: &AppSchema, map_name: &str, creator_name: &str) -> String {
    let data = execute_ok(
        schema,
        r#"
        mutation AddMap($mapName: String, $creatorName: String) {
            addMap(mapName: $mapName, creatorName: $creatorName)
        }
        "#,
        json!({ "mapName": map_name, "creatorName": creator_name }),
    )
    .await;

    data["addMap"].as_str().unwrap().to_string()
}

/// Create a point and return its ID
#[allow(dead_code)]
pub async fn create_test_point(
    schema: &AppSchema,
    map_id: &str,
    name: &str,
    coordinates: [i32; 2],
    creator_name: Option<&str>,
) -> String {
    let data = execute_ok(
        schema,
        r#"
        mutation AddPoint($mapId: ID!, $name: String!, $coordinates: [Int!]!, $creatorName: String) {
            addPoint(mapId: $mapId, name: $name, coordinates: $coordinates, creatorName: $creatorName)
        }
        "#,
        json!({
            "mapId": map_id,
            "name": name,
            "coordinates": coordinates,
            "creatorName": creator_name,
        }),
    )
    .await;

    data["addPoint"].as_str().unwrap().to_string()
}

/// Collect the `name` field of every item in a list.
#[allow(dead_code)]
pub fn names(items: &Value) -> Vec<String> {
    items
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap().to_string())
        .collect()
}
