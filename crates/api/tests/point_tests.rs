mod common;

use common::*;
use serde_json::json;

const GET_POINT: &str = r#"
    query GetPoint($id: ID!) {
        point(id: $id) {
            id
            mapId
            name
            coordinates { x y }
            description
            category
            otherText
            creatorName
        }
    }
"#;

const POINT_LIST: &str = r#"
    query Points($query: PointListQuery, $size: Int, $page: Int) {
        pointList(query: $query, size: $size, page: $page) { name }
    }
"#;

#[tokio::test]
async fn test_add_point_stores_coordinates() {
    let schema = setup_test_schema();
    let map_id = create_test_map(&schema, "Campus", "ada").await;

    let point_id = create_test_point(&schema, &map_id, "Fountain", [3, 7], Some("ada")).await;

    let data = execute_ok(&schema, GET_POINT, json!({ "id": point_id })).await;
    let point = &data["point"];

    assert_eq!(point["id"], point_id);
    assert_eq!(point["mapId"], map_id);
    assert_eq!(point["name"], "Fountain");
    assert_eq!(point["coordinates"]["x"], 3);
    assert_eq!(point["coordinates"]["y"], 7);
    assert_eq!(point["creatorName"], "ada");
    assert!(point["category"].is_null());
}

#[tokio::test]
async fn test_add_point_with_categories() {
    let schema = setup_test_schema();
    let map_id = create_test_map(&schema, "Campus", "ada").await;

    let data = execute_ok(
        &schema,
        r#"
        mutation AddPoint($mapId: ID!) {
            art: addPoint(mapId: $mapId, name: "Mural", coordinates: [0, 0], category: ART)
            other: addPoint(
                mapId: $mapId
                name: "Truck"
                coordinates: [1, 1]
                category: OTHER
                otherText: "Food truck"
            )
            plaza: addPoint(mapId: $mapId, name: "Plaza", coordinates: [2, 2], category: PUBLICSPACE)
        }
        "#,
        json!({ "mapId": map_id }),
    )
    .await;

    let art = execute_ok(&schema, GET_POINT, json!({ "id": data["art"] })).await;
    assert_eq!(art["point"]["category"], "ART");
    assert!(art["point"]["otherText"].is_null());

    let other = execute_ok(&schema, GET_POINT, json!({ "id": data["other"] })).await;
    assert_eq!(other["point"]["category"], "OTHER");
    assert_eq!(other["point"]["otherText"], "Food truck");

    let plaza = execute_ok(&schema, GET_POINT, json!({ "id": data["plaza"] })).await;
    assert_eq!(plaza["point"]["category"], "PUBLICSPACE");
}

#[tokio::test]
async fn test_add_point_rejects_inconsistent_other_text() {
    let schema = setup_test_schema();
    let map_id = create_test_map(&schema, "Campus", "ada").await;

    let missing_text = execute_err(
        &schema,
        r#"mutation AddPoint($mapId: ID!) { addPoint(mapId: $mapId, name: "X", coordinates: [0, 0], category: OTHER) }"#,
        json!({ "mapId": map_id }),
    )
    .await;
    assert!(missing_text.contains("otherText is required"), "{missing_text}");

    let stray_text = execute_err(
        &schema,
        r#"mutation AddPoint($mapId: ID!) { addPoint(mapId: $mapId, name: "X", coordinates: [0, 0], category: SCHOOL, otherText: "hm") }"#,
        json!({ "mapId": map_id }),
    )
    .await;
    assert!(stray_text.contains("only allowed"), "{stray_text}");
}

#[tokio::test]
async fn test_add_point_requires_existing_map() {
    let schema = setup_test_schema();

    let message = execute_err(
        &schema,
        r#"mutation { addPoint(mapId: "00000000-0000-0000-0000-000000000000", name: "X", coordinates: [0, 0]) }"#,
        json!({}),
    )
    .await;
    assert!(message.starts_with("Map not found"), "{message}");

    let message = execute_err(
        &schema,
        r#"mutation { addPoint(mapId: "nope", name: "X", coordinates: [0, 0]) }"#,
        json!({}),
    )
    .await;
    assert!(message.starts_with("Invalid map ID"), "{message}");
}

#[tokio::test]
async fn test_add_point_rejects_malformed_coordinates() {
    let schema = setup_test_schema();
    let map_id = create_test_map(&schema, "Campus", "ada").await;

    let message = execute_err(
        &schema,
        r#"mutation AddPoint($mapId: ID!) { addPoint(mapId: $mapId, name: "X", coordinates: [1, 2, 3]) }"#,
        json!({ "mapId": map_id }),
    )
    .await;
    assert!(message.contains("exactly 2"), "{message}");
}

#[tokio::test]
async fn test_unknown_point_is_null() {
    let schema = setup_test_schema();

    let data = execute_ok(&schema, GET_POINT, json!({ "id": "nonexistent" })).await;

    assert!(data["point"].is_null());
}

#[tokio::test]
async fn test_point_list_filters_by_map_and_creator() {
    let schema = setup_test_schema();
    let campus = create_test_map(&schema, "Campus", "ada").await;
    let harbor = create_test_map(&schema, "Harbor", "ada").await;
    create_test_point(&schema, &campus, "Library", [0, 0], Some("ada")).await;
    create_test_point(&schema, &campus, "Gym", [5, 5], Some("bob")).await;
    create_test_point(&schema, &harbor, "Pier", [9, 9], Some("bob")).await;

    let by_map = execute_ok(&schema, POINT_LIST, json!({ "query": { "mapId": campus } })).await;
    assert_eq!(names(&by_map["pointList"]), vec!["Library", "Gym"]);

    let and = execute_ok(
        &schema,
        POINT_LIST,
        json!({ "query": { "mapId": campus, "creatorName": "bob" } }),
    )
    .await;
    assert_eq!(names(&and["pointList"]), vec!["Gym"]);

    let or = execute_ok(
        &schema,
        POINT_LIST,
        json!({ "query": { "mapId": harbor, "creatorName": "ada", "operation": "OR" } }),
    )
    .await;
    assert_eq!(names(&or["pointList"]), vec!["Library", "Pier"]);

    let nor = execute_ok(
        &schema,
        POINT_LIST,
        json!({ "query": { "mapId": harbor, "creatorName": "ada", "operation": "NOR" } }),
    )
    .await;
    assert_eq!(names(&nor["pointList"]), vec!["Gym"]);
}

#[tokio::test]
async fn test_point_list_within_radius() {
    let schema = setup_test_schema();
    let map_id = create_test_map(&schema, "Campus", "ada").await;
    create_test_point(&schema, &map_id, "Center", [10, 10], None).await;
    create_test_point(&schema, &map_id, "Edge", [13, 14], None).await;
    create_test_point(&schema, &map_id, "Corner", [15, 15], None).await;

    let near = execute_ok(
        &schema,
        POINT_LIST,
        json!({ "query": { "coordinates": [10, 10], "within": 5 } }),
    )
    .await;
    // Edge is exactly 5 away; Corner is about 7.07 away.
    assert_eq!(names(&near["pointList"]), vec!["Center", "Edge"]);

    let exact = execute_ok(
        &schema,
        POINT_LIST,
        json!({ "query": { "coordinates": [13, 14] } }),
    )
    .await;
    assert_eq!(names(&exact["pointList"]), vec!["Edge"]);
}

#[tokio::test]
async fn test_point_list_within_requires_coordinates() {
    let schema = setup_test_schema();

    let message = execute_err(&schema, POINT_LIST, json!({ "query": { "within": 5 } })).await;

    assert!(message.contains("within requires coordinates"), "{message}");
}

#[tokio::test]
async fn test_point_list_filters_by_category() {
    let schema = setup_test_schema();
    let map_id = create_test_map(&schema, "Campus", "ada").await;
    execute_ok(
        &schema,
        r#"
        mutation AddPoints($mapId: ID!) {
            a: addPoint(mapId: $mapId, name: "Hall", coordinates: [0, 0], category: SCHOOL)
            b: addPoint(mapId: $mapId, name: "Cafe", coordinates: [1, 0], category: BUSINESS)
            c: addPoint(mapId: $mapId, name: "Lab", coordinates: [2, 0], category: SCHOOL)
        }
        "#,
        json!({ "mapId": map_id }),
    )
    .await;

    let data = execute_ok(&schema, POINT_LIST, json!({ "query": { "category": "SCHOOL" } })).await;

    assert_eq!(names(&data["pointList"]), vec!["Hall", "Lab"]);
}

#[tokio::test]
async fn test_point_list_pagination() {
    let schema = setup_test_schema();
    let map_id = create_test_map(&schema, "Campus", "ada").await;
    for i in 0..7 {
        create_test_point(&schema, &map_id, &format!("P{i}"), [i, i], None).await;
    }

    let first = execute_ok(&schema, POINT_LIST, json!({})).await;
    assert_eq!(first["pointList"].as_array().unwrap().len(), 7);

    let third = execute_ok(&schema, POINT_LIST, json!({ "size": 3, "page": 2 })).await;
    assert_eq!(names(&third["pointList"]), vec!["P6"]);
}

#[tokio::test]
async fn test_point_list_random_sample() {
    let schema = setup_test_schema();
    let map_id = create_test_map(&schema, "Campus", "ada").await;
    for i in 0..5 {
        create_test_point(&schema, &map_id, &format!("P{i}"), [i, 0], None).await;
    }

    let data = execute_ok(
        &schema,
        POINT_LIST,
        json!({ "query": { "random": true, "mapId": "not-even-a-uuid" }, "size": 3 }),
    )
    .await;

    let mut sampled = names(&data["pointList"]);
    assert_eq!(sampled.len(), 3);
    sampled.sort();
    sampled.dedup();
    assert_eq!(sampled.len(), 3);
}

#[tokio::test]
async fn test_point_map_field_resolves_owner() {
    let schema = setup_test_schema();
    let map_id = create_test_map(&schema, "Campus", "ada").await;
    let point_id = create_test_point(&schema, &map_id, "Library", [1, 2], None).await;

    let data = execute_ok(
        &schema,
        "query GetPoint($id: ID!) { point(id: $id) { map { id mapName } } }",
        json!({ "id": point_id }),
    )
    .await;

    assert_eq!(data["point"]["map"]["id"], map_id);
    assert_eq!(data["point"]["map"]["mapName"], "Campus");
}
