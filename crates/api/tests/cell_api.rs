//! HTTP-level integration tests for the cell endpoints.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, delete, get, patch_json, post_json, send};
use serde_json::json;

const CELLS: &str = "/api/v2/cells";

fn line_graph() -> serde_json::Value {
    json!({
        "type": "chronograf-v1",
        "queries": [{
            "query": "SELECT mean(\"usage_user\") FROM \"cpu\"",
            "queryConfig": {
                "database": "telegraf",
                "measurement": "cpu",
                "retentionPolicy": "autogen",
                "fields": [],
                "tags": {},
                "groupBy": {"time": "", "tags": []},
                "areTagsAccepted": false,
                "rawText": null,
                "range": null
            },
            "source": ""
        }],
        "axes": {"y": {"bounds": ["0", "100"], "label": "%", "prefix": "", "suffix": "", "base": "10", "scale": "linear"}},
        "visualizationType": "line",
        "colors": [],
        "legend": {},
        "tableOptions": {"verticalTimeAxis": false, "sortBy": {"internalName": "", "displayName": "", "visible": false}, "wrapping": "", "fixFirstColumn": false},
        "fieldOptions": [],
        "timeFormat": "",
        "decimalPlaces": {"isEnforced": false, "digits": 0}
    })
}

async fn create(app: axum::Router, name: &str) -> serde_json::Value {
    let response = post_json(app, CELLS, json!({"name": name, "visualization": line_graph()})).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[tokio::test]
async fn create_assigns_id_and_links() {
    let app = common::build_test_app();
    let cell = create(app, "cpu").await;

    let id = cell["id"].as_str().unwrap();
    assert!(uuid::Uuid::parse_str(id).is_ok());
    assert_eq!(cell["name"], "cpu");
    assert_eq!(cell["visualization"]["type"], "chronograf-v1");
    assert_eq!(cell["visualization"]["visualizationType"], "line");
    assert_eq!(cell["links"]["self"], format!("{CELLS}/{id}"));
}

#[tokio::test]
async fn create_ignores_supplied_id() {
    let app = common::build_test_app();
    let supplied = "00000000-0000-0000-0000-000000000001";
    let response = post_json(
        app,
        CELLS,
        json!({"id": supplied, "name": "cpu", "visualization": line_graph()}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_ne!(body_json(response).await["id"], supplied);
}

#[tokio::test]
async fn get_returns_created_cell() {
    let app = common::build_test_app();
    let created = create(app.clone(), "cpu").await;
    let id = created["id"].as_str().unwrap();

    let response = get(app, &format!("{CELLS}/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);
}

#[tokio::test]
async fn list_filters_by_name() {
    let app = common::build_test_app();
    create(app.clone(), "cpu").await;
    create(app.clone(), "mem").await;

    let all = body_json(get(app.clone(), CELLS).await).await;
    assert_eq!(all["total"], 2);
    assert_eq!(all["links"]["self"], CELLS);

    let filtered = body_json(get(app, &format!("{CELLS}?name=mem")).await).await;
    assert_eq!(filtered["total"], 1);
    assert_eq!(filtered["cells"][0]["name"], "mem");
}

#[tokio::test]
async fn patch_replaces_only_supplied_fields() {
    let app = common::build_test_app();
    let created = create(app.clone(), "cpu").await;
    let uri = format!("{CELLS}/{}", created["id"].as_str().unwrap());

    let response = patch_json(app.clone(), &uri, json!({"name": "cpu usage"})).await;
    assert_eq!(response.status(), StatusCode::OK);
    let renamed = body_json(response).await;
    assert_eq!(renamed["name"], "cpu usage");
    assert_eq!(renamed["visualization"], created["visualization"]);

    let mut table = line_graph();
    table["visualizationType"] = json!("table");
    let response = patch_json(app, &uri, json!({"visualization": table})).await;
    let retyped = body_json(response).await;
    assert_eq!(retyped["name"], "cpu usage");
    assert_eq!(retyped["visualization"]["visualizationType"], "table");
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let app = common::build_test_app();
    let created = create(app.clone(), "cpu").await;
    let uri = format!("{CELLS}/{}", created["id"].as_str().unwrap());

    let response = delete(app.clone(), &uri).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app, &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], 404);
}

#[tokio::test]
async fn unknown_visualization_type_is_bad_request() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        CELLS,
        json!({"name": "cpu", "visualization": {"type": "chronograf-v9"}}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["message"],
        "unknown visualization type chronograf-v9"
    );
}

#[tokio::test]
async fn missing_visualization_is_bad_request() {
    let app = common::build_test_app();
    let response = post_json(app, CELLS, json!({"name": "cpu"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn garbage_body_is_bad_request() {
    let app = common::build_test_app();
    let response = send(app, Method::POST, CELLS, None, Some("not json".to_string())).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn invalid_cell_id_is_bad_request() {
    let app = common::build_test_app();
    let response = get(app, &format!("{CELLS}/not-a-uuid")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
