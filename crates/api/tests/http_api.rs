//! HTTP surface tests, driven through the full middleware stack with
//! `tower::ServiceExt::oneshot`.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, get, send};
use serde_json::json;

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_reports_store_status() {
    let app = common::build_test_app().await;

    let response = get(app.router(), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get("x-request-id").is_some());
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["store_healthy"], true);
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = common::build_test_app().await;

    let response = get(app.router(), "/api/v1/nope").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

#[tokio::test]
async fn me_is_null_for_anonymous_callers() {
    let app = common::build_test_app().await;

    let response = get(app.router(), "/api/v1/me").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"], serde_json::Value::Null);
}

#[tokio::test]
async fn me_returns_user_for_valid_token() {
    let app = common::build_test_app().await;
    let bearer = app.bearer();

    let response = send(app.router(), Method::GET, "/api/v1/me", Some(&bearer), None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["email"], "alice@draw.app");
    assert_eq!(json["data"]["role"], "user");
}

#[tokio::test]
async fn invalid_token_is_treated_as_anonymous() {
    let app = common::build_test_app().await;
    let body = json!({
        "board_id": app.board_id(),
        "layer_id": app.layer_id(),
        "kind": "rectangle",
        "x": 0.0,
        "y": 0.0,
    });

    let response = send(
        app.router(),
        Method::POST,
        "/api/v1/shapes",
        Some("Bearer not-a-jwt"),
        Some(body),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "UNAUTHENTICATED");
}

// ---------------------------------------------------------------------------
// Boards
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_board_returns_201_with_default_layer() {
    let app = common::build_test_app().await;
    let bearer = app.bearer();

    let response = send(
        app.router(),
        Method::POST,
        "/api/v1/boards",
        Some(&bearer),
        Some(json!({ "name": "Wireframes" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Wireframes");
    assert_eq!(json["data"]["layers"][0]["name"], "Layer 1");
}

#[tokio::test]
async fn create_board_without_token_returns_401() {
    let app = common::build_test_app().await;

    let response = send(
        app.router(),
        Method::POST,
        "/api/v1/boards",
        None,
        Some(json!({ "name": "Wireframes" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHENTICATED");
    assert_eq!(json["error"], "createBoard requires an authenticated user");
}

#[tokio::test]
async fn missing_board_returns_404() {
    let app = common::build_test_app().await;

    let response = get(app.router(), "/api/v1/boards/9999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Board with id 9999 not found");
}

// ---------------------------------------------------------------------------
// Shapes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn shape_lifecycle_over_http() {
    let app = common::build_test_app().await;
    let bearer = app.bearer();

    // Create.
    let response = send(
        app.router(),
        Method::POST,
        "/api/v1/shapes",
        Some(&bearer),
        Some(json!({
            "board_id": app.board_id(),
            "layer_id": app.layer_id(),
            "kind": "rect",
            "x": 5.0,
            "y": 6.0,
            "width": 40.0,
            "height": 30.0,
            "props": { "fill": "#00ff00" }
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await["data"].clone();
    assert_eq!(created["kind"], "rectangle");
    assert_eq!(created["rotation"], 0.0);
    assert_eq!(created["z_index"], 0);
    let id = created["id"].as_i64().unwrap();

    // Patch: clear width, merge props.
    let response = send(
        app.router(),
        Method::PATCH,
        &format!("/api/v1/shapes/{id}"),
        Some(&bearer),
        Some(json!({ "width": null, "props": { "stroke": "#000000" } })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await["data"].clone();
    assert_eq!(updated["width"], serde_json::Value::Null);
    assert_eq!(updated["height"], 30.0);
    assert_eq!(updated["props"]["fill"], "#00ff00");
    assert_eq!(updated["props"]["stroke"], "#000000");

    // Board detail lists it.
    let response = get(app.router(), &format!("/api/v1/boards/{}", app.board_id())).await;
    let board = body_json(response).await;
    assert_eq!(board["data"]["shapes"][0]["id"], id);

    // Delete returns the id.
    let response = send(
        app.router(),
        Method::DELETE,
        &format!("/api/v1/shapes/{id}"),
        Some(&bearer),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"], id);

    let response = get(
        app.router(),
        &format!("/api/v1/layers/{}/shapes", app.layer_id()),
    )
    .await;
    assert_eq!(body_json(response).await["data"], json!([]));
}

#[tokio::test]
async fn negative_geometry_returns_400() {
    let app = common::build_test_app().await;
    let bearer = app.bearer();

    let response = send(
        app.router(),
        Method::POST,
        "/api/v1/shapes",
        Some(&bearer),
        Some(json!({
            "board_id": app.board_id(),
            "layer_id": app.layer_id(),
            "kind": "ellipse",
            "x": 0.0,
            "y": 0.0,
            "height": -3.0
        })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn update_missing_shape_returns_404() {
    let app = common::build_test_app().await;
    let bearer = app.bearer();

    let response = send(
        app.router(),
        Method::PATCH,
        "/api/v1/shapes/4242",
        Some(&bearer),
        Some(json!({ "x": 1.0 })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_body_is_rejected_by_the_extractor() {
    let app = common::build_test_app().await;
    let bearer = app.bearer();

    let response = send(
        app.router(),
        Method::POST,
        "/api/v1/shapes",
        Some(&bearer),
        Some(json!({ "kind": "hexagon" })),
    )
    .await;

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn unknown_layer_shapes_returns_404() {
    let app = common::build_test_app().await;

    let response = get(app.router(), "/api/v1/layers/777/shapes").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Comments
// ---------------------------------------------------------------------------

#[tokio::test]
async fn comments_page_through_cursor() {
    let app = common::build_test_app().await;
    let bearer = app.bearer();
    let uri = format!("/api/v1/boards/{}/comments", app.board_id());

    for body in ["one", "two", "three"] {
        let response = send(
            app.router(),
            Method::POST,
            &uri,
            Some(&bearer),
            Some(json!({ "body": body })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get(app.router(), &format!("{uri}?first=2")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let page = body_json(response).await["data"].clone();
    assert_eq!(page["edges"][0]["node"]["body"], "three");
    assert_eq!(page["edges"][1]["node"]["body"], "two");
    assert_eq!(page["edges"][0]["node"]["author"]["email"], "alice@draw.app");
    assert_eq!(page["page_info"]["has_next_page"], true);

    let cursor = page["page_info"]["end_cursor"].as_str().unwrap().to_string();
    let response = get(app.router(), &format!("{uri}?first=2&after={cursor}")).await;
    let page = body_json(response).await["data"].clone();
    assert_eq!(page["edges"].as_array().unwrap().len(), 1);
    assert_eq!(page["edges"][0]["node"]["body"], "one");
    assert_eq!(page["page_info"]["has_next_page"], false);
}

#[tokio::test]
async fn oversized_page_returns_400() {
    let app = common::build_test_app().await;

    let response = get(
        app.router(),
        &format!("/api/v1/boards/{}/comments?first=101", app.board_id()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn blank_comment_returns_400() {
    let app = common::build_test_app().await;
    let bearer = app.bearer();

    let response = send(
        app.router(),
        Method::POST,
        &format!("/api/v1/boards/{}/comments", app.board_id()),
        Some(&bearer),
        Some(json!({ "body": "   " })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
