//! Drives the farmer REST routes against an in-memory SQLite database

use api_server::{api, setup_app_state};
use application::SoilMate;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use domain::RuleSet;
use infrastructure::DatabaseConfig;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn create_app() -> (Router, SoilMate) {
    let db = infrastructure::connect(&DatabaseConfig::in_memory())
        .await
        .expect("Failed to open in-memory database");
    let app = SoilMate::new(db, RuleSet::default());
    let cors = api::cors_layer("http://localhost:5173").expect("Invalid origin");
    let router = api::create_router(setup_app_state(app.farmers.clone()), cors);
    (router, app)
}

fn farmer_json(email: &str) -> Value {
    json!({
        "name": "Ravi",
        "location": "Pune",
        "crops": "Wheat",
        "phone": "9800000000",
        "email": email
    })
}

async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn test_create_then_list() {
    let (router, _) = create_app().await;

    let (status, created) =
        send(&router, "POST", "/api/farmers", Some(farmer_json("ravi@example.com"))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(created["farmerID"].as_i64().unwrap() > 0);
    assert_eq!(created["email"], "ravi@example.com");

    let (status, list) = send(&router, "GET", "/api/farmers", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0], created);
}

#[tokio::test]
async fn test_duplicate_email_conflicts() {
    let (router, app) = create_app().await;

    send(&router, "POST", "/api/farmers", Some(farmer_json("dup@example.com"))).await;
    let (status, body) =
        send(&router, "POST", "/api/farmers", Some(farmer_json("dup@example.com"))).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].is_string());
    assert_eq!(app.farmers.all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_existing_farmer() {
    let (router, _) = create_app().await;
    let (_, created) =
        send(&router, "POST", "/api/farmers", Some(farmer_json("old@example.com"))).await;
    let id = created["farmerID"].as_i64().unwrap();

    let replacement = json!({
        "farmerID": 999,
        "name": "Ravi Patil",
        "location": "Nagpur",
        "crops": "Cotton",
        "phone": "9811111111",
        "email": "new@example.com"
    });
    let (status, updated) =
        send(&router, "PUT", &format!("/api/farmers/{id}"), Some(replacement)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["farmerID"].as_i64().unwrap(), id);
    assert_eq!(updated["location"], "Nagpur");
    assert_eq!(updated["email"], "new@example.com");
}

#[tokio::test]
async fn test_update_missing_farmer_is_404() {
    let (router, app) = create_app().await;

    let (status, body) =
        send(&router, "PUT", "/api/farmers/77", Some(farmer_json("ghost@example.com"))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Farmer not found: 77");
    assert!(app.farmers.all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let (router, app) = create_app().await;
    let (_, created) =
        send(&router, "POST", "/api/farmers", Some(farmer_json("gone@example.com"))).await;
    let uri = format!("/api/farmers/{}", created["farmerID"]);

    let (first, _) = send(&router, "DELETE", &uri, None).await;
    let (second, _) = send(&router, "DELETE", &uri, None).await;
    let (missing, _) = send(&router, "DELETE", "/api/farmers/4040", None).await;

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::OK);
    assert_eq!(missing, StatusCode::OK);
    assert!(app.farmers.all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_cors_allows_configured_origin() {
    let (router, _) = create_app().await;

    let request = Request::builder()
        .method("GET")
        .uri("/api/farmers")
        .header(header::ORIGIN, "http://localhost:5173")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:5173"
    );
}
