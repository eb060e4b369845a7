use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use omikuji::{Config, Store};
use tower::ServiceExt;

/// Seeded demo user (id 1) plus a second account for isolation tests.
const DEMO_USER: &str = "1";
const OTHER_USER: &str = "2";

async fn spawn_app() -> Router {
    let store = Store::seeded().await;
    store.users.create("alice", "secret").await;

    let state = omikuji::api::create_app_state(Config::default(), store);
    omikuji::api::router(state).await
}

async fn spawn_empty_app() -> Router {
    let state = omikuji::api::create_app_state(Config::default(), Store::new());
    omikuji::api::router(state).await
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn get_as(uri: &str, user: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("X-User-Id", user)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, user: Option<&str>, body: serde_json::Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json");
    if let Some(user) = user {
        builder = builder.header("X-User-Id", user);
    }
    builder
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn delete_as(uri: &str, user: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .header("X-User-Id", user)
        .body(Body::empty())
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_list_fortunes() {
    let app = spawn_app().await;

    let response = app.oneshot(get("/api/fortunes")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    let fortunes = body.as_array().unwrap();
    assert_eq!(fortunes.len(), 22);
    assert!(fortunes[0]["id"].is_number());
    assert!(fortunes[0]["message"].is_string());
}

#[tokio::test]
async fn test_list_by_category() {
    let app = spawn_app().await;

    let response = app
        .clone()
        .oneshot(get("/api/fortunes/category/love"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    let fortunes = body.as_array().unwrap();
    assert_eq!(fortunes.len(), 5);
    assert!(fortunes.iter().all(|f| f["category"] == "love"));

    let response = app
        .oneshot(get("/api/fortunes/category/unknown"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    assert!(body["message"].as_str().unwrap().contains("unknown"));
}

#[tokio::test]
async fn test_random_fortune_stays_in_category() {
    let app = spawn_app().await;

    let response = app
        .clone()
        .oneshot(get("/api/fortunes/category/love"))
        .await
        .unwrap();
    let love_ids: Vec<i64> = json_body(response)
        .await
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["id"].as_i64().unwrap())
        .collect();

    for _ in 0..20 {
        let response = app
            .clone()
            .oneshot(get("/api/fortunes/random?category=love"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert!(love_ids.contains(&body["id"].as_i64().unwrap()));
    }
}

#[tokio::test]
async fn test_random_fortune_rejects_bad_category() {
    let app = spawn_app().await;

    let response = app
        .oneshot(get("/api/fortunes/random?category=bogus"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_random_fortune_on_empty_catalog_is_404() {
    let app = spawn_empty_app().await;

    let response = app.oneshot(get("/api/fortunes/random")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_fortune_by_id() {
    let app = spawn_app().await;

    let response = app.clone().oneshot(get("/api/fortunes/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["id"], 1);

    let response = app
        .clone()
        .oneshot(get("/api/fortunes/9999"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(get("/api/fortunes/abc")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_fortune_then_fetch_it() {
    let app = spawn_app().await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/fortunes",
            None,
            serde_json::json!({"message": "Test", "category": "general"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = json_body(response).await;
    assert_eq!(created["message"], "Test");
    assert_eq!(created["category"], "general");
    let id = created["id"].as_i64().unwrap();

    let response = app
        .oneshot(get(&format!("/api/fortunes/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, created);
}

#[tokio::test]
async fn test_create_fortune_reports_failing_fields() {
    let app = spawn_app().await;

    let response = app
        .oneshot(post_json(
            "/api/fortunes",
            None,
            serde_json::json!({"category": "bogus"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    let fields: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["message", "category"]);
}

#[tokio::test]
async fn test_saved_fortunes_require_identity() {
    let app = spawn_app().await;

    let response = app
        .clone()
        .oneshot(get("/api/saved-fortunes"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .clone()
        .oneshot(get_as("/api/saved-fortunes", "999"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .oneshot(get_as("/api/saved-fortunes", "not-a-number"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_save_and_list_flow() {
    let app = spawn_app().await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/saved-fortunes",
            Some(DEMO_USER),
            serde_json::json!({"fortuneId": 3}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let saved = json_body(response).await;
    assert_eq!(saved["userId"], 1);
    assert_eq!(saved["fortuneId"], 3);
    assert!(saved["savedAt"].is_string());

    let response = app
        .oneshot(get_as("/api/saved-fortunes", DEMO_USER))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    let entries = body.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["fortune"]["id"], 3);
    assert!(entries[0]["savedAt"].is_string());
}

#[tokio::test]
async fn test_save_rejects_bad_references() {
    let app = spawn_app().await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/saved-fortunes",
            Some(DEMO_USER),
            serde_json::json!({"fortuneId": 9999}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/saved-fortunes",
            Some(DEMO_USER),
            serde_json::json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .oneshot(post_json(
            "/api/saved-fortunes",
            Some(DEMO_USER),
            serde_json::json!({"fortuneId": -1}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_saved_fortune() {
    let app = spawn_app().await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/saved-fortunes",
            Some(DEMO_USER),
            serde_json::json!({"fortuneId": 1}),
        ))
        .await
        .unwrap();
    let id = json_body(response).await["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(delete_as(&format!("/api/saved-fortunes/{id}"), DEMO_USER))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Deleting again is a 404, not an error that disturbs other state.
    let response = app
        .clone()
        .oneshot(delete_as(&format!("/api/saved-fortunes/{id}"), DEMO_USER))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(delete_as("/api/saved-fortunes/abc", DEMO_USER))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_clear_saved_fortunes_is_per_user() {
    let app = spawn_app().await;

    for user in [DEMO_USER, OTHER_USER] {
        let response = app
            .clone()
            .oneshot(post_json(
                "/api/saved-fortunes",
                Some(user),
                serde_json::json!({"fortuneId": 2}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .clone()
        .oneshot(delete_as("/api/saved-fortunes", DEMO_USER))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(get_as("/api/saved-fortunes", DEMO_USER))
        .await
        .unwrap();
    assert!(json_body(response).await.as_array().unwrap().is_empty());

    let response = app
        .oneshot(get_as("/api/saved-fortunes", OTHER_USER))
        .await
        .unwrap();
    assert_eq!(json_body(response).await.as_array().unwrap().len(), 1);
}
