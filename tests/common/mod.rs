use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, Response, header::CONTENT_TYPE};
use http_body_util::BodyExt;
use page_comments_api::config::Config;
use page_comments_api::db::DBClient;
use page_comments_api::router::create_router;
use page_comments_api::AppState;
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

/// Build the full router over a fresh in-memory database.
///
/// The pool holds a single connection that never expires, since each SQLite
/// in-memory connection is its own database.
pub async fn build_test_app() -> (Router, DBClient) {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite pool");
    let db_client = DBClient::new(pool);
    db_client.migrate().await.expect("migrations apply");
    let state = AppState {
        env: Config::default(),
        db_client: db_client.clone(),
    };
    (create_router(Arc::new(state)), db_client)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header(CONTENT_TYPE, "application/json");
    }
    let request = builder
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: &Router, uri: &str, body: &str) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).expect("response body is JSON")
}

pub fn is_json(response: &Response<Body>) -> bool {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"))
}
