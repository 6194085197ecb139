use axum::{
    body::Body,
    http::{header, Method, Request, Response, StatusCode},
    Router,
};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;
use tower_sessions::SessionManagerLayer;

use crate::server::{router::router, state::AppState};

mod review;

/// Builds the full application router on a fresh in-memory database.
///
/// The returned context must be kept alive for the duration of the test.
async fn setup() -> (TestContext, Router) {
    let mut test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let store = test.session_store().await.unwrap();
    let db = test.db.clone().unwrap();

    let app = router()
        .with_state(AppState::new(db))
        .layer(SessionManagerLayer::new(store).with_secure(false));

    (test, app)
}

fn request(method: Method, uri: &str, cookie: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    cookie: Option<&str>,
    body: Option<Value>,
) -> Response<Body> {
    app.clone()
        .oneshot(request(method, uri, cookie, body))
        .await
        .unwrap()
}

async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Logs in as `username` and returns the `Cookie` header value for the session.
async fn login(app: &Router, username: &str) -> String {
    let response = send(
        app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "username": username })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap();

    set_cookie.split(';').next().unwrap().to_string()
}
