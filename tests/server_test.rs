use axum::{
    body::Body,
    http::{header, HeaderMap, Request, StatusCode, Uri},
    response::AppendHeaders,
    routing::{get, post},
    Json, Router,
};
use paideia::config::{ServerSettings, Settings, UpstreamSettings};
use serde_json::{json, Value};
use std::net::SocketAddr;
use tower::util::ServiceExt; // for oneshot

fn test_settings(upstream_url: &str) -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        upstream: UpstreamSettings {
            url: upstream_url.to_string(),
            timeout_seconds: 5,
        },
    }
}

async fn read_json(response: axum::response::Response) -> Value {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}

/// Stand-in for the platform API: reports what it received so tests can
/// check the proxy forwarded everything intact.
fn stub_platform() -> Router {
    Router::new()
        .route(
            "/api/courses",
            get(|uri: Uri| async move {
                (
                    [("x-platform", "stub")],
                    Json(json!({
                        "success": true,
                        "data": { "path": uri.path(), "query": uri.query() },
                        "error": null
                    })),
                )
            }),
        )
        .route(
            "/api/lessons",
            post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                let authorization = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string);
                (
                    StatusCode::CREATED,
                    Json(json!({
                        "success": true,
                        "data": { "echo": body, "authorization": authorization },
                        "error": null
                    })),
                )
            }),
        )
        .route(
            "/api/session",
            post(|| async {
                (
                    AppendHeaders([
                        (header::SET_COOKIE, "session=abc; Path=/"),
                        (header::SET_COOKIE, "refresh=xyz; Path=/"),
                    ]),
                    Json(json!({ "success": true, "data": {}, "error": null })),
                )
            }),
        )
}

async fn spawn_upstream(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn health_reports_status_and_version() {
    let app = paideia::create_app(&test_settings("http://127.0.0.1:8080")).unwrap();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body["status"], json!("healthy"));
    assert_eq!(body["version"], json!(env!("CARGO_PKG_VERSION")));
    assert_eq!(body["upstream"], json!("http://127.0.0.1:8080"));
    assert!(body["uptime_seconds"].is_u64());
}

#[tokio::test]
async fn liveness_endpoint_responds() {
    let app = paideia::create_app(&test_settings("http://127.0.0.1:8080")).unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health/live")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body["status"], json!("alive"));
}

#[tokio::test]
async fn unknown_paths_fall_back_to_the_ui() {
    let app = paideia::create_app(&test_settings("http://127.0.0.1:8080")).unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/admin/users/42/edit")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert!(content_type.starts_with("text/html"));
}

#[tokio::test]
async fn proxy_forwards_path_and_query_to_the_platform() {
    let addr = spawn_upstream(stub_platform()).await;
    let app = paideia::create_app(&test_settings(&format!("http://{}", addr))).unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/courses?published=true")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("x-platform")
            .and_then(|v| v.to_str().ok()),
        Some("stub")
    );

    let body = read_json(response).await;
    assert_eq!(body["data"]["path"], json!("/api/courses"));
    assert_eq!(body["data"]["query"], json!("published=true"));
}

#[tokio::test]
async fn proxy_relays_bodies_headers_and_status() {
    let addr = spawn_upstream(stub_platform()).await;
    let app = paideia::create_app(&test_settings(&format!("http://{}", addr))).unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/lessons")
                .method("POST")
                .header("Content-Type", "application/json")
                .header("Authorization", "Bearer seed-token")
                .body(Body::from(json!({ "title": "Intro" }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = read_json(response).await;
    assert_eq!(body["data"]["echo"]["title"], json!("Intro"));
    assert_eq!(body["data"]["authorization"], json!("Bearer seed-token"));
}

#[tokio::test]
async fn proxy_keeps_every_value_of_repeated_response_headers() {
    let addr = spawn_upstream(stub_platform()).await;
    let app = paideia::create_app(&test_settings(&format!("http://{}", addr))).unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/session")
                .method("POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let cookies: Vec<_> = response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .collect();
    assert_eq!(cookies, ["session=abc; Path=/", "refresh=xyz; Path=/"]);
}

#[tokio::test]
async fn unreachable_platform_returns_bad_gateway() {
    // Nothing listens on the discard port
    let app = paideia::create_app(&test_settings("http://127.0.0.1:9")).unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/courses")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let body = read_json(response).await;
    assert_eq!(body["success"], json!(false));
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("upstream request failed"));
}
