use super::*;
use axum::{
    extract::Path,
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde_json::json;
use shared::{
    domain::{Color, ColorId},
    protocol::{RequestId, STATUS_CREATED, STATUS_ERROR, STATUS_OK},
};
use tokio::net::TcpListener;

async fn spawn_colors_server() -> String {
    let app = Router::new()
        .route(
            "/colors",
            get(|| async { Json(json!([{"id": 1, "red": 1, "green": 2, "blue": 3}])) }).post(
                |Json(color): Json<Color>| async move {
                    (
                        StatusCode::CREATED,
                        Json(json!({
                            "id": 9,
                            "red": color.red,
                            "green": color.green,
                            "blue": color.blue
                        })),
                    )
                },
            ),
        )
        .route(
            "/colors/:id",
            delete(|Path(id): Path<i64>| async move {
                if id == 404 {
                    (StatusCode::NOT_FOUND, Json(json!({})))
                } else {
                    (StatusCode::OK, Json(json!({})))
                }
            }),
        );

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn list_request_returns_body_and_reason_phrase() {
    let base = spawn_colors_server().await;
    let transport = HttpTransport::new();

    let request = ColorRequest::list(RequestId(1), &base);
    let response = transport.execute(&request).await.expect("response");

    assert_eq!(response.request, RequestId(1));
    assert_eq!(response.status_text, STATUS_OK);
    let colors = response.saved_colors().expect("colors");
    assert_eq!(colors.len(), 1);
    assert_eq!(colors[0].id, ColorId(1));
}

#[tokio::test]
async fn create_request_posts_json_color() {
    let base = spawn_colors_server().await;
    let transport = HttpTransport::new();

    let request = ColorRequest::create(RequestId(2), &base, Color::new(4, 5, 6));
    let response = transport.execute(&request).await.expect("response");

    assert_eq!(response.status_text, STATUS_CREATED);
    let colors = response.saved_colors().expect("colors");
    assert_eq!(colors[0].id, ColorId(9));
    assert_eq!(colors[0].color, Color::new(4, 5, 6));
}

#[tokio::test]
async fn non_success_status_is_a_request_failure() {
    let base = spawn_colors_server().await;
    let transport = HttpTransport::new();

    let request = ColorRequest::delete(RequestId(3), &base, ColorId(404));
    let err = transport.execute(&request).await.expect_err("404");
    assert_eq!(err.url, format!("{base}/colors/404"));
    assert!(err.reason.contains("404"), "reason: {}", err.reason);

    let ok = ColorRequest::delete(RequestId(4), &base, ColorId(7));
    let response = fetch_or_sentinel(&transport, &ok).await;
    assert_eq!(response.status_text, STATUS_OK);
}

#[tokio::test]
async fn unreachable_server_yields_error_sentinel() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let request = ColorRequest::list(RequestId(5), &format!("http://{addr}"));
    let response = fetch_or_sentinel(&HttpTransport::new(), &request).await;

    assert_eq!(response.request, RequestId(5));
    assert_eq!(response.status_text, STATUS_ERROR);
    assert_eq!(response.body, json!([]));
    assert!(response.saved_colors().expect("empty").is_empty());
}
