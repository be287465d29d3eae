use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use shared::{
    domain::{Color, ColorId, SavedColor},
    error::{ApiError, ErrorCode},
    protocol::{color_route_pattern, colors_route},
};
use tower_http::limit::RequestBodyLimitLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod api;
mod app_state;
mod config;
mod store;

use api::ApiContext;
use app_state::AppState;
use config::{load_settings, parse_bind_addr};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = load_settings();
    let state = AppState {
        api: ApiContext::default(),
    };
    let app = build_router(Arc::new(state), settings.max_body_bytes);

    let addr = parse_bind_addr(&settings.server_bind)?;
    info!(%addr, "colors server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route(colors_route(), get(http_list_colors).post(http_create_color))
        .route(&color_route_pattern(), delete(http_delete_color))
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn http_list_colors(State(state): State<Arc<AppState>>) -> Json<Vec<SavedColor>> {
    Json(api::list_colors(&state.api).await)
}

async fn http_create_color(
    State(state): State<Arc<AppState>>,
    Json(color): Json<Color>,
) -> (StatusCode, Json<SavedColor>) {
    let saved = api::create_color(&state.api, color).await;
    (StatusCode::CREATED, Json(saved))
}

async fn http_delete_color(
    State(state): State<Arc<AppState>>,
    Path(color_id): Path<i64>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<ApiError>)> {
    api::delete_color(&state.api, ColorId(color_id))
        .await
        .map_err(|e| {
            let status = match e.code {
                ErrorCode::NotFound => StatusCode::NOT_FOUND,
                ErrorCode::Validation => StatusCode::BAD_REQUEST,
                ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (status, Json(e))
        })?;
    Ok(Json(serde_json::json!({})))
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
