use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use super::AppState;

pub async fn info(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "name": state.config.service_name,
        "status": StatusCode::OK.as_u16(),
    }))
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Route not published",
            "status": StatusCode::NOT_FOUND.as_u16(),
        })),
    )
        .into_response()
}
