use axum::{response::Json, routing::get, Router};
use serde::{Deserialize, Serialize};

pub const SERVICE_NAME: &str = "assistant-proxy";

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    ok: bool,
    service: String,
}

/// Liveness probe; answers the same body on every call.
pub async fn get_status() -> Json<StatusResponse> {
    Json(StatusResponse {
        ok: true,
        service: SERVICE_NAME.to_string(),
    })
}

pub fn routes() -> Router {
    Router::new().route("/", get(get_status))
}
