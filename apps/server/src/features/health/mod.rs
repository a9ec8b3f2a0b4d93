use axum::{routing::get, Extension, Json, Router};
use repo_types::HealthResponse;

use crate::AppState;

pub fn router() -> Router {
    Router::new().route("/health", get(health))
}

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = HealthResponse)),
    tag = "Health"
)]
pub async fn health(Extension(st): Extension<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        version: env!("CARGO_PKG_VERSION").into(),
        repositories: st.repositories.len().await,
    })
}
