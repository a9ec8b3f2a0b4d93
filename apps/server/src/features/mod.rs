use crate::core::request_log;
use crate::AppState;
use axum::{middleware::from_fn, Extension, Router};
use tower_http::cors::CorsLayer;

pub mod health;
pub mod repositories;

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .nest("/repositories", repositories::router())
        .layer(Extension(state))
        .layer(from_fn(request_log::log_requests))
        .layer(CorsLayer::permissive())
}
