use axum::{
    middleware::from_fn,
    routing::{get, post, put},
    Router,
};

pub mod repo;
pub mod routes;
pub mod validate;

pub fn router() -> Router {
    let by_id = Router::new()
        .route("/:id", put(routes::update).delete(routes::delete))
        .route("/:id/like", post(routes::like))
        .route_layer(from_fn(validate::validate_repo_id));

    Router::new()
        .route("/", get(routes::list).post(routes::create))
        .merge(by_id)
}
