use axum::{
    extract::{Path, Request},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::core::error::ApiError;

/// Hyphenated 8-4-4-4-12 hex layout, any case, any version or variant.
/// Braced, URN and simple (unhyphenated) forms are rejected.
pub fn is_repo_id(raw: &str) -> bool {
    raw.len() == 36 && Uuid::try_parse(raw).is_ok()
}

/// Rejects requests whose `:id` segment is not a repository id before the
/// handler runs. Must be installed with `route_layer` so the path is matched.
pub async fn validate_repo_id(
    Path(id): Path<String>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if !is_repo_id(&id) {
        tracing::debug!(%id, "rejected invalid repository id");
        return Err(ApiError::InvalidId);
    }
    Ok(next.run(req).await)
}
