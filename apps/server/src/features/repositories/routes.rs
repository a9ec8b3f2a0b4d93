use crate::core::error::ApiError;
use crate::core::extract::JsonBody;
use crate::AppState;
use axum::{extract::Path, http::StatusCode, Extension, Json};
use repo_types::{
    CreateRepositoryReq, ErrorResponse, Repository, RepositoryPathParams, UpdateRepositoryReq,
};
use tracing::info;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/repositories",
    responses((status = 200, description = "All repositories in insertion order", body = [Repository])),
    tag = "Repositories"
)]
pub async fn list(Extension(st): Extension<AppState>) -> Json<Vec<Repository>> {
    Json(st.repositories.list().await)
}

#[utoipa::path(
    post,
    path = "/repositories",
    request_body = CreateRepositoryReq,
    responses(
        (status = 200, description = "Repository created", body = Repository),
        (status = 400, description = "Body is not valid JSON for this shape", body = ErrorResponse),
    ),
    tag = "Repositories"
)]
pub async fn create(
    Extension(st): Extension<AppState>,
    JsonBody(req): JsonBody<CreateRepositoryReq>,
) -> Json<Repository> {
    let repo = st.repositories.create(req).await;
    info!(id = %repo.id, "repository created");
    Json(repo)
}

#[utoipa::path(
    put,
    path = "/repositories/{id}",
    params(RepositoryPathParams),
    request_body = UpdateRepositoryReq,
    responses(
        (status = 200, description = "Repository updated", body = Repository),
        (status = 400, description = "Invalid id, unparseable body or repository not found", body = ErrorResponse),
    ),
    tag = "Repositories"
)]
pub async fn update(
    Extension(st): Extension<AppState>,
    Path(id): Path<Uuid>,
    JsonBody(req): JsonBody<UpdateRepositoryReq>,
) -> Result<Json<Repository>, ApiError> {
    let repo = st.repositories.update(id, req).await?;
    Ok(Json(repo))
}

#[utoipa::path(
    delete,
    path = "/repositories/{id}",
    params(RepositoryPathParams),
    responses(
        (status = 204, description = "Repository deleted"),
        (status = 400, description = "Invalid id or repository not found", body = ErrorResponse),
    ),
    tag = "Repositories"
)]
pub async fn delete(
    Extension(st): Extension<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    st.repositories.delete(id).await?;
    info!(%id, "repository deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/repositories/{id}/like",
    params(RepositoryPathParams),
    responses(
        (status = 200, description = "Like recorded", body = Repository),
        (status = 400, description = "Invalid id or repository not found", body = ErrorResponse),
    ),
    tag = "Repositories"
)]
pub async fn like(
    Extension(st): Extension<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Repository>, ApiError> {
    let repo = st.repositories.like(id).await?;
    Ok(Json(repo))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::repositories::repo::RepositoryStore;

    fn state() -> AppState {
        AppState {
            repositories: RepositoryStore::new(),
        }
    }

    fn redis() -> CreateRepositoryReq {
        CreateRepositoryReq {
            title: Some("Redis".into()),
            url: Some("https://github.com/vinieloy/app-redis-repositories".into()),
            techs: Some(vec!["Docker".into(), "Javascript".into(), "Redis".into()]),
        }
    }

    #[tokio::test]
    async fn create_then_list() {
        let st = state();

        let Json(created) = super::create(Extension(st.clone()), JsonBody(redis())).await;
        assert_eq!(created.likes, 0);
        assert_eq!(created.title.as_deref(), Some("Redis"));

        let Json(items) = super::list(Extension(st)).await;
        assert_eq!(items, vec![created]);
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let err = super::update(
            Extension(state()),
            Path(Uuid::new_v4()),
            JsonBody(UpdateRepositoryReq::default()),
        )
        .await
        .unwrap_err();

        assert_eq!(err, ApiError::NotFound);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn delete_returns_no_content() {
        let st = state();
        let Json(created) = super::create(Extension(st.clone()), JsonBody(redis())).await;

        let status = super::delete(Extension(st.clone()), Path(created.id))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);

        let again = super::delete(Extension(st.clone()), Path(created.id)).await;
        assert_eq!(again, Err(ApiError::NotFound));
        assert!(st.repositories.list().await.is_empty());
    }

    #[tokio::test]
    async fn like_increments() {
        let st = state();
        let Json(created) = super::create(Extension(st.clone()), JsonBody(redis())).await;

        let Json(liked) = super::like(Extension(st), Path(created.id)).await.unwrap();
        assert_eq!(liked.likes, 1);
        assert_eq!(liked.id, created.id);
    }
}
