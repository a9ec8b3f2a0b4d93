use std::path::{Path, PathBuf};

use axum::Router;
use utoipa::openapi::OpenApi as OpenApiDoc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::features::health::health,
        crate::features::repositories::routes::list,
        crate::features::repositories::routes::create,
        crate::features::repositories::routes::update,
        crate::features::repositories::routes::delete,
        crate::features::repositories::routes::like,
    ),
    components(
        schemas(
            repo_types::Repository,
            repo_types::CreateRepositoryReq,
            repo_types::UpdateRepositoryReq,
            repo_types::ErrorResponse,
            repo_types::HealthResponse,
        )
    ),
    tags(
        (name = "Repositories", description = "Repository listing, editing and likes."),
        (name = "Health", description = "Liveness probe."),
    )
)]
pub struct ApiDoc;

pub const OPENAPI_JSON: &str = "/docs/openapi.json";

/// Swagger UI under `/docs`; the UI also serves the document at
/// [`OPENAPI_JSON`].
pub fn router(openapi: OpenApiDoc) -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url(OPENAPI_JSON, openapi))
}

/// Writes `openapi.yaml` into `dir`, creating it if needed.
pub async fn export_yaml(openapi: &OpenApiDoc, dir: &Path) -> anyhow::Result<PathBuf> {
    let target = dir.join("openapi.yaml");
    tokio::fs::create_dir_all(dir).await?;
    tokio::fs::write(&target, serde_yaml::to_string(openapi)?).await?;
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_repository_route() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;
        assert!(paths.contains_key("/repositories"));
        assert!(paths.contains_key("/repositories/{id}"));
        assert!(paths.contains_key("/repositories/{id}/like"));
        assert!(paths.contains_key("/health"));
    }

    #[tokio::test]
    async fn exports_yaml_into_nested_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("openapi").join("server");

        let target = export_yaml(&ApiDoc::openapi(), &dir).await.unwrap();

        assert_eq!(target, dir.join("openapi.yaml"));
        let yaml = std::fs::read_to_string(target).unwrap();
        assert!(yaml.contains("/repositories/{id}/like"));
    }
}
