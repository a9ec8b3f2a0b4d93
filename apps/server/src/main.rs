mod config;
pub mod core;
mod docs;
mod features;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;

use config::ServerConfig;
use features::repositories::repo::RepositoryStore;

#[derive(Clone)]
pub struct AppState {
    pub repositories: RepositoryStore,
}

/// Full application: API routes plus the OpenAPI/Swagger UI routes.
pub fn app(state: AppState, openapi: utoipa::openapi::OpenApi) -> axum::Router {
    features::router(state).merge(docs::router(openapi))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cfg = ServerConfig::from_env();
    let state = AppState {
        repositories: RepositoryStore::new(),
    };

    let openapi = docs::ApiDoc::openapi();
    if let Some(dir) = &cfg.openapi_out {
        match docs::export_yaml(&openapi, dir).await {
            Ok(path) => info!(path = %path.display(), "wrote openapi document"),
            Err(err) => warn!(?err, "failed to write openapi document"),
        }
    }

    let router = app(state, openapi);
    info!(bind = %cfg.bind, "server listening");
    let listener = tokio::net::TcpListener::bind(&cfg.bind).await?;
    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}
