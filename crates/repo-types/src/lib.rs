use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A tracked project link with its tags and like counter.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Repository {
    pub id: uuid::Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub techs: Option<Vec<String>>,
    pub likes: u64,
}

impl Repository {
    pub fn new(req: CreateRepositoryReq) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            title: req.title,
            url: req.url,
            techs: req.techs,
            likes: 0,
        }
    }

    /// Replaces the client-owned fields. `id` and `likes` stay as they are.
    pub fn apply(&mut self, req: UpdateRepositoryReq) {
        self.title = req.title;
        self.url = req.url;
        self.techs = req.techs;
    }
}

// Unknown fields (including `likes`) are dropped by serde, so clients cannot
// seed or overwrite the counter through these bodies.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateRepositoryReq {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub techs: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateRepositoryReq {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub techs: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct RepositoryPathParams {
    /// Repository identifier (hyphenated UUID).
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct HealthResponse {
    pub version: String,
    pub repositories: usize,
}
