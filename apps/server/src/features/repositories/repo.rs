use std::sync::Arc;

use repo_types::{CreateRepositoryReq, Repository, UpdateRepositoryReq};
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory, insertion-ordered collection of repositories.
///
/// Clones share the same underlying list. Each operation holds the lock for
/// its whole lookup-and-mutate step.
#[derive(Clone, Default)]
pub struct RepositoryStore {
    items: Arc<RwLock<Vec<Repository>>>,
}

impl RepositoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn list(&self) -> Vec<Repository> {
        self.items.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn create(&self, req: CreateRepositoryReq) -> Repository {
        let repo = Repository::new(req);
        self.items.write().await.push(repo.clone());
        repo
    }

    pub async fn update(
        &self,
        id: Uuid,
        req: UpdateRepositoryReq,
    ) -> Result<Repository, StoreError> {
        let mut items = self.items.write().await;
        let repo = items
            .iter_mut()
            .find(|repo| repo.id == id)
            .ok_or(StoreError::NotFound(id))?;
        repo.apply(req);
        Ok(repo.clone())
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let mut items = self.items.write().await;
        let index = position(&items, id)?;
        items.remove(index);
        Ok(())
    }

    pub async fn like(&self, id: Uuid) -> Result<Repository, StoreError> {
        let mut items = self.items.write().await;
        let index = position(&items, id)?;
        let liked = Repository {
            likes: items[index].likes.saturating_add(1),
            ..items[index].clone()
        };
        items[index] = liked.clone();
        Ok(liked)
    }
}

fn position(items: &[Repository], id: Uuid) -> Result<usize, StoreError> {
    items
        .iter()
        .position(|repo| repo.id == id)
        .ok_or(StoreError::NotFound(id))
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("repository {0} not found")]
    NotFound(Uuid),
}
