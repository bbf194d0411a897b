use std::sync::Arc;

use async_trait::async_trait;

use crate::{entities::project::Project, errors::AppError, seed::seed_projects};

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn list_projects(&self) -> Result<Vec<Project>, AppError>;
    async fn get_project_by_id(&self, id: &str) -> Result<Option<Project>, AppError>;
}

/// Backing store for the mock server. The dataset is fixed at construction
/// and shared read-only between workers; there is no mutation path.
#[derive(Clone)]
pub struct InMemoryProjectRepo {
    projects: Arc<Vec<Project>>,
}

impl InMemoryProjectRepo {
    pub fn new(projects: Vec<Project>) -> Self {
        InMemoryProjectRepo {
            projects: Arc::new(projects),
        }
    }

    pub fn seeded() -> Self {
        InMemoryProjectRepo::new(seed_projects())
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepo {
    async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        Ok(self.projects.as_ref().clone())
    }

    async fn get_project_by_id(&self, id: &str) -> Result<Option<Project>, AppError> {
        Ok(self.projects.iter().find(|p| p.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_repo_preserves_seed_order() {
        let repo = InMemoryProjectRepo::seeded();
        let projects = repo.list_projects().await.unwrap();

        let ids: Vec<_> = projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
    }

    #[tokio::test]
    async fn lookup_misses_resolve_to_none() {
        let repo = InMemoryProjectRepo::seeded();
        assert!(repo.get_project_by_id("99").await.unwrap().is_none());
        assert!(repo.get_project_by_id("2").await.unwrap().is_some());
    }
}
