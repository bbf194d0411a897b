use crate::{
    entities::{collection::ListResponse, project::Project},
    errors::AppError,
    repositories::projects::ProjectRepository,
};

pub struct ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub project_repo: R,
}

impl<R> ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repo: R) -> Self {
        ProjectHandler { project_repo }
    }

    /// Lists every project in the collection, seed order preserved.
    pub async fn list_projects(&self) -> Result<ListResponse<Project>, AppError> {
        let projects = self.project_repo.list_projects().await?;
        Ok(ListResponse::new(projects))
    }

    /// Retrieves a single project by its identifier
    pub async fn get_project_by_id(&self, id: &str) -> Result<Project, AppError> {
        let id = valid_id(id)?;

        self.project_repo
            .get_project_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Project not found".to_string()))
    }
}

fn valid_id(id: &str) -> Result<&str, AppError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation("id", "identifier cannot be blank"));
    }
    Ok(trimmed)
}
