mod domain;
mod interfaces;

pub mod client;
pub mod errors;
pub mod graceful_shutdown;
pub mod settings;

pub use domain::{entities, seed, use_cases};
pub use interfaces::{handlers, repositories, routes};

use entities::project::Project;
use repositories::projects::InMemoryProjectRepo;
use use_cases::{contact::ContactHandler, projects::ProjectHandler};

pub struct AppState {
    pub project_handler: AppProjectHandler,
    pub contact_handler: ContactHandler,
}

pub type AppProjectHandler = ProjectHandler<InMemoryProjectRepo>;

impl AppState {
    /// State for the mock server with the standard demo dataset.
    pub fn new() -> Self {
        AppState::with_projects(seed::seed_projects())
    }

    /// State over an arbitrary dataset; tests use this to serve empty or
    /// custom collections.
    pub fn with_projects(projects: Vec<Project>) -> Self {
        AppState {
            project_handler: ProjectHandler::new(InMemoryProjectRepo::new(projects)),
            contact_handler: ContactHandler::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        AppState::new()
    }
}
