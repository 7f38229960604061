use serde::{Deserialize, Serialize};
use store::Project;

/// `{success, project}`: owner fetch of one project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectResponse {
    pub success: bool,
    pub project: Project,
}

/// `{project}`: public share fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedProjectResponse {
    pub project: Project,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectListResponse {
    pub success: bool,
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result of creating a project; `redirect_url` is the project's editor page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub message: String,
    pub redirect_url: String,
}
