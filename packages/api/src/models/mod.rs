//! Data models for the HTTP API.

mod responses;
mod user;

pub use responses::{
    CreatedResponse, MessageResponse, ProjectListResponse, ProjectResponse, SharedProjectResponse,
};
pub use user::UserInfo;

/// `/{owner}/{project}` with both segments percent-encoded.
pub fn project_path(owner: &str, project: &str) -> String {
    format!(
        "/{}/{}",
        urlencoding::encode(owner),
        urlencoding::encode(project)
    )
}
