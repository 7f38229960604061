//! Owner-side project endpoints. All of them require a session.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use store::FilesUpdate;

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::extract::{ApiJson, ApiQuery};
use crate::models::{
    project_path, CreatedResponse, MessageResponse, ProjectListResponse, ProjectResponse,
};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ProjectQuery {
    pub pname: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub project_name: Option<String>,
    pub project_description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SaveProjectRequest {
    pub project_name: Option<String>,
    pub html: Option<String>,
    pub css: Option<String>,
    pub javascript: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProjectDetailsRequest {
    pub project_name: Option<String>,
    #[serde(rename = "newProjectName")]
    pub new_project_name: Option<String>,
    #[serde(rename = "newProjectDescription")]
    pub new_project_description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteProjectRequest {
    pub project_name: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn name_required() -> ApiError {
    ApiError::BadRequest("Project name is required".to_string())
}

/// `GET /api/projects?pname=`
pub async fn get_project_by_query(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiQuery(query): ApiQuery<ProjectQuery>,
) -> ApiResult<Json<ProjectResponse>> {
    let user = state.repo.user_by_email(&auth.email).await?;
    let pname = non_empty(query.pname).ok_or_else(name_required)?;

    let project = user
        .project(&pname)
        .cloned()
        .ok_or(store::Error::ProjectNotFound)?;

    Ok(Json(ProjectResponse {
        success: true,
        project,
    }))
}

/// `GET /api/projects/{pname}`
pub async fn get_project_by_path(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(pname): Path<String>,
) -> ApiResult<Json<ProjectResponse>> {
    let project = state.repo.get_project(&auth.email, &pname).await?;
    Ok(Json(ProjectResponse {
        success: true,
        project,
    }))
}

/// `GET /api/projectlist`
pub async fn list_projects(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ProjectListResponse>> {
    let projects = state.repo.list_projects(&auth.email).await?;
    Ok(Json(ProjectListResponse {
        success: true,
        projects,
    }))
}

/// `POST /api/projects`
pub async fn create_project(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiJson(request): ApiJson<CreateProjectRequest>,
) -> ApiResult<(StatusCode, Json<CreatedResponse>)> {
    let (owner, project) = state
        .repo
        .create_project(
            &auth.email,
            request.project_name.as_deref().unwrap_or_default(),
            request.project_description.as_deref().unwrap_or_default(),
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            success: true,
            message: "Project added successfully".to_string(),
            redirect_url: project_path(&owner, &project.project_name),
        }),
    ))
}

/// `PUT /api/saveproject`: overwrite any of the three files.
pub async fn save_project(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiJson(request): ApiJson<SaveProjectRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let name = non_empty(request.project_name).ok_or_else(name_required)?;

    let update = FilesUpdate {
        html: request.html,
        css: request.css,
        javascript: request.javascript,
    };
    state.repo.save_files(&auth.email, &name, update).await?;

    Ok(Json(MessageResponse::new("Project updated successfully")))
}

/// `PUT /api/saveProjectDetails`: rename and redescribe.
pub async fn save_project_details(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiJson(request): ApiJson<ProjectDetailsRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let (Some(name), Some(new_name), Some(new_description)) = (
        non_empty(request.project_name),
        non_empty(request.new_project_name),
        non_empty(request.new_project_description),
    ) else {
        return Err(ApiError::BadRequest("All fields are required".to_string()));
    };

    state
        .repo
        .update_details(&auth.email, &name, &new_name, &new_description)
        .await?;

    Ok(Json(MessageResponse::new(
        "Project details updated successfully",
    )))
}

/// `DELETE /api/deleteproject`
pub async fn delete_project(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiJson(request): ApiJson<DeleteProjectRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let name = non_empty(request.project_name).ok_or_else(name_required)?;

    state.repo.delete_project(&auth.email, &name).await?;
    tracing::info!(project = %name, "project deleted");

    Ok(Json(MessageResponse::new(format!(
        "Project - {} deleted successfully",
        name
    ))))
}
