//! Public, unauthenticated read access to a project by `(owner, project)` name pair,
//! rendering of combined documents, and the zip download.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use store::{
    archive::ARCHIVE_NAME, combine_document, preview::CONTENT_SECURITY_POLICY, project_archive,
    ProjectFiles,
};

use crate::error::{ApiError, ApiResult};
use crate::extract::{ApiJson, ApiQuery};
use crate::models::SharedProjectResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ShareQuery {
    pub user_name: Option<String>,
    pub project_name: Option<String>,
}

/// `GET /api/shareproject?user_name=&project_name=`
pub async fn get_shared_project(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ShareQuery>,
) -> ApiResult<Json<SharedProjectResponse>> {
    let (Some(user_name), Some(project_name)) = (
        query.user_name.filter(|v| !v.is_empty()),
        query.project_name.filter(|v| !v.is_empty()),
    ) else {
        return Err(ApiError::BadRequest(
            "Project name and User name are required".to_string(),
        ));
    };

    tracing::debug!(owner = %user_name, project = %project_name, "share fetch");
    let project = state.repo.shared_project(&user_name, &project_name).await?;

    Ok(Json(SharedProjectResponse { project }))
}

/// Serve a combined document. The CSP sandbox gives it an opaque origin even
/// when opened outside a frame.
pub fn document_response(files: &ProjectFiles) -> Response {
    (
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8"),
            (header::CONTENT_SECURITY_POLICY, CONTENT_SECURITY_POLICY),
        ],
        combine_document(files),
    )
        .into_response()
}

/// `GET /{username}/{project_name}/raw`: the stored project as one document.
pub async fn raw_document(
    State(state): State<AppState>,
    Path((username, project_name)): Path<(String, String)>,
) -> ApiResult<Response> {
    let project = state.repo.shared_project(&username, &project_name).await?;
    Ok(document_response(&project.files))
}

/// `GET /{username}/{project_name}/download`: the stored files as `project.zip`.
pub async fn download(
    State(state): State<AppState>,
    Path((username, project_name)): Path<(String, String)>,
) -> ApiResult<Response> {
    let project = state.repo.shared_project(&username, &project_name).await?;
    let archive = project_archive(&project.files)?;
    let disposition = format!("attachment; filename=\"{}\"", ARCHIVE_NAME);

    Ok((
        [
            (header::CONTENT_TYPE, "application/zip".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        archive,
    )
        .into_response())
}

/// `POST /api/preview`: combine unsaved editor contents for live preview.
pub async fn preview(ApiJson(files): ApiJson<ProjectFiles>) -> Response {
    document_response(&files)
}
