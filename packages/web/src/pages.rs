//! Page routes. Pages under `/{username}` belong to that user; the share and
//! code views and the anonymous code editor are public.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use dioxus::prelude::*;
use serde::Deserialize;
use tower_sessions::Session;

use api::{auth, ApiError, AppState, UserInfo};
use store::UserDocument;

use crate::views::{self, render};

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/code-editor", get(code_editor))
        .route("/{username}", get(dashboard))
        .route("/{username}/{project_name}", get(editor))
        .route("/{username}/{project_name}/share", get(share))
        .route("/{username}/{project_name}/view-code", get(view_code))
}

/// `?error=` left by a failed form action.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Notice {
    pub error: Option<String>,
}

/// Turn a failure into a page response.
pub(crate) fn error_page(err: ApiError) -> Response {
    match err {
        ApiError::NotFound(message) => (
            StatusCode::NOT_FOUND,
            render(rsx! { views::NotFound { message: message } }),
        )
            .into_response(),
        other => other.into_response(),
    }
}

/// The signed-in user, if the session names one that still exists.
pub(crate) async fn signed_in(state: &AppState, session: &Session) -> Result<Option<UserDocument>, ApiError> {
    let Some(email) = auth::current_email(session).await? else {
        return Ok(None);
    };
    match state.repo.user_by_email(&email).await {
        Ok(user) => Ok(Some(user)),
        Err(store::Error::UserNotFound) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Owner gate: anonymous visitors go back to `/`, other users get 403.
async fn owner(state: &AppState, session: &Session, username: &str) -> Result<UserDocument, Response> {
    let Some(user) = signed_in(state, session).await.map_err(error_page)? else {
        return Err(Redirect::to("/").into_response());
    };

    if auth::ensure_owner(&user.name, username).is_err() {
        tracing::warn!(user = %user.name, path_user = %username, "access denied");
        let page = render(rsx! { views::AccessDenied { user: UserInfo::from(&user) } });
        return Err((StatusCode::FORBIDDEN, page).into_response());
    }

    Ok(user)
}

async fn home(
    State(state): State<AppState>,
    session: Session,
    Query(notice): Query<Notice>,
) -> Response {
    match signed_in(&state, &session).await {
        Ok(Some(user)) => Redirect::to(&UserInfo::from(&user).home_path()).into_response(),
        Ok(None) => render(rsx! { views::Home { error: notice.error } }).into_response(),
        Err(e) => error_page(e),
    }
}

async fn dashboard(
    State(state): State<AppState>,
    session: Session,
    Path(username): Path<String>,
    Query(notice): Query<Notice>,
) -> Response {
    let user = match owner(&state, &session, &username).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    let info = UserInfo::from(&user);
    render(rsx! {
        views::Dashboard { user: info, projects: user.projects, error: notice.error }
    })
    .into_response()
}

async fn code_editor() -> Response {
    render(rsx! { views::Playground {} }).into_response()
}

async fn editor(
    State(state): State<AppState>,
    session: Session,
    Path((username, project_name)): Path<(String, String)>,
) -> Response {
    let user = match owner(&state, &session, &username).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    let Some(project) = user.project(&project_name).cloned() else {
        return error_page(store::Error::ProjectNotFound.into());
    };

    render(rsx! { views::Editor { user: UserInfo::from(&user), project } }).into_response()
}

async fn share(
    State(state): State<AppState>,
    Path((username, project_name)): Path<(String, String)>,
) -> Response {
    match state.repo.shared_project(&username, &project_name).await {
        Ok(project) => render(rsx! { views::Share { owner: username, project } }).into_response(),
        Err(e) => error_page(e.into()),
    }
}

async fn view_code(
    State(state): State<AppState>,
    Path((username, project_name)): Path<(String, String)>,
) -> Response {
    match state.repo.shared_project(&username, &project_name).await {
        Ok(project) => {
            render(rsx! { views::CodeView { owner: username, project } }).into_response()
        }
        Err(e) => error_page(e.into()),
    }
}
