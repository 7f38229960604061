//! Form actions posted by the rendered pages. Each one redirects (303) when it
//! is done; failures come back as `?error=` on the page the form lives on.

use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    routing::post,
    Form, Router,
};
use serde::Deserialize;
use tower_sessions::Session;

use api::auth::{self, accounts, LoginRequest, RegisterRequest};
use api::{models::project_path, ApiError, AppState, UserInfo};

use crate::pages::signed_in;

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/actions/login", post(login))
        .route("/actions/register", post(register))
        .route("/actions/logout", post(logout))
        .route("/actions/create-project", post(create_project))
        .route("/actions/delete-project", post(delete_project))
        .route("/actions/rename-project", post(rename_project))
}

#[derive(Debug, Deserialize)]
struct CreateProjectForm {
    #[serde(default)]
    pname: String,
    #[serde(default)]
    pdesc: String,
}

#[derive(Debug, Deserialize)]
struct DeleteProjectForm {
    #[serde(default)]
    project_name: String,
}

#[derive(Debug, Deserialize)]
struct RenameProjectForm {
    #[serde(default)]
    project_name: String,
    #[serde(default)]
    new_project_name: String,
    #[serde(default)]
    new_project_description: String,
}

/// Redirect back to `path` with the error shown on the page.
fn back_with(path: &str, err: ApiError) -> Response {
    let message = match err {
        ApiError::Internal(ref detail) => {
            tracing::error!("form action failed: {}", detail);
            "Something went wrong, please try again".to_string()
        }
        other => other.to_string(),
    };
    Redirect::to(&format!("{}?error={}", path, urlencoding::encode(&message))).into_response()
}

async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginRequest>,
) -> Response {
    match accounts::login(&state.repo, &session, form).await {
        Ok(user) => Redirect::to(&user.home_path()).into_response(),
        Err(e) => back_with("/", e),
    }
}

async fn register(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RegisterRequest>,
) -> Response {
    match accounts::register(&state.repo, &session, form).await {
        Ok(user) => {
            tracing::info!(user = %user.name, "registered");
            Redirect::to(&user.home_path()).into_response()
        }
        Err(e) => back_with("/", e),
    }
}

async fn logout(session: Session) -> Response {
    if let Err(e) = auth::sign_out(&session).await {
        tracing::error!("failed to end session: {}", e);
    }
    Redirect::to("/").into_response()
}

/// Resolve the signed-in user for an action, or send the visitor home.
async fn require_user(state: &AppState, session: &Session) -> Result<UserInfo, Response> {
    match signed_in(state, session).await {
        Ok(Some(user)) => Ok(UserInfo::from(&user)),
        Ok(None) => Err(Redirect::to("/").into_response()),
        Err(e) => Err(back_with("/", e)),
    }
}

async fn create_project(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CreateProjectForm>,
) -> Response {
    let user = match require_user(&state, &session).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    match state
        .repo
        .create_project(&user.email, &form.pname, &form.pdesc)
        .await
    {
        Ok((owner, project)) => {
            Redirect::to(&project_path(&owner, &project.project_name)).into_response()
        }
        Err(e) => back_with(&user.home_path(), e.into()),
    }
}

async fn delete_project(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<DeleteProjectForm>,
) -> Response {
    let user = match require_user(&state, &session).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    match state.repo.delete_project(&user.email, &form.project_name).await {
        Ok(_) => {
            tracing::info!(project = %form.project_name, "project deleted");
            Redirect::to(&user.home_path()).into_response()
        }
        Err(e) => back_with(&user.home_path(), e.into()),
    }
}

async fn rename_project(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RenameProjectForm>,
) -> Response {
    let user = match require_user(&state, &session).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    match state
        .repo
        .update_details(
            &user.email,
            &form.project_name,
            &form.new_project_name,
            &form.new_project_description,
        )
        .await
    {
        Ok(project) => Redirect::to(&project_path(&user.name, &project.project_name)).into_response(),
        Err(e) => back_with(&user.home_path(), e.into()),
    }
}
