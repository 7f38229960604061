use axum::{extract::State, http::StatusCode, Json};
use tower_sessions::Session;

use crate::auth::{self, accounts, LoginRequest, RegisterRequest};
use crate::error::ApiResult;
use crate::extract::ApiJson;
use crate::models::{MessageResponse, UserInfo};
use crate::state::AppState;

/// `GET /api/auth/me`: the signed-in user, or `null`.
pub async fn me(State(state): State<AppState>, session: Session) -> ApiResult<Json<Option<UserInfo>>> {
    let Some(email) = auth::current_email(&session).await? else {
        return Ok(Json(None));
    };

    match state.repo.user_by_email(&email).await {
        Ok(user) => Ok(Json(Some(UserInfo::from(&user)))),
        Err(store::Error::UserNotFound) => Ok(Json(None)),
        Err(e) => Err(e.into()),
    }
}

/// `POST /api/auth/register`
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    ApiJson(request): ApiJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<UserInfo>)> {
    let user = accounts::register(&state.repo, &session, request).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// `POST /api/auth/login`
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    ApiJson(request): ApiJson<LoginRequest>,
) -> ApiResult<Json<UserInfo>> {
    Ok(Json(accounts::login(&state.repo, &session, request).await?))
}

/// `POST /api/auth/logout`
pub async fn logout(session: Session) -> ApiResult<Json<MessageResponse>> {
    auth::sign_out(&session).await?;
    Ok(Json(MessageResponse::new("Signed out")))
}
