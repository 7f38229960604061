//! Local account registration and sign-in, shared by the JSON endpoints and the
//! page form actions.

use serde::Deserialize;
use store::{NewUser, Repository};
use tower_sessions::Session;

use super::password::{check_password, hash_password, verify_password};
use super::session::sign_in;
use crate::error::{ApiError, ApiResult};
use crate::models::UserInfo;

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Create an account and sign it in.
pub async fn register(
    repo: &Repository,
    session: &Session,
    request: RegisterRequest,
) -> ApiResult<UserInfo> {
    let email = request.email.trim().to_lowercase();
    let full_name = request.name.trim().to_string();

    if email.is_empty() || !email.contains('@') {
        return Err(ApiError::BadRequest("Invalid email address".to_string()));
    }
    check_password(&request.password)?;
    if full_name.is_empty() {
        return Err(ApiError::BadRequest("Name is required".to_string()));
    }

    let password_hash = hash_password(&request.password)?;

    let user = repo
        .register(NewUser {
            full_name,
            email,
            image: request.image.filter(|i| !i.trim().is_empty()),
            password_hash: Some(password_hash),
        })
        .await?;

    sign_in(session, &user.email).await?;
    Ok(UserInfo::from(&user))
}

/// Check credentials and sign the user in.
pub async fn login(
    repo: &Repository,
    session: &Session,
    request: LoginRequest,
) -> ApiResult<UserInfo> {
    let email = request.email.trim().to_lowercase();
    let invalid = || ApiError::Unauthorized("Invalid email or password".to_string());

    let user = match repo.user_by_email(&email).await {
        Ok(user) => user,
        Err(store::Error::UserNotFound) => return Err(invalid()),
        Err(e) => return Err(e.into()),
    };

    let Some(ref hash) = user.password_hash else {
        return Err(invalid());
    };

    if !verify_password(&request.password, hash)? {
        return Err(invalid());
    }

    sign_in(session, &user.email).await?;
    tracing::info!(user = %user.name, "signed in");
    Ok(UserInfo::from(&user))
}
