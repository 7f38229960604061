//! Session identity and the owner gate.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use time::Duration;
use tower_sessions::cookie::SameSite;
use tower_sessions::{Expiry, Session, SessionManagerLayer, SessionStore};

use crate::error::{ApiError, ApiResult};
use crate::settings;

/// Key for storing the signed-in user's email in the session.
pub const SESSION_USER_EMAIL_KEY: &str = "user_email";

/// Cookie session layer configured from settings.
pub fn session_layer<S>(store: S, settings: &settings::Session) -> SessionManagerLayer<S>
where
    S: SessionStore + Clone,
{
    SessionManagerLayer::new(store)
        .with_secure(settings.secure)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(settings.expiry_days)))
}

/// Email of the signed-in user, if any.
pub async fn current_email(session: &Session) -> ApiResult<Option<String>> {
    Ok(session.get::<String>(SESSION_USER_EMAIL_KEY).await?)
}

/// Bind the session to a user. The session id is rotated first.
pub async fn sign_in(session: &Session, email: &str) -> ApiResult<()> {
    session.cycle_id().await?;
    session
        .insert(SESSION_USER_EMAIL_KEY, email.to_string())
        .await?;
    Ok(())
}

pub async fn sign_out(session: &Session) -> ApiResult<()> {
    session.flush().await?;
    Ok(())
}

/// Extractor for endpoints that require a signed-in user; rejects with 401.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub email: String,
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, msg)| ApiError::Internal(msg.to_string()))?;

        current_email(&session)
            .await?
            .map(|email| AuthUser { email })
            .ok_or_else(ApiError::unauthorized)
    }
}

/// Owner gate for `/{username}/...` routes: the signed-in user's name must equal
/// the path segment.
pub fn ensure_owner(signed_in_name: &str, username: &str) -> ApiResult<()> {
    if signed_in_name == username {
        Ok(())
    } else {
        Err(ApiError::Forbidden("Access Denied".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_owner() {
        assert!(ensure_owner("ada", "ada").is_ok());
        assert!(matches!(
            ensure_owner("ada", "grace"),
            Err(ApiError::Forbidden(_))
        ));
        assert!(ensure_owner("ada", "Ada").is_err());
    }
}
