//! # Client-safe user projection
//!
//! [`UserInfo`] is what the API returns about an account. It is derived from the
//! stored [`UserDocument`] and omits the password hash and the embedded projects.
//! [`UserInfo::home_path`] is the dashboard URL of the user (`/{name}`).

use serde::{Deserialize, Serialize};
use store::UserDocument;

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub name: String,
    pub email: String,
    pub image: Option<String>,
}

impl UserInfo {
    /// Dashboard path of the user.
    pub fn home_path(&self) -> String {
        format!("/{}", urlencoding::encode(&self.name))
    }
}

impl From<&UserDocument> for UserInfo {
    fn from(user: &UserDocument) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            image: user.image.clone(),
        }
    }
}
