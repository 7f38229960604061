use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{Error, Result};
use crate::models::UserDocument;
use crate::repo::DocumentStore;

/// In-memory DocumentStore for testing and local development.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    users: Arc<RwLock<HashMap<String, UserDocument>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserDocument>> {
        Ok(self.users.read().await.get(email).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<UserDocument>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.name == name)
            .cloned())
    }

    async fn insert(&self, user: UserDocument) -> Result<UserDocument> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.email) {
            return Err(Error::DuplicateUser("email"));
        }
        if users.values().any(|u| u.name == user.name) {
            return Err(Error::DuplicateUser("name"));
        }
        users.insert(user.email.clone(), user.clone());
        Ok(user)
    }

    async fn save(&self, user: &UserDocument) -> Result<()> {
        let mut users = self.users.write().await;
        match users.get_mut(&user.email) {
            Some(existing) => {
                *existing = user.clone();
                Ok(())
            }
            None => Err(Error::UserNotFound),
        }
    }
}
