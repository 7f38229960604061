//! # Repository: project operations on an abstract document store
//!
//! [`Repository`] implements every account and project operation of CodeVault on top
//! of the [`DocumentStore`] trait, so the same logic runs against the in-memory store
//! (tests, local development) and the PostgreSQL store in the `api` crate.
//!
//! ## [`DocumentStore`] trait
//!
//! Four async methods: look a user document up by email or by username, insert a new
//! document, and save (replace) an existing one keyed by email.
//!
//! ## Semantics
//!
//! Every project operation loads the owner's document, scans `projects` for the
//! **first** entry whose name matches, mutates it, and saves the whole document back.
//! There is no lock held between the load and the save: two writers racing on the
//! same document resolve as last write wins.
//!
//! Project names are trimmed, must be non-empty and must not contain `/` (they are a
//! URL path segment). Creating a project, or renaming one, onto a name that already
//! exists in the owner's list fails with [`Error::DuplicateProject`].

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::models::{username_from, FilesUpdate, NewUser, Project, UserDocument, RESERVED_NAMES};

/// Async persistence of user documents.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserDocument>>;

    async fn find_by_name(&self, name: &str) -> Result<Option<UserDocument>>;

    /// Insert a new document. Fails with [`Error::DuplicateUser`] if the email or the
    /// name is taken.
    async fn insert(&self, user: UserDocument) -> Result<UserDocument>;

    /// Replace the stored document with the same email.
    async fn save(&self, user: &UserDocument) -> Result<()>;
}

/// Account and project operations backed by a [`DocumentStore`].
#[derive(Clone)]
pub struct Repository {
    store: Arc<dyn DocumentStore>,
}

impl Repository {
    pub fn new(store: impl DocumentStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn from_arc(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Create a user document for a newly registered account.
    pub async fn register(&self, new_user: NewUser) -> Result<UserDocument> {
        let name = username_from(&new_user.full_name).to_string();
        if name.is_empty() {
            return Err(Error::MissingField("Name"));
        }
        if name.contains('/') || RESERVED_NAMES.contains(&name.to_lowercase().as_str()) {
            return Err(Error::InvalidName(name));
        }
        if self.store.find_by_name(&name).await?.is_some() {
            return Err(Error::DuplicateUser("name"));
        }

        let user = self
            .store
            .insert(UserDocument {
                name,
                email: new_user.email,
                image: new_user.image,
                password_hash: new_user.password_hash,
                projects: Vec::new(),
            })
            .await?;

        tracing::info!(user = %user.name, "registered user");
        Ok(user)
    }

    pub async fn user_by_email(&self, email: &str) -> Result<UserDocument> {
        self.store
            .find_by_email(email)
            .await?
            .ok_or(Error::UserNotFound)
    }

    pub async fn user_by_name(&self, name: &str) -> Result<UserDocument> {
        self.store
            .find_by_name(name)
            .await?
            .ok_or(Error::UserNotFound)
    }

    /// All projects of the user, in creation order.
    pub async fn list_projects(&self, email: &str) -> Result<Vec<Project>> {
        Ok(self.user_by_email(email).await?.projects)
    }

    /// Append a new project with the starter files. Returns the owner's username
    /// alongside the project so callers can build `/{owner}/{project}`.
    pub async fn create_project(
        &self,
        email: &str,
        name: &str,
        description: &str,
    ) -> Result<(String, Project)> {
        let mut user = self.user_by_email(email).await?;
        let name = validate_project_name(name)?;
        let description = require(description, "Project description")?;

        if user.project(&name).is_some() {
            return Err(Error::DuplicateProject(name));
        }

        let project = Project::new(name, description);
        user.projects.push(project.clone());
        self.store.save(&user).await?;

        tracing::debug!(owner = %user.name, project = %project.project_name, "created project");
        Ok((user.name, project))
    }

    /// Fetch one of the signed-in user's projects.
    pub async fn get_project(&self, email: &str, name: &str) -> Result<Project> {
        self.user_by_email(email)
            .await?
            .project(name)
            .cloned()
            .ok_or(Error::ProjectNotFound)
    }

    /// Fetch a project by owner username. Performs no access check.
    pub async fn shared_project(&self, owner: &str, name: &str) -> Result<Project> {
        self.user_by_name(owner)
            .await?
            .project(name)
            .cloned()
            .ok_or(Error::ProjectNotFound)
    }

    /// Overwrite the provided file blobs of a project.
    pub async fn save_files(&self, email: &str, name: &str, update: FilesUpdate) -> Result<Project> {
        let mut user = self.user_by_email(email).await?;
        let index = user.project_index(name).ok_or(Error::ProjectNotFound)?;

        update.apply(&mut user.projects[index].files);
        self.store.save(&user).await?;

        Ok(user.projects.swap_remove(index))
    }

    /// Rename and redescribe a project.
    pub async fn update_details(
        &self,
        email: &str,
        name: &str,
        new_name: &str,
        new_description: &str,
    ) -> Result<Project> {
        let mut user = self.user_by_email(email).await?;
        let index = user.project_index(name).ok_or(Error::ProjectNotFound)?;
        let new_name = validate_project_name(new_name)?;
        let new_description = require(new_description, "Project description")?;

        if new_name != name && user.project(&new_name).is_some() {
            return Err(Error::DuplicateProject(new_name));
        }

        let project = &mut user.projects[index];
        project.project_name = new_name;
        project.project_description = new_description;
        self.store.save(&user).await?;

        Ok(user.projects.swap_remove(index))
    }

    /// Remove a project from the user's list and return it.
    pub async fn delete_project(&self, email: &str, name: &str) -> Result<Project> {
        let mut user = self.user_by_email(email).await?;
        let index = user.project_index(name).ok_or(Error::ProjectNotFound)?;

        let removed = user.projects.remove(index);
        self.store.save(&user).await?;

        tracing::debug!(owner = %user.name, project = %removed.project_name, "deleted project");
        Ok(removed)
    }
}

fn validate_project_name(name: &str) -> Result<String> {
    let name = require(name, "Project name")?;
    if name.contains('/') {
        return Err(Error::InvalidName(name));
    }
    Ok(name)
}

fn require(value: &str, field: &'static str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::MissingField(field));
    }
    Ok(value.to_string())
}
