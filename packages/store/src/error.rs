use thiserror::Error;

/// Failures of [`crate::Repository`] operations and [`crate::DocumentStore`] backends.
#[derive(Debug, Error)]
pub enum Error {
    #[error("User not found")]
    UserNotFound,

    #[error("Project not found")]
    ProjectNotFound,

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("A project named {0} already exists")]
    DuplicateProject(String),

    #[error("An account with this {0} already exists")]
    DuplicateUser(&'static str),

    #[error("Storage backend error: {0}")]
    Backend(String),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),
}

pub type Result<T> = std::result::Result<T, Error>;
