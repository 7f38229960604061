pub mod archive;
pub mod error;
pub mod models;
pub mod preview;
pub mod repo;

mod memory;
pub use memory::MemoryStore;

pub use archive::project_archive;
pub use error::{Error, Result};
pub use models::{FilesUpdate, NewUser, Project, ProjectFiles, UserDocument};
pub use preview::combine_document;
pub use repo::{DocumentStore, Repository};
