use store::Repository;

/// Shared state of every handler.
#[derive(Clone)]
pub struct AppState {
    pub repo: Repository,
}

impl AppState {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }
}
