//! # API crate: HTTP endpoints for CodeVault
//!
//! This crate defines the JSON API that the server-rendered pages and any other
//! client talk to, along with the supporting modules those endpoints depend on.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | | Local accounts, Argon2 password hashing, session identity and the owner gate |
//! | [`db`] | `postgres` | PostgreSQL pool, migrations and the `PgStore` document store |
//! | [`error`] | | [`ApiError`] and its JSON error responses |
//! | [`extract`] | | `ApiJson` / `ApiQuery`, extractors that reject with [`ApiError`] |
//! | [`handlers`] | | Axum handlers for every endpoint below |
//! | [`models`] | | Response bodies and the client-safe [`UserInfo`] |
//! | [`settings`] | | Layered configuration (`config` + `dotenvy`) |
//!
//! ## Endpoints
//!
//! - **Authentication**: `GET /api/auth/me`, `POST /api/auth/register`,
//!   `POST /api/auth/login`, `POST /api/auth/logout`
//! - **Projects** (session required): `GET|POST /api/projects`,
//!   `GET /api/projects/{pname}`, `GET /api/projectlist`, `PUT /api/saveproject`,
//!   `PUT /api/saveProjectDetails`, `DELETE /api/deleteproject`
//! - **Public**: `GET /api/shareproject`, `GET /{username}/{project_name}/raw`,
//!   `GET /{username}/{project_name}/download`, `POST /api/preview`
//!
//! The router is returned without a session layer; the caller adds one with
//! [`auth::session_layer`] over the session store of its choice.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

pub mod auth;
pub mod db;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod settings;
mod state;

pub use error::{ApiError, ApiResult};
pub use models::UserInfo;
pub use settings::Settings;
pub use state::AppState;

/// All API routes.
pub fn router() -> Router<AppState> {
    use handlers::{auth, projects, share};

    Router::new()
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route(
            "/api/projects",
            get(projects::get_project_by_query).post(projects::create_project),
        )
        .route("/api/projects/{pname}", get(projects::get_project_by_path))
        .route("/api/projectlist", get(projects::list_projects))
        .route("/api/saveproject", put(projects::save_project))
        .route("/api/saveProjectDetails", put(projects::save_project_details))
        .route("/api/deleteproject", delete(projects::delete_project))
        .route("/api/shareproject", get(share::get_shared_project))
        .route("/api/preview", post(share::preview))
        .route("/{username}/{project_name}/raw", get(share::raw_document))
        .route("/{username}/{project_name}/download", get(share::download))
}
