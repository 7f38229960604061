//! # CodeVault web server
//!
//! Assembles the full application router: the JSON API from the `api` crate,
//! the server-rendered pages, the form actions behind them, and the embedded
//! static assets. The binary in `main.rs` only picks the storage backend and
//! serves what [`app`] returns.

use api::{auth::session_layer, settings, AppState};
use axum::Router;
use tower_http::trace::TraceLayer;
use tower_sessions::SessionStore;

mod actions;
mod assets;
mod pages;
pub mod views;

/// The complete application over a repository and a session store.
pub fn app<S>(state: AppState, sessions: S, session_settings: &settings::Session) -> Router
where
    S: SessionStore + Clone,
{
    api::router()
        .merge(pages::router())
        .merge(actions::router())
        .merge(assets::router())
        .with_state(state)
        .layer(session_layer(sessions, session_settings))
        .layer(TraceLayer::new_for_http())
}
