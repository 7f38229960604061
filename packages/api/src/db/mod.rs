//! # PostgreSQL persistence
//!
//! Entirely gated behind the `postgres` feature so that builds using only the
//! in-memory store never pull in SQLx.
//!
//! - [`get_pool`]: lazy, process-wide `PgPool` singleton backed by a
//!   [`tokio::sync::OnceCell`], configured from [`crate::settings::Database`].
//! - [`run_migrations`]: applies the SQL files under `packages/api/migrations`.
//! - [`PgStore`]: the [`store::DocumentStore`] implementation over the `users` table.

#[cfg(feature = "postgres")]
mod documents;
#[cfg(feature = "postgres")]
mod pool;

#[cfg(feature = "postgres")]
pub use documents::PgStore;
#[cfg(feature = "postgres")]
pub use pool::{get_pool, run_migrations};
