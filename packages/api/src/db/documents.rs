//! PostgreSQL [`DocumentStore`]: one `users` row per account, projects embedded as
//! a JSONB array.

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use store::{DocumentStore, Error, Project, Result, UserDocument};

const USER_COLUMNS: &str = "name, email, image, password_hash, projects";

#[derive(Debug, FromRow)]
struct UserRow {
    name: String,
    email: String,
    image: Option<String>,
    password_hash: Option<String>,
    projects: Json<Vec<Project>>,
}

impl From<UserRow> for UserDocument {
    fn from(row: UserRow) -> Self {
        UserDocument {
            name: row.name,
            email: row.email,
            image: row.image,
            password_hash: row.password_hash,
            projects: row.projects.0,
        }
    }
}

fn backend(err: sqlx::Error) -> Error {
    Error::Backend(err.to_string())
}

#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore for PgStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserDocument>> {
        let row: Option<UserRow> =
            sqlx::query_as(&format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1"))
                .bind(email)
                .fetch_optional(&self.pool)
                .await
                .map_err(backend)?;
        Ok(row.map(Into::into))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<UserDocument>> {
        let row: Option<UserRow> =
            sqlx::query_as(&format!("SELECT {USER_COLUMNS} FROM users WHERE name = $1"))
                .bind(name)
                .fetch_optional(&self.pool)
                .await
                .map_err(backend)?;
        Ok(row.map(Into::into))
    }

    async fn insert(&self, user: UserDocument) -> Result<UserDocument> {
        let row: UserRow = sqlx::query_as(&format!(
            "INSERT INTO users ({USER_COLUMNS}) VALUES ($1, $2, $3, $4, $5) RETURNING {USER_COLUMNS}"
        ))
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.image)
        .bind(&user.password_hash)
        .bind(Json(&user.projects))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                if db.constraint() == Some("users_name_key") {
                    Error::DuplicateUser("name")
                } else {
                    Error::DuplicateUser("email")
                }
            }
            other => backend(other),
        })?;
        Ok(row.into())
    }

    async fn save(&self, user: &UserDocument) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET name = $2, image = $3, password_hash = $4, projects = $5, updated_at = NOW()
            WHERE email = $1
            "#,
        )
        .bind(&user.email)
        .bind(&user.name)
        .bind(&user.image)
        .bind(&user.password_hash)
        .bind(Json(&user.projects))
        .execute(&self.pool)
        .await
        .map_err(backend)?;

        if result.rows_affected() == 0 {
            return Err(Error::UserNotFound);
        }
        Ok(())
    }
}
