//! Postgres-backed user store.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::instrument;
use uuid::Uuid;

use planner_core::{NewUser, User, UserId};

use super::r#trait::UserStore;
use crate::error::{map_sqlx_error, StoreError};

/// Postgres-backed user store.
///
/// Uniqueness of `email` is enforced by the `users_email_key` constraint;
/// a violation surfaces as `StoreError::Duplicate`.
#[derive(Debug, Clone)]
pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct UserRow {
    id: Uuid,
    email: String,
    password_hash: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: UserId::from_uuid(row.id),
            email: row.email,
            password_hash: row.password_hash,
        }
    }
}

#[async_trait]
impl UserStore for PostgresUserStore {
    #[instrument(skip(self, user), fields(email = %user.email), err)]
    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        let id = UserId::new();

        sqlx::query(
            r#"
            INSERT INTO users (id, email, password_hash)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(id.as_uuid())
        .bind(&user.email)
        .bind(&user.password_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("users.create", e))?;

        Ok(User {
            id,
            email: user.email,
            password_hash: user.password_hash,
        })
    }

    #[instrument(skip(self), err)]
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, email, password_hash
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("users.find_by_email", e))?;

        row.map(|r| {
            UserRow::from_row(&r)
                .map(User::from)
                .map_err(|e| StoreError::Database(format!("failed to decode user row: {e}")))
        })
        .transpose()
    }
}
