//! Users: create (hashing the password), read, list, partial update, delete with cascade.

use crate::error::AppError;
use crate::models::User;
use crate::schemas::{UserCreate, UserUpdate};
use crate::service::auth::hash_password;
use crate::sql::{page, UpdateBuilder};
use sqlx::PgPool;
use uuid::Uuid;

/// What a user delete removed along with the user row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserCascade {
    pub cryptids: i64,
    pub sightings: i64,
}

pub struct UserService;

impl UserService {
    pub async fn create(pool: &PgPool, input: &UserCreate) -> Result<User, AppError> {
        let hashed = hash_password(&input.password)?;
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (id, username, email, hashed_password) VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&input.username)
        .bind(&input.email)
        .bind(&hashed)
        .fetch_one(pool)
        .await?;
        tracing::info!(user_id = %user.id, username = %user.username, "user created");
        Ok(user)
    }

    pub async fn get(pool: &PgPool, id: Uuid) -> Result<User, AppError> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user {}", id)))
    }

    pub async fn get_by_username(pool: &PgPool, username: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(pool)
            .await?;
        Ok(user)
    }

    /// List users ordered by creation; limit defaults to 100, max 1000.
    pub async fn list(pool: &PgPool, limit: Option<u32>, offset: Option<u32>) -> Result<Vec<User>, AppError> {
        let (limit, offset) = page(limit, offset);
        let rows = sqlx::query_as::<_, User>(
            "SELECT * FROM users ORDER BY created_at, id LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    /// Apply a partial update. A new password is re-hashed; absent fields stay as they are.
    pub async fn update(pool: &PgPool, id: Uuid, patch: &UserUpdate) -> Result<User, AppError> {
        let hashed = patch.password.as_deref().map(hash_password).transpose()?;
        let mut b = UpdateBuilder::new("users");
        b.set("username", patch.username.clone())
            .set("email", patch.email.clone())
            .set("hashed_password", hashed);
        if !b.has_changes() {
            return Self::get(pool, id).await;
        }
        let user = b
            .finish(id)
            .build_query_as::<User>()
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user {}", id)))?;
        tracing::debug!(user_id = %id, "user updated");
        Ok(user)
    }

    /// Delete a user; its cryptids and sightings (and the sightings of those cryptids) go with it.
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<UserCascade, AppError> {
        let mut tx = pool.begin().await?;
        let (cryptids,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM cryptids WHERE created_by = $1")
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;
        let (sightings,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM sightings
             WHERE chaser_id = $1
                OR cryptid_id IN (SELECT id FROM cryptids WHERE created_by = $1)",
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("user {}", id)));
        }
        tx.commit().await?;
        tracing::info!(user_id = %id, cryptids, sightings, "user deleted with dependents");
        Ok(UserCascade { cryptids, sightings })
    }
}
