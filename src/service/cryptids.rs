//! Cryptids: create, read, list (optionally by creator), partial update, delete with cascade.

use crate::error::AppError;
use crate::models::Cryptid;
use crate::schemas::{CryptidCreate, CryptidUpdate};
use crate::sql::{page, UpdateBuilder};
use sqlx::PgPool;
use uuid::Uuid;

pub struct CryptidService;

impl CryptidService {
    pub async fn create(pool: &PgPool, input: &CryptidCreate) -> Result<Cryptid, AppError> {
        let cryptid = sqlx::query_as::<_, Cryptid>(
            "INSERT INTO cryptids (id, name, classification, description, rarity, last_seen_location, created_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&input.name)
        .bind(&input.classification)
        .bind(&input.description)
        .bind(&input.rarity)
        .bind(&input.last_seen_location)
        .bind(input.created_by)
        .fetch_one(pool)
        .await?;
        tracing::info!(cryptid_id = %cryptid.id, name = %cryptid.name, "cryptid created");
        Ok(cryptid)
    }

    pub async fn get(pool: &PgPool, id: Uuid) -> Result<Cryptid, AppError> {
        sqlx::query_as::<_, Cryptid>("SELECT * FROM cryptids WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("cryptid {}", id)))
    }

    /// List cryptids, optionally only those created by `created_by`.
    pub async fn list(
        pool: &PgPool,
        created_by: Option<Uuid>,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Vec<Cryptid>, AppError> {
        let (limit, offset) = page(limit, offset);
        let rows = sqlx::query_as::<_, Cryptid>(
            "SELECT * FROM cryptids
             WHERE ($1::uuid IS NULL OR created_by = $1)
             ORDER BY created_at, id
             LIMIT $2 OFFSET $3",
        )
        .bind(created_by)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    pub async fn update(pool: &PgPool, id: Uuid, patch: &CryptidUpdate) -> Result<Cryptid, AppError> {
        let mut b = UpdateBuilder::new("cryptids");
        b.set("name", patch.name.clone())
            .set("classification", patch.classification.clone())
            .set("description", patch.description.clone())
            .set("rarity", patch.rarity.clone())
            .set("last_seen_location", patch.last_seen_location.clone());
        if !b.has_changes() {
            return Self::get(pool, id).await;
        }
        let cryptid = b
            .finish(id)
            .build_query_as::<Cryptid>()
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("cryptid {}", id)))?;
        tracing::debug!(cryptid_id = %id, "cryptid updated");
        Ok(cryptid)
    }

    /// Delete a cryptid and, through the cascade, its sightings. Returns the number of sightings removed.
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<i64, AppError> {
        let mut tx = pool.begin().await?;
        let (sightings,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM sightings WHERE cryptid_id = $1")
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;
        let result = sqlx::query("DELETE FROM cryptids WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("cryptid {}", id)));
        }
        tx.commit().await?;
        tracing::info!(cryptid_id = %id, sightings, "cryptid deleted with sightings");
        Ok(sightings)
    }
}
