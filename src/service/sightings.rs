//! Sightings: create, read, list (by cryptid and/or chaser), partial update, delete.

use crate::error::AppError;
use crate::models::Sighting;
use crate::schemas::{SightingCreate, SightingUpdate};
use crate::sql::{page, UpdateBuilder};
use sqlx::PgPool;
use uuid::Uuid;

/// Exact-match filters for `SightingService::list`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SightingFilter {
    pub cryptid_id: Option<Uuid>,
    pub chaser_id: Option<Uuid>,
}

pub struct SightingService;

impl SightingService {
    pub async fn create(pool: &PgPool, input: &SightingCreate) -> Result<Sighting, AppError> {
        let sighting = sqlx::query_as::<_, Sighting>(
            "INSERT INTO sightings (id, cryptid_id, chaser_id, location, sighted_at, confidence, notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(input.cryptid_id)
        .bind(input.chaser_id)
        .bind(&input.location)
        .bind(input.sighted_at)
        .bind(input.confidence)
        .bind(&input.notes)
        .fetch_one(pool)
        .await?;
        tracing::info!(
            sighting_id = %sighting.id,
            cryptid_id = %sighting.cryptid_id,
            chaser_id = %sighting.chaser_id,
            "sighting reported"
        );
        Ok(sighting)
    }

    pub async fn get(pool: &PgPool, id: Uuid) -> Result<Sighting, AppError> {
        sqlx::query_as::<_, Sighting>("SELECT * FROM sightings WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("sighting {}", id)))
    }

    /// Most recent sightings first.
    pub async fn list(
        pool: &PgPool,
        filter: SightingFilter,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Vec<Sighting>, AppError> {
        let (limit, offset) = page(limit, offset);
        let rows = sqlx::query_as::<_, Sighting>(
            "SELECT * FROM sightings
             WHERE ($1::uuid IS NULL OR cryptid_id = $1)
               AND ($2::uuid IS NULL OR chaser_id = $2)
             ORDER BY sighted_at DESC, id
             LIMIT $3 OFFSET $4",
        )
        .bind(filter.cryptid_id)
        .bind(filter.chaser_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    /// Apply a partial update and bump `updated_at`. An empty patch returns the row untouched.
    pub async fn update(pool: &PgPool, id: Uuid, patch: &SightingUpdate) -> Result<Sighting, AppError> {
        let mut b = UpdateBuilder::new("sightings");
        b.set("location", patch.location.clone())
            .set("sighted_at", patch.sighted_at)
            .set("confidence", patch.confidence)
            .set("notes", patch.notes.clone());
        if !b.has_changes() {
            return Self::get(pool, id).await;
        }
        b.touch("updated_at");
        let sighting = b
            .finish(id)
            .build_query_as::<Sighting>()
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("sighting {}", id)))?;
        tracing::debug!(sighting_id = %id, "sighting updated");
        Ok(sighting)
    }

    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM sightings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("sighting {}", id)));
        }
        tracing::info!(sighting_id = %id, "sighting deleted");
        Ok(())
    }
}
