use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Row of `sightings`: one report of a cryptid by a chaser.
#[derive(Debug, Clone, FromRow)]
pub struct Sighting {
    pub id: Uuid,
    pub cryptid_id: Uuid,
    pub chaser_id: Uuid,
    pub location: String,
    pub sighted_at: DateTime<Utc>,
    /// 1..=5 when present (CHECK constraint).
    pub confidence: Option<i32>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
