use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Row of `cryptids`. `name` is unique; deleting the row removes its sightings.
#[derive(Debug, Clone, FromRow)]
pub struct Cryptid {
    pub id: Uuid,
    pub name: String,
    pub classification: Option<String>,
    pub description: Option<String>,
    pub rarity: Option<String>,
    pub last_seen_location: Option<String>,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
}
