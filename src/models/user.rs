use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Row of `users`. Owns cryptids (as creator) and sightings (as chaser); both cascade on delete.
///
/// Carries the password hash, so it is never serialized; responses go through `UserOut`.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub hashed_password: String,
    pub created_at: DateTime<Utc>,
}
