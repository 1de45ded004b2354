//! Bootstrap DDL for `users`, `cryptids` and `sightings`.
//! Order follows the foreign-key dependencies; every statement is idempotent.

use crate::error::AppError;
use sqlx::PgPool;

/// Arbitrary key for `pg_advisory_xact_lock` so concurrent starters apply the DDL one at a time.
const MIGRATION_LOCK_KEY: i64 = 0x4352_5950_5449_44;

/// Tables, constraints and indexes, in dependency order. Constraint names are
/// matched by `AppError`'s SQLSTATE mapping.
pub const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id              UUID PRIMARY KEY,
        username        VARCHAR(120) NOT NULL,
        email           VARCHAR(255) NOT NULL,
        hashed_password VARCHAR(255) NOT NULL,
        created_at      TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        CONSTRAINT uq_users_username UNIQUE (username),
        CONSTRAINT uq_users_email UNIQUE (email)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS cryptids (
        id                 UUID PRIMARY KEY,
        name               VARCHAR(200) NOT NULL,
        classification     VARCHAR(100),
        description        TEXT,
        rarity             VARCHAR(50),
        last_seen_location VARCHAR(200),
        created_by         UUID NOT NULL,
        created_at         TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        CONSTRAINT uq_cryptids_name UNIQUE (name),
        CONSTRAINT fk_cryptids_created_by FOREIGN KEY (created_by)
            REFERENCES users (id) ON DELETE CASCADE
    )
    "#,
    "CREATE INDEX IF NOT EXISTS ix_cryptids_created_by ON cryptids (created_by)",
    r#"
    CREATE TABLE IF NOT EXISTS sightings (
        id          UUID PRIMARY KEY,
        cryptid_id  UUID NOT NULL,
        chaser_id   UUID NOT NULL,
        location    VARCHAR(255) NOT NULL,
        sighted_at  TIMESTAMPTZ NOT NULL,
        confidence  INTEGER,
        notes       TEXT,
        created_at  TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at  TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        CONSTRAINT ck_sightings_confidence CHECK (confidence >= 1 AND confidence <= 5),
        CONSTRAINT fk_sightings_cryptid FOREIGN KEY (cryptid_id)
            REFERENCES cryptids (id) ON DELETE CASCADE,
        CONSTRAINT fk_sightings_chaser FOREIGN KEY (chaser_id)
            REFERENCES users (id) ON DELETE CASCADE
    )
    "#,
    "CREATE INDEX IF NOT EXISTS ix_sightings_cryptid_id ON sightings (cryptid_id)",
    "CREATE INDEX IF NOT EXISTS ix_sightings_chaser_id ON sightings (chaser_id)",
];

/// Apply the schema in one transaction. Safe to call on every start and from parallel callers.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;
    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(MIGRATION_LOCK_KEY)
        .execute(&mut *tx)
        .await?;
    for ddl in SCHEMA {
        sqlx::query(ddl).execute(&mut *tx).await?;
    }
    tx.commit().await?;
    tracing::info!(statements = SCHEMA.len(), "schema applied");
    Ok(())
}
