//! Builds partial UPDATE statements that assign only the columns a patch supplies.

use sqlx::{Encode, Postgres, QueryBuilder, Type};
use uuid::Uuid;

/// Quote identifier for PostgreSQL (safe: only from code).
pub fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Default page size for list queries.
pub const DEFAULT_LIMIT: u32 = 100;
/// Upper bound on a single page.
pub const MAX_LIMIT: u32 = 1000;

/// Clamp `limit`/`offset` query parameters to the page bounds.
pub fn page(limit: Option<u32>, offset: Option<u32>) -> (i64, i64) {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
    (i64::from(limit), i64::from(offset.unwrap_or(0)))
}

/// `UPDATE <table> SET col = $n, ... WHERE "id" = $m RETURNING *`, one assignment per supplied value.
pub struct UpdateBuilder<'args> {
    qb: QueryBuilder<'args, Postgres>,
    items: usize,
    assigned: usize,
}

impl<'args> UpdateBuilder<'args> {
    pub fn new(table: &str) -> Self {
        UpdateBuilder {
            qb: QueryBuilder::new(format!("UPDATE {} SET ", quoted(table))),
            items: 0,
            assigned: 0,
        }
    }

    fn separator(&mut self) {
        if self.items > 0 {
            self.qb.push(", ");
        }
        self.items += 1;
    }

    /// Assign `column` when `value` is present; `None` leaves the column untouched.
    pub fn set<T>(&mut self, column: &str, value: Option<T>) -> &mut Self
    where
        T: 'args + Encode<'args, Postgres> + Type<Postgres>,
    {
        if let Some(v) = value {
            self.separator();
            self.qb.push(quoted(column)).push(" = ").push_bind(v);
            self.assigned += 1;
        }
        self
    }

    /// `column = NOW()`. Does not count as a change on its own.
    pub fn touch(&mut self, column: &str) -> &mut Self {
        self.separator();
        self.qb.push(quoted(column)).push(" = NOW()");
        self
    }

    pub fn has_changes(&self) -> bool {
        self.assigned > 0
    }

    pub fn finish(mut self, id: Uuid) -> QueryBuilder<'args, Postgres> {
        self.qb.push(" WHERE \"id\" = ").push_bind(id).push(" RETURNING *");
        self.qb
    }
}
