//! HTTP handlers for users, cryptids, sightings, and token issuance.

pub mod auth;
pub mod cryptids;
pub mod sightings;
pub mod users;

use crate::error::AppError;
use std::collections::HashMap;
use uuid::Uuid;

fn parse_id(id_str: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id_str).map_err(|_| AppError::BadRequest(format!("invalid id: {}", id_str)))
}

/// Paging and filter parameters shared by the list endpoints.
struct ListParams {
    limit: Option<u32>,
    offset: Option<u32>,
    filters: HashMap<String, Uuid>,
}

impl ListParams {
    /// Parse `limit`, `offset` and the given uuid-valued filter names. Unknown keys are ignored.
    fn parse(params: HashMap<String, String>, filter_names: &[&str]) -> Result<Self, AppError> {
        let mut out = ListParams {
            limit: None,
            offset: None,
            filters: HashMap::new(),
        };
        for (k, v) in params {
            match k.as_str() {
                "limit" => out.limit = Some(parse_u32(&k, &v)?),
                "offset" => out.offset = Some(parse_u32(&k, &v)?),
                _ if filter_names.contains(&k.as_str()) => {
                    let id = Uuid::parse_str(&v)
                        .map_err(|_| AppError::BadRequest(format!("{} must be a uuid", k)))?;
                    out.filters.insert(k, id);
                }
                _ => {}
            }
        }
        Ok(out)
    }

    fn filter(&self, name: &str) -> Option<Uuid> {
        self.filters.get(name).copied()
    }
}

fn parse_u32(key: &str, v: &str) -> Result<u32, AppError> {
    v.parse()
        .map_err(|_| AppError::BadRequest(format!("{} must be a non-negative integer", key)))
}
