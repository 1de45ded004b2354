//! Sighting CRUD handlers.

use super::{parse_id, ListParams};
use crate::error::AppError;
use crate::extractors::ValidJson;
use crate::response::{success_many, success_one, success_one_ok};
use crate::schemas::{SightingCreate, SightingOut, SightingUpdate};
use crate::service::{SightingFilter, SightingService};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::collections::HashMap;

pub async fn create(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<SightingCreate>,
) -> Result<impl IntoResponse, AppError> {
    let sighting = SightingService::create(&state.pool, &body).await?;
    Ok(success_one(SightingOut::from(sighting)))
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let params = ListParams::parse(params, &["cryptid_id", "chaser_id"])?;
    let filter = SightingFilter {
        cryptid_id: params.filter("cryptid_id"),
        chaser_id: params.filter("chaser_id"),
    };
    let rows = SightingService::list(&state.pool, filter, params.limit, params.offset).await?;
    Ok(success_many(rows.into_iter().map(SightingOut::from).collect()))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let sighting = SightingService::get(&state.pool, id).await?;
    Ok(success_one_ok(SightingOut::from(sighting)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    ValidJson(patch): ValidJson<SightingUpdate>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let sighting = SightingService::update(&state.pool, id, &patch).await?;
    Ok(success_one_ok(SightingOut::from(sighting)))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    SightingService::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
