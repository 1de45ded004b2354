//! Cryptid CRUD handlers.

use super::{parse_id, ListParams};
use crate::error::AppError;
use crate::extractors::ValidJson;
use crate::response::{success_many, success_one, success_one_ok};
use crate::schemas::{CryptidCreate, CryptidOut, CryptidUpdate, SightingOut};
use crate::service::{CryptidService, SightingFilter, SightingService};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::collections::HashMap;

pub async fn create(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<CryptidCreate>,
) -> Result<impl IntoResponse, AppError> {
    let cryptid = CryptidService::create(&state.pool, &body).await?;
    Ok(success_one(CryptidOut::from(cryptid)))
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let params = ListParams::parse(params, &["created_by"])?;
    let rows = CryptidService::list(
        &state.pool,
        params.filter("created_by"),
        params.limit,
        params.offset,
    )
    .await?;
    Ok(success_many(rows.into_iter().map(CryptidOut::from).collect()))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let cryptid = CryptidService::get(&state.pool, id).await?;
    Ok(success_one_ok(CryptidOut::from(cryptid)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    ValidJson(patch): ValidJson<CryptidUpdate>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let cryptid = CryptidService::update(&state.pool, id, &patch).await?;
    Ok(success_one_ok(CryptidOut::from(cryptid)))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    CryptidService::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /cryptids/:id/sightings: sightings of this cryptid, newest first.
pub async fn list_sightings(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    CryptidService::get(&state.pool, id).await?;
    let params = ListParams::parse(params, &["chaser_id"])?;
    let filter = SightingFilter {
        cryptid_id: Some(id),
        chaser_id: params.filter("chaser_id"),
    };
    let rows = SightingService::list(&state.pool, filter, params.limit, params.offset).await?;
    Ok(success_many(rows.into_iter().map(SightingOut::from).collect()))
}
