//! User CRUD handlers.

use super::{parse_id, ListParams};
use crate::error::AppError;
use crate::extractors::ValidJson;
use crate::response::{success_many, success_one, success_one_ok};
use crate::schemas::{SightingOut, UserCreate, UserOut, UserUpdate};
use crate::service::{SightingFilter, SightingService, UserService};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::collections::HashMap;

pub async fn create(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<UserCreate>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::create(&state.pool, &body).await?;
    Ok(success_one(UserOut::from(user)))
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let params = ListParams::parse(params, &[])?;
    let rows = UserService::list(&state.pool, params.limit, params.offset).await?;
    Ok(success_many(rows.into_iter().map(UserOut::from).collect()))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let user = UserService::get(&state.pool, id).await?;
    Ok(success_one_ok(UserOut::from(user)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    ValidJson(patch): ValidJson<UserUpdate>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let user = UserService::update(&state.pool, id, &patch).await?;
    Ok(success_one_ok(UserOut::from(user)))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    UserService::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /users/:id/sightings: sightings reported by this user.
pub async fn list_sightings(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    UserService::get(&state.pool, id).await?;
    let params = ListParams::parse(params, &["cryptid_id"])?;
    let filter = SightingFilter {
        cryptid_id: params.filter("cryptid_id"),
        chaser_id: Some(id),
    };
    let rows = SightingService::list(&state.pool, filter, params.limit, params.offset).await?;
    Ok(success_many(rows.into_iter().map(SightingOut::from).collect()))
}
