//! CRUD routes for users, cryptids and sightings, plus token issuance. Mounted under `/api/v1`.

use crate::handlers::{auth, cryptids, sightings, users};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/users", get(users::list).post(users::create))
        .route(
            "/users/:id",
            get(users::read).patch(users::update).delete(users::delete),
        )
        .route("/users/:id/sightings", get(users::list_sightings))
        .route("/cryptids", get(cryptids::list).post(cryptids::create))
        .route(
            "/cryptids/:id",
            get(cryptids::read).patch(cryptids::update).delete(cryptids::delete),
        )
        .route("/cryptids/:id/sightings", get(cryptids::list_sightings))
        .route("/sightings", get(sightings::list).post(sightings::create))
        .route(
            "/sightings/:id",
            get(sightings::read).patch(sightings::update).delete(sightings::delete),
        )
        .route("/auth/token", post(auth::token))
        .with_state(state)
}
