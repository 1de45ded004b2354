//! Token issuance: exchange username + password for a signed access token.

use crate::error::AppError;
use crate::extractors::ValidJson;
use crate::schemas::{TokenRequest, TokenResponse};
use crate::service::auth::{issue_token, verify_password};
use crate::service::UserService;
use crate::state::AppState;
use axum::{extract::State, Json};

pub async fn token(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<TokenRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let user = UserService::get_by_username(&state.pool, &body.username)
        .await?
        .ok_or_else(|| AppError::Unauthorized("invalid username or password".into()))?;
    if !verify_password(&body.password, &user.hashed_password)? {
        tracing::debug!(username = %body.username, "password mismatch");
        return Err(AppError::Unauthorized("invalid username or password".into()));
    }
    let (access_token, expires_in) = issue_token(&state.settings, user.id, &user.username)?;
    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer",
        expires_in,
    }))
}
