//! Current-user handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{auth::AuthUser, state::AppState, Error, Result};

/// The caller's stored profile. The identity boundary supplies the id;
/// a token naming a user the store does not have answers NotFound.
pub async fn me(State(state): State<AppState>, user: AuthUser) -> Result<Response> {
    let profile = state
        .users
        .find_by_id(user.id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("User {} not found", user.id)))?;

    Ok((StatusCode::OK, Json(profile)).into_response())
}
