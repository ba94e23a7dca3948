use crate::api::handlers::users;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn user_routes() -> Router<AppState> {
    Router::new().route("/me", get(users::me))
}
