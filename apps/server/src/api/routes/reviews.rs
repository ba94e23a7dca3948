use crate::api::handlers::reviews;
use crate::state::AppState;
use axum::{
    routing::{get, patch, post},
    Router,
};

pub fn review_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(reviews::create))
        .route("/business/:business_id", get(reviews::list_for_business))
        .route("/:id", patch(reviews::update).delete(reviews::remove))
}
