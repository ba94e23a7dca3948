use crate::api::handlers::businesses;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn business_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(businesses::find_businesses))
        .route("/categories", get(businesses::list_categories))
        .route("/:id", get(businesses::find_one))
}
