use crate::api::handlers::droplist;
use crate::state::AppState;
use axum::{
    routing::{get, patch, post, put},
    Router,
};

pub fn droplist_routes() -> Router<AppState> {
    Router::new()
        .route("/my", get(droplist::find_my_drop_list))
        .route("/", post(droplist::create))
        .route("/bulk", patch(droplist::bulk_update))
        .route("/:id", put(droplist::update).delete(droplist::remove))
}
