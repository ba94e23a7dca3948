//! Business search handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use localist_taxonomy::Category;
use serde::{Deserialize, Serialize};

use crate::{state::AppState, Result};

#[derive(Debug, Deserialize)]
pub struct BusinessSearchQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub category: Option<String>,
    pub search: Option<String>,
}

pub async fn find_businesses(
    State(state): State<AppState>,
    Query(query): Query<BusinessSearchQuery>,
) -> Result<Response> {
    let businesses = state
        .business_service
        .find_businesses(
            query.limit.unwrap_or(0),
            query.offset.unwrap_or(0),
            query.category.as_deref(),
            query.search.as_deref(),
        )
        .await?;

    Ok((StatusCode::OK, Json(businesses)).into_response())
}

pub async fn find_one(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response> {
    let business = state.business_service.find_one(id).await?;
    Ok((StatusCode::OK, Json(business)).into_response())
}

#[derive(Debug, Serialize)]
pub struct CategoryListing {
    pub category: &'static str,
    pub subcategories: &'static [&'static str],
}

/// The closed taxonomy, for populating client filter controls.
pub async fn list_categories() -> Response {
    let listing: Vec<CategoryListing> = Category::all()
        .iter()
        .map(|category| CategoryListing {
            category: category.label(),
            subcategories: category.subcategories(),
        })
        .collect();

    (StatusCode::OK, Json(listing)).into_response()
}
