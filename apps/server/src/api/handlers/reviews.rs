//! Review handlers. Listing is public; mutations require authentication.

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::{
    auth::AuthUser,
    models::{InterviewReview, NewReview, ReviewChanges, ReviewKind, ReviewTag, WorkReview},
    state::AppState,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    pub business_id: i64,
    pub review_type: ReviewKind,
    pub interview_review: Option<InterviewReview>,
    pub work_review: Option<WorkReview>,
    pub tags: Option<Vec<ReviewTag>>,
}

pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(body): Json<CreateReviewRequest>,
) -> Response {
    let review = NewReview {
        business_id: body.business_id,
        kind: body.review_type,
        interview_review: body.interview_review,
        work_review: body.work_review,
        tags: body.tags.unwrap_or_default(),
    };

    state.review_service.create(user.id, review).await.into_response()
}

#[derive(Debug, Deserialize)]
pub struct ReviewListQuery {
    pub keyword: Option<String>,
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

pub async fn list_for_business(
    State(state): State<AppState>,
    Path(business_id): Path<i64>,
    Query(query): Query<ReviewListQuery>,
) -> Response {
    state
        .review_service
        .list_for_business(
            business_id,
            query.keyword.as_deref(),
            query.offset.unwrap_or(0),
            query.limit.unwrap_or(0),
        )
        .await
        .into_response()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReviewRequest {
    pub interview_review: Option<InterviewReview>,
    pub work_review: Option<WorkReview>,
    pub tags: Option<Vec<ReviewTag>>,
}

pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
    Json(body): Json<UpdateReviewRequest>,
) -> Response {
    let changes = ReviewChanges {
        interview_review: body.interview_review,
        work_review: body.work_review,
        tags: body.tags,
    };

    state
        .review_service
        .update(user.id, id, changes)
        .await
        .into_response()
}

pub async fn remove(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Response {
    state.review_service.remove(user.id, id).await.into_response()
}
