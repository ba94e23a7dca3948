//! Drop-list handlers. All routes require an authenticated caller.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::{
    api::envelope::Envelope,
    auth::AuthUser,
    models::{DropListItemChanges, DropMethod, DropState, NewDropListItem},
    state::AppState,
};

pub async fn find_my_drop_list(State(state): State<AppState>, user: AuthUser) -> Response {
    state.drop_list_service.list_mine(user.id).await.into_response()
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDropListItemRequest {
    pub business_id: i64,
    pub status: DropState,
    pub method: DropMethod,
    pub planned_drop_date: Option<NaiveDate>,
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(body): Json<CreateDropListItemRequest>,
) -> Response {
    if let Err(err) = body.validate() {
        return Envelope::<()>::rejected(err.to_string(), 400).into_response();
    }

    let item = NewDropListItem {
        business_id: body.business_id,
        status: body.status,
        method: body.method,
        planned_drop_date: body.planned_drop_date,
        notes: body.notes,
    };

    state.drop_list_service.create(user.id, item).await.into_response()
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDropListItemRequest {
    pub status: Option<DropState>,
    pub method: Option<DropMethod>,
    pub planned_drop_date: Option<NaiveDate>,
    pub actual_drop_date: Option<NaiveDate>,
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
    Json(body): Json<UpdateDropListItemRequest>,
) -> Response {
    if let Err(err) = body.validate() {
        return Envelope::<()>::rejected(err.to_string(), 400).into_response();
    }

    let changes = DropListItemChanges {
        status: body.status,
        method: body.method,
        planned_drop_date: body.planned_drop_date,
        actual_drop_date: body.actual_drop_date,
        notes: body.notes,
    };

    state
        .drop_list_service
        .update(user.id, id, changes)
        .await
        .into_response()
}

/// Equal-length arrays; `status[i]` applies to `ids[i]`.
#[derive(Debug, Deserialize, Validate)]
pub struct BulkUpdateRequest {
    #[validate(length(min = 1))]
    pub ids: Vec<i64>,
    #[validate(length(min = 1))]
    pub status: Vec<DropState>,
}

pub async fn bulk_update(
    State(state): State<AppState>,
    user: AuthUser,
    Json(body): Json<BulkUpdateRequest>,
) -> Response {
    if let Err(err) = body.validate() {
        return Envelope::<()>::rejected(err.to_string(), 400).into_response();
    }

    state
        .drop_list_service
        .bulk_update(user.id, body.ids, body.status)
        .await
        .into_response()
}

pub async fn remove(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Response {
    state.drop_list_service.remove(user.id, id).await.into_response()
}
