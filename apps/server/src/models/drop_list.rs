//! Drop-list items: one user's tracked interest in one business.
//!
//! At most one item exists per (user, business) pair; the pair carries a
//! unique constraint in the schema. Items are working state and are hard
//! deleted on removal, unlike reviews.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Application pipeline status of a tracked business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "kebab-case")]
#[sqlx(type_name = "drop_state", rename_all = "kebab-case")]
pub enum DropState {
    ToVisit,
    Dropped,
    Interviewed,
    Hired,
    NotPursuing,
}

/// How the application was (or will be) submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "kebab-case")]
#[sqlx(type_name = "drop_method", rename_all = "kebab-case")]
pub enum DropMethod {
    InPerson,
    Email,
    Phone,
    Online,
}

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DropListItem {
    pub id: i64,
    pub user_id: i64,
    pub business_id: i64,
    pub status: DropState,
    pub method: DropMethod,
    pub planned_drop_date: Option<NaiveDate>,
    pub actual_drop_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload; the owning user comes from the identity boundary,
/// never from the client.
#[derive(Debug, Clone)]
pub struct NewDropListItem {
    pub business_id: i64,
    pub status: DropState,
    pub method: DropMethod,
    pub planned_drop_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct DropListItemChanges {
    pub status: Option<DropState>,
    pub method: Option<DropMethod>,
    pub planned_drop_date: Option<NaiveDate>,
    pub actual_drop_date: Option<NaiveDate>,
    pub notes: Option<String>,
}
