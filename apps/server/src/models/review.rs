//! Reviews: one user's account of interviewing at or working for a business.
//!
//! A review is either an interview review or a work review; exactly one
//! kind-specific payload is stored, matching the declared kind. Reviews are
//! quasi-audit data: removal sets `is_deleted` instead of dropping the row,
//! and the (user, business) uniqueness constraint only counts non-deleted
//! rows (a partial unique index in the schema).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "review_kind", rename_all = "lowercase")]
pub enum ReviewKind {
    Interview,
    Work,
}

/// Fixed tag vocabulary. Labels are stored and serialized verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "review_tag")]
pub enum ReviewTag {
    #[serde(rename = "Friendly Staff")]
    #[sqlx(rename = "Friendly Staff")]
    FriendlyStaff,
    #[serde(rename = "Work-Life Balance")]
    #[sqlx(rename = "Work-Life Balance")]
    WorkLifeBalance,
    #[serde(rename = "Good Pay")]
    #[sqlx(rename = "Good Pay")]
    GoodPay,
    #[serde(rename = "Flexible Hours")]
    #[sqlx(rename = "Flexible Hours")]
    FlexibleHours,
    #[serde(rename = "Fast Hiring")]
    #[sqlx(rename = "Fast Hiring")]
    FastHiring,
    #[serde(rename = "Professional Environment")]
    #[sqlx(rename = "Professional Environment")]
    ProfessionalEnvironment,
    #[serde(rename = "Busy Workplace")]
    #[sqlx(rename = "Busy Workplace")]
    BusyWorkplace,
    #[serde(rename = "Quiet Workplace")]
    #[sqlx(rename = "Quiet Workplace")]
    QuietWorkplace,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InterviewReview {
    pub questions_asked: Option<String>,
    pub atmosphere: Option<String>,
    pub outcome: Option<String>,
    pub application_method: Option<String>,
    pub wait_time: Option<String>,
    pub dress_code: Option<String>,
}

impl InterviewReview {
    /// An all-`None` payload does not satisfy the create-time requirement.
    pub fn is_empty(&self) -> bool {
        self.questions_asked.is_none()
            && self.atmosphere.is_none()
            && self.outcome.is_none()
            && self.application_method.is_none()
            && self.wait_time.is_none()
            && self.dress_code.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkReview {
    pub position: Option<String>,
    pub pay: Option<Decimal>,
    pub benefits: Option<String>,
    pub environment: Option<String>,
    pub growth_opportunities: Option<String>,
}

impl WorkReview {
    pub fn is_empty(&self) -> bool {
        self.position.is_none()
            && self.pay.is_none()
            && self.benefits.is_none()
            && self.environment.is_none()
            && self.growth_opportunities.is_none()
    }
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,
    pub user_id: i64,
    pub business_id: i64,
    pub kind: ReviewKind,
    pub interview_review: Option<Json<InterviewReview>>,
    pub work_review: Option<Json<WorkReview>>,
    pub tags: Option<Vec<ReviewTag>>,
    pub is_deleted: bool,
    pub likes: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Minimal author identity included in listings for attribution display.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewAuthor {
    pub id: i64,
    pub email: String,
}

/// Listing projection: the review plus its author.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDto {
    pub id: i64,
    pub business_id: i64,
    pub kind: ReviewKind,
    pub interview_review: Option<InterviewReview>,
    pub work_review: Option<WorkReview>,
    pub tags: Vec<ReviewTag>,
    pub likes: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user: ReviewAuthor,
}

impl ReviewDto {
    pub fn from_parts(review: Review, author: ReviewAuthor) -> Self {
        Self {
            id: review.id,
            business_id: review.business_id,
            kind: review.kind,
            interview_review: review.interview_review.map(|p| p.0),
            work_review: review.work_review.map(|p| p.0),
            tags: review.tags.unwrap_or_default(),
            likes: review.likes,
            created_at: review.created_at,
            updated_at: review.updated_at,
            user: author,
        }
    }
}

/// Insert payload. The service guarantees exactly one payload is set and
/// that it matches `kind`.
#[derive(Debug, Clone)]
pub struct NewReview {
    pub business_id: i64,
    pub kind: ReviewKind,
    pub interview_review: Option<InterviewReview>,
    pub work_review: Option<WorkReview>,
    pub tags: Vec<ReviewTag>,
}

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct ReviewChanges {
    pub interview_review: Option<InterviewReview>,
    pub work_review: Option<WorkReview>,
    pub tags: Option<Vec<ReviewTag>>,
}
