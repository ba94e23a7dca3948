//! PostgreSQL-backed `ReviewStore` implementation.
//!
//! Every read and every ownership-scoped mutation carries
//! `is_deleted = FALSE` in its predicate: a soft-deleted review is invisible
//! to listings, uniqueness checks, updates and repeat deletes alike.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{types::Json, PgPool};

use crate::{
    db::traits::ReviewStore,
    models::{
        InterviewReview, NewReview, Review, ReviewAuthor, ReviewChanges, ReviewKind, ReviewTag,
        WorkReview,
    },
    Result,
};

const REVIEW_COLUMNS: &str = "id, user_id, business_id, kind, interview_review, work_review, \
     tags, is_deleted, likes, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresReviewStore {
    pool: PgPool,
}

impl PostgresReviewStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ReviewWithAuthorRow {
    id: i64,
    user_id: i64,
    business_id: i64,
    kind: ReviewKind,
    interview_review: Option<Json<InterviewReview>>,
    work_review: Option<Json<WorkReview>>,
    tags: Option<Vec<ReviewTag>>,
    is_deleted: bool,
    likes: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    author_email: String,
}

impl ReviewWithAuthorRow {
    fn into_parts(self) -> (Review, ReviewAuthor) {
        let author = ReviewAuthor {
            id: self.user_id,
            email: self.author_email,
        };
        let review = Review {
            id: self.id,
            user_id: self.user_id,
            business_id: self.business_id,
            kind: self.kind,
            interview_review: self.interview_review,
            work_review: self.work_review,
            tags: self.tags,
            is_deleted: self.is_deleted,
            likes: self.likes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        };
        (review, author)
    }
}

#[async_trait]
impl ReviewStore for PostgresReviewStore {
    async fn active_exists(&self, user_id: i64, business_id: i64) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(
                 SELECT 1 FROM reviews
                 WHERE user_id = $1 AND business_id = $2 AND is_deleted = FALSE
             )",
        )
        .bind(user_id)
        .bind(business_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn insert(&self, user_id: i64, review: &NewReview) -> Result<Review> {
        let sql = format!(
            "INSERT INTO reviews
                (user_id, business_id, kind, interview_review, work_review, tags)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {REVIEW_COLUMNS}"
        );

        let review = sqlx::query_as::<_, Review>(&sql)
            .bind(user_id)
            .bind(review.business_id)
            .bind(review.kind)
            .bind(review.interview_review.as_ref().map(Json))
            .bind(review.work_review.as_ref().map(Json))
            .bind(&review.tags)
            .fetch_one(&self.pool)
            .await?;

        Ok(review)
    }

    async fn list_for_business(
        &self,
        business_id: i64,
        keyword: Option<&str>,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<(Review, ReviewAuthor)>> {
        let pattern = keyword.map(|kw| format!("%{kw}%"));

        let rows = sqlx::query_as::<_, ReviewWithAuthorRow>(
            "SELECT r.id, r.user_id, r.business_id, r.kind, r.interview_review,
                    r.work_review, r.tags, r.is_deleted, r.likes, r.created_at,
                    r.updated_at, u.email AS author_email
             FROM reviews r
             JOIN users u ON u.id = r.user_id
             WHERE r.business_id = $1
               AND r.is_deleted = FALSE
               AND ($2::TEXT IS NULL
                    OR r.interview_review::TEXT ILIKE $2
                    OR r.work_review::TEXT ILIKE $2)
             ORDER BY r.created_at DESC, r.id DESC
             LIMIT $3 OFFSET $4",
        )
        .bind(business_id)
        .bind(pattern)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ReviewWithAuthorRow::into_parts).collect())
    }

    async fn update(
        &self,
        user_id: i64,
        id: i64,
        changes: &ReviewChanges,
    ) -> Result<Option<Review>> {
        let sql = format!(
            "UPDATE reviews
             SET interview_review = COALESCE($3, interview_review),
                 work_review = COALESCE($4, work_review),
                 tags = COALESCE($5, tags),
                 updated_at = NOW()
             WHERE id = $1 AND user_id = $2 AND is_deleted = FALSE
             RETURNING {REVIEW_COLUMNS}"
        );

        let review = sqlx::query_as::<_, Review>(&sql)
            .bind(id)
            .bind(user_id)
            .bind(changes.interview_review.as_ref().map(Json))
            .bind(changes.work_review.as_ref().map(Json))
            .bind(&changes.tags)
            .fetch_optional(&self.pool)
            .await?;

        Ok(review)
    }

    async fn soft_delete(&self, user_id: i64, id: i64) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE reviews
             SET is_deleted = TRUE, updated_at = NOW()
             WHERE id = $1 AND user_id = $2 AND is_deleted = FALSE",
        )
        .bind(id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
