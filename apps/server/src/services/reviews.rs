//! Review service.
//!
//! Reviews soft-delete: removal flips a flag and the row stays for history,
//! while the (user, business) uniqueness rule only counts non-deleted rows.
//! A user can therefore review a business again after deleting their prior
//! review. Kind-specific payloads are validated before anything is
//! persisted.

use std::sync::Arc;

use crate::{
    api::envelope::Envelope,
    config::SearchConfig,
    db::{BusinessStore, ReviewStore},
    models::{NewReview, Review, ReviewChanges, ReviewDto, ReviewKind},
    Error, Result,
};

pub struct ReviewService {
    store: Arc<dyn ReviewStore>,
    businesses: Arc<dyn BusinessStore>,
    max_page_size: i64,
}

/// Default listing page size when the caller omits `limit`.
const DEFAULT_LIST_LIMIT: i64 = 10;

impl ReviewService {
    pub fn new(
        store: Arc<dyn ReviewStore>,
        businesses: Arc<dyn BusinessStore>,
        search: &SearchConfig,
    ) -> Self {
        Self {
            store,
            businesses,
            max_page_size: search.max_page_size,
        }
    }

    pub async fn create(&self, user_id: i64, review: NewReview) -> Envelope<Review> {
        match self.try_create(user_id, review).await {
            Ok(review) => Envelope::created(review, "Review created successfully"),
            Err(err) => Envelope::from_error("Failed to create review", err),
        }
    }

    async fn try_create(&self, user_id: i64, mut review: NewReview) -> Result<Review> {
        if self
            .businesses
            .find_by_id(review.business_id)
            .await?
            .is_none()
        {
            return Err(Error::NotFound(format!(
                "Business {} not found",
                review.business_id
            )));
        }

        // The payload matching the declared kind must be present and
        // non-empty; the other payload is discarded so exactly one is stored.
        match review.kind {
            ReviewKind::Interview => {
                let populated = review
                    .interview_review
                    .as_ref()
                    .is_some_and(|p| !p.is_empty());
                if !populated {
                    return Err(Error::Validation(
                        "interviewReview is required for interview reviews".to_string(),
                    ));
                }
                review.work_review = None;
            }
            ReviewKind::Work => {
                let populated = review.work_review.as_ref().is_some_and(|p| !p.is_empty());
                if !populated {
                    return Err(Error::Validation(
                        "workReview is required for work reviews".to_string(),
                    ));
                }
                review.interview_review = None;
            }
        }

        if self
            .store
            .active_exists(user_id, review.business_id)
            .await?
        {
            return Err(Error::Duplicate("Review already exists".to_string()));
        }

        self.store.insert(user_id, &review).await
    }

    /// Active reviews for a business, newest first. `keyword` filters on the
    /// payload text, case-insensitively.
    pub async fn list_for_business(
        &self,
        business_id: i64,
        keyword: Option<&str>,
        offset: i64,
        limit: i64,
    ) -> Envelope<Vec<ReviewDto>> {
        let limit = if limit <= 0 {
            DEFAULT_LIST_LIMIT
        } else {
            limit.min(self.max_page_size)
        };
        let offset = offset.max(0);
        let keyword = keyword.filter(|kw| !kw.trim().is_empty());

        match self
            .store
            .list_for_business(business_id, keyword, offset, limit)
            .await
        {
            Ok(rows) => {
                let reviews: Vec<ReviewDto> = rows
                    .into_iter()
                    .map(|(review, author)| ReviewDto::from_parts(review, author))
                    .collect();
                Envelope::ok(reviews, "Reviews successfully fetched")
            }
            Err(err) => Envelope::from_error("Failed to fetch reviews", err),
        }
    }

    pub async fn update(
        &self,
        user_id: i64,
        id: i64,
        changes: ReviewChanges,
    ) -> Envelope<Review> {
        match self.try_update(user_id, id, changes).await {
            Ok(review) => Envelope::ok(review, "Review updated successfully"),
            Err(err) => Envelope::from_error("Failed to update review", err),
        }
    }

    async fn try_update(
        &self,
        user_id: i64,
        id: i64,
        changes: ReviewChanges,
    ) -> Result<Review> {
        self.store
            .update(user_id, id, &changes)
            .await?
            .ok_or_else(|| Error::NotFound("Review not found".to_string()))
    }

    /// Soft delete. Callers must never assume the row is gone afterwards —
    /// it stays, flagged, and disappears from reads and uniqueness checks.
    pub async fn remove(&self, user_id: i64, id: i64) -> Envelope<()> {
        match self.try_remove(user_id, id).await {
            Ok(()) => Envelope::new(None, "Review deleted successfully", 200),
            Err(err) => Envelope::from_error("Failed to delete review", err),
        }
    }

    async fn try_remove(&self, user_id: i64, id: i64) -> Result<()> {
        if self.store.soft_delete(user_id, id).await? {
            Ok(())
        } else {
            Err(Error::NotFound("Review not found".to_string()))
        }
    }
}
