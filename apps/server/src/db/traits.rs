//! Store trait definitions.
//!
//! Every ownership-scoped lookup takes the caller's user id as part of the
//! predicate itself, so "does not exist" and "exists but is not yours" are
//! indistinguishable to callers and there is no check-then-use gap.

use crate::models::{
    Business, DropListItem, DropListItemChanges, DropState, NewBusiness, NewDropListItem,
    NewReview, Review, ReviewAuthor, ReviewChanges, User,
};
use crate::Result;
use async_trait::async_trait;

/// Read/seed access to imported business-licence records.
#[async_trait]
pub trait BusinessStore: Send + Sync {
    /// Filtered, paginated read. `category` matches the type or subtype
    /// column exactly; `search` is a case-insensitive substring matched
    /// against the searchable text columns. Ordered by id ascending.
    async fn find_filtered(
        &self,
        limit: i64,
        offset: i64,
        category: Option<&str>,
        search: Option<&str>,
    ) -> Result<Vec<Business>>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Business>>;

    async fn count(&self) -> Result<i64>;

    /// Bulk insert for the seed importer. Returns the number of rows written.
    async fn insert_batch(&self, rows: &[NewBusiness]) -> Result<u64>;

    /// Remove every business row (seed importer `--truncate`).
    async fn clear(&self) -> Result<()>;
}

#[async_trait]
pub trait DropListStore: Send + Sync {
    async fn list_by_user(&self, user_id: i64) -> Result<Vec<DropListItem>>;

    async fn find_for_user_business(
        &self,
        user_id: i64,
        business_id: i64,
    ) -> Result<Option<DropListItem>>;

    async fn insert(&self, user_id: i64, item: &NewDropListItem) -> Result<DropListItem>;

    /// Merge `changes` into the item, scoped to the owner. `None` when no
    /// item with that id belongs to the user.
    async fn update(
        &self,
        user_id: i64,
        id: i64,
        changes: &DropListItemChanges,
    ) -> Result<Option<DropListItem>>;

    /// Apply statuses positionally, all-or-nothing. Fails with `NotFound`
    /// before any write unless every id resolves to an item owned by the
    /// user; the whole batch is one transaction.
    async fn bulk_update_status(
        &self,
        user_id: i64,
        updates: &[(i64, DropState)],
    ) -> Result<Vec<DropListItem>>;

    /// Hard delete, scoped to the owner. `false` when nothing matched.
    async fn delete(&self, user_id: i64, id: i64) -> Result<bool>;
}

#[async_trait]
pub trait ReviewStore: Send + Sync {
    /// Whether a non-deleted review by this user for this business exists.
    async fn active_exists(&self, user_id: i64, business_id: i64) -> Result<bool>;

    async fn insert(&self, user_id: i64, review: &NewReview) -> Result<Review>;

    /// Active reviews for a business, newest first, with author identity.
    /// `keyword` is a case-insensitive substring match over the payload text.
    async fn list_for_business(
        &self,
        business_id: i64,
        keyword: Option<&str>,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<(Review, ReviewAuthor)>>;

    /// Merge `changes` into the caller's own active review. `None` when no
    /// active review with that id belongs to the user.
    async fn update(
        &self,
        user_id: i64,
        id: i64,
        changes: &ReviewChanges,
    ) -> Result<Option<Review>>;

    /// Soft delete: sets the deletion flag, keeps the row. `false` when no
    /// active review matched the ownership-scoped lookup.
    async fn soft_delete(&self, user_id: i64, id: i64) -> Result<bool>;
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>>;
}
