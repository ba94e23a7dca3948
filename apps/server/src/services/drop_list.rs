//! Drop-list service.
//!
//! Every operation is scoped to the calling user; the user id comes from
//! the identity boundary, never from the request body. Expected failures
//! are recovered here and reported through the envelope — an operation on
//! someone else's item answers NotFound, indistinguishable from an id that
//! does not exist.

use std::sync::Arc;

use crate::{
    api::envelope::Envelope,
    db::{BusinessStore, DropListStore},
    models::{DropListItem, DropListItemChanges, DropState, NewDropListItem},
    Error, Result,
};

pub struct DropListService {
    store: Arc<dyn DropListStore>,
    businesses: Arc<dyn BusinessStore>,
}

impl DropListService {
    pub fn new(store: Arc<dyn DropListStore>, businesses: Arc<dyn BusinessStore>) -> Self {
        Self { store, businesses }
    }

    pub async fn list_mine(&self, user_id: i64) -> Envelope<Vec<DropListItem>> {
        match self.store.list_by_user(user_id).await {
            Ok(items) => Envelope::ok(items, "Drop-list items retrieved successfully"),
            Err(err) => Envelope::from_error("Failed to fetch drop-list items", err),
        }
    }

    pub async fn create(&self, user_id: i64, item: NewDropListItem) -> Envelope<DropListItem> {
        match self.try_create(user_id, item).await {
            Ok(item) => Envelope::created(item, "Business added to drop list successfully"),
            Err(err) => Envelope::from_error("Failed to add business to drop list", err),
        }
    }

    async fn try_create(&self, user_id: i64, item: NewDropListItem) -> Result<DropListItem> {
        if self.businesses.find_by_id(item.business_id).await?.is_none() {
            return Err(Error::NotFound(format!(
                "Business {} not found",
                item.business_id
            )));
        }

        if self
            .store
            .find_for_user_business(user_id, item.business_id)
            .await?
            .is_some()
        {
            return Err(Error::Duplicate(
                "Business already exists in your drop list".to_string(),
            ));
        }

        self.store.insert(user_id, &item).await
    }

    pub async fn update(
        &self,
        user_id: i64,
        id: i64,
        changes: DropListItemChanges,
    ) -> Envelope<DropListItem> {
        match self.try_update(user_id, id, changes).await {
            Ok(item) => Envelope::ok(item, "Drop-list item updated successfully"),
            Err(err) => Envelope::from_error("Failed to update drop-list item", err),
        }
    }

    async fn try_update(
        &self,
        user_id: i64,
        id: i64,
        changes: DropListItemChanges,
    ) -> Result<DropListItem> {
        self.store
            .update(user_id, id, &changes)
            .await?
            .ok_or_else(|| Error::NotFound("Drop-list item not found".to_string()))
    }

    /// Positional bulk status update: `statuses[i]` applies to `ids[i]`.
    /// All-or-nothing — a single unknown or foreign id rejects the batch
    /// before anything is written.
    pub async fn bulk_update(
        &self,
        user_id: i64,
        ids: Vec<i64>,
        statuses: Vec<DropState>,
    ) -> Envelope<Vec<DropListItem>> {
        match self.try_bulk_update(user_id, ids, statuses).await {
            Ok(items) => Envelope::ok(items, "Bulk update successful"),
            Err(err) => Envelope::from_error("Failed to perform bulk update", err),
        }
    }

    async fn try_bulk_update(
        &self,
        user_id: i64,
        ids: Vec<i64>,
        statuses: Vec<DropState>,
    ) -> Result<Vec<DropListItem>> {
        if ids.is_empty() {
            return Err(Error::Validation(
                "No ids provided for bulk update".to_string(),
            ));
        }
        if ids.len() != statuses.len() {
            return Err(Error::Validation(
                "Status array length must match ids array length".to_string(),
            ));
        }

        let updates: Vec<(i64, DropState)> =
            ids.into_iter().zip(statuses).collect();

        self.store.bulk_update_status(user_id, &updates).await
    }

    pub async fn remove(&self, user_id: i64, id: i64) -> Envelope<()> {
        match self.try_remove(user_id, id).await {
            Ok(()) => Envelope::new(None, "Drop-list item deleted successfully", 200),
            Err(err) => Envelope::from_error("Failed to delete drop-list item", err),
        }
    }

    async fn try_remove(&self, user_id: i64, id: i64) -> Result<()> {
        if self.store.delete(user_id, id).await? {
            Ok(())
        } else {
            Err(Error::NotFound("Drop-list item not found".to_string()))
        }
    }
}
