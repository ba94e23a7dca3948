//! PostgreSQL-backed `DropListStore` implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    db::traits::DropListStore,
    models::{DropListItem, DropListItemChanges, DropState, NewDropListItem},
    Error, Result,
};

const ITEM_COLUMNS: &str = "id, user_id, business_id, status, method, planned_drop_date, \
     actual_drop_date, notes, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresDropListStore {
    pool: PgPool,
}

impl PostgresDropListStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DropListStore for PostgresDropListStore {
    async fn list_by_user(&self, user_id: i64) -> Result<Vec<DropListItem>> {
        let sql = format!(
            "SELECT {ITEM_COLUMNS}
             FROM drop_list_items
             WHERE user_id = $1
             ORDER BY id ASC"
        );

        let items = sqlx::query_as::<_, DropListItem>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(items)
    }

    async fn find_for_user_business(
        &self,
        user_id: i64,
        business_id: i64,
    ) -> Result<Option<DropListItem>> {
        let sql = format!(
            "SELECT {ITEM_COLUMNS}
             FROM drop_list_items
             WHERE user_id = $1 AND business_id = $2"
        );

        let item = sqlx::query_as::<_, DropListItem>(&sql)
            .bind(user_id)
            .bind(business_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(item)
    }

    async fn insert(&self, user_id: i64, item: &NewDropListItem) -> Result<DropListItem> {
        let sql = format!(
            "INSERT INTO drop_list_items
                (user_id, business_id, status, method, planned_drop_date, notes)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {ITEM_COLUMNS}"
        );

        let item = sqlx::query_as::<_, DropListItem>(&sql)
            .bind(user_id)
            .bind(item.business_id)
            .bind(item.status)
            .bind(item.method)
            .bind(item.planned_drop_date)
            .bind(&item.notes)
            .fetch_one(&self.pool)
            .await?;

        Ok(item)
    }

    async fn update(
        &self,
        user_id: i64,
        id: i64,
        changes: &DropListItemChanges,
    ) -> Result<Option<DropListItem>> {
        // Ownership is part of the WHERE clause: an id belonging to another
        // user updates zero rows and reads back as absent.
        let sql = format!(
            "UPDATE drop_list_items
             SET status = COALESCE($3, status),
                 method = COALESCE($4, method),
                 planned_drop_date = COALESCE($5, planned_drop_date),
                 actual_drop_date = COALESCE($6, actual_drop_date),
                 notes = COALESCE($7, notes),
                 updated_at = NOW()
             WHERE id = $1 AND user_id = $2
             RETURNING {ITEM_COLUMNS}"
        );

        let item = sqlx::query_as::<_, DropListItem>(&sql)
            .bind(id)
            .bind(user_id)
            .bind(changes.status)
            .bind(changes.method)
            .bind(changes.planned_drop_date)
            .bind(changes.actual_drop_date)
            .bind(&changes.notes)
            .fetch_optional(&self.pool)
            .await?;

        Ok(item)
    }

    async fn bulk_update_status(
        &self,
        user_id: i64,
        updates: &[(i64, DropState)],
    ) -> Result<Vec<DropListItem>> {
        let mut tx = self.pool.begin().await?;

        let ids: Vec<i64> = updates.iter().map(|(id, _)| *id).collect();

        // Membership check before any write. A count mismatch (unknown id,
        // someone else's item, or a duplicate id in the request) aborts the
        // whole batch; the transaction rolls back on drop.
        let owned: Vec<i64> = sqlx::query_scalar(
            "SELECT id FROM drop_list_items
             WHERE user_id = $1 AND id = ANY($2)
             FOR UPDATE",
        )
        .bind(user_id)
        .bind(&ids)
        .fetch_all(&mut *tx)
        .await?;

        if owned.is_empty() {
            return Err(Error::NotFound(
                "No matching drop-list items found".to_string(),
            ));
        }
        if owned.len() != updates.len() {
            return Err(Error::NotFound(
                "Some drop-list items were not found for the provided ids".to_string(),
            ));
        }

        let sql = format!(
            "UPDATE drop_list_items
             SET status = $3, updated_at = NOW()
             WHERE id = $1 AND user_id = $2
             RETURNING {ITEM_COLUMNS}"
        );

        let mut items = Vec::with_capacity(updates.len());
        for (id, status) in updates {
            let item = sqlx::query_as::<_, DropListItem>(&sql)
                .bind(id)
                .bind(user_id)
                .bind(status)
                .fetch_one(&mut *tx)
                .await?;
            items.push(item);
        }

        tx.commit().await?;
        Ok(items)
    }

    async fn delete(&self, user_id: i64, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM drop_list_items WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
