#![allow(dead_code)]
//! In-memory store fakes for service-level tests.
//!
//! Each fake implements the same store trait as its Postgres counterpart
//! and replicates the documented contract — ownership-scoped predicates,
//! the all-or-nothing bulk update, soft-delete visibility rules and the
//! case-insensitive substring matching — so services exercise their full
//! behavior without a database.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use sqlx::types::Json;

use localist::db::{BusinessStore, DropListStore, ReviewStore};
use localist::models::{
    Business, DropListItem, DropListItemChanges, DropState, NewBusiness, NewDropListItem,
    NewReview, Review, ReviewAuthor, ReviewChanges,
};
use localist::{Error, Result};

fn contains_ci(haystack: Option<&str>, needle: &str) -> bool {
    haystack
        .map(|h| h.to_lowercase().contains(&needle.to_lowercase()))
        .unwrap_or(false)
}

// ---------------------------------------------------------------------------
// Businesses
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct InMemoryBusinessStore {
    rows: Mutex<Vec<Business>>,
    next_id: AtomicI64,
}

impl InMemoryBusinessStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        })
    }

    /// Test helper: insert one row and return its id.
    pub fn add(&self, row: NewBusiness) -> i64 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now();
        self.rows.lock().unwrap().push(Business {
            id,
            business_name: row.business_name,
            business_trade_name: row.business_trade_name,
            business_type: row.business_type,
            business_subtype: row.business_subtype,
            status: row.status,
            licence_rsn: row.licence_rsn,
            licence_number: row.licence_number,
            issued_date: row.issued_date,
            expired_date: row.expired_date,
            number_of_employees: row.number_of_employees,
            unit: row.unit,
            house: row.house,
            street: row.street,
            city: row.city,
            province: row.province,
            country: row.country,
            postal_code: row.postal_code,
            local_area: row.local_area,
            latitude: row.latitude,
            longitude: row.longitude,
            created_at: now,
            updated_at: now,
        });
        id
    }
}

#[async_trait]
impl BusinessStore for InMemoryBusinessStore {
    async fn find_filtered(
        &self,
        limit: i64,
        offset: i64,
        category: Option<&str>,
        search: Option<&str>,
    ) -> Result<Vec<Business>> {
        let rows = self.rows.lock().unwrap();
        let mut matched: Vec<Business> = rows
            .iter()
            .filter(|b| {
                let category_ok = category.map_or(true, |c| {
                    b.business_type.as_deref() == Some(c)
                        || b.business_subtype.as_deref() == Some(c)
                });
                let search_ok = search.map_or(true, |term| {
                    [
                        b.business_name.as_deref(),
                        b.business_trade_name.as_deref(),
                        b.local_area.as_deref(),
                        b.street.as_deref(),
                        b.city.as_deref(),
                        b.province.as_deref(),
                        b.postal_code.as_deref(),
                        b.country.as_deref(),
                        b.business_type.as_deref(),
                        b.business_subtype.as_deref(),
                    ]
                    .into_iter()
                    .any(|field| contains_ci(field, term))
                });
                category_ok && search_ok
            })
            .cloned()
            .collect();

        matched.sort_by_key(|b| b.id);
        Ok(matched
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Business>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.id == id)
            .cloned())
    }

    async fn count(&self) -> Result<i64> {
        Ok(self.rows.lock().unwrap().len() as i64)
    }

    async fn insert_batch(&self, rows: &[NewBusiness]) -> Result<u64> {
        for row in rows {
            self.add(row.clone());
        }
        Ok(rows.len() as u64)
    }

    async fn clear(&self) -> Result<()> {
        self.rows.lock().unwrap().clear();
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Drop-list items
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct InMemoryDropListStore {
    items: Mutex<Vec<DropListItem>>,
    next_id: AtomicI64,
}

impl InMemoryDropListStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            items: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        })
    }

    /// Test helper: the raw item regardless of owner.
    pub fn get(&self, id: i64) -> Option<DropListItem> {
        self.items.lock().unwrap().iter().find(|i| i.id == id).cloned()
    }
}

#[async_trait]
impl DropListStore for InMemoryDropListStore {
    async fn list_by_user(&self, user_id: i64) -> Result<Vec<DropListItem>> {
        let mut items: Vec<DropListItem> = self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|i| i.user_id == user_id)
            .cloned()
            .collect();
        items.sort_by_key(|i| i.id);
        Ok(items)
    }

    async fn find_for_user_business(
        &self,
        user_id: i64,
        business_id: i64,
    ) -> Result<Option<DropListItem>> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.user_id == user_id && i.business_id == business_id)
            .cloned())
    }

    async fn insert(&self, user_id: i64, item: &NewDropListItem) -> Result<DropListItem> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now();
        let item = DropListItem {
            id,
            user_id,
            business_id: item.business_id,
            status: item.status,
            method: item.method,
            planned_drop_date: item.planned_drop_date,
            actual_drop_date: None,
            notes: item.notes.clone(),
            created_at: now,
            updated_at: now,
        };
        self.items.lock().unwrap().push(item.clone());
        Ok(item)
    }

    async fn update(
        &self,
        user_id: i64,
        id: i64,
        changes: &DropListItemChanges,
    ) -> Result<Option<DropListItem>> {
        let mut items = self.items.lock().unwrap();
        let Some(item) = items
            .iter_mut()
            .find(|i| i.id == id && i.user_id == user_id)
        else {
            return Ok(None);
        };

        if let Some(status) = changes.status {
            item.status = status;
        }
        if let Some(method) = changes.method {
            item.method = method;
        }
        if let Some(date) = changes.planned_drop_date {
            item.planned_drop_date = Some(date);
        }
        if let Some(date) = changes.actual_drop_date {
            item.actual_drop_date = Some(date);
        }
        if let Some(notes) = &changes.notes {
            item.notes = Some(notes.clone());
        }
        item.updated_at = Utc::now();

        Ok(Some(item.clone()))
    }

    async fn bulk_update_status(
        &self,
        user_id: i64,
        updates: &[(i64, DropState)],
    ) -> Result<Vec<DropListItem>> {
        let mut items = self.items.lock().unwrap();

        // Membership check before any write, as in the transactional
        // implementation: duplicates and foreign ids shrink the owned set.
        let owned: Vec<i64> = items
            .iter()
            .filter(|i| i.user_id == user_id && updates.iter().any(|(id, _)| *id == i.id))
            .map(|i| i.id)
            .collect();

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

        let mut result = Vec::with_capacity(updates.len());
        for (id, status) in updates {
            let item = items
                .iter_mut()
                .find(|i| i.id == *id && i.user_id == user_id)
                .expect("membership was checked above");
            item.status = *status;
            item.updated_at = Utc::now();
            result.push(item.clone());
        }

        Ok(result)
    }

    async fn delete(&self, user_id: i64, id: i64) -> Result<bool> {
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|i| !(i.id == id && i.user_id == user_id));
        Ok(items.len() < before)
    }
}

// ---------------------------------------------------------------------------
// Reviews
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct InMemoryReviewStore {
    reviews: Mutex<Vec<Review>>,
    authors: Mutex<HashMap<i64, String>>,
    next_id: AtomicI64,
}

impl InMemoryReviewStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            reviews: Mutex::new(Vec::new()),
            authors: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        })
    }

    /// Test helper: register the author email used in listings.
    pub fn register_author(&self, user_id: i64, email: &str) {
        self.authors.lock().unwrap().insert(user_id, email.to_string());
    }

    /// Test helper: the raw row regardless of owner or deletion flag.
    pub fn get(&self, id: i64) -> Option<Review> {
        self.reviews.lock().unwrap().iter().find(|r| r.id == id).cloned()
    }

    fn author_email(&self, user_id: i64) -> String {
        self.authors
            .lock()
            .unwrap()
            .get(&user_id)
            .cloned()
            .unwrap_or_else(|| format!("user{user_id}@example.com"))
    }

    fn payload_text(review: &Review) -> String {
        let interview = review
            .interview_review
            .as_ref()
            .and_then(|p| serde_json::to_string(&p.0).ok())
            .unwrap_or_default();
        let work = review
            .work_review
            .as_ref()
            .and_then(|p| serde_json::to_string(&p.0).ok())
            .unwrap_or_default();
        format!("{interview} {work}")
    }
}

#[async_trait]
impl ReviewStore for InMemoryReviewStore {
    async fn active_exists(&self, user_id: i64, business_id: i64) -> Result<bool> {
        Ok(self.reviews.lock().unwrap().iter().any(|r| {
            r.user_id == user_id && r.business_id == business_id && !r.is_deleted
        }))
    }

    async fn insert(&self, user_id: i64, review: &NewReview) -> Result<Review> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now();
        let review = Review {
            id,
            user_id,
            business_id: review.business_id,
            kind: review.kind,
            interview_review: review.interview_review.clone().map(Json),
            work_review: review.work_review.clone().map(Json),
            tags: Some(review.tags.clone()),
            is_deleted: false,
            likes: 0,
            created_at: now,
            updated_at: now,
        };
        self.reviews.lock().unwrap().push(review.clone());
        Ok(review)
    }

    async fn list_for_business(
        &self,
        business_id: i64,
        keyword: Option<&str>,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<(Review, ReviewAuthor)>> {
        let reviews = self.reviews.lock().unwrap();
        let mut matched: Vec<Review> = reviews
            .iter()
            .filter(|r| r.business_id == business_id && !r.is_deleted)
            .filter(|r| {
                keyword.map_or(true, |kw| {
                    contains_ci(Some(&Self::payload_text(r)), kw)
                })
            })
            .cloned()
            .collect();

        // Newest first; id breaks ties within the same instant.
        matched.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        Ok(matched
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .map(|review| {
                let author = ReviewAuthor {
                    id: review.user_id,
                    email: self.author_email(review.user_id),
                };
                (review, author)
            })
            .collect())
    }

    async fn update(
        &self,
        user_id: i64,
        id: i64,
        changes: &ReviewChanges,
    ) -> Result<Option<Review>> {
        let mut reviews = self.reviews.lock().unwrap();
        let Some(review) = reviews
            .iter_mut()
            .find(|r| r.id == id && r.user_id == user_id && !r.is_deleted)
        else {
            return Ok(None);
        };

        if let Some(payload) = &changes.interview_review {
            review.interview_review = Some(Json(payload.clone()));
        }
        if let Some(payload) = &changes.work_review {
            review.work_review = Some(Json(payload.clone()));
        }
        if let Some(tags) = &changes.tags {
            review.tags = Some(tags.clone());
        }
        review.updated_at = Utc::now();

        Ok(Some(review.clone()))
    }

    async fn soft_delete(&self, user_id: i64, id: i64) -> Result<bool> {
        let mut reviews = self.reviews.lock().unwrap();
        let Some(review) = reviews
            .iter_mut()
            .find(|r| r.id == id && r.user_id == user_id && !r.is_deleted)
        else {
            return Ok(false);
        };

        review.is_deleted = true;
        review.updated_at = Utc::now();
        Ok(true)
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// A plausible licence row for seeding the business fake.
pub fn business_fixture(name: &str, business_type: &str) -> NewBusiness {
    NewBusiness {
        business_name: Some(format!("{name} Holdings Ltd")),
        business_trade_name: Some(name.to_string()),
        business_type: Some(business_type.to_string()),
        status: Some("Issued".to_string()),
        number_of_employees: 4,
        city: Some("Vancouver".to_string()),
        province: Some("BC".to_string()),
        country: Some("CA".to_string()),
        ..Default::default()
    }
}
