//! Business search service.

use std::sync::Arc;

use crate::{
    config::SearchConfig,
    db::BusinessStore,
    models::BusinessDto,
    Error, Result,
};

pub struct BusinessService {
    store: Arc<dyn BusinessStore>,
    default_page_size: i64,
    max_page_size: i64,
}

impl BusinessService {
    pub fn new(store: Arc<dyn BusinessStore>, search: &SearchConfig) -> Self {
        Self {
            store,
            default_page_size: search.default_page_size,
            max_page_size: search.max_page_size,
        }
    }

    /// Paginated, filtered search over the imported records.
    ///
    /// `category` matches the type or subtype column exactly and is not
    /// taxonomy-validated (the taxonomy is advisory here); `search` is a
    /// case-insensitive substring match across the searchable text columns.
    /// Both filters AND-combine. No matches is an empty page, not an error.
    pub async fn find_businesses(
        &self,
        limit: i64,
        offset: i64,
        category: Option<&str>,
        search: Option<&str>,
    ) -> Result<Vec<BusinessDto>> {
        let limit = self.clamp_limit(limit);
        let offset = offset.max(0);

        let search = search.filter(|s| !s.trim().is_empty());
        let category = category.filter(|s| !s.is_empty());

        let businesses = self
            .store
            .find_filtered(limit, offset, category, search)
            .await?;

        Ok(businesses.into_iter().map(BusinessDto::from).collect())
    }

    pub async fn find_one(&self, id: i64) -> Result<BusinessDto> {
        let business = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Business {id} not found")))?;

        Ok(BusinessDto::from(business))
    }

    fn clamp_limit(&self, limit: i64) -> i64 {
        if limit <= 0 {
            self.default_page_size
        } else {
            limit.min(self.max_page_size)
        }
    }
}
