//! PostgreSQL-backed `BusinessStore` implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    db::traits::BusinessStore,
    models::{Business, NewBusiness},
    Result,
};

const BUSINESS_COLUMNS: &str = "id, business_name, business_trade_name, business_type, \
     business_subtype, status, licence_rsn, licence_number, issued_date, expired_date, \
     number_of_employees, unit, house, street, city, province, country, postal_code, \
     local_area, latitude, longitude, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresBusinessStore {
    pool: PgPool,
}

impl PostgresBusinessStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BusinessStore for PostgresBusinessStore {
    async fn find_filtered(
        &self,
        limit: i64,
        offset: i64,
        category: Option<&str>,
        search: Option<&str>,
    ) -> Result<Vec<Business>> {
        let pattern = search.map(|term| format!("%{term}%"));

        let sql = format!(
            "SELECT {BUSINESS_COLUMNS}
             FROM businesses
             WHERE ($1::TEXT IS NULL OR business_type = $1 OR business_subtype = $1)
               AND ($2::TEXT IS NULL
                    OR business_name ILIKE $2
                    OR business_trade_name ILIKE $2
                    OR local_area ILIKE $2
                    OR street ILIKE $2
                    OR city ILIKE $2
                    OR province ILIKE $2
                    OR postal_code ILIKE $2
                    OR country ILIKE $2
                    OR business_type ILIKE $2
                    OR business_subtype ILIKE $2)
             ORDER BY id ASC
             LIMIT $3 OFFSET $4"
        );

        let businesses = sqlx::query_as::<_, Business>(&sql)
            .bind(category)
            .bind(pattern)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(businesses)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Business>> {
        let sql = format!("SELECT {BUSINESS_COLUMNS} FROM businesses WHERE id = $1");

        let business = sqlx::query_as::<_, Business>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(business)
    }

    async fn count(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM businesses")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn insert_batch(&self, rows: &[NewBusiness]) -> Result<u64> {
        if rows.is_empty() {
            return Ok(0);
        }

        const COLS: usize = 20;
        let mut values_parts = Vec::with_capacity(rows.len());
        for i in 0..rows.len() {
            let base = i * COLS;
            let placeholders: Vec<String> =
                (1..=COLS).map(|p| format!("${}", base + p)).collect();
            values_parts.push(format!("({})", placeholders.join(", ")));
        }

        let sql = format!(
            "INSERT INTO businesses
                (business_name, business_trade_name, business_type, business_subtype,
                 status, licence_rsn, licence_number, issued_date, expired_date,
                 number_of_employees, unit, house, street, city, province, country,
                 postal_code, local_area, latitude, longitude)
             VALUES {}",
            values_parts.join(", ")
        );

        let mut query = sqlx::query(&sql);
        for row in rows {
            query = query
                .bind(&row.business_name)
                .bind(&row.business_trade_name)
                .bind(&row.business_type)
                .bind(&row.business_subtype)
                .bind(&row.status)
                .bind(&row.licence_rsn)
                .bind(&row.licence_number)
                .bind(row.issued_date)
                .bind(row.expired_date)
                .bind(row.number_of_employees)
                .bind(&row.unit)
                .bind(&row.house)
                .bind(&row.street)
                .bind(&row.city)
                .bind(&row.province)
                .bind(&row.country)
                .bind(&row.postal_code)
                .bind(&row.local_area)
                .bind(row.latitude)
                .bind(row.longitude);
        }

        let result = query.execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn clear(&self) -> Result<()> {
        sqlx::query("TRUNCATE businesses CASCADE")
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
