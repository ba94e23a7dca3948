//! Seed importer: open-data licence records into the businesses table.
//!
//! The taxonomy is authoritative here: rows whose business type and subtype
//! are both unrecognized are dropped before insert. Derived fields
//! (headcount bucket, active/inactive status) are never computed at seed
//! time — they remain read-time functions of the stored raw columns.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Deserialize;

use crate::{
    db::BusinessStore,
    models::NewBusiness,
    Error, Result,
};

/// Raw open-data record, field names as published by the licence dataset.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LicenceRecord {
    pub folderyear: Option<String>,
    pub licencersn: Option<String>,
    pub licencenumber: Option<String>,
    pub licencerevisionnumber: Option<String>,
    pub businessname: Option<String>,
    pub businesstradename: Option<String>,
    pub status: Option<String>,
    pub issueddate: Option<String>,
    pub expireddate: Option<String>,
    pub businesstype: Option<String>,
    pub businesssubtype: Option<String>,
    pub unit: Option<String>,
    pub unittype: Option<String>,
    pub house: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub country: Option<String>,
    pub postalcode: Option<String>,
    pub localarea: Option<String>,
    pub numberofemployees: Option<i32>,
    pub feepaid: Option<String>,
    pub extractdate: Option<String>,
    pub geo_point_2d: Option<GeoPoint>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeoPoint {
    pub lon: Option<f64>,
    pub lat: Option<f64>,
}

#[derive(Debug, Default)]
pub struct SeedReport {
    pub total: usize,
    pub retained: usize,
    pub skipped_unrecognized: usize,
    pub inserted: u64,
}

pub struct SeedService {
    store: Arc<dyn BusinessStore>,
}

impl SeedService {
    pub fn new(store: Arc<dyn BusinessStore>) -> Self {
        Self { store }
    }

    /// Import `records` in batches of `batch_size`.
    ///
    /// Refuses to run against a non-empty table; call [`clear`](Self::clear)
    /// first to reseed.
    pub async fn seed(&self, records: &[LicenceRecord], batch_size: usize) -> Result<SeedReport> {
        let existing = self.store.count().await?;
        if existing > 0 {
            return Err(Error::Validation(format!(
                "businesses table already holds {existing} rows; refusing to reseed (run with --truncate to replace)"
            )));
        }

        let batch_size = batch_size.max(1);

        let mut report = SeedReport {
            total: records.len(),
            ..Default::default()
        };

        let rows: Vec<NewBusiness> = records
            .iter()
            .filter_map(|record| match transform(record) {
                Some(row) => Some(row),
                None => {
                    report.skipped_unrecognized += 1;
                    None
                }
            })
            .collect();
        report.retained = rows.len();

        for (index, batch) in rows.chunks(batch_size).enumerate() {
            let inserted = self.store.insert_batch(batch).await?;
            report.inserted += inserted;
            tracing::info!(
                batch = index + 1,
                rows = batch.len(),
                "inserted seed batch"
            );
        }

        tracing::info!(
            total = report.total,
            retained = report.retained,
            skipped = report.skipped_unrecognized,
            inserted = report.inserted,
            "seeding completed"
        );

        Ok(report)
    }

    pub async fn clear(&self) -> Result<()> {
        tracing::warn!("clearing all business rows");
        self.store.clear().await
    }
}

/// Map a raw record into an insert row, or `None` when neither its type nor
/// its subtype is a recognized taxonomy label.
pub fn transform(record: &LicenceRecord) -> Option<NewBusiness> {
    let type_recognized = record
        .businesstype
        .as_deref()
        .is_some_and(localist_taxonomy::is_recognized);
    let subtype_recognized = record
        .businesssubtype
        .as_deref()
        .is_some_and(localist_taxonomy::is_recognized);
    if !type_recognized && !subtype_recognized {
        return None;
    }

    let (latitude, longitude) = match &record.geo_point_2d {
        Some(point) => (point.lat, point.lon),
        None => (None, None),
    };

    Some(NewBusiness {
        business_name: record.businessname.clone(),
        business_trade_name: record.businesstradename.clone(),
        business_type: record.businesstype.clone(),
        business_subtype: record.businesssubtype.clone(),
        status: record.status.clone(),
        licence_rsn: record.licencersn.clone(),
        licence_number: record.licencenumber.clone(),
        issued_date: parse_timestamp(record.issueddate.as_deref()),
        expired_date: parse_date(record.expireddate.as_deref()),
        number_of_employees: record.numberofemployees.unwrap_or(0).max(0),
        unit: record.unit.clone(),
        house: record.house.clone(),
        street: record.street.clone(),
        city: record.city.clone(),
        province: record.province.clone(),
        country: record.country.clone(),
        postal_code: record.postalcode.clone(),
        local_area: record.localarea.clone(),
        latitude,
        longitude,
    })
}

fn parse_timestamp(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        })
}

fn parse_date(raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.date_naive())
        })
}
