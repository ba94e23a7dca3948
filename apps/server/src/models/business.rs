//! Business-licence records and their read-time projection.
//!
//! Rows are written once by the seed importer and only read afterwards.
//! `status` and `headcount_range` are pure functions of the stored raw
//! fields and are derived at the read boundary, never stored, so they can
//! not drift from their source columns.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// One imported business-licence record.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Business {
    pub id: i64,
    pub business_name: Option<String>,
    pub business_trade_name: Option<String>,
    pub business_type: Option<String>,
    pub business_subtype: Option<String>,
    pub status: Option<String>,
    pub licence_rsn: Option<String>,
    pub licence_number: Option<String>,
    pub issued_date: Option<DateTime<Utc>>,
    pub expired_date: Option<NaiveDate>,
    pub number_of_employees: i32,
    pub unit: Option<String>,
    pub house: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
    pub local_area: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Seed-time insert payload. Field-for-field the raw licence columns;
/// derived fields are intentionally absent.
#[derive(Debug, Clone, Default)]
pub struct NewBusiness {
    pub business_name: Option<String>,
    pub business_trade_name: Option<String>,
    pub business_type: Option<String>,
    pub business_subtype: Option<String>,
    pub status: Option<String>,
    pub licence_rsn: Option<String>,
    pub licence_number: Option<String>,
    pub issued_date: Option<DateTime<Utc>>,
    pub expired_date: Option<NaiveDate>,
    pub number_of_employees: i32,
    pub unit: Option<String>,
    pub house: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
    pub local_area: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Employee-count bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HeadcountRange {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "1-5")]
    OneToFive,
    #[serde(rename = "6-20")]
    SixToTwenty,
    #[serde(rename = "21-50")]
    TwentyOneToFifty,
    #[serde(rename = "50+")]
    FiftyPlus,
}

/// Bucket an employee count with the fixed breakpoints 5, 20 and 50.
pub fn headcount_range(employees: i32) -> HeadcountRange {
    match employees {
        i32::MIN..=0 => HeadcountRange::None,
        1..=5 => HeadcountRange::OneToFive,
        6..=20 => HeadcountRange::SixToTwenty,
        21..=50 => HeadcountRange::TwentyOneToFifty,
        _ => HeadcountRange::FiftyPlus,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessStatus {
    Active,
    Inactive,
}

/// A licence is active iff its raw status reads "issued", case-insensitively.
pub fn derive_status(raw: Option<&str>) -> BusinessStatus {
    match raw {
        Some(s) if s.eq_ignore_ascii_case("issued") => BusinessStatus::Active,
        _ => BusinessStatus::Inactive,
    }
}

/// Display name: trade name when present and non-blank, legal name otherwise.
///
/// Both the search projection and the seed transform go through this one
/// function so the preference can not diverge between write and read paths.
pub fn display_name(trade_name: Option<&str>, legal_name: Option<&str>) -> String {
    trade_name
        .filter(|s| !s.trim().is_empty())
        .or(legal_name)
        .unwrap_or_default()
        .to_string()
}

#[derive(Debug, Clone, Serialize)]
pub struct AddressDto {
    pub unit: Option<String>,
    pub house: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub local_area: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GeoDto {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

/// The search-result projection of a business record.
#[derive(Debug, Clone, Serialize)]
pub struct BusinessDto {
    pub id: i64,
    pub name: String,
    pub category: Option<String>,
    pub address: AddressDto,
    pub geo: GeoDto,
    pub headcount_range: HeadcountRange,
    pub status: BusinessStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Business> for BusinessDto {
    fn from(business: Business) -> Self {
        let name = display_name(
            business.business_trade_name.as_deref(),
            business.business_name.as_deref(),
        );
        let status = derive_status(business.status.as_deref());

        Self {
            id: business.id,
            name,
            category: business.business_type.or(business.business_subtype),
            address: AddressDto {
                unit: business.unit,
                house: business.house,
                street: business.street,
                city: business.city,
                province: business.province,
                postal_code: business.postal_code,
                country: business.country,
                local_area: business.local_area,
            },
            geo: GeoDto {
                lat: business.latitude,
                lng: business.longitude,
            },
            headcount_range: headcount_range(business.number_of_employees),
            status,
            created_at: business.created_at,
            updated_at: business.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(employees: i32, status: &str) -> Business {
        Business {
            id: 1,
            business_name: Some("Acme Holdings Ltd".to_string()),
            business_trade_name: Some("Acme Coffee".to_string()),
            business_type: Some("Cafe".to_string()),
            business_subtype: None,
            status: Some(status.to_string()),
            licence_rsn: Some("24-100001".to_string()),
            licence_number: Some("24-100001".to_string()),
            issued_date: None,
            expired_date: None,
            number_of_employees: employees,
            unit: None,
            house: Some("101".to_string()),
            street: Some("Main St".to_string()),
            city: Some("Vancouver".to_string()),
            province: Some("BC".to_string()),
            country: Some("CA".to_string()),
            postal_code: Some("V5K 0A1".to_string()),
            local_area: Some("Downtown".to_string()),
            latitude: Some(49.28),
            longitude: Some(-123.12),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn headcount_buckets_at_the_breakpoints() {
        assert_eq!(headcount_range(0), HeadcountRange::None);
        assert_eq!(headcount_range(1), HeadcountRange::OneToFive);
        assert_eq!(headcount_range(5), HeadcountRange::OneToFive);
        assert_eq!(headcount_range(6), HeadcountRange::SixToTwenty);
        assert_eq!(headcount_range(20), HeadcountRange::SixToTwenty);
        assert_eq!(headcount_range(21), HeadcountRange::TwentyOneToFifty);
        assert_eq!(headcount_range(50), HeadcountRange::TwentyOneToFifty);
        assert_eq!(headcount_range(51), HeadcountRange::FiftyPlus);
    }

    #[test]
    fn headcount_bucket_labels_match_the_wire_format() {
        let json = serde_json::to_string(&headcount_range(12)).unwrap();
        assert_eq!(json, "\"6-20\"");
        let json = serde_json::to_string(&headcount_range(0)).unwrap();
        assert_eq!(json, "\"none\"");
        let json = serde_json::to_string(&headcount_range(120)).unwrap();
        assert_eq!(json, "\"50+\"");
    }

    #[test]
    fn status_derivation_is_case_insensitive() {
        assert_eq!(derive_status(Some("issued")), BusinessStatus::Active);
        assert_eq!(derive_status(Some("ISSUED")), BusinessStatus::Active);
        assert_eq!(derive_status(Some("Issued")), BusinessStatus::Active);
        assert_eq!(derive_status(Some("Cancelled")), BusinessStatus::Inactive);
        assert_eq!(derive_status(None), BusinessStatus::Inactive);
    }

    #[test]
    fn display_name_prefers_trade_name() {
        assert_eq!(
            display_name(Some("Acme Coffee"), Some("Acme Holdings Ltd")),
            "Acme Coffee"
        );
        assert_eq!(display_name(None, Some("Acme Holdings Ltd")), "Acme Holdings Ltd");
        assert_eq!(display_name(Some("  "), Some("Acme Holdings Ltd")), "Acme Holdings Ltd");
        assert_eq!(display_name(None, None), "");
    }

    #[test]
    fn projection_derives_fields_from_raw_columns() {
        let dto = BusinessDto::from(record(12, "Issued"));
        assert_eq!(dto.name, "Acme Coffee");
        assert_eq!(dto.category.as_deref(), Some("Cafe"));
        assert_eq!(dto.headcount_range, HeadcountRange::SixToTwenty);
        assert_eq!(dto.status, BusinessStatus::Active);
        assert_eq!(dto.address.local_area.as_deref(), Some("Downtown"));
        assert_eq!(dto.geo.lat, Some(49.28));
    }

    #[test]
    fn projection_falls_back_to_subtype_category() {
        let mut business = record(3, "Pending");
        business.business_type = None;
        business.business_subtype = Some("Coffee Shop".to_string());
        let dto = BusinessDto::from(business);
        assert_eq!(dto.category.as_deref(), Some("Coffee Shop"));
        assert_eq!(dto.status, BusinessStatus::Inactive);
    }
}
