//! User accounts.
//!
//! Accounts are provisioned by the external identity service (registration
//! and social login happen there); this server only reads them, for the
//! caller's own profile and for review attribution. The password hash
//! column is never selected.

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
