//! Customer Model

use serde::{Deserialize, Serialize};

/// Customer entity, keyed by phone number
///
/// Upserted on every order: an existing phone gets its name and address
/// refreshed, a new phone creates a row. Never deleted by order deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub address: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}
