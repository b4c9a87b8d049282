//! Category Model

use serde::{Deserialize, Serialize};

/// Menu category entity
///
/// Categories are created implicitly the first time a menu item names one;
/// there is no standalone category CRUD.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Category {
    pub id: i64,
    pub name: String,
}
