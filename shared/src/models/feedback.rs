//! Feedback Model

use serde::{Deserialize, Serialize};

/// Customer feedback entity
///
/// Created unpublished; only entries the admin publishes appear on the
/// public site.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Feedback {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Star rating, 1 to 5
    pub rating: i64,
    pub message: String,
    pub is_published: bool,
    pub created_at: i64,
}

/// Submission payload; publication state is always server-assigned
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackInput {
    pub name: String,
    pub email: String,
    pub rating: i64,
    pub message: String,
}

/// PATCH body for the publish toggle
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackPublishUpdate {
    pub is_published: bool,
}
