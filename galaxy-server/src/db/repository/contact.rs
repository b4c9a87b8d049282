//! Contact Message Repository
//!
//! Write-only from the storefront contact form; messages are read
//! straight from the database by the owner.

use super::{RepoError, RepoResult};
use shared::models::{ContactInput, ContactMessage};
use sqlx::SqlitePool;

pub async fn create(pool: &SqlitePool, input: ContactInput) -> RepoResult<ContactMessage> {
    validate(&input)?;
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();

    sqlx::query(
        "INSERT INTO contact_messages (id, name, email, subject, message, created_at) VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(input.name.trim())
    .bind(input.email.trim())
    .bind(input.subject.trim())
    .bind(&input.message)
    .bind(now)
    .execute(pool)
    .await?;

    let row = sqlx::query_as::<_, ContactMessage>(
        "SELECT id, name, email, subject, message, created_at FROM contact_messages WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.ok_or_else(|| RepoError::Database("Failed to create contact message".into()))
}

fn validate(input: &ContactInput) -> RepoResult<()> {
    if input.name.trim().is_empty() {
        return Err(RepoError::Validation("Name is required".into()));
    }
    if input.email.trim().is_empty() {
        return Err(RepoError::Validation("Email is required".into()));
    }
    if input.subject.trim().is_empty() {
        return Err(RepoError::Validation("Subject is required".into()));
    }
    if input.message.trim().is_empty() {
        return Err(RepoError::Validation("Message is required".into()));
    }
    Ok(())
}
