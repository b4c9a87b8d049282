//! Feedback Repository

use super::{RepoError, RepoResult};
use shared::models::{Feedback, FeedbackInput};
use sqlx::SqlitePool;

const SELECT_FEEDBACK: &str =
    "SELECT id, name, email, rating, message, is_published, created_at FROM feedback";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Feedback>> {
    let sql = format!("{SELECT_FEEDBACK} ORDER BY created_at DESC");
    let rows = sqlx::query_as::<_, Feedback>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

/// Only entries an admin has published; this is what the storefront shows.
pub async fn find_published(pool: &SqlitePool) -> RepoResult<Vec<Feedback>> {
    let sql = format!("{SELECT_FEEDBACK} WHERE is_published = 1 ORDER BY created_at DESC");
    let rows = sqlx::query_as::<_, Feedback>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Feedback>> {
    let sql = format!("{SELECT_FEEDBACK} WHERE id = ?");
    let row = sqlx::query_as::<_, Feedback>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// New feedback always starts unpublished.
pub async fn create(pool: &SqlitePool, input: FeedbackInput) -> RepoResult<Feedback> {
    validate(&input)?;
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();

    sqlx::query(
        "INSERT INTO feedback (id, name, email, rating, message, is_published, created_at) VALUES (?, ?, ?, ?, ?, 0, ?)",
    )
    .bind(id)
    .bind(input.name.trim())
    .bind(input.email.trim())
    .bind(input.rating)
    .bind(&input.message)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create feedback".into()))
}

pub async fn set_published(pool: &SqlitePool, id: i64, is_published: bool) -> RepoResult<Feedback> {
    let rows = sqlx::query("UPDATE feedback SET is_published = ? WHERE id = ?")
        .bind(is_published)
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Feedback {id} not found")));
    }

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Feedback {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM feedback WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

fn validate(input: &FeedbackInput) -> RepoResult<()> {
    if input.name.trim().is_empty() {
        return Err(RepoError::Validation("Name is required".into()));
    }
    if input.email.trim().is_empty() {
        return Err(RepoError::Validation("Email is required".into()));
    }
    if input.message.trim().is_empty() {
        return Err(RepoError::Validation("Message is required".into()));
    }
    if !(1..=5).contains(&input.rating) {
        return Err(RepoError::Validation(
            "Rating must be between 1 and 5".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .connect("sqlite::memory:")
            .await
            .unwrap();

        sqlx::query(
            "CREATE TABLE feedback (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                rating INTEGER NOT NULL,
                message TEXT NOT NULL,
                is_published INTEGER NOT NULL DEFAULT 0,
                created_at INTEGER NOT NULL DEFAULT 0
            )",
        )
        .execute(&pool)
        .await
        .unwrap();

        pool
    }

    fn sample_input() -> FeedbackInput {
        FeedbackInput {
            name: "Bob".into(),
            email: "bob@example.com".into(),
            rating: 5,
            message: "Best pizza in town".into(),
        }
    }

    #[tokio::test]
    async fn test_round_trip_starts_unpublished() {
        let pool = test_pool().await;
        let created = create(&pool, sample_input()).await.unwrap();

        let fetched = find_by_id(&pool, created.id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Bob");
        assert_eq!(fetched.email, "bob@example.com");
        assert_eq!(fetched.rating, 5);
        assert_eq!(fetched.message, "Best pizza in town");
        assert!(!fetched.is_published);
        assert!(fetched.created_at > 0);
    }

    #[tokio::test]
    async fn test_rating_bounds() {
        let pool = test_pool().await;

        let mut low = sample_input();
        low.rating = 0;
        assert!(matches!(
            create(&pool, low).await.unwrap_err(),
            RepoError::Validation(_)
        ));

        let mut high = sample_input();
        high.rating = 6;
        assert!(matches!(
            create(&pool, high).await.unwrap_err(),
            RepoError::Validation(_)
        ));
    }

    #[tokio::test]
    async fn test_publish_toggle_controls_storefront_list() {
        let pool = test_pool().await;
        let created = create(&pool, sample_input()).await.unwrap();
        assert!(find_published(&pool).await.unwrap().is_empty());

        let published = set_published(&pool, created.id, true).await.unwrap();
        assert!(published.is_published);
        assert_eq!(find_published(&pool).await.unwrap().len(), 1);

        set_published(&pool, created.id, false).await.unwrap();
        assert!(find_published(&pool).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_publish_missing_returns_not_found() {
        let pool = test_pool().await;
        assert!(matches!(
            set_published(&pool, 31337, true).await.unwrap_err(),
            RepoError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_delete() {
        let pool = test_pool().await;
        let created = create(&pool, sample_input()).await.unwrap();
        assert!(delete(&pool, created.id).await.unwrap());
        assert!(find_by_id(&pool, created.id).await.unwrap().is_none());
        assert!(!delete(&pool, created.id).await.unwrap());
    }
}
