//! Category Repository
//!
//! Categories have no standalone write endpoint; they come into existence
//! when a menu item references a new name.

use super::{RepoError, RepoResult};
use shared::models::Category;
use sqlx::SqlitePool;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Category>> {
    let rows = sqlx::query_as::<_, Category>("SELECT id, name FROM categories ORDER BY name")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Resolve a category name to its id, inserting the row when the name is
/// new. Runs inside the caller's transaction so a failed menu-item write
/// does not leave a stray category behind.
///
/// Concurrent creation of the same new name is deduplicated only by the
/// unique constraint: INSERT OR IGNORE, then read the id back.
pub async fn get_or_create(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    name: &str,
) -> RepoResult<i64> {
    let name = name.trim();
    if name.is_empty() {
        return Err(RepoError::Validation("Category name is required".into()));
    }

    sqlx::query("INSERT OR IGNORE INTO categories (id, name) VALUES (?, ?)")
        .bind(shared::util::snowflake_id())
        .bind(name)
        .execute(&mut **tx)
        .await?;

    let id = sqlx::query_scalar::<_, i64>("SELECT id FROM categories WHERE name = ?")
        .bind(name)
        .fetch_one(&mut **tx)
        .await?;
    Ok(id)
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
            "CREATE TABLE categories (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL UNIQUE
            )",
        )
        .execute(&pool)
        .await
        .unwrap();

        pool
    }

    async fn resolve(pool: &SqlitePool, name: &str) -> RepoResult<i64> {
        let mut tx = pool.begin().await.unwrap();
        let id = get_or_create(&mut tx, name).await?;
        tx.commit().await.unwrap();
        Ok(id)
    }

    #[tokio::test]
    async fn test_get_or_create_reuses_existing_row() {
        let pool = test_pool().await;
        let first = resolve(&pool, "Pizza").await.unwrap();
        let second = resolve(&pool, "Pizza").await.unwrap();
        assert_eq!(first, second);
        assert_eq!(find_all(&pool).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_get_or_create_trims_name() {
        let pool = test_pool().await;
        let first = resolve(&pool, "Drinks").await.unwrap();
        let second = resolve(&pool, "  Drinks  ").await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_empty_name_is_rejected() {
        let pool = test_pool().await;
        let err = resolve(&pool, "   ").await.unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));
    }

    #[tokio::test]
    async fn test_find_all_sorted_by_name() {
        let pool = test_pool().await;
        resolve(&pool, "Sides").await.unwrap();
        resolve(&pool, "Classics").await.unwrap();
        resolve(&pool, "Drinks").await.unwrap();

        let names: Vec<String> = find_all(&pool)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Classics", "Drinks", "Sides"]);
    }
}
