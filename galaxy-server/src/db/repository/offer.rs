//! Offer Repository

use super::{RepoError, RepoResult};
use chrono::NaiveDate;
use shared::models::{OfferInput, OfferItem};
use sqlx::SqlitePool;

const SELECT_OFFER: &str = "SELECT id, title, description, image_url, discount, start_date, end_date, is_active, created_at, updated_at FROM offers";

// ── Queries ──────────────────────────────────────────────────

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<OfferItem>> {
    let sql = format!("{SELECT_OFFER} ORDER BY created_at DESC");
    let mut offers = sqlx::query_as::<_, OfferItem>(&sql).fetch_all(pool).await?;
    for offer in &mut offers {
        attach_menu_items(pool, offer).await?;
    }
    Ok(offers)
}

/// Offers live on the given day: `is_active` and `start_date <= today <=
/// end_date`. The day is passed in as `YYYY-MM-DD` so callers control the
/// clock.
pub async fn find_active(pool: &SqlitePool, today: &str) -> RepoResult<Vec<OfferItem>> {
    let sql = format!(
        "{SELECT_OFFER} WHERE is_active = 1 AND start_date <= ? AND end_date >= ? ORDER BY created_at DESC"
    );
    let mut offers = sqlx::query_as::<_, OfferItem>(&sql)
        .bind(today)
        .bind(today)
        .fetch_all(pool)
        .await?;
    for offer in &mut offers {
        attach_menu_items(pool, offer).await?;
    }
    Ok(offers)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<OfferItem>> {
    let sql = format!("{SELECT_OFFER} WHERE id = ?");
    let row = sqlx::query_as::<_, OfferItem>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    match row {
        Some(mut offer) => {
            attach_menu_items(pool, &mut offer).await?;
            Ok(Some(offer))
        }
        None => Ok(None),
    }
}

// ── Writes ───────────────────────────────────────────────────

pub async fn create(pool: &SqlitePool, input: OfferInput) -> RepoResult<OfferItem> {
    validate(&input)?;
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();

    let mut tx = pool.begin().await?;

    sqlx::query(
        "INSERT INTO offers (id, title, description, image_url, discount, start_date, end_date, is_active, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(input.title.trim())
    .bind(&input.description)
    .bind(&input.image_url)
    .bind(input.discount)
    .bind(&input.start_date)
    .bind(&input.end_date)
    .bind(input.is_active)
    .bind(now)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    replace_menu_items(&mut tx, id, &input.menu_item_ids).await?;

    tx.commit().await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create offer".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, input: OfferInput) -> RepoResult<OfferItem> {
    validate(&input)?;
    let now = shared::util::now_millis();

    let mut tx = pool.begin().await?;

    let rows = sqlx::query(
        "UPDATE offers SET title = ?, description = ?, image_url = ?, discount = ?, start_date = ?, end_date = ?, is_active = ?, updated_at = ? WHERE id = ?",
    )
    .bind(input.title.trim())
    .bind(&input.description)
    .bind(&input.image_url)
    .bind(input.discount)
    .bind(&input.start_date)
    .bind(&input.end_date)
    .bind(input.is_active)
    .bind(now)
    .bind(id)
    .execute(&mut *tx)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Offer {id} not found")));
    }

    replace_menu_items(&mut tx, id, &input.menu_item_ids).await?;

    tx.commit().await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Offer {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM offers WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

// ── Internal helpers ─────────────────────────────────────────

fn validate(input: &OfferInput) -> RepoResult<()> {
    if input.title.trim().is_empty() {
        return Err(RepoError::Validation("Offer title is required".into()));
    }
    // 0 is allowed: it marks a non-percentage deal described in the text
    if !(0..=100).contains(&input.discount) {
        return Err(RepoError::Validation(
            "Discount must be between 0 and 100".into(),
        ));
    }
    let start = parse_date(&input.start_date, "startDate")?;
    let end = parse_date(&input.end_date, "endDate")?;
    if start > end {
        return Err(RepoError::Validation(
            "startDate must not be after endDate".into(),
        ));
    }
    Ok(())
}

fn parse_date(value: &str, field: &str) -> RepoResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| RepoError::Validation(format!("{field} must be a YYYY-MM-DD date")))
}

async fn replace_menu_items(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    offer_id: i64,
    menu_item_ids: &[i64],
) -> RepoResult<()> {
    sqlx::query("DELETE FROM offer_menu_items WHERE offer_id = ?")
        .bind(offer_id)
        .execute(&mut **tx)
        .await?;
    for menu_item_id in menu_item_ids {
        let exists = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM menu_items WHERE id = ?",
        )
        .bind(menu_item_id)
        .fetch_one(&mut **tx)
        .await?;
        if exists == 0 {
            return Err(RepoError::Validation(format!(
                "Menu item {menu_item_id} not found"
            )));
        }
        sqlx::query("INSERT INTO offer_menu_items (offer_id, menu_item_id) VALUES (?, ?)")
            .bind(offer_id)
            .bind(menu_item_id)
            .execute(&mut **tx)
            .await?;
    }
    Ok(())
}

async fn attach_menu_items(pool: &SqlitePool, offer: &mut OfferItem) -> RepoResult<()> {
    offer.menu_item_ids = sqlx::query_scalar::<_, i64>(
        "SELECT menu_item_id FROM offer_menu_items WHERE offer_id = ? ORDER BY menu_item_id",
    )
    .bind(offer.id)
    .fetch_all(pool)
    .await?;
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

        sqlx::query("PRAGMA foreign_keys = ON")
            .execute(&pool)
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

        sqlx::query(
            "CREATE TABLE menu_items (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                description TEXT NOT NULL,
                price REAL NOT NULL,
                category_id INTEGER NOT NULL REFERENCES categories(id),
                image TEXT,
                popular INTEGER NOT NULL DEFAULT 0,
                discount INTEGER,
                created_at INTEGER NOT NULL DEFAULT 0,
                updated_at INTEGER NOT NULL DEFAULT 0
            )",
        )
        .execute(&pool)
        .await
        .unwrap();

        sqlx::query(
            "CREATE TABLE offers (
                id INTEGER PRIMARY KEY,
                title TEXT NOT NULL,
                description TEXT NOT NULL,
                image_url TEXT,
                discount INTEGER NOT NULL,
                start_date TEXT NOT NULL,
                end_date TEXT NOT NULL,
                is_active INTEGER NOT NULL DEFAULT 1,
                created_at INTEGER NOT NULL DEFAULT 0,
                updated_at INTEGER NOT NULL DEFAULT 0
            )",
        )
        .execute(&pool)
        .await
        .unwrap();

        sqlx::query(
            "CREATE TABLE offer_menu_items (
                offer_id INTEGER NOT NULL REFERENCES offers(id) ON DELETE CASCADE,
                menu_item_id INTEGER NOT NULL REFERENCES menu_items(id) ON DELETE CASCADE,
                PRIMARY KEY (offer_id, menu_item_id)
            )",
        )
        .execute(&pool)
        .await
        .unwrap();

        // Seed: category + two menu items for link targets
        sqlx::query("INSERT INTO categories (id, name) VALUES (1, 'Classics')")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query("INSERT INTO menu_items (id, name, description, price, category_id) VALUES (11, 'Margherita', '', 9.0, 1), (12, 'Diavola', '', 11.0, 1)")
            .execute(&pool)
            .await
            .unwrap();

        pool
    }

    fn sample_input() -> OfferInput {
        OfferInput {
            title: "Family Tuesday".into(),
            description: "Family pizzas half price".into(),
            image_url: None,
            discount: 50,
            menu_item_ids: vec![11, 12],
            start_date: "2025-06-01".into(),
            end_date: "2025-06-30".into(),
            is_active: true,
        }
    }

    #[tokio::test]
    async fn test_create_links_menu_items() {
        let pool = test_pool().await;
        let offer = create(&pool, sample_input()).await.unwrap();
        assert_eq!(offer.menu_item_ids, vec![11, 12]);
        assert!(offer.is_active);
    }

    #[tokio::test]
    async fn test_start_after_end_rejected_before_persistence() {
        let pool = test_pool().await;
        let mut input = sample_input();
        input.start_date = "2025-07-01".into();
        input.end_date = "2025-06-01".into();

        let err = create(&pool, input).await.unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));
        assert!(find_all(&pool).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_discount_zero_marks_non_percentage_deal() {
        let pool = test_pool().await;
        let mut input = sample_input();
        input.discount = 0;
        input.description = "Free garlic bread with every family pizza".into();
        let offer = create(&pool, input).await.unwrap();
        assert_eq!(offer.discount, 0);

        let mut negative = sample_input();
        negative.discount = -5;
        assert!(matches!(
            create(&pool, negative).await.unwrap_err(),
            RepoError::Validation(_)
        ));
    }

    #[tokio::test]
    async fn test_malformed_date_rejected() {
        let pool = test_pool().await;
        let mut input = sample_input();
        input.start_date = "01/06/2025".into();
        assert!(matches!(
            create(&pool, input).await.unwrap_err(),
            RepoError::Validation(_)
        ));
    }

    #[tokio::test]
    async fn test_unknown_menu_item_rejected() {
        let pool = test_pool().await;
        let mut input = sample_input();
        input.menu_item_ids = vec![11, 999];

        let err = create(&pool, input).await.unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));
        assert!(find_all(&pool).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_active_window_is_inclusive() {
        let pool = test_pool().await;
        create(&pool, sample_input()).await.unwrap();

        assert_eq!(find_active(&pool, "2025-06-01").await.unwrap().len(), 1);
        assert_eq!(find_active(&pool, "2025-06-30").await.unwrap().len(), 1);
        assert!(find_active(&pool, "2025-05-31").await.unwrap().is_empty());
        assert!(find_active(&pool, "2025-07-01").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_inactive_offer_excluded_within_window() {
        let pool = test_pool().await;
        let mut input = sample_input();
        input.is_active = false;
        create(&pool, input).await.unwrap();

        assert!(find_active(&pool, "2025-06-15").await.unwrap().is_empty());
        assert_eq!(find_all(&pool).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_replaces_link_set() {
        let pool = test_pool().await;
        let offer = create(&pool, sample_input()).await.unwrap();

        let mut changed = sample_input();
        changed.menu_item_ids = vec![12];
        let updated = update(&pool, offer.id, changed).await.unwrap();
        assert_eq!(updated.menu_item_ids, vec![12]);
    }

    #[tokio::test]
    async fn test_update_missing_returns_not_found() {
        let pool = test_pool().await;
        assert!(matches!(
            update(&pool, 777, sample_input()).await.unwrap_err(),
            RepoError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_delete_removes_offer_and_links_only() {
        let pool = test_pool().await;
        let offer = create(&pool, sample_input()).await.unwrap();

        assert!(delete(&pool, offer.id).await.unwrap());
        assert!(find_by_id(&pool, offer.id).await.unwrap().is_none());

        let links: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM offer_menu_items")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(links, 0);

        let items: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM menu_items")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(items, 2);
    }
}
