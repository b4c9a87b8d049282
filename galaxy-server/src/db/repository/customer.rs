//! Customer Repository
//!
//! Customers are keyed by phone number. Order creation upserts: a known
//! phone updates name/address in place, a new phone inserts one row.

use super::RepoResult;
use shared::models::Customer;
use sqlx::SqlitePool;

const SELECT_CUSTOMER: &str =
    "SELECT id, name, phone, address, created_at, updated_at FROM customers";

pub async fn find_by_phone(pool: &SqlitePool, phone: &str) -> RepoResult<Option<Customer>> {
    let sql = format!("{SELECT_CUSTOMER} WHERE phone = ?");
    let row = sqlx::query_as::<_, Customer>(&sql)
        .bind(phone)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Upsert within the caller's transaction, returning the customer id.
pub async fn upsert_by_phone(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    name: &str,
    phone: &str,
    address: Option<&str>,
) -> RepoResult<i64> {
    let now = shared::util::now_millis();

    let existing = sqlx::query_scalar::<_, i64>("SELECT id FROM customers WHERE phone = ?")
        .bind(phone)
        .fetch_optional(&mut **tx)
        .await?;

    match existing {
        Some(id) => {
            sqlx::query("UPDATE customers SET name = ?, address = ?, updated_at = ? WHERE id = ?")
                .bind(name)
                .bind(address)
                .bind(now)
                .bind(id)
                .execute(&mut **tx)
                .await?;
            Ok(id)
        }
        None => {
            let id = shared::util::snowflake_id();
            sqlx::query(
                "INSERT INTO customers (id, name, phone, address, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?)",
            )
            .bind(id)
            .bind(name)
            .bind(phone)
            .bind(address)
            .bind(now)
            .bind(now)
            .execute(&mut **tx)
            .await?;
            Ok(id)
        }
    }
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
            "CREATE TABLE customers (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                phone TEXT NOT NULL UNIQUE,
                address TEXT,
                created_at INTEGER NOT NULL DEFAULT 0,
                updated_at INTEGER NOT NULL DEFAULT 0
            )",
        )
        .execute(&pool)
        .await
        .unwrap();

        pool
    }

    async fn upsert(
        pool: &SqlitePool,
        name: &str,
        phone: &str,
        address: Option<&str>,
    ) -> RepoResult<i64> {
        let mut tx = pool.begin().await.unwrap();
        let id = upsert_by_phone(&mut tx, name, phone, address).await?;
        tx.commit().await.unwrap();
        Ok(id)
    }

    #[tokio::test]
    async fn test_new_phone_inserts_one_row() {
        let pool = test_pool().await;
        let id = upsert(&pool, "Alice", "600111222", Some("Main St 1"))
            .await
            .unwrap();

        let customer = find_by_phone(&pool, "600111222").await.unwrap().unwrap();
        assert_eq!(customer.id, id);
        assert_eq!(customer.name, "Alice");
        assert_eq!(customer.address.as_deref(), Some("Main St 1"));
    }

    #[tokio::test]
    async fn test_known_phone_updates_in_place() {
        let pool = test_pool().await;
        let first = upsert(&pool, "Alice", "600111222", Some("Main St 1"))
            .await
            .unwrap();
        let second = upsert(&pool, "Alice Smith", "600111222", Some("New Rd 9"))
            .await
            .unwrap();
        assert_eq!(first, second);

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);

        let customer = find_by_phone(&pool, "600111222").await.unwrap().unwrap();
        assert_eq!(customer.name, "Alice Smith");
        assert_eq!(customer.address.as_deref(), Some("New Rd 9"));
    }
}
