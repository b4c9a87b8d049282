//! Admin User Repository

use super::{RepoError, RepoResult};
use crate::utils::password;
use shared::models::AdminUser;
use sqlx::SqlitePool;

/// Demo back-office credentials, seeded on first start when the table is
/// empty. Meant to be changed before the restaurant goes live.
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

const SELECT_ADMIN: &str =
    "SELECT id, username, password_hash, role, last_login FROM admin_users";

pub async fn find_by_username(pool: &SqlitePool, username: &str) -> RepoResult<Option<AdminUser>> {
    let sql = format!("{SELECT_ADMIN} WHERE username = ?");
    let row = sqlx::query_as::<_, AdminUser>(&sql)
        .bind(username)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn touch_last_login(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    sqlx::query("UPDATE admin_users SET last_login = ? WHERE id = ?")
        .bind(shared::util::now_millis())
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Seed the default admin account when no accounts exist yet. Idempotent.
pub async fn ensure_default_admin(pool: &SqlitePool) -> RepoResult<()> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM admin_users")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(());
    }

    let hash = password::hash_password(DEFAULT_ADMIN_PASSWORD)
        .map_err(|e| RepoError::Database(format!("Failed to hash default password: {e}")))?;

    sqlx::query(
        "INSERT INTO admin_users (id, username, password_hash, role) VALUES (?, ?, ?, 'admin')",
    )
    .bind(shared::util::snowflake_id())
    .bind(DEFAULT_ADMIN_USERNAME)
    .bind(&hash)
    .execute(pool)
    .await?;

    tracing::warn!(
        username = DEFAULT_ADMIN_USERNAME,
        "Seeded default admin account, change the password before going live"
    );
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
            "CREATE TABLE admin_users (
                id INTEGER PRIMARY KEY,
                username TEXT NOT NULL UNIQUE,
                password_hash TEXT NOT NULL,
                role TEXT NOT NULL DEFAULT 'admin',
                last_login INTEGER
            )",
        )
        .execute(&pool)
        .await
        .unwrap();

        pool
    }

    #[tokio::test]
    async fn test_seed_is_idempotent_and_hashes_password() {
        let pool = test_pool().await;
        ensure_default_admin(&pool).await.unwrap();
        ensure_default_admin(&pool).await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM admin_users")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);

        let admin = find_by_username(&pool, DEFAULT_ADMIN_USERNAME)
            .await
            .unwrap()
            .unwrap();
        assert_ne!(admin.password_hash, DEFAULT_ADMIN_PASSWORD);
        assert!(password::verify_password(
            DEFAULT_ADMIN_PASSWORD,
            &admin.password_hash
        ));
        assert!(admin.last_login.is_none());
    }

    #[tokio::test]
    async fn test_seed_skipped_when_accounts_exist() {
        let pool = test_pool().await;
        sqlx::query(
            "INSERT INTO admin_users (id, username, password_hash) VALUES (1, 'owner', 'x')",
        )
        .execute(&pool)
        .await
        .unwrap();

        ensure_default_admin(&pool).await.unwrap();
        assert!(
            find_by_username(&pool, DEFAULT_ADMIN_USERNAME)
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_touch_last_login() {
        let pool = test_pool().await;
        ensure_default_admin(&pool).await.unwrap();
        let admin = find_by_username(&pool, DEFAULT_ADMIN_USERNAME)
            .await
            .unwrap()
            .unwrap();

        touch_last_login(&pool, admin.id).await.unwrap();
        let admin = find_by_username(&pool, DEFAULT_ADMIN_USERNAME)
            .await
            .unwrap()
            .unwrap();
        assert!(admin.last_login.is_some());
    }
}
