//! Order Repository
//!
//! Orders snapshot the customer and menu item data they were placed with,
//! so later edits to the menu never rewrite order history.

use super::{RepoError, RepoResult, customer};
use shared::models::{Order, OrderInput, OrderItem, OrderStatus, OrderType};
use sqlx::SqlitePool;

const SELECT_ORDER: &str = "SELECT id, customer_name, customer_phone, customer_address, order_type, total_amount, status, special_instructions, created_at FROM orders";

// ── Queries ──────────────────────────────────────────────────

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Order>> {
    let sql = format!("{SELECT_ORDER} ORDER BY created_at DESC");
    let mut orders = sqlx::query_as::<_, Order>(&sql).fetch_all(pool).await?;
    for order in &mut orders {
        attach_items(pool, order).await?;
    }
    Ok(orders)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Order>> {
    let sql = format!("{SELECT_ORDER} WHERE id = ?");
    let row = sqlx::query_as::<_, Order>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    match row {
        Some(mut order) => {
            attach_items(pool, &mut order).await?;
            Ok(Some(order))
        }
        None => Ok(None),
    }
}

// ── Writes ───────────────────────────────────────────────────

/// Create an order: upsert the customer by phone, insert the order row
/// and every line with its toppings, all in one transaction.
pub async fn create(pool: &SqlitePool, input: OrderInput) -> RepoResult<Order> {
    validate(&input)?;
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();

    let mut tx = pool.begin().await?;

    let customer_id = customer::upsert_by_phone(
        &mut tx,
        input.customer_name.trim(),
        input.customer_phone.trim(),
        input.customer_address.as_deref(),
    )
    .await?;

    sqlx::query(
        "INSERT INTO orders (id, customer_id, customer_name, customer_phone, customer_address, order_type, total_amount, status, special_instructions, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(customer_id)
    .bind(input.customer_name.trim())
    .bind(input.customer_phone.trim())
    .bind(&input.customer_address)
    .bind(input.order_type)
    .bind(input.total_amount)
    .bind(OrderStatus::Pending)
    .bind(&input.special_instructions)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    for line in &input.order_items {
        let item_id = shared::util::snowflake_id();
        sqlx::query(
            "INSERT INTO order_items (id, order_id, menu_item_id, name, price, quantity, size) VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(item_id)
        .bind(id)
        .bind(line.menu_item_id)
        .bind(&line.name)
        .bind(line.price)
        .bind(line.quantity)
        .bind(&line.size)
        .execute(&mut *tx)
        .await?;

        for (position, topping) in line.toppings.iter().enumerate() {
            sqlx::query(
                "INSERT INTO order_item_toppings (order_item_id, topping, position) VALUES (?, ?, ?)",
            )
            .bind(item_id)
            .bind(topping)
            .bind(position as i64)
            .execute(&mut *tx)
            .await?;
        }
    }

    tx.commit().await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create order".into()))
}

/// Set the status. Any member of the closed set is accepted from any
/// current status; the caller parses the string beforehand.
pub async fn update_status(pool: &SqlitePool, id: i64, status: OrderStatus) -> RepoResult<Order> {
    let rows = sqlx::query("UPDATE orders SET status = ? WHERE id = ?")
        .bind(status)
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Order {id} not found")));
    }

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Order {id} not found")))
}

// ── Internal helpers ─────────────────────────────────────────

fn validate(input: &OrderInput) -> RepoResult<()> {
    if input.customer_name.trim().is_empty() {
        return Err(RepoError::Validation("Customer name is required".into()));
    }
    if input.customer_phone.trim().is_empty() {
        return Err(RepoError::Validation("Customer phone is required".into()));
    }
    if input.order_type == OrderType::Delivery
        && input
            .customer_address
            .as_deref()
            .is_none_or(|a| a.trim().is_empty())
    {
        return Err(RepoError::Validation(
            "Delivery orders require an address".into(),
        ));
    }
    if input.order_items.is_empty() {
        return Err(RepoError::Validation(
            "Order must contain at least one item".into(),
        ));
    }
    for line in &input.order_items {
        if line.quantity <= 0 {
            return Err(RepoError::Validation(
                "Item quantity must be greater than zero".into(),
            ));
        }
        if line.price < 0.0 {
            return Err(RepoError::Validation(
                "Item price must not be negative".into(),
            ));
        }
    }
    if input.total_amount < 0.0 {
        return Err(RepoError::Validation(
            "Total amount must not be negative".into(),
        ));
    }
    Ok(())
}

async fn attach_items(pool: &SqlitePool, order: &mut Order) -> RepoResult<()> {
    let ids = sqlx::query_scalar::<_, i64>("SELECT id FROM order_items WHERE order_id = ?")
        .bind(order.id)
        .fetch_all(pool)
        .await?;

    let mut items = Vec::with_capacity(ids.len());
    for item_id in ids {
        let mut item = sqlx::query_as::<_, OrderItem>(
            "SELECT menu_item_id, name, price, quantity, size FROM order_items WHERE id = ?",
        )
        .bind(item_id)
        .fetch_one(pool)
        .await?;

        item.toppings = sqlx::query_scalar::<_, String>(
            "SELECT topping FROM order_item_toppings WHERE order_item_id = ? ORDER BY position",
        )
        .bind(item_id)
        .fetch_all(pool)
        .await?;

        items.push(item);
    }

    order.order_items = items;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::OrderItemInput;
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

        sqlx::query(
            "CREATE TABLE orders (
                id INTEGER PRIMARY KEY,
                customer_id INTEGER NOT NULL REFERENCES customers(id),
                customer_name TEXT NOT NULL,
                customer_phone TEXT NOT NULL,
                customer_address TEXT,
                order_type TEXT NOT NULL,
                total_amount REAL NOT NULL,
                status TEXT NOT NULL DEFAULT 'pending',
                special_instructions TEXT,
                created_at INTEGER NOT NULL DEFAULT 0
            )",
        )
        .execute(&pool)
        .await
        .unwrap();

        sqlx::query(
            "CREATE TABLE order_items (
                id INTEGER PRIMARY KEY,
                order_id INTEGER NOT NULL REFERENCES orders(id) ON DELETE CASCADE,
                menu_item_id INTEGER NOT NULL,
                name TEXT NOT NULL,
                price REAL NOT NULL,
                quantity INTEGER NOT NULL,
                size TEXT
            )",
        )
        .execute(&pool)
        .await
        .unwrap();

        sqlx::query(
            "CREATE TABLE order_item_toppings (
                order_item_id INTEGER NOT NULL REFERENCES order_items(id) ON DELETE CASCADE,
                topping TEXT NOT NULL,
                position INTEGER NOT NULL,
                PRIMARY KEY (order_item_id, position)
            )",
        )
        .execute(&pool)
        .await
        .unwrap();

        pool
    }

    fn sample_input() -> OrderInput {
        OrderInput {
            customer_name: "Alice".into(),
            customer_phone: "600111222".into(),
            customer_address: Some("Main St 1".into()),
            order_type: OrderType::Delivery,
            order_items: vec![OrderItemInput {
                menu_item_id: 11,
                name: "Margherita".into(),
                price: 9.0,
                quantity: 2,
                size: Some("Large".into()),
                toppings: vec!["Olives".into(), "Ham".into()],
            }],
            total_amount: 21.0,
            special_instructions: None,
        }
    }

    #[tokio::test]
    async fn test_create_starts_pending_with_lines_and_toppings() {
        let pool = test_pool().await;
        let order = create(&pool, sample_input()).await.unwrap();

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.order_items.len(), 1);
        assert_eq!(order.order_items[0].quantity, 2);
        assert_eq!(order.order_items[0].size.as_deref(), Some("Large"));
        assert_eq!(order.order_items[0].toppings, vec!["Olives", "Ham"]);
        assert!(order.created_at > 0);
    }

    #[tokio::test]
    async fn test_repeat_phone_reuses_customer() {
        let pool = test_pool().await;
        create(&pool, sample_input()).await.unwrap();

        let mut second = sample_input();
        second.customer_name = "Alice Smith".into();
        second.customer_address = Some("New Rd 9".into());
        create(&pool, second).await.unwrap();

        let customers: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(customers, 1);

        let customer = customer::find_by_phone(&pool, "600111222")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(customer.name, "Alice Smith");
        assert_eq!(customer.address.as_deref(), Some("New Rd 9"));
    }

    #[tokio::test]
    async fn test_new_phone_creates_exactly_one_customer() {
        let pool = test_pool().await;
        create(&pool, sample_input()).await.unwrap();

        let mut other = sample_input();
        other.customer_phone = "600999888".into();
        create(&pool, other).await.unwrap();

        let customers: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(customers, 2);
    }

    #[tokio::test]
    async fn test_empty_order_rejected() {
        let pool = test_pool().await;
        let mut input = sample_input();
        input.order_items.clear();
        assert!(matches!(
            create(&pool, input).await.unwrap_err(),
            RepoError::Validation(_)
        ));
    }

    #[tokio::test]
    async fn test_delivery_without_address_rejected() {
        let pool = test_pool().await;
        let mut input = sample_input();
        input.customer_address = None;
        assert!(matches!(
            create(&pool, input).await.unwrap_err(),
            RepoError::Validation(_)
        ));

        // Takeaway without address is fine
        let mut takeaway = sample_input();
        takeaway.customer_address = None;
        takeaway.order_type = OrderType::Takeaway;
        assert!(create(&pool, takeaway).await.is_ok());
    }

    #[tokio::test]
    async fn test_update_status_persists() {
        let pool = test_pool().await;
        let order = create(&pool, sample_input()).await.unwrap();

        let updated = update_status(&pool, order.id, OrderStatus::Preparing)
            .await
            .unwrap();
        assert_eq!(updated.status, OrderStatus::Preparing);

        let reloaded = find_by_id(&pool, order.id).await.unwrap().unwrap();
        assert_eq!(reloaded.status, OrderStatus::Preparing);
    }

    #[tokio::test]
    async fn test_update_status_missing_order() {
        let pool = test_pool().await;
        assert!(matches!(
            update_status(&pool, 12345, OrderStatus::Ready)
                .await
                .unwrap_err(),
            RepoError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_find_all_newest_first() {
        let pool = test_pool().await;
        let first = create(&pool, sample_input()).await.unwrap();

        // Force distinct created_at values
        sqlx::query("UPDATE orders SET created_at = created_at - 1000 WHERE id = ?")
            .bind(first.id)
            .execute(&pool)
            .await
            .unwrap();

        let mut other = sample_input();
        other.customer_phone = "600999888".into();
        let second = create(&pool, other).await.unwrap();

        let all = find_all(&pool).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, second.id);
    }
}
