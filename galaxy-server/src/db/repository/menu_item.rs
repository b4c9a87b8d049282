//! Menu Item Repository

use super::{RepoError, RepoResult, category};
use shared::models::{MenuItem, MenuItemFilter, MenuItemInput};
use sqlx::SqlitePool;

const SELECT_ITEM: &str = "SELECT mi.id, mi.name, mi.description, mi.price, c.name AS category, mi.image, mi.popular, mi.discount, mi.created_at, mi.updated_at FROM menu_items mi JOIN categories c ON c.id = mi.category_id";

// ── Queries ──────────────────────────────────────────────────

pub async fn find_all(pool: &SqlitePool, filter: &MenuItemFilter) -> RepoResult<Vec<MenuItem>> {
    let mut sql = String::from(SELECT_ITEM);
    let mut clauses: Vec<&str> = Vec::new();
    if filter.category.is_some() {
        clauses.push("c.name = ?");
    }
    if filter.popular.is_some() {
        clauses.push("mi.popular = ?");
    }
    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }
    sql.push_str(" ORDER BY mi.created_at DESC");

    let mut query = sqlx::query_as::<_, MenuItem>(&sql);
    if let Some(category) = &filter.category {
        query = query.bind(category);
    }
    if let Some(popular) = filter.popular {
        query = query.bind(popular);
    }

    let mut items = query.fetch_all(pool).await?;
    for item in &mut items {
        attach_links(pool, item).await?;
    }
    Ok(items)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<MenuItem>> {
    let sql = format!("{SELECT_ITEM} WHERE mi.id = ?");
    let row = sqlx::query_as::<_, MenuItem>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    match row {
        Some(mut item) => {
            attach_links(pool, &mut item).await?;
            Ok(Some(item))
        }
        None => Ok(None),
    }
}

// ── Writes ───────────────────────────────────────────────────

pub async fn create(pool: &SqlitePool, input: MenuItemInput) -> RepoResult<MenuItem> {
    validate(&input)?;
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();

    let mut tx = pool.begin().await?;
    let category_id = category::get_or_create(&mut tx, &input.category).await?;

    sqlx::query(
        "INSERT INTO menu_items (id, name, description, price, category_id, image, popular, discount, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(input.name.trim())
    .bind(&input.description)
    .bind(input.price)
    .bind(category_id)
    .bind(&input.image)
    .bind(input.popular)
    .bind(input.discount)
    .bind(now)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    replace_sizes(&mut tx, id, &input.available_sizes).await?;
    replace_toppings(&mut tx, id, &input.available_toppings).await?;

    tx.commit().await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create menu item".into()))
}

/// Full replacement: every column and both link sets are rewritten from
/// the payload.
pub async fn update(pool: &SqlitePool, id: i64, input: MenuItemInput) -> RepoResult<MenuItem> {
    validate(&input)?;
    let now = shared::util::now_millis();

    let mut tx = pool.begin().await?;
    let category_id = category::get_or_create(&mut tx, &input.category).await?;

    let rows = sqlx::query(
        "UPDATE menu_items SET name = ?, description = ?, price = ?, category_id = ?, image = ?, popular = ?, discount = ?, updated_at = ? WHERE id = ?",
    )
    .bind(input.name.trim())
    .bind(&input.description)
    .bind(input.price)
    .bind(category_id)
    .bind(&input.image)
    .bind(input.popular)
    .bind(input.discount)
    .bind(now)
    .bind(id)
    .execute(&mut *tx)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Menu item {id} not found")));
    }

    replace_sizes(&mut tx, id, &input.available_sizes).await?;
    replace_toppings(&mut tx, id, &input.available_toppings).await?;

    tx.commit().await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Menu item {id} not found")))
}

/// Delete the item. Size/topping rows and offer links cascade; the
/// offers themselves stay.
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM menu_items WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

// ── Internal helpers ─────────────────────────────────────────

fn validate(input: &MenuItemInput) -> RepoResult<()> {
    if input.name.trim().is_empty() {
        return Err(RepoError::Validation("Menu item name is required".into()));
    }
    if input.category.trim().is_empty() {
        return Err(RepoError::Validation("Category name is required".into()));
    }
    if input.price <= 0.0 {
        return Err(RepoError::Validation(
            "Price must be greater than zero".into(),
        ));
    }
    if let Some(discount) = input.discount
        && !(0..=100).contains(&discount)
    {
        return Err(RepoError::Validation(
            "Discount must be between 0 and 100".into(),
        ));
    }
    Ok(())
}

async fn replace_sizes(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    menu_item_id: i64,
    sizes: &[String],
) -> RepoResult<()> {
    sqlx::query("DELETE FROM menu_item_sizes WHERE menu_item_id = ?")
        .bind(menu_item_id)
        .execute(&mut **tx)
        .await?;
    for (position, size) in sizes.iter().enumerate() {
        sqlx::query("INSERT INTO menu_item_sizes (menu_item_id, size, position) VALUES (?, ?, ?)")
            .bind(menu_item_id)
            .bind(size)
            .bind(position as i64)
            .execute(&mut **tx)
            .await?;
    }
    Ok(())
}

async fn replace_toppings(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    menu_item_id: i64,
    toppings: &[String],
) -> RepoResult<()> {
    sqlx::query("DELETE FROM menu_item_toppings WHERE menu_item_id = ?")
        .bind(menu_item_id)
        .execute(&mut **tx)
        .await?;
    for (position, topping) in toppings.iter().enumerate() {
        sqlx::query(
            "INSERT INTO menu_item_toppings (menu_item_id, topping, position) VALUES (?, ?, ?)",
        )
        .bind(menu_item_id)
        .bind(topping)
        .bind(position as i64)
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}

async fn attach_links(pool: &SqlitePool, item: &mut MenuItem) -> RepoResult<()> {
    item.available_sizes = sqlx::query_scalar::<_, String>(
        "SELECT size FROM menu_item_sizes WHERE menu_item_id = ? ORDER BY position",
    )
    .bind(item.id)
    .fetch_all(pool)
    .await?;

    item.available_toppings = sqlx::query_scalar::<_, String>(
        "SELECT topping FROM menu_item_toppings WHERE menu_item_id = ? ORDER BY position",
    )
    .bind(item.id)
    .fetch_all(pool)
    .await?;

    Ok(())
}
