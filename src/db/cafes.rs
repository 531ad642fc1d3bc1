//! Cafe table operations
//!
//! Each function is a single statement on the pool; mutating operations
//! commit independently. There are no cross-entity transactions.

use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::models::{Cafe, NewCafe};

const CAFE_COLUMNS: &str = "id, name, map_url, img_url, location, seats, \
     has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price";

pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Cafe>, ApiError> {
    let cafes = sqlx::query_as::<_, Cafe>(&format!("SELECT {CAFE_COLUMNS} FROM cafes ORDER BY id"))
        .fetch_all(pool)
        .await?;
    Ok(cafes)
}

/// Absence is `None`, not an error
pub async fn fetch_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Cafe>, ApiError> {
    let cafe = sqlx::query_as::<_, Cafe>(&format!("SELECT {CAFE_COLUMNS} FROM cafes WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(cafe)
}

/// Exact string equality on location; no LIKE, no case folding
pub async fn fetch_by_location(pool: &SqlitePool, location: &str) -> Result<Vec<Cafe>, ApiError> {
    let cafes = sqlx::query_as::<_, Cafe>(&format!(
        "SELECT {CAFE_COLUMNS} FROM cafes WHERE location = ? ORDER BY id"
    ))
    .bind(location)
    .fetch_all(pool)
    .await?;
    Ok(cafes)
}

/// Insert a new cafe; a duplicate name surfaces as `ApiError::Conflict`
pub async fn insert(pool: &SqlitePool, cafe: &NewCafe) -> Result<Cafe, ApiError> {
    let result = sqlx::query_as::<_, Cafe>(&format!(
        "INSERT INTO cafes (name, map_url, img_url, location, seats, \
         has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?) \
         RETURNING {CAFE_COLUMNS}"
    ))
    .bind(&cafe.name)
    .bind(&cafe.map_url)
    .bind(&cafe.img_url)
    .bind(&cafe.location)
    .bind(&cafe.seats)
    .bind(cafe.has_toilet)
    .bind(cafe.has_wifi)
    .bind(cafe.has_sockets)
    .bind(cafe.can_take_calls)
    .bind(&cafe.coffee_price)
    .fetch_one(pool)
    .await;

    match result {
        Ok(cafe) => Ok(cafe),
        Err(e) if is_unique_violation(&e) => Err(ApiError::Conflict(format!(
            "A cafe named \"{}\" already exists.",
            cafe.name
        ))),
        Err(e) => Err(e.into()),
    }
}

/// Overwrite only the coffee_price field; returns false when no row matched
pub async fn update_price(
    pool: &SqlitePool,
    id: i64,
    new_price: &str,
) -> Result<bool, ApiError> {
    let rows = sqlx::query("UPDATE cafes SET coffee_price = ? WHERE id = ?")
        .bind(new_price)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

/// Returns false when no row matched
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, ApiError> {
    let rows = sqlx::query("DELETE FROM cafes WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db| db.is_unique_violation())
}
