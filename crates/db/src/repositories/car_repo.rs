//! Repository for the `cars` table.

use carhire_core::car::{CreateCar, UpdateCar};
use carhire_core::types::DbId;
use sqlx::PgPool;

use crate::models::car::Car;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, category, image_url, passengers, transmission, fuel, \
                        price_per_day, featured, availability_status, year, description, \
                        is_active, created_at, updated_at";

/// Provides CRUD operations for cars.
pub struct CarRepo;

impl CarRepo {
    /// Insert a new car, returning the created row. Omitted optional fields
    /// take their defaults.
    pub async fn create(pool: &PgPool, input: &CreateCar) -> Result<Car, sqlx::Error> {
        let query = format!(
            "INSERT INTO cars (name, category, image_url, passengers, transmission, fuel,
                               price_per_day, featured, availability_status, year,
                               description, is_active)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Car>(&query)
            .bind(&input.name)
            .bind(&input.category)
            .bind(input.image_url_or_default())
            .bind(input.passengers)
            .bind(&input.transmission)
            .bind(&input.fuel)
            .bind(input.price_per_day)
            .bind(input.featured.unwrap_or(false))
            .bind(input.availability_status.unwrap_or_default().as_str())
            .bind(input.year)
            .bind(&input.description)
            .bind(input.is_active.unwrap_or(true))
            .fetch_one(pool)
            .await
    }

    /// Find a car by ID, active or not.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Car>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cars WHERE id = $1");
        sqlx::query_as::<_, Car>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a car by ID only if it is active.
    pub async fn find_active(pool: &PgPool, id: DbId) -> Result<Option<Car>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cars WHERE id = $1 AND is_active = true");
        sqlx::query_as::<_, Car>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Active cars for the public site, featured first then newest first.
    pub async fn list_public(pool: &PgPool) -> Result<Vec<Car>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM cars
             WHERE is_active = true
             ORDER BY featured DESC, created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Car>(&query).fetch_all(pool).await
    }

    /// Every car for the admin listing, active first then newest first.
    pub async fn list_admin(pool: &PgPool) -> Result<Vec<Car>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM cars
             ORDER BY is_active DESC, created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Car>(&query).fetch_all(pool).await
    }

    /// Update a car. Only provided fields are applied; `description` may be
    /// cleared with an explicit `null`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCar,
    ) -> Result<Option<Car>, sqlx::Error> {
        let description_provided = input.description.is_some();
        let description_value = input.description.as_ref().and_then(|v| v.as_deref());

        let query = format!(
            "UPDATE cars SET
                name = COALESCE($2, name),
                category = COALESCE($3, category),
                image_url = COALESCE($4, image_url),
                passengers = COALESCE($5, passengers),
                transmission = COALESCE($6, transmission),
                fuel = COALESCE($7, fuel),
                price_per_day = COALESCE($8, price_per_day),
                featured = COALESCE($9, featured),
                availability_status = COALESCE($10, availability_status),
                year = COALESCE($11, year),
                description = CASE WHEN $12 THEN $13 ELSE description END,
                is_active = COALESCE($14, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Car>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.category)
            .bind(&input.image_url)
            .bind(input.passengers)
            .bind(&input.transmission)
            .bind(&input.fuel)
            .bind(input.price_per_day)
            .bind(input.featured)
            .bind(input.availability_status.map(|s| s.as_str()))
            .bind(input.year)
            .bind(description_provided)
            .bind(description_value)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a car by setting `is_active = false`.
    ///
    /// Returns the updated row, or `None` if no row with the given `id` exists.
    pub async fn deactivate(pool: &PgPool, id: DbId) -> Result<Option<Car>, sqlx::Error> {
        let query = format!(
            "UPDATE cars SET is_active = false
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Car>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Count cars, optionally only active ones.
    pub async fn count(pool: &PgPool, active_only: bool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM cars WHERE ($1 = false OR is_active = true)")
                .bind(active_only)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }
}
