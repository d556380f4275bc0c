//! Repository for the `leads` table.
//!
//! Every read joins the linked car so callers get its name, image and daily
//! price in the same row. Inserts and updates go through a data-modifying
//! CTE for the same reason.

use carhire_core::lead::{LeadChanges, NewLead};
use carhire_core::types::DbId;
use sqlx::PgPool;

use crate::models::lead::Lead;

/// Column list for a lead aliased `l` joined with its car aliased `c`.
const COLUMNS: &str = "l.id, l.status, l.customer_name, l.customer_email, l.customer_phone, \
                        l.contact_channel, l.pickup_date, l.return_date, l.pickup_location, \
                        l.dropoff_location, l.message, l.notes, l.car_id, l.created_at, \
                        l.updated_at, c.name AS car_name, c.image_url AS car_image_url, \
                        c.price_per_day AS car_price_per_day";

/// Provides CRUD operations for leads.
pub struct LeadRepo;

impl LeadRepo {
    /// Insert a new lead, returning it joined with its car.
    ///
    /// An unknown `car_id` fails with a foreign-key violation.
    pub async fn create(pool: &PgPool, input: &NewLead) -> Result<Lead, sqlx::Error> {
        let query = format!(
            "WITH l AS (
                INSERT INTO leads (customer_name, customer_email, customer_phone,
                                   contact_channel, status, pickup_date, return_date,
                                   pickup_location, dropoff_location, car_id, message, notes)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
                RETURNING *
             )
             SELECT {COLUMNS} FROM l LEFT JOIN cars c ON c.id = l.car_id"
        );
        sqlx::query_as::<_, Lead>(&query)
            .bind(&input.customer_name)
            .bind(&input.customer_email)
            .bind(&input.customer_phone)
            .bind(input.contact_channel.as_str())
            .bind(input.status.as_str())
            .bind(input.pickup_date)
            .bind(input.return_date)
            .bind(&input.pickup_location)
            .bind(&input.dropoff_location)
            .bind(input.car_id)
            .bind(&input.message)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find a lead by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Lead>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM leads l
             LEFT JOIN cars c ON c.id = l.car_id
             WHERE l.id = $1"
        );
        sqlx::query_as::<_, Lead>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List leads newest first.
    ///
    /// `status` filters on an exact status label. `search` matches, case
    /// insensitively, the customer's name, email or phone and the car name.
    pub async fn list(
        pool: &PgPool,
        status: Option<&str>,
        search: Option<&str>,
    ) -> Result<Vec<Lead>, sqlx::Error> {
        let pattern = search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| format!("%{}%", escape_like(s)));

        let query = format!(
            "SELECT {COLUMNS} FROM leads l
             LEFT JOIN cars c ON c.id = l.car_id
             WHERE ($1::text IS NULL OR l.status = $1)
               AND ($2::text IS NULL
                    OR l.customer_name ILIKE $2
                    OR l.customer_email ILIKE $2
                    OR l.customer_phone ILIKE $2
                    OR c.name ILIKE $2)
             ORDER BY l.created_at DESC, l.id DESC"
        );
        sqlx::query_as::<_, Lead>(&query)
            .bind(status)
            .bind(pattern)
            .fetch_all(pool)
            .await
    }

    /// The `limit` most recently created leads.
    pub async fn recent(pool: &PgPool, limit: i64) -> Result<Vec<Lead>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM leads l
             LEFT JOIN cars c ON c.id = l.car_id
             ORDER BY l.created_at DESC, l.id DESC
             LIMIT $1"
        );
        sqlx::query_as::<_, Lead>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Update a lead. Only provided fields are applied; nullable columns
    /// are cleared when the inner value is `None`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &LeadChanges,
    ) -> Result<Option<Lead>, sqlx::Error> {
        let query = format!(
            "WITH l AS (
                UPDATE leads SET
                    status = COALESCE($2, status),
                    contact_channel = COALESCE($3, contact_channel),
                    customer_name = COALESCE($4, customer_name),
                    customer_phone = CASE WHEN $5 THEN $6 ELSE customer_phone END,
                    customer_email = CASE WHEN $7 THEN $8 ELSE customer_email END,
                    pickup_date = CASE WHEN $9 THEN $10 ELSE pickup_date END,
                    return_date = CASE WHEN $11 THEN $12 ELSE return_date END,
                    pickup_location = CASE WHEN $13 THEN $14 ELSE pickup_location END,
                    dropoff_location = CASE WHEN $15 THEN $16 ELSE dropoff_location END,
                    car_id = CASE WHEN $17 THEN $18 ELSE car_id END,
                    message = CASE WHEN $19 THEN $20 ELSE message END,
                    notes = CASE WHEN $21 THEN $22 ELSE notes END
                WHERE id = $1
                RETURNING *
             )
             SELECT {COLUMNS} FROM l LEFT JOIN cars c ON c.id = l.car_id"
        );
        sqlx::query_as::<_, Lead>(&query)
            .bind(id)
            .bind(input.status.as_deref())
            .bind(input.contact_channel.map(|c| c.as_str()))
            .bind(&input.customer_name)
            .bind(input.customer_phone.is_some())
            .bind(input.customer_phone.as_ref().and_then(|v| v.as_deref()))
            .bind(input.customer_email.is_some())
            .bind(input.customer_email.as_ref().and_then(|v| v.as_deref()))
            .bind(input.pickup_date.is_some())
            .bind(input.pickup_date.flatten())
            .bind(input.return_date.is_some())
            .bind(input.return_date.flatten())
            .bind(input.pickup_location.is_some())
            .bind(input.pickup_location.as_ref().and_then(|v| v.as_deref()))
            .bind(input.dropoff_location.is_some())
            .bind(input.dropoff_location.as_ref().and_then(|v| v.as_deref()))
            .bind(input.car_id.is_some())
            .bind(input.car_id.flatten())
            .bind(input.message.is_some())
            .bind(input.message.as_ref().and_then(|v| v.as_deref()))
            .bind(input.notes.is_some())
            .bind(input.notes.as_ref().and_then(|v| v.as_deref()))
            .fetch_optional(pool)
            .await
    }

    /// Delete a lead by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM leads WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count every lead.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM leads")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}

/// Escape `LIKE` wildcards so user input matches literally.
fn escape_like(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
        assert_eq!(escape_like("Maria"), "Maria");
    }
}
