//! Repository for the `settings` key/value table.

use std::collections::HashMap;

use sqlx::PgPool;

use crate::models::setting::Setting;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "key, value, created_at, updated_at";

/// Provides access to site settings.
pub struct SettingRepo;

impl SettingRepo {
    /// All settings ordered by key.
    pub async fn list(pool: &PgPool) -> Result<Vec<Setting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM settings ORDER BY key");
        sqlx::query_as::<_, Setting>(&query).fetch_all(pool).await
    }

    /// Find a setting by key.
    pub async fn get(pool: &PgPool, key: &str) -> Result<Option<Setting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM settings WHERE key = $1");
        sqlx::query_as::<_, Setting>(&query)
            .bind(key)
            .fetch_optional(pool)
            .await
    }

    /// Insert or overwrite a setting, returning the stored row.
    pub async fn upsert(pool: &PgPool, key: &str, value: &str) -> Result<Setting, sqlx::Error> {
        let query = format!(
            "INSERT INTO settings (key, value) VALUES ($1, $2)
             ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Setting>(&query)
            .bind(key)
            .bind(value)
            .fetch_one(pool)
            .await
    }

    /// Insert a setting only if the key is not stored yet. Returns `true` if
    /// a row was inserted.
    pub async fn insert_if_missing(
        pool: &PgPool,
        key: &str,
        value: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO settings (key, value) VALUES ($1, $2)
             ON CONFLICT (key) DO NOTHING",
        )
        .bind(key)
        .bind(value)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// All settings as a `key -> value` map.
    pub async fn as_map(pool: &PgPool) -> Result<HashMap<String, String>, sqlx::Error> {
        let rows: Vec<(String, String)> = sqlx::query_as("SELECT key, value FROM settings")
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().collect())
    }
}
