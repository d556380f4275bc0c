//! Repository for the `admin_sessions` table.

use carhire_core::types::DbId;
use sqlx::PgPool;

use crate::models::admin_user::AdminUser;
use crate::models::session::{AdminSession, CreateSession};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, admin_user_id, token_hash, expires_at, user_agent, \
                        created_at, updated_at";

/// Provides CRUD operations for admin sessions.
pub struct AdminSessionRepo;

impl AdminSessionRepo {
    /// Insert a new session, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSession,
    ) -> Result<AdminSession, sqlx::Error> {
        let query = format!(
            "INSERT INTO admin_sessions (admin_user_id, token_hash, expires_at, user_agent)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AdminSession>(&query)
            .bind(input.admin_user_id)
            .bind(&input.token_hash)
            .bind(input.expires_at)
            .bind(&input.user_agent)
            .fetch_one(pool)
            .await
    }

    /// Resolve a token hash to the admin who owns it.
    ///
    /// Only matches sessions that have not expired and belong to an active
    /// account.
    pub async fn find_active(
        pool: &PgPool,
        token_hash: &str,
    ) -> Result<Option<AdminUser>, sqlx::Error> {
        sqlx::query_as::<_, AdminUser>(
            "SELECT u.id, u.name, u.email, u.password_hash, u.role, u.is_active,
                    u.last_login_at, u.created_at, u.updated_at
             FROM admin_sessions s
             JOIN admin_users u ON u.id = s.admin_user_id
             WHERE s.token_hash = $1
               AND s.expires_at > NOW()
               AND u.is_active = true",
        )
        .bind(token_hash)
        .fetch_optional(pool)
        .await
    }

    /// Delete the session with the given token hash. Returns `true` if a row
    /// was removed.
    pub async fn delete_by_hash(pool: &PgPool, token_hash: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM admin_sessions WHERE token_hash = $1")
            .bind(token_hash)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every session of an admin. Returns the count of deleted rows.
    pub async fn delete_all_for_user(
        pool: &PgPool,
        admin_user_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM admin_sessions WHERE admin_user_id = $1")
            .bind(admin_user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete expired sessions. Returns the count of deleted rows.
    pub async fn delete_expired(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM admin_sessions WHERE expires_at <= NOW()")
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
