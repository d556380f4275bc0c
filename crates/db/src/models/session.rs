//! Admin session model and DTOs.

use carhire_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `admin_sessions` table.
#[derive(Debug, Clone, FromRow)]
pub struct AdminSession {
    pub id: DbId,
    pub admin_user_id: DbId,
    pub token_hash: String,
    pub expires_at: Timestamp,
    pub user_agent: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new admin session.
pub struct CreateSession {
    pub admin_user_id: DbId,
    pub token_hash: String,
    pub expires_at: Timestamp,
    pub user_agent: Option<String>,
}
