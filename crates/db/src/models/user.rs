//! User model (authentication boundary).

use serde::Serialize;
use sqlx::FromRow;

use registrar_core::types::{DbId, Timestamp};

/// A row from the `users` table. The password hash never leaves the server;
/// it is skipped during serialization.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub display_name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
