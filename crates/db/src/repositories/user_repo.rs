//! Repository for the `users` table.

use sqlx::PgPool;

use crate::models::user::User;

/// Column list for `users` SELECT queries.
const COLUMNS: &str = "id, email, password_hash, display_name, created_at, updated_at";

/// Provides lookup and bootstrap operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Find a user by email.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Create a user or, if the email already exists, refresh its password
    /// hash and display name. Used by the startup admin bootstrap.
    pub async fn upsert(
        pool: &PgPool,
        email: &str,
        password_hash: &str,
        display_name: &str,
    ) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (email, password_hash, display_name) \
             VALUES ($1, $2, $3) \
             ON CONFLICT ON CONSTRAINT uq_users_email DO UPDATE \
             SET password_hash = EXCLUDED.password_hash, \
                 display_name = EXCLUDED.display_name \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .bind(password_hash)
            .bind(display_name)
            .fetch_one(pool)
            .await
    }
}
