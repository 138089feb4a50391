//! Authentication boundary: JWT tokens, password hashing, admin bootstrap.

pub mod jwt;
pub mod password;

use registrar_db::repositories::UserRepo;
use registrar_db::DbPool;

use crate::error::{AppError, AppResult};

/// Ensure the bootstrap admin account exists.
///
/// Reads `ADMIN_EMAIL` and `ADMIN_PASSWORD` from the environment; when both
/// are set the account is created (or its credentials refreshed). When either
/// is absent nothing happens, which is the expected state once real accounts
/// exist.
pub async fn bootstrap_admin(pool: &DbPool) -> AppResult<()> {
    let (Ok(email), Ok(admin_password)) = (
        std::env::var("ADMIN_EMAIL"),
        std::env::var("ADMIN_PASSWORD"),
    ) else {
        return Ok(());
    };

    let hash = password::hash_password(&admin_password)
        .map_err(|e| AppError::InternalError(format!("Failed to hash admin password: {e}")))?;

    let user = UserRepo::upsert(pool, &email, &hash, "Administrator").await?;
    tracing::info!(user_id = user.id, "Admin account bootstrapped");
    Ok(())
}
