//! Helpers behind the `internlink-cli` binary.

use anyhow::anyhow;

use internlink_core::{AppError, hash_password};
use internlink_db::Store;
use internlink_models::Admin;

/// Provisions an admin account. Admins cannot sign up through the API.
pub async fn create_admin(store: &dyn Store, email: &str, password: &str) -> Result<Admin, AppError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(AppError::validation(anyhow!("Email and password are required")));
    }

    let password_hash = hash_password(password)?;
    Ok(store.create_admin(email, &password_hash).await?)
}
