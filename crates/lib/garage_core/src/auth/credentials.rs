//! Credential registration and verification.

use tracing::{debug, info};

use super::password::{hash_password, verify_dummy, verify_password};
use super::{AuthError, normalize_email};
use crate::models::auth::{NewUser, User, UserId};
use crate::store::GarageStore;

/// Register a new user. Returns the new user's id.
///
/// The account gets the admin flag iff `email` matches `admin_email`; this is
/// decided once, here, and never re-evaluated.
pub async fn register(
    store: &dyn GarageStore,
    name: &str,
    email: &str,
    password: &str,
    admin_email: &str,
) -> Result<UserId, AuthError> {
    let name = name.trim();
    let email = normalize_email(email);
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err(AuthError::InvalidInput("Missing fields".into()));
    }

    let password_hash = hash_password(password)?;
    let is_admin = email == normalize_email(admin_email);

    // The store's unique constraint decides duplicates, not a prior lookup.
    let user = store
        .insert_user(NewUser {
            name: name.to_string(),
            email,
            password_hash,
            is_admin,
        })
        .await?;

    info!(user_id = %user.id, is_admin, "user registered");
    Ok(user.id)
}

/// Check an email/password pair. Unknown email and wrong password are
/// reported identically as [`AuthError::CredentialError`].
pub async fn verify_credentials(
    store: &dyn GarageStore,
    email: &str,
    password: &str,
) -> Result<User, AuthError> {
    let email = normalize_email(email);
    let Some(record) = store.find_user_by_email(&email).await? else {
        verify_dummy(password);
        debug!("login for unknown email");
        return Err(AuthError::CredentialError);
    };

    if !verify_password(password, &record.password_hash)? {
        debug!(user_id = %record.user.id, "login with wrong password");
        return Err(AuthError::CredentialError);
    }

    Ok(record.user)
}

/// Fetch a user by id (without password material).
pub async fn get_user(store: &dyn GarageStore, id: UserId) -> Result<User, AuthError> {
    store
        .get_user(id)
        .await?
        .ok_or_else(|| AuthError::NotFound("User not found".into()))
}
