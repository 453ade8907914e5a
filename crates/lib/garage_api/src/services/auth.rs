//! Authentication service — register/login flows delegating to `garage_core::auth`.

use garage_core::auth::{credentials, jwt};
use garage_core::store::GarageStore;
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::{LoginResponse, RegisterResponse};

/// Register a new account. Fails on missing fields or a taken email.
pub async fn register(
    store: &dyn GarageStore,
    name: &str,
    email: &str,
    password: &str,
    admin_email: &str,
) -> AppResult<RegisterResponse> {
    let id = credentials::register(store, name, email, password, admin_email).await?;
    Ok(RegisterResponse {
        message: "User registered successfully".into(),
        id,
    })
}

/// Authenticate with email + password and mint a 24h session token.
pub async fn login(
    store: &dyn GarageStore,
    email: &str,
    password: &str,
    jwt_secret: &[u8],
) -> AppResult<LoginResponse> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(AppError::Validation("Missing fields".into()));
    }

    let user = credentials::verify_credentials(store, email, password).await?;
    let token = jwt::issue_token(&user, jwt_secret)?;
    info!(user_id = %user.id, "login succeeded");

    Ok(LoginResponse {
        token,
        token_type: "Bearer".to_string(),
        expires_in: jwt::TOKEN_EXPIRY_SECS,
        user: user.into(),
    })
}
