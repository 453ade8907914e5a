//! Authentication domain models.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a registered user.
pub type UserId = Uuid;

/// Domain user. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
}

/// User with password hash (for internal auth flows only).
#[derive(Debug, Clone)]
pub struct UserWithPassword {
    pub user: User,
    pub password_hash: String,
}

/// Insert payload for a new user. The password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub is_admin: bool,
}

/// JWT claims embedded in session tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject — user ID (standard JWT `sub` claim).
    pub sub: String,
    /// User email.
    pub email: String,
    /// Whether the subject was created as the administrator.
    pub is_admin: bool,
    /// Expiry (unix timestamp).
    pub exp: i64,
    /// Issued at (unix timestamp).
    pub iat: i64,
}

/// Verified caller identity, decoded from a valid session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: UserId,
    pub email: String,
    pub is_admin: bool,
}

impl Identity {
    /// Build an identity from verified claims. `None` if `sub` is not a user id.
    pub fn from_claims(claims: &TokenClaims) -> Option<Self> {
        let id = Uuid::parse_str(&claims.sub).ok()?;
        Some(Self {
            id,
            email: claims.email.clone(),
            is_admin: claims.is_admin,
        })
    }
}

impl From<&User> for Identity {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            is_admin: user.is_admin,
        }
    }
}
