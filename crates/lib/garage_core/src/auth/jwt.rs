//! Session token issuance and verification.
//!
//! Tokens are stateless HS256 JWTs: nothing is persisted server-side, so a
//! token stays valid until `exp` and cannot be revoked earlier.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use rand::distr::Alphanumeric;
use rand::{Rng, rng};
use tracing::{debug, info, warn};

use super::AuthError;
use crate::models::auth::{Identity, TokenClaims, User};

/// Session token lifetime: 24 hours.
pub const TOKEN_EXPIRY_SECS: i64 = 24 * 60 * 60;

/// Issue a signed session token for `user`, valid for 24 hours from now.
pub fn issue_token(user: &User, secret: &[u8]) -> Result<String, AuthError> {
    issue_token_at(user, secret, Utc::now())
}

/// Issue a signed session token as if minted at `issued_at`.
pub fn issue_token_at(
    user: &User,
    secret: &[u8],
    issued_at: DateTime<Utc>,
) -> Result<String, AuthError> {
    let claims = TokenClaims {
        sub: user.id.to_string(),
        email: user.email.clone(),
        is_admin: user.is_admin,
        exp: (issued_at + Duration::seconds(TOKEN_EXPIRY_SECS)).timestamp(),
        iat: issued_at.timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(|e| AuthError::TokenError(format!("jwt encode: {e}")))
}

/// Verify a session token, returning the claims on success.
///
/// Rejects bad signatures, malformed tokens, and tokens whose `exp` has
/// passed (no leeway).
pub fn verify_token(token: &str, secret: &[u8]) -> Option<TokenClaims> {
    let key = DecodingKey::from_secret(secret);
    let mut validation = Validation::default();
    validation.validate_exp = true;
    validation.leeway = 0;
    validation.set_required_spec_claims(&["exp", "sub"]);
    match decode::<TokenClaims>(token, &key, &validation) {
        Ok(data) => Some(data.claims),
        Err(e) => {
            debug!(error = %e, "session token rejected");
            None
        }
    }
}

/// Verify a session token and decode the caller identity.
pub fn authenticate_token(token: &str, secret: &[u8]) -> Option<Identity> {
    verify_token(token, secret).and_then(|claims| Identity::from_claims(&claims))
}

/// Resolve the signing secret: `GARAGE_JWT_SECRET` → `JWT_SECRET` → persisted file.
pub fn resolve_jwt_secret() -> String {
    resolve_jwt_secret_with(|var| std::env::var(var).ok(), &jwt_secret_path())
}

/// Same precedence as [`resolve_jwt_secret`], reading variables through
/// `lookup` and falling back to the file at `path`. Empty values are skipped.
pub fn resolve_jwt_secret_with(lookup: impl Fn(&str) -> Option<String>, path: &Path) -> String {
    for var in ["GARAGE_JWT_SECRET", "JWT_SECRET"] {
        if let Some(secret) = lookup(var)
            && !secret.is_empty()
        {
            debug!(var, "using JWT secret from environment");
            return secret;
        }
    }
    resolve_jwt_secret_at(path)
}

/// Read the secret persisted at `path`, generating and writing one if absent.
pub fn resolve_jwt_secret_at(path: &Path) -> String {
    if let Ok(existing) = std::fs::read_to_string(path) {
        let trimmed = existing.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }
    let secret: String = rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect();
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    match std::fs::write(path, &secret) {
        Ok(()) => info!(path = %path.display(), "generated new JWT secret"),
        Err(e) => warn!(path = %path.display(), error = %e, "could not persist JWT secret"),
    }
    secret
}

/// Path to the persisted JWT secret file.
fn jwt_secret_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("garage")
        .join("jwt-secret")
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use uuid::Uuid;

    use super::*;

    const SECRET: &[u8] = b"test-secret";

    fn user(is_admin: bool) -> User {
        User {
            id: Uuid::new_v4(),
            name: "Alice".into(),
            email: "alice@x.com".into(),
            is_admin,
        }
    }

    #[test]
    fn fresh_token_is_accepted() {
        let u = user(false);
        let token = issue_token(&u, SECRET).unwrap();
        let claims = verify_token(&token, SECRET).expect("valid token");
        assert_eq!(claims.sub, u.id.to_string());
        assert_eq!(claims.email, "alice@x.com");
        assert!(!claims.is_admin);
        assert_eq!(claims.exp - claims.iat, TOKEN_EXPIRY_SECS);
    }

    #[test]
    fn identity_carries_admin_flag() {
        let u = user(true);
        let token = issue_token(&u, SECRET).unwrap();
        let identity = authenticate_token(&token, SECRET).expect("identity");
        assert_eq!(identity, Identity::from(&u));
        assert!(identity.is_admin);
    }

    #[test]
    fn expired_token_is_rejected() {
        let issued_at = Utc::now() - Duration::seconds(TOKEN_EXPIRY_SECS + 5);
        let token = issue_token_at(&user(false), SECRET, issued_at).unwrap();
        assert!(verify_token(&token, SECRET).is_none());
    }

    #[test]
    fn token_near_expiry_is_still_accepted() {
        let issued_at = Utc::now() - Duration::seconds(TOKEN_EXPIRY_SECS - 60);
        let token = issue_token_at(&user(false), SECRET, issued_at).unwrap();
        assert!(verify_token(&token, SECRET).is_some());
    }

    #[test]
    fn tampered_signature_is_rejected() {
        let u = user(false);
        let token = issue_token(&u, SECRET).unwrap();
        let forged = issue_token(&u, b"another-secret").unwrap();

        let (body, _) = token.rsplit_once('.').unwrap();
        let (_, foreign_sig) = forged.rsplit_once('.').unwrap();
        let tampered = format!("{body}.{foreign_sig}");

        assert!(verify_token(&tampered, SECRET).is_none());
    }

    #[test]
    fn forged_admin_claim_is_rejected() {
        let token = issue_token(&user(true), b"attacker-secret").unwrap();
        assert!(authenticate_token(&token, SECRET).is_none());
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(verify_token("not.a.jwt", SECRET).is_none());
        assert!(verify_token("", SECRET).is_none());
    }

    #[test]
    fn secret_file_is_generated_once_and_reused() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("jwt-secret");

        let first = resolve_jwt_secret_at(&path);
        assert_eq!(first.len(), 64);
        assert!(path.exists());

        let second = resolve_jwt_secret_at(&path);
        assert_eq!(first, second);
    }

    #[test]
    fn secret_precedence_skips_empty_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jwt-secret");
        std::fs::write(&path, "from-file\n").unwrap();

        let resolve = |vars: &[(&str, &str)]| {
            let env: HashMap<String, String> = vars
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            resolve_jwt_secret_with(|k| env.get(k).cloned(), &path)
        };

        assert_eq!(
            resolve(&[("GARAGE_JWT_SECRET", "garage"), ("JWT_SECRET", "plain")]),
            "garage"
        );
        assert_eq!(
            resolve(&[("GARAGE_JWT_SECRET", ""), ("JWT_SECRET", "plain")]),
            "plain"
        );
        assert_eq!(resolve(&[("JWT_SECRET", "plain")]), "plain");
        assert_eq!(
            resolve(&[("GARAGE_JWT_SECRET", ""), ("JWT_SECRET", "")]),
            "from-file"
        );
        assert_eq!(resolve(&[]), "from-file");
    }
}
