//! API server configuration.

/// Default administrator account email.
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@garagem.com";

/// Configuration for the API server. The server binary fills it from its
/// command line; the signing secret comes from
/// [`garage_core::auth::jwt::resolve_jwt_secret`].
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:5000").
    pub bind_addr: String,
    /// JWT signing secret.
    pub jwt_secret: String,
    /// The one email address whose account is created as administrator.
    pub admin_email: String,
}
