//! Authorization policy: ownership and admin checks.

use crate::models::auth::{Identity, UserId};

/// True iff the caller owns the resource.
pub fn authorize_own(identity: &Identity, resource_owner_id: UserId) -> bool {
    identity.id == resource_owner_id
}

/// True iff the caller is the administrator.
pub fn authorize_admin(identity: &Identity) -> bool {
    identity.is_admin
}
