//! Domain models.
//!
//! These are internal domain models, distinct from the HTTP DTOs in
//! `garage_api` (which carry `#[serde(rename_all = "camelCase")]` etc.).

pub mod auth;
pub mod vehicle;
