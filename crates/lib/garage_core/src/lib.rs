//! # garage_core
//!
//! Core domain logic for Garage: credentials, session tokens, access
//! policy, vehicle ownership and the storage backends behind them.

pub mod admin;
pub mod auth;
pub mod migrate;
pub mod models;
pub mod store;
pub mod uuid;
pub mod vehicles;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
