//! Service layer composing `garage_core` operations for the handlers.

pub mod auth;
