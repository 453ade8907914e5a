//! Storage abstraction for users and vehicles.
//!
//! Handlers never touch a database or collection directly; they go through a
//! [`GarageStore`] trait object. Two backends exist:
//! - [`postgres::PgStore`] — durable, sqlx-backed, embedded migrations.
//! - [`memory::MemoryStore`] — lock-guarded in-process state for tests and
//!   database-less local runs.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::auth::{NewUser, User, UserId, UserWithPassword};
use crate::models::vehicle::{NewVehicle, Vehicle};

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    #[error("Database error: {0}")]
    Db(#[from] sqlx::Error),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait GarageStore: Send + Sync {
    /// Insert a user. Fails with [`StoreError::DuplicateEmail`] atomically when
    /// the email is already taken.
    async fn insert_user(&self, user: NewUser) -> StoreResult<User>;
    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<UserWithPassword>>;
    async fn get_user(&self, id: UserId) -> StoreResult<Option<User>>;
    async fn list_users(&self) -> StoreResult<Vec<User>>;

    async fn insert_vehicle(&self, owner_id: UserId, vehicle: NewVehicle) -> StoreResult<Vehicle>;
    async fn get_vehicle(&self, id: Uuid) -> StoreResult<Option<Vehicle>>;
    async fn list_vehicles_for_owner(&self, owner_id: UserId) -> StoreResult<Vec<Vehicle>>;
    async fn list_vehicles(&self) -> StoreResult<Vec<Vehicle>>;
    /// Delete a vehicle only if it belongs to `owner_id`. Returns whether a row was removed.
    async fn delete_vehicle(&self, id: Uuid, owner_id: UserId) -> StoreResult<bool>;

    async fn health_check(&self) -> StoreResult<()>;
    fn backend_name(&self) -> &'static str;
}
