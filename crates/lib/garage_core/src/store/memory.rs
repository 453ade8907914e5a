//! In-memory implementation of [`GarageStore`].
//!
//! State lives in `Vec`s behind a single `tokio::sync::RwLock`. Not durable:
//! everything is lost on restart. Email uniqueness is checked and the user
//! appended under the same write lock, so two concurrent registrations with
//! one email cannot both succeed.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{GarageStore, StoreError, StoreResult};
use crate::models::auth::{NewUser, User, UserId, UserWithPassword};
use crate::models::vehicle::{NewVehicle, Vehicle};
use crate::uuid::uuidv7;

#[derive(Debug, Default)]
struct State {
    users: Vec<UserWithPassword>,
    vehicles: Vec<Vehicle>,
}

/// Lock-guarded in-process store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<State>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GarageStore for MemoryStore {
    async fn insert_user(&self, user: NewUser) -> StoreResult<User> {
        let mut state = self.state.write().await;
        if state.users.iter().any(|u| u.user.email == user.email) {
            return Err(StoreError::DuplicateEmail(user.email));
        }
        let record = User {
            id: Uuid::new_v4(),
            name: user.name,
            email: user.email,
            is_admin: user.is_admin,
        };
        state.users.push(UserWithPassword {
            user: record.clone(),
            password_hash: user.password_hash,
        });
        Ok(record)
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<UserWithPassword>> {
        let state = self.state.read().await;
        Ok(state.users.iter().find(|u| u.user.email == email).cloned())
    }

    async fn get_user(&self, id: UserId) -> StoreResult<Option<User>> {
        let state = self.state.read().await;
        Ok(state
            .users
            .iter()
            .find(|u| u.user.id == id)
            .map(|u| u.user.clone()))
    }

    async fn list_users(&self) -> StoreResult<Vec<User>> {
        let state = self.state.read().await;
        Ok(state.users.iter().map(|u| u.user.clone()).collect())
    }

    async fn insert_vehicle(&self, owner_id: UserId, vehicle: NewVehicle) -> StoreResult<Vehicle> {
        let mut state = self.state.write().await;
        let record = Vehicle {
            id: uuidv7(),
            model: vehicle.model,
            plate: vehicle.plate,
            year: vehicle.year,
            color: vehicle.color,
            last_service_date: vehicle.last_service_date,
            next_service_date: vehicle.next_service_date,
            owner_id,
        };
        state.vehicles.push(record.clone());
        Ok(record)
    }

    async fn get_vehicle(&self, id: Uuid) -> StoreResult<Option<Vehicle>> {
        let state = self.state.read().await;
        Ok(state.vehicles.iter().find(|v| v.id == id).cloned())
    }

    async fn list_vehicles_for_owner(&self, owner_id: UserId) -> StoreResult<Vec<Vehicle>> {
        let state = self.state.read().await;
        Ok(state
            .vehicles
            .iter()
            .filter(|v| v.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn list_vehicles(&self) -> StoreResult<Vec<Vehicle>> {
        let state = self.state.read().await;
        Ok(state.vehicles.clone())
    }

    async fn delete_vehicle(&self, id: Uuid, owner_id: UserId) -> StoreResult<bool> {
        let mut state = self.state.write().await;
        let before = state.vehicles.len();
        state
            .vehicles
            .retain(|v| !(v.id == id && v.owner_id == owner_id));
        Ok(state.vehicles.len() != before)
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            name: "Test".into(),
            email: email.into(),
            password_hash: "hash".into(),
            is_admin: false,
        }
    }

    fn new_vehicle(plate: &str) -> NewVehicle {
        NewVehicle {
            model: "Civic".into(),
            plate: plate.into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn insert_user_rejects_duplicate_email() {
        let store = MemoryStore::new();
        store.insert_user(new_user("a@x.com")).await.expect("first insert");
        let err = store.insert_user(new_user("a@x.com")).await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateEmail(e) if e == "a@x.com"));
        assert_eq!(store.list_users().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn concurrent_inserts_with_same_email_yield_one_user() {
        let store = Arc::new(MemoryStore::new());
        let handles: Vec<_> = (0..16)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.insert_user(new_user("race@x.com")).await })
            })
            .collect();

        let mut ok = 0;
        let mut dup = 0;
        for handle in handles {
            match handle.await.expect("join") {
                Ok(_) => ok += 1,
                Err(StoreError::DuplicateEmail(_)) => dup += 1,
                Err(e) => panic!("unexpected error: {e}"),
            }
        }
        assert_eq!(ok, 1);
        assert_eq!(dup, 15);
    }

    #[tokio::test]
    async fn delete_vehicle_requires_matching_owner() {
        let store = MemoryStore::new();
        let alice = store.insert_user(new_user("alice@x.com")).await.unwrap();
        let bob = store.insert_user(new_user("bob@x.com")).await.unwrap();
        let car = store.insert_vehicle(alice.id, new_vehicle("ABC-1234")).await.unwrap();

        assert!(!store.delete_vehicle(car.id, bob.id).await.unwrap());
        assert!(store.get_vehicle(car.id).await.unwrap().is_some());

        assert!(store.delete_vehicle(car.id, alice.id).await.unwrap());
        assert!(store.get_vehicle(car.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn vehicles_are_listed_per_owner_in_insertion_order() {
        let store = MemoryStore::new();
        let alice = store.insert_user(new_user("alice@x.com")).await.unwrap();
        let bob = store.insert_user(new_user("bob@x.com")).await.unwrap();
        store.insert_vehicle(alice.id, new_vehicle("A-1")).await.unwrap();
        store.insert_vehicle(bob.id, new_vehicle("B-1")).await.unwrap();
        store.insert_vehicle(alice.id, new_vehicle("A-2")).await.unwrap();

        let plates: Vec<_> = store
            .list_vehicles_for_owner(alice.id)
            .await
            .unwrap()
            .into_iter()
            .map(|v| v.plate)
            .collect();
        assert_eq!(plates, vec!["A-1", "A-2"]);
        assert_eq!(store.list_vehicles().await.unwrap().len(), 3);
    }
}
