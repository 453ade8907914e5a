//! Administrator reporting over all users and vehicles.
//!
//! Callers must have passed `authorize_admin` before reaching these; nothing
//! here re-checks the caller.

use std::collections::HashMap;

use crate::models::auth::UserId;
use crate::models::vehicle::{ClientVehicles, DataExport, Vehicle};
use crate::store::{GarageStore, StoreResult};

/// Every non-admin user with their vehicles.
pub async fn list_clients(store: &dyn GarageStore) -> StoreResult<Vec<ClientVehicles>> {
    let users = store.list_users().await?;
    let mut by_owner: HashMap<UserId, Vec<Vehicle>> = HashMap::new();
    for vehicle in store.list_vehicles().await? {
        by_owner.entry(vehicle.owner_id).or_default().push(vehicle);
    }

    Ok(users
        .into_iter()
        .filter(|u| !u.is_admin)
        .map(|user| {
            let vehicles = by_owner.remove(&user.id).unwrap_or_default();
            ClientVehicles { user, vehicles }
        })
        .collect())
}

/// All users (without password hashes) and all vehicles.
pub async fn export_all(store: &dyn GarageStore) -> StoreResult<DataExport> {
    Ok(DataExport {
        users: store.list_users().await?,
        vehicles: store.list_vehicles().await?,
    })
}
