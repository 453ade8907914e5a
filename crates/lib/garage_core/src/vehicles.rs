//! Per-user vehicle operations.
//!
//! Every operation is scoped to the verified caller: vehicles are created
//! for, listed for and deleted by their owner only.

use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::auth::policy::authorize_own;
use crate::models::auth::Identity;
use crate::models::vehicle::{NewVehicle, Vehicle};
use crate::store::{GarageStore, StoreError};

/// Vehicle errors.
#[derive(Debug, Error)]
pub enum VehicleError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The vehicle does not exist or belongs to someone else.
    #[error("Vehicle not found")]
    NotFound,

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Create a vehicle owned by the caller.
pub async fn create_vehicle(
    store: &dyn GarageStore,
    identity: &Identity,
    vehicle: NewVehicle,
) -> Result<Vehicle, VehicleError> {
    let vehicle = NewVehicle {
        model: vehicle.model.trim().to_string(),
        plate: vehicle.plate.trim().to_string(),
        color: vehicle.color.trim().to_string(),
        ..vehicle
    };
    if vehicle.model.is_empty() || vehicle.plate.is_empty() {
        return Err(VehicleError::InvalidInput(
            "Model and plate are required".into(),
        ));
    }

    let created = store.insert_vehicle(identity.id, vehicle).await?;
    info!(vehicle_id = %created.id, owner_id = %identity.id, "vehicle created");
    Ok(created)
}

/// List the caller's vehicles.
pub async fn list_own_vehicles(
    store: &dyn GarageStore,
    identity: &Identity,
) -> Result<Vec<Vehicle>, VehicleError> {
    let vehicles = store.list_vehicles_for_owner(identity.id).await?;
    Ok(vehicles
        .into_iter()
        .filter(|v| authorize_own(identity, v.owner_id))
        .collect())
}

/// Delete one of the caller's vehicles.
pub async fn delete_own_vehicle(
    store: &dyn GarageStore,
    identity: &Identity,
    vehicle_id: Uuid,
) -> Result<(), VehicleError> {
    match store.get_vehicle(vehicle_id).await? {
        Some(v) if authorize_own(identity, v.owner_id) => {}
        _ => return Err(VehicleError::NotFound),
    }
    if !store.delete_vehicle(vehicle_id, identity.id).await? {
        return Err(VehicleError::NotFound);
    }
    info!(%vehicle_id, owner_id = %identity.id, "vehicle deleted");
    Ok(())
}
