//! Vehicle domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::auth::UserId;

/// A vehicle owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: Uuid,
    pub model: String,
    pub plate: String,
    pub year: Option<i32>,
    pub color: String,
    pub last_service_date: Option<NaiveDate>,
    pub next_service_date: Option<NaiveDate>,
    pub owner_id: UserId,
}

/// Insert payload for a new vehicle. The owner is supplied separately.
#[derive(Debug, Clone, Default)]
pub struct NewVehicle {
    pub model: String,
    pub plate: String,
    pub year: Option<i32>,
    pub color: String,
    pub last_service_date: Option<NaiveDate>,
    pub next_service_date: Option<NaiveDate>,
}

/// A user together with the vehicles they own (admin listing).
#[derive(Debug, Clone, Serialize)]
pub struct ClientVehicles {
    pub user: super::auth::User,
    pub vehicles: Vec<Vehicle>,
}

/// Full dataset dump for administrators.
#[derive(Debug, Clone, Serialize)]
pub struct DataExport {
    pub users: Vec<super::auth::User>,
    pub vehicles: Vec<Vehicle>,
}
