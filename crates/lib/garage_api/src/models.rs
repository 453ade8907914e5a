//! HTTP request and response bodies.
//!
//! Field names are camelCase on the wire. Missing or `null` string fields in
//! request bodies deserialize as empty so the services answer with their own
//! validation messages. Blank service dates mean "no date".

use chrono::NaiveDate;
use garage_core::models::auth::User;
use garage_core::models::vehicle::{ClientVehicles, DataExport, NewVehicle, Vehicle};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// `null`, `""` and whitespace become `None`; anything else must be `YYYY-MM-DD`.
fn blank_date_as_none<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<NaiveDate>()
            .map(Some)
            .map_err(|e| de::Error::custom(format!("invalid date {raw:?}: {e}"))),
        _ => Ok(None),
    }
}

/// Error body returned for every failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Plain acknowledgement body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub id: Uuid,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub password: String,
}

/// Public view of a user. Never carries password material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
}

impl From<User> for AuthUser {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            is_admin: u.is_admin,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: AuthUser,
}

/// Vehicle creation body. Also accepts the older `lastService` /
/// `nextService` keys.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VehicleRequest {
    #[serde(deserialize_with = "null_as_empty")]
    pub model: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub plate: String,
    pub year: Option<i32>,
    #[serde(deserialize_with = "null_as_empty")]
    pub color: String,
    #[serde(alias = "lastService", deserialize_with = "blank_date_as_none")]
    pub last_service_date: Option<NaiveDate>,
    #[serde(alias = "nextService", deserialize_with = "blank_date_as_none")]
    pub next_service_date: Option<NaiveDate>,
}

impl From<VehicleRequest> for NewVehicle {
    fn from(r: VehicleRequest) -> Self {
        Self {
            model: r.model,
            plate: r.plate,
            year: r.year,
            color: r.color,
            last_service_date: r.last_service_date,
            next_service_date: r.next_service_date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleResponse {
    pub id: Uuid,
    pub model: String,
    pub plate: String,
    pub year: Option<i32>,
    pub color: String,
    pub last_service_date: Option<NaiveDate>,
    pub next_service_date: Option<NaiveDate>,
    pub owner_id: Uuid,
}

impl From<Vehicle> for VehicleResponse {
    fn from(v: Vehicle) -> Self {
        Self {
            id: v.id,
            model: v.model,
            plate: v.plate,
            year: v.year,
            color: v.color,
            last_service_date: v.last_service_date,
            next_service_date: v.next_service_date,
            owner_id: v.owner_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientResponse {
    pub user: AuthUser,
    pub vehicles: Vec<VehicleResponse>,
}

impl From<ClientVehicles> for ClientResponse {
    fn from(c: ClientVehicles) -> Self {
        Self {
            user: c.user.into(),
            vehicles: c.vehicles.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportResponse {
    pub users: Vec<AuthUser>,
    pub vehicles: Vec<VehicleResponse>,
}

impl From<DataExport> for ExportResponse {
    fn from(d: DataExport) -> Self {
        Self {
            users: d.users.into_iter().map(Into::into).collect(),
            vehicles: d.vehicles.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub store_backend: String,
    pub store_healthy: bool,
}
