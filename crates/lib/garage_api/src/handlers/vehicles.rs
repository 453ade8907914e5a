//! Vehicle request handlers. All routes sit behind `require_auth`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use garage_core::vehicles;
use uuid::Uuid;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::{MessageResponse, VehicleRequest, VehicleResponse};

/// `GET /vehicles` — the caller's vehicles.
pub async fn list_vehicles_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> AppResult<Json<Vec<VehicleResponse>>> {
    let list = vehicles::list_own_vehicles(state.store.as_ref(), &user.0).await?;
    Ok(Json(list.into_iter().map(Into::into).collect()))
}

/// `POST /vehicles` — add a vehicle owned by the caller.
pub async fn create_vehicle_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    AppJson(body): AppJson<VehicleRequest>,
) -> AppResult<(StatusCode, Json<VehicleResponse>)> {
    let vehicle = vehicles::create_vehicle(state.store.as_ref(), &user.0, body.into()).await?;
    Ok((StatusCode::CREATED, Json(vehicle.into())))
}

/// `DELETE /vehicles/{id}` — remove one of the caller's vehicles.
///
/// Unknown ids, malformed ids and other users' vehicles all answer 404.
pub async fn delete_vehicle_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(vehicle_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let vehicle_id = Uuid::parse_str(&vehicle_id)
        .map_err(|_| AppError::NotFound("Vehicle not found".into()))?;
    vehicles::delete_own_vehicle(state.store.as_ref(), &user.0, vehicle_id).await?;
    Ok(Json(MessageResponse::new("Vehicle deleted")))
}
