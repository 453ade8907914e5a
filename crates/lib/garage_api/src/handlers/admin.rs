//! Admin request handlers. Routes sit behind `require_auth` and `require_admin`.

use axum::extract::State;
use axum::{Extension, Json};
use garage_core::admin;
use tracing::info;

use crate::AppState;
use crate::error::AppResult;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::{ClientResponse, ExportResponse};

/// `GET /admin/clients` — every non-admin user with their vehicles.
pub async fn list_clients_handler(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ClientResponse>>> {
    let clients = admin::list_clients(state.store.as_ref()).await?;
    Ok(Json(clients.into_iter().map(Into::into).collect()))
}

/// `GET /admin/export` — all users and vehicles.
pub async fn export_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> AppResult<Json<ExportResponse>> {
    let export = admin::export_all(state.store.as_ref()).await?;
    info!(
        admin_id = %user.0.id,
        users = export.users.len(),
        vehicles = export.vehicles.len(),
        "data export"
    );
    Ok(Json(export.into()))
}
