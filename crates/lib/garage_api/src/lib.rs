//! # garage_api
//!
//! HTTP API library for Garage.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::Router;
use axum::routing::{delete, get, post};
use garage_core::store::GarageStore;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{admin, auth, health, vehicles};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// User and vehicle storage.
    pub store: Arc<dyn GarageStore>,
    /// API configuration.
    pub config: ApiConfig,
}

impl AppState {
    pub fn new(store: Arc<dyn GarageStore>, config: ApiConfig) -> Self {
        Self { store, config }
    }
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Public routes (no auth required)
    let public = Router::new()
        .route(routes::GET_HEALTH, get(health::health_handler))
        .route(routes::POST_REGISTER, post(auth::register_handler))
        .route(routes::POST_LOGIN, post(auth::login_handler));

    // Admin routes (auth + admin flag). Layers run bottom-up, so
    // `require_auth` wraps `require_admin`.
    let admin = Router::new()
        .route(routes::GET_ADMIN_CLIENTS, get(admin::list_clients_handler))
        .route(routes::GET_ADMIN_EXPORT, get(admin::export_handler))
        .layer(axum::middleware::from_fn(middleware::auth::require_admin));

    // Protected routes (require auth)
    let protected = Router::new()
        .route(routes::GET_ME, get(auth::me_handler))
        .route(
            routes::VEHICLES,
            get(vehicles::list_vehicles_handler).post(vehicles::create_vehicle_handler),
        )
        .route(
            routes::DELETE_VEHICLE_ID,
            delete(vehicles::delete_vehicle_handler),
        )
        .merge(admin)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    Router::new()
        .merge(public)
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
