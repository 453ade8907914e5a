//! Route paths.

pub const GET_HEALTH: &str = "/health";
pub const POST_REGISTER: &str = "/register";
pub const POST_LOGIN: &str = "/login";
pub const GET_ME: &str = "/me";
pub const VEHICLES: &str = "/vehicles";
pub const DELETE_VEHICLE_ID: &str = "/vehicles/{id}";
pub const GET_ADMIN_CLIENTS: &str = "/admin/clients";
pub const GET_ADMIN_EXPORT: &str = "/admin/export";
