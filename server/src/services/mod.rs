//! Services module - Coordinatore per tutti i service handler HTTP
//!
//! Questo modulo organizza i service handlers in sotto-moduli separati per una migliore manutenibilità.
//! Ogni modulo gestisce gli endpoint HTTP per una specifica funzionalità.

pub mod admin;
pub mod auth;
pub mod plan;
pub mod supplier;
pub mod trainer;
pub mod training;

// Re-exports per facilitare l'import
pub use admin::create_user;
pub use auth::{login_user, register_user};
pub use plan::{delete_plan, list_plans, toggle_plan_status};
pub use supplier::{
    create_supplier, delete_supplier, get_supplier, list_suppliers, toggle_supplier_status,
    update_supplier,
};
pub use trainer::{
    add_plan_exercise, assign_plan, create_exercise, create_plan, get_client_detail,
    list_exercises, list_my_clients, list_my_plans, list_plan_exercises,
};
pub use training::{get_training_plan, update_training_exercise_status};

use crate::core::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

/// Root endpoint - health check
pub async fn root(State(_state): State<Arc<AppState>>) -> impl IntoResponse {
    (StatusCode::OK, "Server is running!")
}
