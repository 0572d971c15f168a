//! Server library - espone i moduli principali per i test

pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod services;

// Re-export dei tipi principali per facilitare l'import
pub use crate::core::{AppError, AppState, auth, config};
pub use services::root;

use axum::{
    Router, middleware,
    routing::{get, patch, post},
};
use std::sync::Arc;

/// Crea il router principale dell'applicazione
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/auth", configure_auth_routes())
        .nest("/admin", configure_admin_routes(state.clone()))
        .nest("/suppliers", configure_supplier_routes(state.clone()))
        .nest("/plans", configure_plan_routes(state.clone()))
        .nest("/training", configure_training_routes(state.clone()))
        .nest("/trainer", configure_trainer_routes(state.clone()))
        .with_state(state)
}

/// Configura le routes di autenticazione (login, register)
fn configure_auth_routes() -> Router<Arc<AppState>> {
    use services::*;
    Router::new()
        .route("/login", post(login_user))
        .route("/register", post(register_user))
}

/// Configura le routes di amministrazione degli account
fn configure_admin_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::{admin_middleware, authentication_middleware};
    use services::*;

    // l'ultimo layer aggiunto è il primo ad essere eseguito:
    // prima authentication_middleware, poi il controllo del ruolo
    Router::new()
        .route("/users", post(create_user))
        .layer(middleware::from_fn(admin_middleware))
        .layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ))
}

/// Configura le routes per la gestione dei fornitori (solo admin)
fn configure_supplier_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::{admin_middleware, authentication_middleware};
    use services::*;

    Router::new()
        .route("/", get(list_suppliers).post(create_supplier))
        .route(
            "/{supplier_id}",
            get(get_supplier)
                .patch(update_supplier)
                .delete(delete_supplier),
        )
        .route("/{supplier_id}/toggle-status", post(toggle_supplier_status))
        .layer(middleware::from_fn(admin_middleware))
        .layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ))
}

/// Configura le routes di amministrazione dei piani (solo admin)
fn configure_plan_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::{admin_middleware, authentication_middleware};
    use services::*;

    Router::new()
        .route("/", get(list_plans))
        .route("/{plan_id}", axum::routing::delete(delete_plan))
        .route("/{plan_id}/toggle-status", post(toggle_plan_status))
        .layer(middleware::from_fn(admin_middleware))
        .layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ))
}

/// Configura le routes del piano corrente (qualunque utente autenticato)
fn configure_training_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::authentication_middleware;
    use services::*;

    Router::new()
        .route("/{user_id}", get(get_training_plan))
        .route(
            "/exercises/{training_exercise_id}/status",
            patch(update_training_exercise_status),
        )
        .layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ))
}

/// Configura le routes del trainer (trainer o admin)
fn configure_trainer_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::{authentication_middleware, trainer_middleware};
    use services::*;

    Router::new()
        .route("/clients", get(list_my_clients))
        .route("/clients/{client_id}", get(get_client_detail))
        .route("/clients/{client_id}/assign-plan", post(assign_plan))
        .route("/plans", get(list_my_plans).post(create_plan))
        .route(
            "/plans/{plan_id}/exercises",
            get(list_plan_exercises).post(add_plan_exercise),
        )
        .route("/exercises", get(list_exercises).post(create_exercise))
        .layer(middleware::from_fn(trainer_middleware))
        .layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ))
}
