#![allow(dead_code)]

use axum_test::TestServer;
use roshifit_server::core::{AppState, encode_jwt};
use roshifit_server::entities::UserRole;
use sqlx::SqlitePool;
use std::sync::Arc;

pub const TEST_JWT_SECRET: &str = "ilmiobellissimosegretochevaassolutamentecambiato";

// utenti definiti in fixtures/users.sql
pub const ADMIN: (i32, &str, UserRole) = (1, "admin", UserRole::Admin);
pub const MARIA: (i32, &str, UserRole) = (2, "coach_maria", UserRole::Trainer);
pub const LUIS: (i32, &str, UserRole) = (3, "coach_luis", UserRole::Trainer);
pub const ANA: (i32, &str, UserRole) = (4, "ana", UserRole::Client);
pub const BRUNO: (i32, &str, UserRole) = (5, "bruno", UserRole::Client);
pub const CARLA: (i32, &str, UserRole) = (6, "carla", UserRole::Client);
pub const DIEGO: (i32, &str, UserRole) = (7, "diego", UserRole::Client);

/// Crea un AppState per i test
///
/// # Arguments
/// * `pool` - Connection pool SQLite creato da `#[sqlx::test]`
///
/// # Returns
/// Arc<AppState> configurato con il JWT secret di test
pub fn create_test_state(pool: SqlitePool) -> Arc<AppState> {
    Arc::new(AppState::new(pool, TEST_JWT_SECRET.to_string()))
}

/// Crea un TestServer per i test
///
/// # Arguments
/// * `state` - AppState da utilizzare per il server
///
/// # Returns
/// TestServer configurato e pronto per eseguire richieste
pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = roshifit_server::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

/// Genera un JWT token per testing, valido per 24 ore
pub fn create_test_jwt(user_id: i32, username: &str, role: UserRole) -> String {
    encode_jwt(username.to_string(), user_id, role, TEST_JWT_SECRET)
        .expect("Failed to create JWT token")
}

/// Header Authorization pronto per `add_header`
pub fn bearer(user: (i32, &str, UserRole)) -> String {
    format!("Bearer {}", create_test_jwt(user.0, user.1, user.2))
}
