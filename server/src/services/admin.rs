//! Admin services - Creazione account da parte dell'amministrazione

use crate::core::{AppError, AppState};
use crate::dtos::{CreateUserDTO, UserDTO};
use crate::entities::{User, UserRole};
use crate::repositories::Read;
use axum::{
    Extension,
    extract::{Json, State},
    http::StatusCode,
};
use axum_macros::debug_handler;
use std::sync::Arc;
use tracing::{debug, info, warn};
use validator::Validate;

use super::auth::create_account;

#[debug_handler]
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>, // admin, verificato da admin_middleware
    Json(body): Json<CreateUserDTO>,
) -> Result<(StatusCode, Json<UserDTO>), AppError> {
    // 1. Validare il DTO
    // 2. Se è indicato un trainer_id: solo i client possono averlo e deve riferirsi a un trainer
    // 3. Creare l'account (unicità username/email, hash password)
    debug!("Admin {} creating {:?} account", current_user.user_id, body.role);
    body.validate()?;

    if let Some(trainer_id) = body.trainer_id {
        if body.role != UserRole::Client {
            return Err(AppError::bad_request("Only clients can be assigned to a trainer"));
        }
        let trainer = state
            .user
            .read(&trainer_id)
            .await?
            .ok_or_else(|| AppError::bad_request("Trainer not found"))?;
        if trainer.role != UserRole::Trainer {
            warn!("User {} is not a trainer", trainer_id);
            return Err(AppError::bad_request("trainer_id must reference a trainer"));
        }
    }

    let created = create_account(&state, body).await?;

    info!("User {} created with role {:?}", created.user_id, created.role);
    Ok((StatusCode::CREATED, Json(UserDTO::from(created))))
}
