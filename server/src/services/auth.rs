//! Auth services - Gestione autenticazione e registrazione utenti

use crate::core::{AppError, AppState, encode_jwt};
use crate::dtos::{CreateUserDTO, RegisterUserDTO, UserDTO};
use crate::entities::User;
use crate::repositories::Create;
use axum::{
    extract::{Json, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

/// DTO per il login (solo username e password)
#[derive(Deserialize)]
pub struct LoginDTO {
    pub username: String,
    pub password: String,
}

/// Risposta del login: il token viaggia anche negli header
#[derive(Serialize)]
pub struct LoginResponseDTO {
    pub token: String,
    pub user: UserDTO,
}

#[instrument(skip(state, body), fields(username = %body.username))]
pub async fn login_user(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginDTO>, // JSON body
) -> Result<impl IntoResponse, AppError> {
    // 1. Cercare l'utente nel database tramite username
    // 2. Se l'utente non esiste o la password non corrisponde all'hash, ritornare UNAUTHORIZED
    // 3. Generare il token JWT (id, username, ruolo)
    // 4. Ritornare cookie HttpOnly + header Authorization + body JSON con token e utente
    debug!("Login attempt");

    let user = match state.user.find_by_username(&body.username).await? {
        Some(user) => user,
        None => {
            warn!("Login failed: unknown username");
            return Err(AppError::unauthorized("Invalid username or password"));
        }
    };

    if !user.verify_password(&body.password) {
        warn!("Login failed: wrong password");
        return Err(AppError::unauthorized("Invalid username or password"));
    }

    let token = encode_jwt(user.username.clone(), user.user_id, user.role, &state.jwt_secret)?;

    let cookie_value = format!(
        "token={}; HttpOnly; Secure; SameSite=Lax; Path=/; Max-Age={}",
        token,
        24 * 60 * 60
    );

    let mut headers = HeaderMap::new();
    headers.insert(
        header::SET_COOKIE,
        HeaderValue::from_str(&cookie_value)
            .map_err(|_| AppError::internal_server_error("Invalid token header"))?,
    );
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| AppError::internal_server_error("Invalid token header"))?,
    );

    info!("User {} logged in", user.user_id);
    Ok((
        StatusCode::OK,
        headers,
        Json(LoginResponseDTO {
            token,
            user: UserDTO::from(user),
        }),
    ))
}

/// Crea l'utente dopo aver verificato unicità di username ed email e fatto l'hash della password.
/// Condiviso tra la registrazione pubblica e la creazione utenti dell'admin.
pub(crate) async fn create_account(
    state: &AppState,
    mut data: CreateUserDTO,
) -> Result<User, AppError> {
    if state.user.find_by_username(&data.username).await?.is_some() {
        warn!("Username already exists");
        return Err(AppError::conflict("Username already exists"));
    }
    if state.user.find_by_email(&data.email).await?.is_some() {
        warn!("Email already registered");
        return Err(AppError::conflict("Email already registered"));
    }

    data.password = User::hash_password(&data.password)
        .map_err(|_| AppError::internal_server_error("Failed to hash password"))?;

    Ok(state.user.create(&data).await?)
}

#[instrument(skip(state, body), fields(username = %body.username))]
pub async fn register_user(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RegisterUserDTO>, // JSON body
) -> Result<(StatusCode, Json<UserDTO>), AppError> {
    // 1. Validare il DTO con validator (username, email, password)
    // 2. Controllare che username ed email non siano già in uso (CONFLICT)
    // 3. Salvare il nuovo utente come client con password hashata
    // 4. Ritornare il DTO dell'utente creato
    body.validate()?;

    let created_user = create_account(&state, CreateUserDTO::from(body)).await?;

    info!("Client account {} registered", created_user.user_id);
    Ok((StatusCode::CREATED, Json(UserDTO::from(created_user))))
}
