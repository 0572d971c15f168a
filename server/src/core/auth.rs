use crate::core::{AppError, AppState};
use crate::entities::{User, UserRole};
use crate::repositories::Read;
use axum::extract::State;
use axum::{Error, body::Body, extract::Request, http, http::Response, middleware::Next};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, TokenData, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

// struct che codifica il contenuto del token jwt
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub exp: usize, // Expiry time of the token
    pub iat: usize, // Issued at time of the token
    pub id: i32,
    pub username: String,
    pub role: UserRole,
}

#[instrument(skip(secret), fields(username = %username, id = %id))]
pub fn encode_jwt(
    username: String,
    id: i32,
    role: UserRole,
    secret: &str,
) -> Result<String, Error> {
    debug!("Encoding JWT token for user");
    let now = Utc::now();
    let expire: chrono::TimeDelta = Duration::hours(24);
    let exp: usize = (now + expire).timestamp() as usize;
    let iat: usize = now.timestamp() as usize;
    let claim = Claims {
        iat,
        exp,
        username,
        id,
        role,
    };

    encode(
        &Header::default(),
        &claim,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .map(|token| {
        info!("JWT token encoded successfully");
        token
    })
    .map_err(|e| {
        error!("Failed to encode JWT token: {:?}", e);
        Error::new("Error in encoding jwt token")
    })
}

#[instrument(skip(jwt_token, secret))]
pub fn decode_jwt(jwt_token: &str, secret: &str) -> Result<TokenData<Claims>, Error> {
    debug!("Decoding JWT token");
    decode::<Claims>(
        jwt_token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )
    .map(|data| {
        debug!("JWT token decoded successfully for user: {}", data.claims.username);
        data
    })
    .map_err(|e| {
        warn!("Failed to decode JWT token: {:?}", e);
        Error::new("Error in decoding jwt token")
    })
}

/// Middleware di autenticazione: valida il bearer token e carica l'utente dal database.
/// L'identità deriva sempre dal token firmato, mai da dati forniti dal client.
#[instrument(skip(state, req, next))]
pub async fn authentication_middleware(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<Response<Body>, AppError> {
    debug!("Running authentication middleware");
    let auth_header = match req.headers().get(http::header::AUTHORIZATION) {
        Some(header) => header.to_str().map_err(|_| {
            warn!("Invalid authorization header format");
            AppError::forbidden("Empty header is not allowed")
        })?,
        None => {
            warn!("Missing authorization header");
            return Err(AppError::forbidden(
                "Please add the JWT token to the header",
            ));
        }
    };

    let mut header = auth_header.split_whitespace();
    let token = match (header.next(), header.next()) {
        (Some(bearer), Some(token)) if bearer.eq_ignore_ascii_case("bearer") => token,
        _ => {
            warn!("Malformed authorization header");
            return Err(AppError::unauthorized("Malformed authorization header"));
        }
    };

    let token_data = match decode_jwt(token, &state.jwt_secret) {
        Ok(data) => data,
        Err(_) => {
            warn!("Failed to decode JWT token");
            return Err(AppError::unauthorized("Unable to decode token"));
        }
    };

    // Fetch the user details from the database
    let current_user = match state.user.read(&token_data.claims.id).await? {
        Some(user) if user.username == token_data.claims.username => {
            debug!("User authenticated: {}", user.username);
            user
        }
        _ => {
            warn!("User not found in database: {}", token_data.claims.username);
            return Err(AppError::unauthorized("You are not an authorized user"));
        }
    };
    req.extensions_mut().insert(current_user);
    Ok(next.run(req).await)
}

/// Helper function per verificare che un utente abbia uno dei ruoli richiesti
///
/// # Arguments
/// * `user` - L'utente autenticato da verificare
/// * `allowed_roles` - Lista di ruoli permessi
///
/// # Returns
/// * `Ok(())` se il ruolo è permesso
/// * `Err(AppError)` se il ruolo non è tra quelli permessi
pub fn require_role(user: &User, allowed_roles: &[UserRole]) -> Result<(), AppError> {
    if !allowed_roles.contains(&user.role) {
        warn!(
            "User {} has insufficient role {:?}, required one of: {:?}",
            user.user_id, user.role, allowed_roles
        );
        return Err(AppError::forbidden("Insufficient role").with_details(format!(
            "This action requires one of the following roles: {:?}",
            allowed_roles
        )));
    }

    debug!("Role check passed for user {} with role {:?}", user.user_id, user.role);
    Ok(())
}

/// Estrae l'utente inserito da authentication_middleware e verifica i ruoli ammessi
fn check_request_role(req: &Request, allowed_roles: &[UserRole]) -> Result<(), AppError> {
    let current_user = req.extensions().get::<User>().ok_or_else(|| {
        warn!("User not found in request extensions");
        AppError::unauthorized("User not authenticated")
    })?;
    require_role(current_user, allowed_roles)
}

/// Middleware per le rotte di amministrazione (fornitori, piani, utenti)
/// Deve essere applicato DOPO authentication_middleware
#[instrument(skip(req, next))]
pub async fn admin_middleware(req: Request, next: Next) -> Result<Response<Body>, AppError> {
    check_request_role(&req, &[UserRole::Admin])?;
    Ok(next.run(req).await)
}

/// Middleware per le rotte /trainer: trainer o admin
/// Deve essere applicato DOPO authentication_middleware
#[instrument(skip(req, next))]
pub async fn trainer_middleware(req: Request, next: Next) -> Result<Response<Body>, AppError> {
    check_request_role(&req, &[UserRole::Trainer, UserRole::Admin])?;
    Ok(next.run(req).await)
}
