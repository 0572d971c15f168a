use crate::models::ErrorBody;
use reqwest::StatusCode;
use thiserror::Error;

/// Errori delle chiamate al server RoshiFit.
/// Le varianti HTTP conservano il messaggio del server, se presente.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not authenticated: {}", display(.0))]
    Unauthorized(Option<String>),

    #[error("Forbidden: {}", display(.0))]
    Forbidden(Option<String>),

    #[error("Resource not found: {}", display(.0))]
    NotFound(Option<String>),

    #[error("Bad request: {}", display(.0))]
    BadRequest(Option<String>),

    #[error("Conflict: {}", display(.0))]
    Conflict(Option<String>),

    #[error("Server error: {}", display(.0))]
    ServerError(Option<String>),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Not logged in")]
    NotLoggedIn,
}

fn display(message: &Option<String>) -> &str {
    message.as_deref().unwrap_or("no details")
}

impl ApiError {
    /// Costruisce l'errore a partire dallo status e dal corpo della risposta
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let message = server_message(body);

        match status {
            StatusCode::UNAUTHORIZED => ApiError::Unauthorized(message),
            StatusCode::FORBIDDEN => ApiError::Forbidden(message),
            StatusCode::NOT_FOUND => ApiError::NotFound(message),
            StatusCode::CONFLICT => ApiError::Conflict(message),
            StatusCode::BAD_REQUEST => ApiError::BadRequest(message),
            status if status.is_server_error() => ApiError::ServerError(message),
            _ => ApiError::BadRequest(message),
        }
    }

    /// Messaggio da mostrare all'utente: quello del server se c'è, altrimenti `default`
    pub fn user_message(&self, default: &str) -> String {
        match self {
            ApiError::Unauthorized(Some(message))
            | ApiError::Forbidden(Some(message))
            | ApiError::NotFound(Some(message))
            | ApiError::BadRequest(Some(message))
            | ApiError::Conflict(Some(message))
            | ApiError::ServerError(Some(message)) => message.clone(),
            _ => default.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::NetworkError(err.to_string())
        }
    }
}

/// Estrae `error` (e `details`, se c'è) dal corpo JSON degli errori
fn server_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match (parsed.error, parsed.details) {
        (Some(error), Some(details)) if !details.is_empty() => {
            Some(format!("{}: {}", error, details))
        }
        (Some(error), _) if !error.is_empty() => Some(error),
        (None, Some(details)) if !details.is_empty() => Some(details),
        _ => None,
    }
}
