//! User DTOs - Data Transfer Objects per utenti e client

use crate::entities::{User, UserRole};
use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

lazy_static! {
    static ref USERNAME_RE: Regex = Regex::new(r"^[A-Za-z0-9_]{3,32}$").unwrap();
}

// struct per gestire io col client
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserDTO {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
    pub trainer_id: Option<i32>,
}

impl From<User> for UserDTO {
    fn from(value: User) -> Self {
        // la password non viene mai esposta al client!!!
        Self {
            id: value.user_id,
            username: value.username,
            email: value.email,
            full_name: value.full_name,
            role: value.role,
            trainer_id: value.trainer_id,
        }
    }
}

/// Vista "client" di un utente, usata dal roster del trainer
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ClientDTO {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

impl From<User> for ClientDTO {
    fn from(value: User) -> Self {
        Self {
            id: value.user_id,
            full_name: value.full_name,
            email: value.email,
            phone: value.phone,
            birth_date: value.birth_date,
        }
    }
}

/// DTO per la registrazione pubblica (crea sempre un account client)
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct RegisterUserDTO {
    #[validate(regex(path = *USERNAME_RE, message = "Username must be 3-32 letters, digits or underscores"))]
    pub username: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 8, max = 128, message = "Password must be between 8 and 128 characters"))]
    pub password: String,

    #[validate(length(min = 1, max = 120, message = "Full name is required"))]
    pub full_name: String,

    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

/// DTO per creare un nuovo utente (senza user_id).
/// Usato dall'admin per creare trainer e client, e internamente dalla registrazione.
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateUserDTO {
    #[validate(regex(path = *USERNAME_RE, message = "Username must be 3-32 letters, digits or underscores"))]
    pub username: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 8, max = 128, message = "Password must be between 8 and 128 characters"))]
    pub password: String,

    #[validate(length(min = 1, max = 120, message = "Full name is required"))]
    pub full_name: String,

    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub role: UserRole,
    pub trainer_id: Option<i32>,
}

impl From<RegisterUserDTO> for CreateUserDTO {
    fn from(value: RegisterUserDTO) -> Self {
        Self {
            username: value.username,
            email: value.email,
            password: value.password,
            full_name: value.full_name,
            phone: value.phone,
            birth_date: value.birth_date,
            role: UserRole::Client,
            trainer_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_dto() -> RegisterUserDTO {
        RegisterUserDTO {
            username: "new_client".to_string(),
            email: "client@roshifit.test".to_string(),
            password: "Sup3rSecret".to_string(),
            full_name: "New Client".to_string(),
            phone: None,
            birth_date: None,
        }
    }

    #[test]
    fn test_register_dto_valid() {
        assert!(register_dto().validate().is_ok());
    }

    #[test]
    fn test_register_dto_rejects_bad_username() {
        let mut dto = register_dto();
        dto.username = "no spaces!".to_string();
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("username"));
    }

    #[test]
    fn test_register_dto_rejects_short_password_and_bad_email() {
        let mut dto = register_dto();
        dto.password = "short".to_string();
        dto.email = "not-an-email".to_string();
        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("password"));
        assert!(fields.contains_key("email"));
    }

    #[test]
    fn test_register_always_creates_client() {
        let create = CreateUserDTO::from(register_dto());
        assert_eq!(create.role, UserRole::Client);
        assert!(create.trainer_id.is_none());
    }
}
