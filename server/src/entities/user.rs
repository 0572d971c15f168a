//! User entity - Entità utente (admin, trainer o client) con metodi per gestione password

use super::enums::UserRole;
use bcrypt::{DEFAULT_COST, hash, verify};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub user_id: i32,
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub role: UserRole,
    // solo per i client: trainer che li segue
    pub trainer_id: Option<i32>,
}

impl User {
    /// Verify if target_password matches the stored hashed password
    pub fn verify_password(&self, target_password: &str) -> bool {
        verify(target_password, &self.password).unwrap_or(false)
    }

    /// Hash a password using bcrypt with default cost
    pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
        let hash = hash(password, DEFAULT_COST)?;
        Ok(hash)
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Vero se `client` è seguito da questo utente (o se questo utente è admin)
    pub fn manages(&self, client: &User) -> bool {
        self.is_admin() || client.trainer_id == Some(self.user_id)
    }
}
