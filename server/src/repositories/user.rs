//! UserRepository - Repository per la gestione degli utenti (admin, trainer, client)

use super::{Create, Read};
use crate::dtos::CreateUserDTO;
use crate::entities::{User, UserRole};
use sqlx::{Error, SqlitePool};
use tracing::{debug, info, instrument};

const USER_COLUMNS: &str =
    "user_id, username, email, password, full_name, phone, birth_date, role, trainer_id";

// USER REPO
pub struct UserRepository {
    connection_pool: SqlitePool,
}

impl UserRepository {
    pub fn new(connection_pool: SqlitePool) -> UserRepository {
        Self { connection_pool }
    }

    /// Find user by exact username match (username is unique)
    #[instrument(skip(self))]
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, Error> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE username = ?",
            USER_COLUMNS
        ))
        .bind(username)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(user)
    }

    /// Find user by email (email is unique, compared case-insensitively)
    #[instrument(skip(self))]
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, Error> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE lower(email) = lower(?)",
            USER_COLUMNS
        ))
        .bind(email)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(user)
    }

    /// Tutti i client seguiti da un trainer, ordinati per nome
    #[instrument(skip(self), fields(trainer_id = %trainer_id))]
    pub async fn find_clients_by_trainer(&self, trainer_id: &i32) -> Result<Vec<User>, Error> {
        debug!("Listing clients of trainer");
        let clients = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE trainer_id = ? AND role = ? ORDER BY full_name, user_id",
            USER_COLUMNS
        ))
        .bind(trainer_id)
        .bind(UserRole::Client)
        .fetch_all(&self.connection_pool)
        .await?;

        debug!("Found {} clients", clients.len());
        Ok(clients)
    }

    /// Tutti i client della palestra, ordinati per nome
    #[instrument(skip(self))]
    pub async fn find_all_clients(&self) -> Result<Vec<User>, Error> {
        let clients = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE role = ? ORDER BY full_name, user_id",
            USER_COLUMNS
        ))
        .bind(UserRole::Client)
        .fetch_all(&self.connection_pool)
        .await?;

        debug!("Found {} clients", clients.len());
        Ok(clients)
    }
}

impl Create<User, CreateUserDTO> for UserRepository {
    /// `data.password` deve essere già hashata
    #[instrument(skip(self, data), fields(username = %data.username, role = ?data.role))]
    async fn create(&self, data: &CreateUserDTO) -> Result<User, Error> {
        debug!("Creating new user");
        let result = sqlx::query(
            r#"
            INSERT INTO users (username, email, password, full_name, phone, birth_date, role, trainer_id)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&data.username)
        .bind(&data.email)
        .bind(&data.password)
        .bind(&data.full_name)
        .bind(&data.phone)
        .bind(data.birth_date)
        .bind(data.role)
        .bind(data.trainer_id)
        .execute(&self.connection_pool)
        .await?;

        let new_id = result.last_insert_rowid() as i32;
        info!("User created with id {}", new_id);

        Ok(User {
            user_id: new_id,
            username: data.username.clone(),
            email: data.email.clone(),
            password: data.password.clone(),
            full_name: data.full_name.clone(),
            phone: data.phone.clone(),
            birth_date: data.birth_date,
            role: data.role,
            trainer_id: data.trainer_id,
        })
    }
}

impl Read<User, i32> for UserRepository {
    #[instrument(skip(self), fields(user_id = %id))]
    async fn read(&self, id: &i32) -> Result<Option<User>, Error> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE user_id = ?",
            USER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(user)
    }
}
