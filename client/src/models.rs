//! Forme JSON scambiate con il server RoshiFit

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Trainer,
    Client,
}

/// Stato di fornitori, piani ed esercizi del piano
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    #[serde(rename = "activo")]
    Active,
    #[serde(rename = "inactivo")]
    Inactive,
    #[serde(rename = "deshabilitado")]
    Disabled,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "activo",
            Status::Inactive => "inactivo",
            Status::Disabled => "deshabilitado",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    #[serde(rename = "principiante")]
    Beginner,
    #[serde(rename = "intermedio")]
    Intermediate,
    #[serde(rename = "avanzado")]
    Advanced,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Lunes,
    Martes,
    Miercoles,
    Jueves,
    Viernes,
    Sabado,
    Domingo,
}

// ---------- utenti e sessione ----------

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
    pub trainer_id: Option<i32>,
}

#[derive(Serialize, Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

#[derive(Serialize, Debug, Clone)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
}

/// Account creato dall'admin, con ruolo esplicito
#[derive(Serialize, Debug, Clone)]
pub struct NewUser {
    #[serde(flatten)]
    pub registration: Registration,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trainer_id: Option<i32>,
}

// ---------- fornitori ----------

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Supplier {
    pub id: i32,
    pub company_name: String,
    pub contact_name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub status: Status,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SupplierDetail {
    pub id: i32,
    pub company_name: String,
    pub contact_name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub tax_id: Option<String>,
    pub status: Status,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NewSupplier {
    pub company_name: String,
    pub contact_name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub tax_id: Option<String>,
    pub status: Status,
}

/// PATCH parziale: i campi `None` non vengono inviati.
/// Per i campi opzionali `Some(None)` viene inviato come `null` e azzera il valore.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct SupplierUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

// ---------- piani ed esercizi ----------

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TrainingPlan {
    pub id: i32,
    pub name: String,
    pub objective: Option<String>,
    pub duration_weeks: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Status,
    pub client_id: Option<i32>,
    pub trainer_id: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TrainingExercise {
    pub id: i32,
    pub exercise_id: i32,
    pub exercise_name: String,
    pub muscle_group: String,
    pub difficulty: Difficulty,
    pub day_of_week: Option<DayOfWeek>,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub rest_seconds: Option<i32>,
    pub notes: Option<String>,
    pub status: Status,
    pub position: i32,
}

impl TrainingExercise {
    /// Un esercizio "deshabilitado" è segnato come completato
    pub fn is_completed(&self) -> bool {
        self.status == Status::Disabled
    }
}

/// Piano assegnato con i suoi esercizi ordinati
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TrainingPlanDetail {
    #[serde(flatten)]
    pub plan: TrainingPlan,
    pub exercises: Vec<TrainingExercise>,
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct NewTrainingPlan {
    pub name: String,
    pub objective: Option<String>,
    pub duration_weeks: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub client_id: Option<i32>,
}

#[derive(Serialize, Debug, Clone)]
pub struct NewTrainingExercise {
    pub exercise_id: i32,
    pub day_of_week: Option<DayOfWeek>,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub rest_seconds: Option<i32>,
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Exercise {
    pub id: i32,
    pub name: String,
    pub muscle_group: String,
    pub difficulty: Difficulty,
}

#[derive(Serialize, Debug, Clone)]
pub struct NewExercise {
    pub name: String,
    pub muscle_group: String,
    pub difficulty: Difficulty,
}

// ---------- client del trainer ----------

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Client {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ClientDetail {
    pub client: Client,
    pub plans: Vec<TrainingPlan>,
}

/// Corpo degli errori del server: `{ "error": "...", "details": "..." }`
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ErrorBody {
    pub error: Option<String>,
    pub details: Option<String>,
}
