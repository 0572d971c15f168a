//! Enumerazioni - Tipi enumerati utilizzati nelle entità
//!
//! Sul filo (JSON) e nel database i valori viaggiano come stringhe minuscole in spagnolo,
//! le stesse che il frontend usa nei filtri (`?estado=activo`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ********************* ENUMERAZIONI UTILI **********************//

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Trainer,
    Client,
}

/// Stato condiviso da fornitori, piani ed esercizi di un piano
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
pub enum Status {
    #[serde(rename = "activo")]
    #[sqlx(rename = "activo")]
    Active,
    #[serde(rename = "inactivo")]
    #[sqlx(rename = "inactivo")]
    Inactive,
    #[serde(rename = "deshabilitado")]
    #[sqlx(rename = "deshabilitado")]
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

    /// Stato risultante da un toggle-status: activo <-> inactivo.
    /// Un record deshabilitado non si può alternare e restituisce `None`.
    pub fn toggled(self) -> Option<Status> {
        match self {
            Status::Active => Some(Status::Inactive),
            Status::Inactive => Some(Status::Active),
            Status::Disabled => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "activo" => Ok(Status::Active),
            "inactivo" => Ok(Status::Inactive),
            "deshabilitado" => Ok(Status::Disabled),
            other => Err(format!("Unknown status '{}'", other)),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
pub enum Difficulty {
    #[serde(rename = "principiante")]
    #[sqlx(rename = "principiante")]
    Beginner,
    #[serde(rename = "intermedio")]
    #[sqlx(rename = "intermedio")]
    Intermediate,
    #[serde(rename = "avanzado")]
    #[sqlx(rename = "avanzado")]
    Advanced,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum DayOfWeek {
    Lunes,
    Martes,
    Miercoles,
    Jueves,
    Viernes,
    Sabado,
    Domingo,
}
