//! Exercise entity - Esercizio del catalogo, riusato tra più piani

use super::enums::Difficulty;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct Exercise {
    pub exercise_id: i32,
    pub name: String,
    pub muscle_group: String,
    pub difficulty: Difficulty,
    pub created_by: Option<i32>,
}
