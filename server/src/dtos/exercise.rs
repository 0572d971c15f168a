//! Exercise DTOs - Data Transfer Objects per il catalogo esercizi

use crate::entities::{Difficulty, Exercise};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ExerciseDTO {
    pub id: i32,
    pub name: String,
    pub muscle_group: String,
    pub difficulty: Difficulty,
}

impl From<Exercise> for ExerciseDTO {
    fn from(value: Exercise) -> Self {
        Self {
            id: value.exercise_id,
            name: value.name,
            muscle_group: value.muscle_group,
            difficulty: value.difficulty,
        }
    }
}

/// DTO per creare un esercizio (created_by viene preso dal token)
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateExerciseDTO {
    #[validate(length(min = 1, max = 120, message = "Exercise name is required"))]
    pub name: String,

    #[validate(length(min = 1, max = 60, message = "Muscle group is required"))]
    pub muscle_group: String,

    pub difficulty: Difficulty,
}
