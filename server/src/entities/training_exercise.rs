//! TrainingExercise entity - Istanza di un esercizio dentro un piano

use super::enums::{DayOfWeek, Difficulty, Status};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct TrainingExercise {
    pub training_exercise_id: i32,
    pub plan_id: i32,
    pub exercise_id: i32,
    pub day_of_week: Option<DayOfWeek>,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub rest_seconds: Option<i32>,
    pub notes: Option<String>,
    // usato dal client come marcatore di "completato" (activo <-> deshabilitado)
    pub status: Status,
    pub position: i32,
}

/// Riga di training_exercises unita all'esercizio di catalogo che referenzia
#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct TrainingExerciseWithExercise {
    pub training_exercise_id: i32,
    pub plan_id: i32,
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
