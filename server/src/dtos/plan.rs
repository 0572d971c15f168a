//! Plan DTOs - Data Transfer Objects per piani di allenamento ed esercizi del piano

use crate::dtos::ClientDTO;
use crate::entities::{
    DayOfWeek, Difficulty, Status, TrainingPlan, TrainingExerciseWithExercise,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TrainingPlanDTO {
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

impl From<TrainingPlan> for TrainingPlanDTO {
    fn from(value: TrainingPlan) -> Self {
        Self {
            id: value.plan_id,
            name: value.name,
            objective: value.objective,
            duration_weeks: value.duration_weeks,
            start_date: value.start_date,
            end_date: value.end_date,
            status: value.status,
            client_id: value.client_id,
            trainer_id: value.trainer_id,
        }
    }
}

/// Esercizio di un piano, già unito al suo esercizio di catalogo
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TrainingExerciseDTO {
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

impl From<TrainingExerciseWithExercise> for TrainingExerciseDTO {
    fn from(value: TrainingExerciseWithExercise) -> Self {
        Self {
            id: value.training_exercise_id,
            exercise_id: value.exercise_id,
            exercise_name: value.exercise_name,
            muscle_group: value.muscle_group,
            difficulty: value.difficulty,
            day_of_week: value.day_of_week,
            sets: value.sets,
            reps: value.reps,
            rest_seconds: value.rest_seconds,
            notes: value.notes,
            status: value.status,
            position: value.position,
        }
    }
}

/// Piano completo con la lista ordinata degli esercizi (GET /training/{user_id})
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TrainingPlanDetailDTO {
    #[serde(flatten)]
    pub plan: TrainingPlanDTO,
    pub exercises: Vec<TrainingExerciseDTO>,
}

/// DTO per creare un piano (trainer_id viene preso dal token)
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
#[validate(schema(function = "validate_plan_dates", skip_on_field_errors = false))]
pub struct CreateTrainingPlanDTO {
    #[validate(length(min = 1, max = 120, message = "Plan name is required"))]
    pub name: String,

    #[validate(length(max = 500))]
    pub objective: Option<String>,

    #[validate(range(min = 1, max = 104, message = "Duration must be between 1 and 104 weeks"))]
    pub duration_weeks: Option<i32>,

    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub client_id: Option<i32>,
}

fn validate_plan_dates(plan: &CreateTrainingPlanDTO) -> Result<(), ValidationError> {
    if let (Some(start), Some(end)) = (plan.start_date, plan.end_date) {
        if end < start {
            let mut err = ValidationError::new("end_before_start");
            err.message = Some("End date cannot be before start date".into());
            return Err(err);
        }
    }
    Ok(())
}

/// DTO per aggiungere un esercizio a un piano
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateTrainingExerciseDTO {
    pub exercise_id: i32,
    pub day_of_week: Option<DayOfWeek>,

    #[validate(range(min = 0, max = 100, message = "Sets must be between 0 and 100"))]
    pub sets: Option<i32>,

    #[validate(range(min = 0, max = 1000, message = "Reps must be between 0 and 1000"))]
    pub reps: Option<i32>,

    #[validate(range(min = 0, max = 3600, message = "Rest must be between 0 and 3600 seconds"))]
    pub rest_seconds: Option<i32>,

    #[validate(length(max = 1000))]
    pub notes: Option<String>,
}

/// Body di PATCH /training/exercises/{id}/status
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UpdateExerciseStatusDTO {
    pub status: Status,
}

/// Body di POST /trainer/clients/{id}/assign-plan
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AssignPlanDTO {
    pub plan_id: i32,
}

/// Dettaglio di un client visto dal suo trainer
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ClientDetailDTO {
    pub client: ClientDTO,
    pub plans: Vec<TrainingPlanDTO>,
}
