//! Trainer services - Roster dei client, piani ed esercizi del trainer

use crate::core::{AppError, AppState};
use crate::dtos::{
    AssignPlanDTO, ClientDTO, ClientDetailDTO, CreateExerciseDTO, CreateTrainingExerciseDTO,
    CreateTrainingPlanDTO, ExerciseDTO, TrainingExerciseDTO, TrainingPlanDTO,
};
use crate::entities::{TrainingPlan, User, UserRole};
use crate::repositories::exercise::NewExercise;
use crate::repositories::training_exercise::NewTrainingExercise;
use crate::repositories::training_plan::NewTrainingPlan;
use crate::repositories::{Create, Read};
use axum::{
    Extension,
    extract::{Json, Path, State},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

/// Carica un client seguito dal trainer corrente (admin: qualunque client)
async fn load_managed_client(
    state: &AppState,
    current_user: &User,
    client_id: i32,
) -> Result<User, AppError> {
    let client = state
        .user
        .read(&client_id)
        .await?
        .filter(|user| user.role == UserRole::Client)
        .ok_or_else(|| AppError::not_found("Client not found"))?;

    if !current_user.manages(&client) {
        warn!("Client {} is not managed by user {}", client_id, current_user.user_id);
        return Err(AppError::forbidden("This client is not assigned to you"));
    }
    Ok(client)
}

/// Carica un piano creato dal trainer corrente (admin: qualunque piano)
async fn load_owned_plan(
    state: &AppState,
    current_user: &User,
    plan_id: i32,
) -> Result<TrainingPlan, AppError> {
    let plan = state
        .plan
        .read(&plan_id)
        .await?
        .ok_or_else(|| AppError::not_found("Plan not found"))?;

    if !current_user.is_admin() && plan.trainer_id != current_user.user_id {
        warn!("Plan {} is not owned by user {}", plan_id, current_user.user_id);
        return Err(AppError::forbidden("This plan was not created by you"));
    }
    Ok(plan)
}

#[instrument(skip(state, current_user), fields(trainer_id = %current_user.user_id))]
pub async fn list_my_clients(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
) -> Result<Json<Vec<ClientDTO>>, AppError> {
    // l'admin gestisce tutti i client, come in get_client_detail
    let clients = if current_user.is_admin() {
        state.user.find_all_clients().await?
    } else {
        state
            .user
            .find_clients_by_trainer(&current_user.user_id)
            .await?
    };

    info!("Trainer has {} clients", clients.len());
    Ok(Json(clients.into_iter().map(ClientDTO::from).collect()))
}

#[instrument(skip(state, current_user), fields(trainer_id = %current_user.user_id, client_id = %client_id))]
pub async fn get_client_detail(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Path(client_id): Path<i32>,
) -> Result<Json<ClientDetailDTO>, AppError> {
    let client = load_managed_client(&state, &current_user, client_id).await?;
    let plans = state.plan.find_by_client(&client_id).await?;

    Ok(Json(ClientDetailDTO {
        client: ClientDTO::from(client),
        plans: plans.into_iter().map(TrainingPlanDTO::from).collect(),
    }))
}

#[instrument(skip(state, current_user, body), fields(trainer_id = %current_user.user_id, client_id = %client_id, plan_id = %body.plan_id))]
pub async fn assign_plan(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Path(client_id): Path<i32>,
    Json(body): Json<AssignPlanDTO>,
) -> Result<Json<TrainingPlanDTO>, AppError> {
    // 1. Il client deve esistere ed essere seguito dal trainer
    // 2. Il piano deve essere stato creato dal trainer
    // 3. Aggiornare client_id del piano
    load_managed_client(&state, &current_user, client_id).await?;
    let mut plan = load_owned_plan(&state, &current_user, body.plan_id).await?;

    state.plan.assign_to_client(&plan.plan_id, &client_id).await?;
    plan.client_id = Some(client_id);

    info!("Plan assigned");
    Ok(Json(TrainingPlanDTO::from(plan)))
}

#[instrument(skip(state, current_user), fields(trainer_id = %current_user.user_id))]
pub async fn list_my_plans(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
) -> Result<Json<Vec<TrainingPlanDTO>>, AppError> {
    let plans = state.plan.find_by_trainer(&current_user.user_id).await?;
    Ok(Json(plans.into_iter().map(TrainingPlanDTO::from).collect()))
}

#[instrument(skip(state, current_user, body), fields(trainer_id = %current_user.user_id, name = %body.name))]
pub async fn create_plan(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Json(body): Json<CreateTrainingPlanDTO>,
) -> Result<(StatusCode, Json<TrainingPlanDTO>), AppError> {
    debug!("Creating training plan");
    body.validate()?;

    if let Some(client_id) = body.client_id {
        load_managed_client(&state, &current_user, client_id).await?;
    }

    let plan = state
        .plan
        .create(&NewTrainingPlan {
            name: body.name,
            objective: body.objective,
            duration_weeks: body.duration_weeks,
            start_date: body.start_date,
            end_date: body.end_date,
            client_id: body.client_id,
            trainer_id: current_user.user_id,
        })
        .await?;

    info!("Plan {} created", plan.plan_id);
    Ok((StatusCode::CREATED, Json(TrainingPlanDTO::from(plan))))
}

#[instrument(skip(state, current_user), fields(trainer_id = %current_user.user_id, plan_id = %plan_id))]
pub async fn list_plan_exercises(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Path(plan_id): Path<i32>,
) -> Result<Json<Vec<TrainingExerciseDTO>>, AppError> {
    load_owned_plan(&state, &current_user, plan_id).await?;
    let exercises = state.training_exercise.find_by_plan(&plan_id).await?;

    Ok(Json(
        exercises.into_iter().map(TrainingExerciseDTO::from).collect(),
    ))
}

#[instrument(skip(state, current_user, body), fields(trainer_id = %current_user.user_id, plan_id = %plan_id, exercise_id = %body.exercise_id))]
pub async fn add_plan_exercise(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Path(plan_id): Path<i32>,
    Json(body): Json<CreateTrainingExerciseDTO>,
) -> Result<(StatusCode, Json<TrainingExerciseDTO>), AppError> {
    // 1. Validare sets/reps/riposo
    // 2. Il piano deve appartenere al trainer, l'esercizio deve esistere nel catalogo
    // 3. Inserire in coda (position assegnata dal repository)
    body.validate()?;
    load_owned_plan(&state, &current_user, plan_id).await?;

    if state.exercise.read(&body.exercise_id).await?.is_none() {
        warn!("Exercise not found in catalogue");
        return Err(AppError::not_found("Exercise not found"));
    }

    let created = state
        .training_exercise
        .create(&NewTrainingExercise {
            plan_id,
            exercise_id: body.exercise_id,
            day_of_week: body.day_of_week,
            sets: body.sets,
            reps: body.reps,
            rest_seconds: body.rest_seconds,
            notes: body.notes,
        })
        .await?;

    let joined = state
        .training_exercise
        .read_with_exercise(&created.training_exercise_id)
        .await?
        .ok_or_else(|| AppError::internal_server_error("Training exercise not readable after insert"))?;

    info!("Exercise added at position {}", joined.position);
    Ok((StatusCode::CREATED, Json(TrainingExerciseDTO::from(joined))))
}

#[instrument(skip(state))]
pub async fn list_exercises(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ExerciseDTO>>, AppError> {
    let exercises = state.exercise.find_all().await?;
    Ok(Json(exercises.into_iter().map(ExerciseDTO::from).collect()))
}

#[instrument(skip(state, current_user, body), fields(trainer_id = %current_user.user_id, name = %body.name))]
pub async fn create_exercise(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Json(body): Json<CreateExerciseDTO>,
) -> Result<(StatusCode, Json<ExerciseDTO>), AppError> {
    body.validate()?;

    let exercise = state
        .exercise
        .create(&NewExercise {
            name: body.name,
            muscle_group: body.muscle_group,
            difficulty: body.difficulty,
            created_by: Some(current_user.user_id),
        })
        .await?;

    info!("Exercise {} created", exercise.exercise_id);
    Ok((StatusCode::CREATED, Json(ExerciseDTO::from(exercise))))
}
