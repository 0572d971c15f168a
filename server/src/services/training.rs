//! Training services - Piano di allenamento corrente di un utente e avanzamento degli esercizi

use crate::core::{AppError, AppState};
use crate::dtos::{TrainingExerciseDTO, TrainingPlanDTO, TrainingPlanDetailDTO, UpdateExerciseStatusDTO};
use crate::entities::{Status, TrainingPlan, User};
use crate::repositories::Read;
use axum::{
    Extension,
    extract::{Json, Path, State},
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Chi può leggere i dati di allenamento di `target`: l'utente stesso, un admin
/// o il trainer che lo segue
fn can_view_training_of(current_user: &User, target: &User) -> bool {
    current_user.user_id == target.user_id || current_user.manages(target)
}

/// Chi può marcare gli esercizi di un piano: il client assegnato, il trainer autore o un admin
fn can_mark_exercises_of(current_user: &User, plan: &TrainingPlan) -> bool {
    current_user.is_admin()
        || plan.client_id == Some(current_user.user_id)
        || plan.trainer_id == current_user.user_id
}

#[instrument(skip(state, current_user), fields(user_id = %user_id, requester = %current_user.user_id))]
pub async fn get_training_plan(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Path(user_id): Path<i32>,
) -> Result<Json<Option<TrainingPlanDetailDTO>>, AppError> {
    // 1. Verificare che l'utente richiesto esista (NOT_FOUND)
    // 2. Verificare che il richiedente sia l'utente stesso, il suo trainer o un admin (FORBIDDEN)
    // 3. Recuperare il piano attivo più recente; nessun piano -> null
    // 4. Caricare gli esercizi del piano in ordine di posizione
    debug!("Fetching current training plan");

    let target = state
        .user
        .read(&user_id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    if !can_view_training_of(&current_user, &target) {
        warn!("User not allowed to read this training plan");
        return Err(AppError::forbidden("You cannot access this training plan"));
    }

    let Some(plan) = state.plan.find_current_for_client(&user_id).await? else {
        info!("No active plan assigned");
        return Ok(Json(None));
    };

    let exercises = state.training_exercise.find_by_plan(&plan.plan_id).await?;

    info!("Returning plan {} with {} exercises", plan.plan_id, exercises.len());
    Ok(Json(Some(TrainingPlanDetailDTO {
        plan: TrainingPlanDTO::from(plan),
        exercises: exercises.into_iter().map(TrainingExerciseDTO::from).collect(),
    })))
}

#[instrument(skip(state, current_user, body), fields(training_exercise_id = %training_exercise_id, requester = %current_user.user_id))]
pub async fn update_training_exercise_status(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Path(training_exercise_id): Path<i32>,
    Json(body): Json<UpdateExerciseStatusDTO>,
) -> Result<Json<TrainingExerciseDTO>, AppError> {
    // 1. Solo activo (da fare) e deshabilitado (completato) sono ammessi
    // 2. Caricare esercizio e piano di appartenenza (NOT_FOUND)
    // 3. Verificare i permessi sul piano (FORBIDDEN)
    // 4. Aggiornare e ritornare la riga unita al catalogo
    if !matches!(body.status, Status::Active | Status::Disabled) {
        warn!("Unsupported exercise status {}", body.status);
        return Err(AppError::bad_request("Unsupported exercise status")
            .with_details("Exercise status must be 'activo' or 'deshabilitado'"));
    }

    let training_exercise = state
        .training_exercise
        .read(&training_exercise_id)
        .await?
        .ok_or_else(|| AppError::not_found("Training exercise not found"))?;

    let plan = state
        .plan
        .read(&training_exercise.plan_id)
        .await?
        .ok_or_else(|| AppError::not_found("Plan not found"))?;

    if !can_mark_exercises_of(&current_user, &plan) {
        warn!("User not allowed to update exercises of plan {}", plan.plan_id);
        return Err(AppError::forbidden("You cannot update this exercise"));
    }

    state
        .training_exercise
        .set_status(&training_exercise_id, body.status)
        .await?;

    let updated = state
        .training_exercise
        .read_with_exercise(&training_exercise_id)
        .await?
        .ok_or_else(|| AppError::not_found("Training exercise not found"))?;

    info!("Training exercise status set to {}", body.status);
    Ok(Json(TrainingExerciseDTO::from(updated)))
}
