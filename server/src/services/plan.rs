//! Plan services - Amministrazione dei piani di allenamento (solo admin)

use crate::core::{AppError, AppState};
use crate::dtos::{ListQuery, TrainingPlanDTO};
use crate::repositories::{Delete, Read};
use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

#[instrument(skip(state))]
pub async fn list_plans(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListQuery>,
) -> Result<Json<Vec<TrainingPlanDTO>>, AppError> {
    let filter = params.into_filter()?;
    let plans = state.plan.find_many(&filter).await?;

    info!("Found {} plans matching filter", plans.len());
    Ok(Json(plans.into_iter().map(TrainingPlanDTO::from).collect()))
}

#[instrument(skip(state), fields(plan_id = %plan_id))]
pub async fn toggle_plan_status(
    State(state): State<Arc<AppState>>,
    Path(plan_id): Path<i32>,
) -> Result<Json<TrainingPlanDTO>, AppError> {
    let mut plan = state
        .plan
        .read(&plan_id)
        .await?
        .ok_or_else(|| AppError::not_found("Plan not found"))?;

    let next = plan.status.toggled().ok_or_else(|| {
        warn!("Attempt to toggle a disabled plan");
        AppError::conflict("Disabled plans cannot be toggled")
    })?;

    state.plan.set_status(&plan_id, next).await?;
    plan.status = next;

    info!("Plan status toggled to {}", next);
    Ok(Json(TrainingPlanDTO::from(plan)))
}

#[instrument(skip(state), fields(plan_id = %plan_id))]
pub async fn delete_plan(
    State(state): State<Arc<AppState>>,
    Path(plan_id): Path<i32>,
) -> Result<StatusCode, AppError> {
    // ON DELETE CASCADE rimuove anche gli esercizi del piano
    if !state.plan.delete(&plan_id).await? {
        warn!("Plan not found");
        return Err(AppError::not_found("Plan not found"));
    }

    info!("Plan deleted");
    Ok(StatusCode::NO_CONTENT)
}
