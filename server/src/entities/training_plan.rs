//! TrainingPlan entity - Piano di allenamento creato da un trainer

use super::enums::Status;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct TrainingPlan {
    pub plan_id: i32,
    pub name: String,
    pub objective: Option<String>,
    pub duration_weeks: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Status,
    // None finché il piano non viene assegnato a un client
    pub client_id: Option<i32>,
    pub trainer_id: i32,
}
