//! Piano di allenamento dell'utente autenticato

use crate::api::{ApiClient, ApiError};
use crate::models::{Status, TrainingExercise, TrainingPlanDetail};
use tracing::{debug, info, warn};

const LOAD_ERROR: &str = "No se pudo cargar el plan de entrenamiento";

/// Stati mutuamente esclusivi della vista
#[derive(Debug, Clone, PartialEq)]
pub enum PlanState {
    Loading,
    /// Nessun piano assegnato: non è un errore
    Empty,
    Loaded(TrainingPlanDetail),
    Failed(String),
}

#[derive(Debug)]
pub struct TrainingPlanView {
    user_id: i32,
    state: PlanState,
}

impl TrainingPlanView {
    pub fn new(user_id: i32) -> Self {
        Self {
            user_id,
            state: PlanState::Loading,
        }
    }

    /// Crea la vista per l'utente della sessione corrente e carica il piano
    pub async fn mount(api: &ApiClient) -> Result<Self, ApiError> {
        let user = api.current_user().await.ok_or(ApiError::NotLoggedIn)?;
        let mut view = Self::new(user.id);
        view.load(api).await;
        Ok(view)
    }

    pub fn state(&self) -> &PlanState {
        &self.state
    }

    pub fn user_id(&self) -> i32 {
        self.user_id
    }

    /// Esercizi in ordine di posizione (a parità, per id)
    pub fn exercises(&self) -> Vec<&TrainingExercise> {
        match &self.state {
            PlanState::Loaded(detail) => {
                let mut exercises: Vec<&TrainingExercise> = detail.exercises.iter().collect();
                exercises.sort_by_key(|e| (e.position, e.id));
                exercises
            }
            _ => Vec::new(),
        }
    }

    pub async fn load(&mut self, api: &ApiClient) {
        self.state = PlanState::Loading;
        self.state = match api.get_training_plan(self.user_id).await {
            Ok(Some(detail)) => {
                info!(
                    "Loaded plan {} with {} exercises",
                    detail.plan.id,
                    detail.exercises.len()
                );
                PlanState::Loaded(detail)
            }
            Ok(None) => {
                debug!("User {} has no active plan", self.user_id);
                PlanState::Empty
            }
            Err(e) => {
                warn!("Failed to load training plan: {}", e);
                PlanState::Failed(e.user_message(LOAD_ERROR))
            }
        };
    }

    /// Alterna activo <-> deshabilitado, poi ricarica l'intero piano
    pub async fn toggle_exercise(
        &mut self,
        api: &ApiClient,
        training_exercise_id: i32,
    ) -> Result<(), ApiError> {
        let current = self
            .exercises()
            .into_iter()
            .find(|e| e.id == training_exercise_id)
            .map(|e| e.status)
            .ok_or(ApiError::NotFound(None))?;

        let next = match current {
            Status::Active => Status::Disabled,
            _ => Status::Active,
        };

        api.update_training_exercise_status(training_exercise_id, next)
            .await
            .map_err(|e| {
                warn!("Failed to toggle exercise {}: {}", training_exercise_id, e);
                e
            })?;

        self.load(api).await;
        Ok(())
    }
}
