//! Application State - Stato globale dell'applicazione
//!
//! Contiene tutti i repository e la configurazione condivisa
//! necessaria per gestire l'applicazione.

use crate::repositories::{
    ExerciseRepository, SupplierRepository, TrainingExerciseRepository, TrainingPlanRepository,
    UserRepository,
};
use sqlx::SqlitePool;

/// Stato globale dell'applicazione condiviso tra tutte le route e middleware
pub struct AppState {
    /// Repository per la gestione degli utenti (admin, trainer, client)
    pub user: UserRepository,

    /// Repository per la gestione dei fornitori
    pub supplier: SupplierRepository,

    /// Repository per la gestione dei piani di allenamento
    pub plan: TrainingPlanRepository,

    /// Repository per gli esercizi dentro i piani
    pub training_exercise: TrainingExerciseRepository,

    /// Repository per il catalogo esercizi
    pub exercise: ExerciseRepository,

    /// Secret key per JWT token
    pub jwt_secret: String,
}

impl AppState {
    /// Crea una nuova istanza di AppState inizializzando tutti i repository
    /// con il pool di connessioni fornito e la JWT secret.
    ///
    /// # Arguments
    /// * `pool` - Pool di connessioni SQLite condiviso
    /// * `jwt_secret` - Chiave segreta per la firma dei token JWT
    pub fn new(pool: SqlitePool, jwt_secret: String) -> Self {
        Self {
            user: UserRepository::new(pool.clone()),
            supplier: SupplierRepository::new(pool.clone()),
            plan: TrainingPlanRepository::new(pool.clone()),
            training_exercise: TrainingExerciseRepository::new(pool.clone()),
            exercise: ExerciseRepository::new(pool),
            jwt_secret,
        }
    }
}
