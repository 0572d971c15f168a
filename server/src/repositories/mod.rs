//! Repositories module - Coordinatore per tutti i repository del progetto
//!
//! Questo modulo organizza i repository in sotto-moduli separati per una migliore manutenibilità.
//! Ogni repository gestisce le operazioni di database per una specifica entità.

// ************************* NOTA SULLE QUERY ************************* //

/*
   Le query usano le funzioni runtime di sqlx (query_as::<_, T> + #[derive(FromRow)])
   e non le macro query!/query_as!: le macro richiedono un database raggiungibile
   (o la cache offline) in fase di compilazione.
   Per i filtri opzionali e gli update parziali si usa QueryBuilder, che compone
   la stringa SQL e lega i parametri senza concatenare valori a mano.
   Metodi di fetch:
   .execute(...)         -> INSERT/UPDATE/DELETE
   .fetch_optional(...)  -> zero o una riga
   .fetch_one(...)       -> esattamente una riga (aggregati)
   .fetch_all(...)       -> Vec di righe
*/

// ************************* MODULI REPOSITORY ************************* //

pub mod exercise;
pub mod supplier;
pub mod traits;
pub mod training_exercise;
pub mod training_plan;
pub mod user;

// Re-esportazione dei trait per facilitare l'import
pub use traits::{Create, Delete, Read, Update};

// Re-esportazione delle struct dei repository per facilitare l'import
pub use exercise::ExerciseRepository;
pub use supplier::SupplierRepository;
pub use training_exercise::TrainingExerciseRepository;
pub use training_plan::TrainingPlanRepository;
pub use user::UserRepository;

/// Pattern LIKE per la ricerca per sottostringa
pub(crate) fn like_pattern(search: &str) -> String {
    let escaped = search
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}
