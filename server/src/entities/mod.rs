//! Entities module - Entità del dominio applicativo
//!
//! Questo modulo contiene tutte le entità (models) che rappresentano i dati persistiti nel database.
//! Ogni entity corrisponde a una tabella nel database.

pub mod enums;
pub mod exercise;
pub mod supplier;
pub mod training_exercise;
pub mod training_plan;
pub mod user;

// Re-exports per facilitare l'import
pub use enums::{DayOfWeek, Difficulty, Status, UserRole};
pub use exercise::Exercise;
pub use supplier::Supplier;
pub use training_exercise::{TrainingExercise, TrainingExerciseWithExercise};
pub use training_plan::TrainingPlan;
pub use user::User;
