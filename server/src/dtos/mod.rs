//! DTOs module - Data Transfer Objects
//!
//! Questo modulo contiene tutti i DTOs usati per la comunicazione client-server.
//! I DTOs separano la rappresentazione esterna (API) dalla rappresentazione interna (entities).

pub mod exercise;
pub mod plan;
pub mod query;
pub mod supplier;
pub mod user;

// Re-exports per facilitare l'import
pub use exercise::{CreateExerciseDTO, ExerciseDTO};
pub use plan::{
    AssignPlanDTO, ClientDetailDTO, CreateTrainingExerciseDTO, CreateTrainingPlanDTO,
    TrainingExerciseDTO, TrainingPlanDTO, TrainingPlanDetailDTO, UpdateExerciseStatusDTO,
};
pub use query::{ListFilter, ListQuery};
pub use supplier::{CreateSupplierDTO, SupplierDTO, SupplierDetailDTO, UpdateSupplierDTO};
pub use user::{ClientDTO, CreateUserDTO, RegisterUserDTO, UserDTO};
