//! Stato delle viste: ogni vista è una struct posseduta da un solo chiamante
//! e modificata tramite metodi async `&mut self`.

pub mod client_roster;
pub mod supplier_form;
pub mod supplier_list;
pub mod training_plan;

pub use client_roster::ClientRoster;
pub use supplier_form::{FormErrors, FormMode, SubmitOutcome, SupplierForm, SupplierFormValues};
pub use supplier_list::{ListRequest, ListResponse, SupplierFilter, SupplierList};
pub use training_plan::{PlanState, TrainingPlanView};
