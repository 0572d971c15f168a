//! Client RoshiFit - chiamate REST tipizzate e stato delle viste
//!
//! - `api`: wrapper delle chiamate HTTP con sessione (bearer token)
//! - `models`: forme di richiesta/risposta condivise con il server
//! - `views`: stato delle viste (lista fornitori, form, piano, roster)

pub mod api;
pub mod config;
pub mod models;
pub mod views;

pub use api::{ApiClient, ApiError};
pub use config::ClientConfig;
