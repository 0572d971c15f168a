//! Roster dei client del trainer

use crate::api::{ApiClient, ApiError};
use crate::models::{Client, ClientDetail};
use tracing::{info, warn};

const LOAD_ERROR: &str = "No se pudieron cargar los clientes";

#[derive(Debug, Default)]
pub struct ClientRoster {
    clients: Vec<Client>,
    error: Option<String>,
    loaded: bool,
}

impl ClientRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn mount(api: &ApiClient) -> Self {
        let mut roster = Self::new();
        roster.load(api).await;
        roster
    }

    pub async fn load(&mut self, api: &ApiClient) {
        match api.list_my_clients().await {
            Ok(clients) => {
                info!("Loaded {} clients", clients.len());
                self.clients = clients;
                self.error = None;
            }
            Err(e) => {
                warn!("Failed to load clients: {}", e);
                self.error = Some(e.user_message(LOAD_ERROR));
            }
        }
        self.loaded = true;
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Rotta della vista di dettaglio di un client
    pub fn detail_route(client_id: i32) -> String {
        format!("/trainer/clients/{}", client_id)
    }

    pub async fn open_detail(api: &ApiClient, client_id: i32) -> Result<ClientDetail, ApiError> {
        api.get_client_detail(client_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_route() {
        assert_eq!(ClientRoster::detail_route(4), "/trainer/clients/4");
    }

    #[test]
    fn test_new_roster_is_empty_and_not_loaded() {
        let roster = ClientRoster::new();
        assert!(roster.clients().is_empty());
        assert!(!roster.is_loaded());
        assert!(roster.error().is_none());
    }
}
