//! Lista fornitori con filtri (ricerca libera + stato)

use crate::api::{ApiClient, ApiError};
use crate::models::{Status, Supplier};
use tracing::{debug, info, warn};

const LOAD_ERROR: &str = "No se pudieron cargar los proveedores";

/// Filtri correnti: ricerca vuota e stato `None` significano "tutti"
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SupplierFilter {
    pub search: String,
    pub status: Option<Status>,
}

/// Richiesta emessa dalla lista, marcata con la sua generazione
#[derive(Debug, Clone)]
pub struct ListRequest {
    pub generation: u64,
    pub filter: SupplierFilter,
}

/// Risposta di una `ListRequest`, da riconsegnare a `SupplierList::apply`
#[derive(Debug)]
pub struct ListResponse {
    pub generation: u64,
    pub result: Result<Vec<Supplier>, ApiError>,
}

#[derive(Debug, Default)]
pub struct SupplierList {
    filter: SupplierFilter,
    suppliers: Vec<Supplier>,
    error: Option<String>,
    loading: bool,
    // generazione dell'ultima richiesta emessa
    generation: u64,
}

impl SupplierList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    pub fn filter(&self) -> &SupplierFilter {
        &self.filter
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Emette una nuova richiesta con i filtri correnti; invalida quelle precedenti
    pub fn request(&mut self) -> ListRequest {
        self.generation += 1;
        self.loading = true;
        debug!("Issuing supplier request generation {}", self.generation);
        ListRequest {
            generation: self.generation,
            filter: self.filter.clone(),
        }
    }

    pub fn set_search(&mut self, search: impl Into<String>) -> ListRequest {
        self.filter.search = search.into();
        self.request()
    }

    pub fn set_status_filter(&mut self, status: Option<Status>) -> ListRequest {
        self.filter.status = status;
        self.request()
    }

    /// Esegue una richiesta; non tocca lo stato della lista
    pub async fn fetch(api: &ApiClient, request: ListRequest) -> ListResponse {
        let result = api
            .list_suppliers(request.filter.search.trim(), request.filter.status)
            .await;
        ListResponse {
            generation: request.generation,
            result,
        }
    }

    /// Applica una risposta. Ritorna `false` (e la scarta) se nel frattempo è
    /// stata emessa una richiesta più recente.
    pub fn apply(&mut self, response: ListResponse) -> bool {
        if response.generation < self.generation {
            debug!(
                "Discarding stale supplier response {} (latest {})",
                response.generation, self.generation
            );
            return false;
        }

        self.loading = false;
        match response.result {
            Ok(suppliers) => {
                info!("Loaded {} suppliers", suppliers.len());
                self.suppliers = suppliers;
                self.error = None;
            }
            Err(e) => {
                warn!("Failed to load suppliers: {}", e);
                self.error = Some(e.user_message(LOAD_ERROR));
            }
        }
        true
    }

    /// Ricarica con i filtri correnti (richiesta + fetch + apply)
    pub async fn refresh(&mut self, api: &ApiClient) -> bool {
        let request = self.request();
        let response = Self::fetch(api, request).await;
        self.apply(response)
    }

    pub async fn search(&mut self, api: &ApiClient, search: &str) -> bool {
        let request = self.set_search(search);
        let response = Self::fetch(api, request).await;
        self.apply(response)
    }

    pub async fn filter_by_status(&mut self, api: &ApiClient, status: Option<Status>) -> bool {
        let request = self.set_status_filter(status);
        let response = Self::fetch(api, request).await;
        self.apply(response)
    }

    /// Alterna activo/inactivo e poi ricarica la lista
    pub async fn toggle_status(&mut self, api: &ApiClient, supplier_id: i32) -> Result<(), ApiError> {
        api.toggle_supplier_status(supplier_id).await.map_err(|e| {
            warn!("Failed to toggle supplier {}: {}", supplier_id, e);
            e
        })?;
        self.refresh(api).await;
        Ok(())
    }

    /// Elimina il fornitore e poi ricarica la lista
    pub async fn delete(&mut self, api: &ApiClient, supplier_id: i32) -> Result<(), ApiError> {
        api.delete_supplier(supplier_id).await.map_err(|e| {
            warn!("Failed to delete supplier {}: {}", supplier_id, e);
            e
        })?;
        self.refresh(api).await;
        Ok(())
    }
}
