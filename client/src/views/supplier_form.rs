//! Form modale di creazione/modifica fornitore

use crate::api::{ApiClient, ApiError};
use crate::models::{NewSupplier, Status, SupplierDetail, SupplierUpdate};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

const SAVE_ERROR: &str = "No se pudo guardar el proveedor";
const LOAD_ERROR: &str = "No se pudo cargar el proveedor";

/// Errori di validazione per campo (campo -> messaggio)
pub type FormErrors = BTreeMap<&'static str, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i32),
}

/// Valori del form così come li digita l'utente
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SupplierFormValues {
    pub company_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub tax_id: String,
    pub status: Status,
}

impl From<SupplierDetail> for SupplierFormValues {
    fn from(value: SupplierDetail) -> Self {
        Self {
            company_name: value.company_name,
            contact_name: value.contact_name.unwrap_or_default(),
            email: value.email,
            phone: value.phone.unwrap_or_default(),
            address: value.address.unwrap_or_default(),
            tax_id: value.tax_id.unwrap_or_default(),
            status: value.status,
        }
    }
}

/// Esito di `SupplierForm::submit`, restituito al genitore
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Salvato: il genitore deve ricaricare la lista
    Saved(SupplierDetail),
    /// Validazione locale fallita, nessuna chiamata di rete
    Invalid,
    /// In modifica, i valori salvati non sono ancora stati caricati
    NotReady,
    /// Il server ha rifiutato la richiesta o la rete non risponde
    Failed(String),
}

#[derive(Debug)]
pub struct SupplierForm {
    mode: FormMode,
    values: SupplierFormValues,
    errors: FormErrors,
    submit_error: Option<String>,
    // in modifica diventa true solo dopo il precaricamento
    ready: bool,
}

impl SupplierForm {
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            values: SupplierFormValues::default(),
            errors: FormErrors::new(),
            submit_error: None,
            ready: true,
        }
    }

    /// Form di modifica vuoto: va precaricato con `load` prima dell'invio
    pub fn edit(supplier_id: i32) -> Self {
        Self {
            mode: FormMode::Edit(supplier_id),
            ready: false,
            ..Self::create()
        }
    }

    /// Apre il form di modifica già precaricato con i valori salvati
    pub async fn open_edit(api: &ApiClient, supplier_id: i32) -> Result<Self, ApiError> {
        let mut form = Self::edit(supplier_id);
        form.load(api).await?;
        Ok(form)
    }

    /// Precarica i valori correnti del fornitore (GET /suppliers/{id})
    pub async fn load(&mut self, api: &ApiClient) -> Result<(), ApiError> {
        let FormMode::Edit(supplier_id) = self.mode else {
            return Ok(());
        };

        match api.get_supplier(supplier_id).await {
            Ok(detail) => {
                debug!("Prefilled form for supplier {}", supplier_id);
                self.values = SupplierFormValues::from(detail);
                self.submit_error = None;
                self.ready = true;
                Ok(())
            }
            Err(e) => {
                warn!("Failed to load supplier {}: {}", supplier_id, e);
                self.submit_error = Some(e.user_message(LOAD_ERROR));
                Err(e)
            }
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn values(&self) -> &SupplierFormValues {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut SupplierFormValues {
        &mut self.values
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    /// Validazione locale dei campi obbligatori
    pub fn validate(&mut self) -> bool {
        self.errors.clear();

        if self.values.company_name.trim().is_empty() {
            self.errors
                .insert("company_name", "El nombre de la empresa es obligatorio".to_string());
        }

        let email = self.values.email.trim();
        if email.is_empty() {
            self.errors
                .insert("email", "El email es obligatorio".to_string());
        } else if !looks_like_email(email) {
            self.errors
                .insert("email", "El email no es válido".to_string());
        }

        self.errors.is_empty()
    }

    pub async fn submit(&mut self, api: &ApiClient) -> SubmitOutcome {
        if !self.ready {
            debug!("Submit ignored: form not loaded yet");
            return SubmitOutcome::NotReady;
        }
        if !self.validate() {
            debug!("Submit blocked by {} validation errors", self.errors.len());
            return SubmitOutcome::Invalid;
        }

        let result = match self.mode {
            FormMode::Create => api.create_supplier(&self.new_supplier()).await,
            FormMode::Edit(supplier_id) => {
                api.update_supplier(supplier_id, &self.supplier_update())
                    .await
            }
        };

        match result {
            Ok(saved) => {
                info!("Supplier {} saved", saved.id);
                self.submit_error = None;
                SubmitOutcome::Saved(saved)
            }
            Err(e) => {
                warn!("Failed to save supplier: {}", e);
                let message = e.user_message(SAVE_ERROR);
                self.submit_error = Some(message.clone());
                SubmitOutcome::Failed(message)
            }
        }
    }

    fn new_supplier(&self) -> NewSupplier {
        let v = &self.values;
        NewSupplier {
            company_name: v.company_name.trim().to_string(),
            contact_name: non_empty(&v.contact_name),
            email: v.email.trim().to_string(),
            phone: non_empty(&v.phone),
            address: non_empty(&v.address),
            tax_id: non_empty(&v.tax_id),
            status: v.status,
        }
    }

    // in modifica un campo opzionale svuotato viene inviato come null
    fn supplier_update(&self) -> SupplierUpdate {
        let v = &self.values;
        SupplierUpdate {
            company_name: Some(v.company_name.trim().to_string()),
            contact_name: Some(non_empty(&v.contact_name)),
            email: Some(v.email.trim().to_string()),
            phone: Some(non_empty(&v.phone)),
            address: Some(non_empty(&v.address)),
            tax_id: Some(non_empty(&v.tax_id)),
            status: Some(v.status),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    }
}
