//! Supplier DTOs - Data Transfer Objects per fornitori

use crate::entities::{Status, Supplier};
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// Riga della tabella fornitori
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SupplierDTO {
    pub id: i32,
    pub company_name: String,
    pub contact_name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub status: Status,
}

impl From<Supplier> for SupplierDTO {
    fn from(value: Supplier) -> Self {
        Self {
            id: value.supplier_id,
            company_name: value.company_name,
            contact_name: value.contact_name,
            email: value.email,
            phone: value.phone,
            status: value.status,
        }
    }
}

/// Dettaglio completo (GET /suppliers/{id}), con indirizzo e partita iva
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SupplierDetailDTO {
    pub id: i32,
    pub company_name: String,
    pub contact_name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub tax_id: Option<String>,
    pub status: Status,
}

impl From<Supplier> for SupplierDetailDTO {
    fn from(value: Supplier) -> Self {
        Self {
            id: value.supplier_id,
            company_name: value.company_name,
            contact_name: value.contact_name,
            email: value.email,
            phone: value.phone,
            address: value.address,
            tax_id: value.tax_id,
            status: value.status,
        }
    }
}

/// DTO per creare un nuovo fornitore (senza supplier_id)
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateSupplierDTO {
    #[validate(length(min = 1, max = 150, message = "Company name is required"))]
    pub company_name: String,

    #[validate(length(max = 150))]
    pub contact_name: Option<String>,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(max = 30))]
    pub phone: Option<String>,

    pub address: Option<String>,
    pub tax_id: Option<String>,

    #[serde(default = "default_status")]
    pub status: Status,
}

fn default_status() -> Status {
    Status::Active
}

/// DTO per aggiornare un fornitore (solo i campi presenti vengono modificati).
/// Per i campi opzionali `null` esplicito azzera il valore: `Some(None)` => NULL.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Validate)]
pub struct UpdateSupplierDTO {
    #[validate(length(min = 1, max = 150, message = "Company name cannot be empty"))]
    pub company_name: Option<String>,

    #[serde(
        default,
        deserialize_with = "nullable_field",
        skip_serializing_if = "Option::is_none"
    )]
    #[validate(length(max = 150))]
    pub contact_name: Option<Option<String>>,

    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,

    #[serde(
        default,
        deserialize_with = "nullable_field",
        skip_serializing_if = "Option::is_none"
    )]
    #[validate(length(max = 30))]
    pub phone: Option<Option<String>>,

    #[serde(
        default,
        deserialize_with = "nullable_field",
        skip_serializing_if = "Option::is_none"
    )]
    pub address: Option<Option<String>>,

    #[serde(
        default,
        deserialize_with = "nullable_field",
        skip_serializing_if = "Option::is_none"
    )]
    pub tax_id: Option<Option<String>>,

    pub status: Option<Status>,
}

/// Chiave assente => `None` (via `default`), chiave presente => `Some(valore o null)`
fn nullable_field<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl UpdateSupplierDTO {
    pub fn is_empty(&self) -> bool {
        self.company_name.is_none()
            && self.contact_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.address.is_none()
            && self.tax_id.is_none()
            && self.status.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_supplier_requires_company_and_email() {
        let dto: CreateSupplierDTO = serde_json::from_value(serde_json::json!({
            "company_name": "",
            "email": "nope"
        }))
        .unwrap();

        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("company_name"));
        assert!(fields.contains_key("email"));
    }

    #[test]
    fn test_create_supplier_defaults_to_active() {
        let dto: CreateSupplierDTO = serde_json::from_value(serde_json::json!({
            "company_name": "Iron Supplies",
            "email": "sales@iron.test"
        }))
        .unwrap();

        assert!(dto.validate().is_ok());
        assert_eq!(dto.status, Status::Active);
    }

    #[test]
    fn test_update_supplier_is_empty() {
        assert!(UpdateSupplierDTO::default().is_empty());
        let dto = UpdateSupplierDTO {
            phone: Some(Some("555".to_string())),
            ..Default::default()
        };
        assert!(!dto.is_empty());
    }

    #[test]
    fn test_update_supplier_distinguishes_null_from_missing() {
        let dto: UpdateSupplierDTO = serde_json::from_value(serde_json::json!({
            "phone": null,
            "tax_id": "B-123"
        }))
        .unwrap();

        assert_eq!(dto.phone, Some(None));
        assert_eq!(dto.tax_id, Some(Some("B-123".to_string())));
        assert_eq!(dto.contact_name, None);
        assert_eq!(dto.address, None);
        assert!(!dto.is_empty());
    }

    #[test]
    fn test_update_supplier_validates_present_values() {
        let dto: UpdateSupplierDTO = serde_json::from_value(serde_json::json!({
            "phone": "1".repeat(31)
        }))
        .unwrap();
        assert!(dto.validate().is_err());

        let cleared: UpdateSupplierDTO =
            serde_json::from_value(serde_json::json!({ "phone": null })).unwrap();
        assert!(cleared.validate().is_ok());
    }
}
