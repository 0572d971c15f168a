//! SupplierRepository - Repository per la gestione dei fornitori

use super::{Create, Delete, Read, Update, like_pattern};
use crate::dtos::{CreateSupplierDTO, ListFilter, UpdateSupplierDTO};
use crate::entities::{Status, Supplier};
use sqlx::{Error, QueryBuilder, Sqlite, SqlitePool};
use tracing::{debug, info, instrument};

const SUPPLIER_COLUMNS: &str =
    "supplier_id, company_name, contact_name, email, phone, address, tax_id, status";

// SUPPLIER REPOSITORY
pub struct SupplierRepository {
    connection_pool: SqlitePool,
}

impl SupplierRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// Lista filtrata: `search` su ragione sociale, referente ed email; `status` esatto.
    /// Nessuna paginazione, ordinamento stabile per ragione sociale.
    #[instrument(skip(self), fields(search = ?filter.search, status = ?filter.status))]
    pub async fn find_many(&self, filter: &ListFilter) -> Result<Vec<Supplier>, Error> {
        debug!("Listing suppliers");
        let mut query_builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {} FROM suppliers WHERE 1 = 1", SUPPLIER_COLUMNS));

        if let Some(ref search) = filter.search {
            let pattern = like_pattern(search);
            query_builder.push(" AND (company_name LIKE ");
            query_builder.push_bind(pattern.clone());
            query_builder.push(" ESCAPE '\\' OR contact_name LIKE ");
            query_builder.push_bind(pattern.clone());
            query_builder.push(" ESCAPE '\\' OR email LIKE ");
            query_builder.push_bind(pattern);
            query_builder.push(" ESCAPE '\\')");
        }
        if let Some(status) = filter.status {
            query_builder.push(" AND status = ");
            query_builder.push_bind(status);
        }
        query_builder.push(" ORDER BY company_name COLLATE NOCASE, supplier_id");

        let suppliers = query_builder
            .build_query_as::<Supplier>()
            .fetch_all(&self.connection_pool)
            .await?;

        debug!("Found {} suppliers", suppliers.len());
        Ok(suppliers)
    }

    /// Imposta lo stato del fornitore
    #[instrument(skip(self), fields(supplier_id = %id, status = %status))]
    pub async fn set_status(&self, id: &i32, status: Status) -> Result<(), Error> {
        let result = sqlx::query("UPDATE suppliers SET status = ? WHERE supplier_id = ?")
            .bind(status)
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }
        info!("Supplier status updated");
        Ok(())
    }
}

impl Create<Supplier, CreateSupplierDTO> for SupplierRepository {
    #[instrument(skip(self, data), fields(company_name = %data.company_name))]
    async fn create(&self, data: &CreateSupplierDTO) -> Result<Supplier, Error> {
        debug!("Creating new supplier");
        let result = sqlx::query(
            r#"
            INSERT INTO suppliers (company_name, contact_name, email, phone, address, tax_id, status)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&data.company_name)
        .bind(&data.contact_name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.address)
        .bind(&data.tax_id)
        .bind(data.status)
        .execute(&self.connection_pool)
        .await?;

        let new_id = result.last_insert_rowid() as i32;
        info!("Supplier created with id {}", new_id);

        Ok(Supplier {
            supplier_id: new_id,
            company_name: data.company_name.clone(),
            contact_name: data.contact_name.clone(),
            email: data.email.clone(),
            phone: data.phone.clone(),
            address: data.address.clone(),
            tax_id: data.tax_id.clone(),
            status: data.status,
        })
    }
}

impl Read<Supplier, i32> for SupplierRepository {
    #[instrument(skip(self), fields(supplier_id = %id))]
    async fn read(&self, id: &i32) -> Result<Option<Supplier>, Error> {
        let supplier = sqlx::query_as::<_, Supplier>(&format!(
            "SELECT {} FROM suppliers WHERE supplier_id = ?",
            SUPPLIER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(supplier)
    }
}

impl Update<Supplier, UpdateSupplierDTO, i32> for SupplierRepository {
    #[instrument(skip(self, data), fields(supplier_id = %id))]
    async fn update(&self, id: &i32, data: &UpdateSupplierDTO) -> Result<Supplier, Error> {
        debug!("Updating supplier");
        let current = self.read(id).await?.ok_or(Error::RowNotFound)?;

        if data.is_empty() {
            debug!("No fields to update, returning current supplier");
            return Ok(current);
        }

        let mut query_builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE suppliers SET ");
        let mut separated = query_builder.separated(", ");
        if let Some(ref company_name) = data.company_name {
            separated.push("company_name = ");
            separated.push_bind_unseparated(company_name);
        }
        // per i campi opzionali Some(None) scrive NULL
        if let Some(ref contact_name) = data.contact_name {
            separated.push("contact_name = ");
            separated.push_bind_unseparated(contact_name);
        }
        if let Some(ref email) = data.email {
            separated.push("email = ");
            separated.push_bind_unseparated(email);
        }
        if let Some(ref phone) = data.phone {
            separated.push("phone = ");
            separated.push_bind_unseparated(phone);
        }
        if let Some(ref address) = data.address {
            separated.push("address = ");
            separated.push_bind_unseparated(address);
        }
        if let Some(ref tax_id) = data.tax_id {
            separated.push("tax_id = ");
            separated.push_bind_unseparated(tax_id);
        }
        if let Some(status) = data.status {
            separated.push("status = ");
            separated.push_bind_unseparated(status);
        }

        query_builder.push(" WHERE supplier_id = ");
        query_builder.push_bind(id);

        query_builder.build().execute(&self.connection_pool).await?;

        info!("Supplier updated successfully");
        self.read(id).await?.ok_or(Error::RowNotFound)
    }
}

impl Delete<i32> for SupplierRepository {
    #[instrument(skip(self), fields(supplier_id = %id))]
    async fn delete(&self, id: &i32) -> Result<bool, Error> {
        let result = sqlx::query("DELETE FROM suppliers WHERE supplier_id = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            info!("Supplier deleted successfully");
        }
        Ok(deleted)
    }
}
