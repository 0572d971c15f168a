//! Supplier services - CRUD dei fornitori (solo admin)

use crate::core::{AppError, AppState};
use crate::dtos::{
    CreateSupplierDTO, ListQuery, SupplierDTO, SupplierDetailDTO, UpdateSupplierDTO,
};
use crate::repositories::{Create, Delete, Read, Update};
use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

#[instrument(skip(state))]
pub async fn list_suppliers(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListQuery>, // query params /suppliers?search=...&estado=...
) -> Result<Json<Vec<SupplierDTO>>, AppError> {
    // 1. Convertire i query params in filtro (stringhe vuote = tutti, estado sconosciuto = BAD_REQUEST)
    // 2. Recuperare l'intero insieme filtrato, senza paginazione
    let filter = params.into_filter()?;
    let suppliers = state.supplier.find_many(&filter).await?;

    info!("Found {} suppliers matching filter", suppliers.len());
    Ok(Json(suppliers.into_iter().map(SupplierDTO::from).collect()))
}

#[instrument(skip(state), fields(supplier_id = %supplier_id))]
pub async fn get_supplier(
    State(state): State<Arc<AppState>>,
    Path(supplier_id): Path<i32>,
) -> Result<Json<SupplierDetailDTO>, AppError> {
    let supplier = state.supplier.read(&supplier_id).await?.ok_or_else(|| {
        warn!("Supplier not found");
        AppError::not_found("Supplier not found")
    })?;

    Ok(Json(SupplierDetailDTO::from(supplier)))
}

#[instrument(skip(state, body), fields(company_name = %body.company_name))]
pub async fn create_supplier(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateSupplierDTO>,
) -> Result<(StatusCode, Json<SupplierDetailDTO>), AppError> {
    debug!("Creating supplier");
    body.validate()?;

    let supplier = state.supplier.create(&body).await?;

    info!("Supplier {} created", supplier.supplier_id);
    Ok((StatusCode::CREATED, Json(SupplierDetailDTO::from(supplier))))
}

#[instrument(skip(state, body), fields(supplier_id = %supplier_id))]
pub async fn update_supplier(
    State(state): State<Arc<AppState>>,
    Path(supplier_id): Path<i32>,
    Json(body): Json<UpdateSupplierDTO>,
) -> Result<Json<SupplierDetailDTO>, AppError> {
    debug!("Updating supplier");
    body.validate()?;

    let supplier = state.supplier.update(&supplier_id, &body).await.map_err(|e| match e {
        sqlx::Error::RowNotFound => AppError::not_found("Supplier not found"),
        other => AppError::from(other),
    })?;

    Ok(Json(SupplierDetailDTO::from(supplier)))
}

#[instrument(skip(state), fields(supplier_id = %supplier_id))]
pub async fn toggle_supplier_status(
    State(state): State<Arc<AppState>>,
    Path(supplier_id): Path<i32>,
) -> Result<Json<SupplierDTO>, AppError> {
    // 1. Leggere il fornitore (NOT_FOUND se assente)
    // 2. activo -> inactivo, inactivo -> activo; deshabilitado non si alterna (CONFLICT)
    // 3. Salvare e ritornare il fornitore aggiornato
    let mut supplier = state
        .supplier
        .read(&supplier_id)
        .await?
        .ok_or_else(|| AppError::not_found("Supplier not found"))?;

    let next = supplier.status.toggled().ok_or_else(|| {
        warn!("Attempt to toggle a disabled supplier");
        AppError::conflict("Disabled suppliers cannot be toggled")
    })?;

    state.supplier.set_status(&supplier_id, next).await?;
    supplier.status = next;

    info!("Supplier status toggled to {}", next);
    Ok(Json(SupplierDTO::from(supplier)))
}

#[instrument(skip(state), fields(supplier_id = %supplier_id))]
pub async fn delete_supplier(
    State(state): State<Arc<AppState>>,
    Path(supplier_id): Path<i32>,
) -> Result<StatusCode, AppError> {
    if !state.supplier.delete(&supplier_id).await? {
        warn!("Supplier not found");
        return Err(AppError::not_found("Supplier not found"));
    }

    info!("Supplier deleted");
    Ok(StatusCode::NO_CONTENT)
}
