//! Query DTOs - Data Transfer Objects per query di ricerca

use crate::core::AppError;
use crate::entities::Status;
use serde::{Deserialize, Serialize};

/// Query parameters dei listing filtrabili: `?search=...&estado=...`
///
/// Stringhe vuote equivalgono a parametro assente ("tutti").
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ListQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub estado: Option<String>,
}

/// Filtro già validato, passato ai repository
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListFilter {
    pub search: Option<String>,
    pub status: Option<Status>,
}

impl ListQuery {
    pub fn into_filter(self) -> Result<ListFilter, AppError> {
        let search = self
            .search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let status = match self.estado.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(raw.parse::<Status>().map_err(|e| {
                AppError::bad_request("Invalid status filter").with_details(e)
            })?),
        };

        Ok(ListFilter { search, status })
    }
}
