//! JSON read API

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{AppError, AppState};
use crate::store::Warehouse;

/// API Response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Warehouse response (flattened for API)
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct WarehouseResponse {
    pub id: u64,
    pub name: String,
    pub capacity: f64,
    pub level: f64,
    pub remaining: f64,
}

impl From<&Warehouse> for WarehouseResponse {
    fn from(warehouse: &Warehouse) -> Self {
        Self {
            id: warehouse.id,
            name: warehouse.name.clone(),
            capacity: warehouse.varasto.capacity(),
            level: warehouse.varasto.level(),
            remaining: warehouse.varasto.remaining_capacity(),
        }
    }
}

/// GET /api/health - Health check
pub async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/warehouses - All warehouses, ordered by id
pub async fn list_warehouses(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<WarehouseResponse>>>, AppError> {
    let store = state.read()?;
    let response: Vec<WarehouseResponse> =
        store.all().values().map(WarehouseResponse::from).collect();

    Ok(Json(ApiResponse::ok(response)))
}

/// GET /api/warehouses/:id - One warehouse
pub async fn get_warehouse(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<ApiResponse<WarehouseResponse>>, AppError> {
    let store = state.read()?;

    match store.get(id) {
        Some(warehouse) => Ok(Json(ApiResponse::ok(warehouse.into()))),
        None => {
            warn!(id, "Warehouse not found");
            Err(AppError::NotFound(id))
        }
    }
}
