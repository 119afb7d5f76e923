//! HTTP error type

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

use super::api::ApiResponse;

#[derive(Error, Debug)]
pub enum AppError {
    /// The store lock was poisoned by a panicking request
    #[error("Warehouse store is unavailable")]
    StoreUnavailable,

    #[error("Warehouse not found: {0}")]
    NotFound(u64),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::StoreUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(ApiResponse::<()>::err(self.to_string()))).into_response()
    }
}
