//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server-class errors to
//! Sentry before responding to the client. All route handlers return
//! `Result<T, AppError>`. Every failure body is a structured JSON payload of
//! the shape `{"error": "<message>"}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use orchard_core::{ProductId, ReceiptError};

use crate::store::StoreError;

/// Application-level error type for the storefront API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Cart storage operation failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Missing or malformed request field.
    #[error("{0}")]
    Validation(String),

    /// A cart mutation referenced a product id the catalog does not know.
    #[error("Product with ID {0} not found")]
    ProductNotFound(ProductId),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Checkout attempted on a cart with no items.
    #[error("Cart empty")]
    EmptyCart,

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ReceiptError> for AppError {
    fn from(err: ReceiptError) -> Self {
        match err {
            ReceiptError::EmptyCart => Self::EmptyCart,
            // A malformed line item means stored state is corrupt, not that
            // the client sent a bad request
            ReceiptError::InvalidLineItem(msg) => Self::Internal(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Store(_) | Self::Internal(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Store(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) | Self::ProductNotFound(_) | Self::EmptyCart => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Store(_) | Self::Internal(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
