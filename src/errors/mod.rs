//! Error handling module for the ChoreBoard domain core.
//!
//! Provides centralized error types with stable codes and a serializable
//! envelope for the hosting UI layer.

use serde::{Deserialize, Serialize};

/// Error codes as constants to avoid stringly-typed errors.
#[allow(dead_code)]
pub mod codes {
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const OUT_OF_STOCK: &str = "OUT_OF_STOCK";
    pub const INSUFFICIENT_POINTS: &str = "INSUFFICIENT_POINTS";
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found
    NotFound(String),
    /// Validation error
    Validation(String),
    /// Product has no remaining stock
    OutOfStock { product: String },
    /// Balance cannot cover the product's points cost
    InsufficientPoints { required: u32, balance: u32 },
}

impl AppError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => codes::NOT_FOUND,
            AppError::Validation(_) => codes::VALIDATION_ERROR,
            AppError::OutOfStock { .. } => codes::OUT_OF_STOCK,
            AppError::InsufficientPoints { .. } => codes::INSUFFICIENT_POINTS,
        }
    }

    /// Get the user-facing error message.
    ///
    /// Exchange rejections use the exact copy the mobile screens display.
    pub fn message(&self) -> String {
        match self {
            AppError::NotFound(msg) => msg.clone(),
            AppError::Validation(msg) => msg.clone(),
            AppError::OutOfStock { .. } => "商品已售罄，请选择其他商品".to_string(),
            AppError::InsufficientPoints { .. } => "积分不足，无法兑换商品".to_string(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for AppError {}

/// Error details in the envelope handed to the hosting layer.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&AppError> for ErrorDetails {
    fn from(error: &AppError) -> Self {
        let details = match error {
            AppError::OutOfStock { product } => {
                Some(serde_json::json!({ "product": product }))
            }
            AppError::InsufficientPoints { required, balance } => {
                Some(serde_json::json!({ "required": required, "balance": balance }))
            }
            _ => None,
        };

        Self {
            code: error.error_code().to_string(),
            message: error.message(),
            details,
        }
    }
}
