//! API response envelope
//!
//! Every backend endpoint answers with this structure. `code` uses the
//! numeric values from [`ErrorCode`](crate::error::ErrorCode); `0` means
//! success.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ErrorCode;

/// Unified API response format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Error code (`0` = success)
    pub code: u16,
    /// Human-readable message
    pub message: String,
    /// Response data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Context details (field-level errors, diagnostics)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn success(data: T) -> Self {
        Self {
            code: ErrorCode::Success.code(),
            message: "success".to_string(),
            data: Some(data),
            details: None,
        }
    }

    /// Create an error response
    pub fn error_with_code(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code(),
            message: message.into(),
            data: None,
            details: None,
        }
    }

    /// Whether this response carries a success code
    pub fn is_success(&self) -> bool {
        self.code == ErrorCode::Success.code()
    }
}

impl ApiResponse<()> {
    /// Create a success response with no data
    pub fn ok() -> Self {
        Self {
            code: ErrorCode::Success.code(),
            message: "success".to_string(),
            data: None,
            details: None,
        }
    }
}
