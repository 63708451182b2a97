//! Client error types

use shared::error::ErrorCode;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (network/transport)
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Bulk import was rejected, in whole or in part
    #[error("Import failed: {detail}")]
    Import { detail: String },

    /// Operation is not supported by this entity family
    #[error("Not supported: {0}")]
    NotSupported(String),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ClientError {
    /// Map a wire error code + message to the most specific variant.
    pub fn from_code(code: ErrorCode, message: String) -> Self {
        match code {
            ErrorCode::NotAuthenticated
            | ErrorCode::InvalidCredentials
            | ErrorCode::TokenExpired => ClientError::Unauthorized,
            ErrorCode::PermissionDenied | ErrorCode::OfficerRequired => {
                ClientError::Forbidden(message)
            }
            ErrorCode::NotFound
            | ErrorCode::OfficerNotFound
            | ErrorCode::MembershipNotFound
            | ErrorCode::RequirementNotFound
            | ErrorCode::QrCodeMissing => ClientError::NotFound(message),
            ErrorCode::ValidationFailed
            | ErrorCode::InvalidRequest
            | ErrorCode::AlreadyExists
            | ErrorCode::DuplicateStudentNumber
            | ErrorCode::NotAwaitingVerification => ClientError::Validation(message),
            ErrorCode::ImportRejected => ClientError::Import { detail: message },
            ErrorCode::Success
            | ErrorCode::Unknown
            | ErrorCode::InternalError
            | ErrorCode::NetworkError => ClientError::Internal(message),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_codes_collapse_to_unauthorized() {
        for code in [
            ErrorCode::NotAuthenticated,
            ErrorCode::InvalidCredentials,
            ErrorCode::TokenExpired,
        ] {
            assert!(matches!(
                ClientError::from_code(code, "x".into()),
                ClientError::Unauthorized
            ));
        }
    }

    #[test]
    fn not_found_carries_message() {
        let err = ClientError::from_code(ErrorCode::MembershipNotFound, "m-9 gone".into());
        match err {
            ClientError::NotFound(msg) => assert_eq!(msg, "m-9 gone"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn import_rejection_keeps_detail() {
        let err = ClientError::from_code(ErrorCode::ImportRejected, "row 3: bad email".into());
        match err {
            ClientError::Import { detail } => assert_eq!(detail, "row 3: bad email"),
            other => panic!("expected Import, got {other:?}"),
        }
    }
}
