//! Unified error codes for the orgdesk backend API
//!
//! Error codes are carried in the response envelope and shared between the
//! backend and every client. Organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Roster errors
//! - 4xxx: Membership errors
//! - 5xxx: Requirement errors
//! - 9xxx: System errors

use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Codes are represented as u16 values for efficient serialization and
/// cross-language compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (username/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Officer role required
    OfficerRequired = 2002,

    // ==================== 3xxx: Roster ====================
    /// Officer not found
    OfficerNotFound = 3001,
    /// Duplicate student number
    DuplicateStudentNumber = 3002,
    /// Import file malformed or partially rejected
    ImportRejected = 3003,

    // ==================== 4xxx: Membership ====================
    /// Membership record not found
    MembershipNotFound = 4001,
    /// Membership is not awaiting verification
    NotAwaitingVerification = 4002,

    // ==================== 5xxx: Requirement ====================
    /// Requirement not found
    RequirementNotFound = 5001,
    /// QR code missing for the payment channel
    QrCodeMissing = 5002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Network error
    NetworkError = 9002,
}

impl ErrorCode {
    /// The numeric wire value of this code
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Default human-readable message for this code
    pub fn message(&self) -> &'static str {
        match self {
            ErrorCode::Success => "Success",
            ErrorCode::Unknown => "Unknown error",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::NotAuthenticated => "Not authenticated",
            ErrorCode::InvalidCredentials => "Invalid credentials",
            ErrorCode::TokenExpired => "Token expired",
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::OfficerRequired => "Officer role required",
            ErrorCode::OfficerNotFound => "Officer not found",
            ErrorCode::DuplicateStudentNumber => "Duplicate student number",
            ErrorCode::ImportRejected => "Import file rejected",
            ErrorCode::MembershipNotFound => "Membership record not found",
            ErrorCode::NotAwaitingVerification => "Membership is not awaiting verification",
            ErrorCode::RequirementNotFound => "Requirement not found",
            ErrorCode::QrCodeMissing => "No QR code uploaded for this payment channel",
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::NetworkError => "Network error",
        }
    }

    /// The HTTP status the backend answers with for this code
    pub fn http_status(&self) -> StatusCode {
        match self {
            ErrorCode::Success => StatusCode::OK,
            ErrorCode::ValidationFailed | ErrorCode::InvalidRequest | ErrorCode::ImportRejected => {
                StatusCode::BAD_REQUEST
            }
            ErrorCode::NotFound
            | ErrorCode::OfficerNotFound
            | ErrorCode::MembershipNotFound
            | ErrorCode::RequirementNotFound
            | ErrorCode::QrCodeMissing => StatusCode::NOT_FOUND,
            ErrorCode::AlreadyExists | ErrorCode::DuplicateStudentNumber => StatusCode::CONFLICT,
            ErrorCode::NotAuthenticated
            | ErrorCode::InvalidCredentials
            | ErrorCode::TokenExpired => StatusCode::UNAUTHORIZED,
            ErrorCode::PermissionDenied | ErrorCode::OfficerRequired => StatusCode::FORBIDDEN,
            ErrorCode::NotAwaitingVerification => StatusCode::CONFLICT,
            ErrorCode::Unknown | ErrorCode::InternalError | ErrorCode::NetworkError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code as u16
    }
}

impl TryFrom<u16> for ErrorCode {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            0 => ErrorCode::Success,
            1 => ErrorCode::Unknown,
            2 => ErrorCode::ValidationFailed,
            3 => ErrorCode::NotFound,
            4 => ErrorCode::AlreadyExists,
            5 => ErrorCode::InvalidRequest,
            1001 => ErrorCode::NotAuthenticated,
            1002 => ErrorCode::InvalidCredentials,
            1003 => ErrorCode::TokenExpired,
            2001 => ErrorCode::PermissionDenied,
            2002 => ErrorCode::OfficerRequired,
            3001 => ErrorCode::OfficerNotFound,
            3002 => ErrorCode::DuplicateStudentNumber,
            3003 => ErrorCode::ImportRejected,
            4001 => ErrorCode::MembershipNotFound,
            4002 => ErrorCode::NotAwaitingVerification,
            5001 => ErrorCode::RequirementNotFound,
            5002 => ErrorCode::QrCodeMissing,
            9001 => ErrorCode::InternalError,
            9002 => ErrorCode::NetworkError,
            other => return Err(format!("unknown error code: {}", other)),
        };
        Ok(code)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message(), self.code())
    }
}
