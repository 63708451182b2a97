//! Shared types for the orgdesk workspace
//!
//! Wire-level types used across crates: entity models, draft payloads,
//! error codes, and the unified response envelope.

pub mod error;
pub mod models;
pub mod response;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::ErrorCode;
pub use response::ApiResponse;
