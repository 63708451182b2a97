//! orgdesk Client - HTTP client for the membership backend API
//!
//! Provides typed, per-entity-family access to the backend: officer
//! roster, membership records, and membership requirements. All calls
//! travel through [`HttpClient`] and the unified response envelope.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod types;

pub use api::{
    EntityApi, MembershipClient, OfficerClient, QrCodeApi, RequirementClient, VerificationApi,
};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use types::{FileUpload, ImportSummary};

// Re-export shared types for convenience
pub use shared::models::{
    EntityId, Identified, MembershipDraft, MembershipRecord, OfficerDraft, OfficerRecord,
    PaymentChannel, RequirementDraft, RequirementRecord, VerifyAction,
};
