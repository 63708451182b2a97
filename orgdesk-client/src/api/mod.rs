//! Typed per-entity-family API clients
//!
//! Each family implements [`EntityApi`], the surface the admin collection
//! store is generic over. Family-specific operations (verification, QR
//! codes, imports) live on the concrete clients.

mod memberships;
mod officers;
mod requirements;

pub use memberships::MembershipClient;
pub use officers::OfficerClient;
pub use requirements::RequirementClient;

use async_trait::async_trait;

use shared::models::{Identified, PaymentChannel, QrCodeData, VerifyAction};

use crate::types::{FileUpload, ImportSummary};
use crate::ClientResult;

/// Backend access for one entity family
///
/// `delete` is idempotent from the caller's perspective: callers reload
/// after every mutation, so a repeated delete is a harmless no-op.
/// Families without a bulk-import endpoint answer
/// [`ClientError::NotSupported`](crate::ClientError::NotSupported).
#[async_trait]
pub trait EntityApi: Send + Sync {
    type Entity: Identified + Clone + Send + Sync + 'static;
    type Draft: Send + Sync;

    async fn list(&self) -> ClientResult<Vec<Self::Entity>>;
    async fn create(&self, draft: &Self::Draft) -> ClientResult<Self::Entity>;
    async fn update(&self, id: &str, draft: &Self::Draft) -> ClientResult<Self::Entity>;
    async fn delete(&self, id: &str) -> ClientResult<()>;
    async fn import(&self, upload: &FileUpload) -> ClientResult<ImportSummary>;
}

/// Payment verification operations on membership records
#[async_trait]
pub trait VerificationApi: Send + Sync {
    /// Approve or deny a payment awaiting verification.
    async fn set_verification(&self, id: &str, action: VerifyAction) -> ClientResult<()>;
}

/// QR code management for requirement payment channels
#[async_trait]
pub trait QrCodeApi: Send + Sync {
    /// Fetch the published QR code url for a payment channel, if any.
    async fn qr_code(&self, channel: PaymentChannel) -> ClientResult<QrCodeData>;

    /// Upload a new QR code image for a requirement and payment channel.
    async fn upload_qr_code(
        &self,
        requirement: &str,
        channel: PaymentChannel,
        upload: &FileUpload,
    ) -> ClientResult<()>;
}
