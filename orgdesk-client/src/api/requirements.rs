//! Membership requirements API
//!
//! Requirements are keyed by requirement *name* on the wire; the record id
//! is display-only.

use async_trait::async_trait;
use urlencoding::encode;

use shared::models::{PaymentChannel, QrCodeData, RequirementDraft, RequirementRecord};

use super::{EntityApi, QrCodeApi};
use crate::types::{FileUpload, ImportSummary};
use crate::{ClientError, ClientResult, HttpClient};

/// Typed client for the requirement endpoints
#[derive(Debug, Clone)]
pub struct RequirementClient {
    http: HttpClient,
}

impl RequirementClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl QrCodeApi for RequirementClient {
    async fn qr_code(&self, channel: PaymentChannel) -> ClientResult<QrCodeData> {
        self.http
            .get(&format!("/api/requirements/qr-codes/{}", channel))
            .await
    }

    async fn upload_qr_code(
        &self,
        requirement: &str,
        channel: PaymentChannel,
        upload: &FileUpload,
    ) -> ClientResult<()> {
        self.http
            .post_multipart_unit(
                &format!(
                    "/api/requirements/{}/qr-codes/{}",
                    encode(requirement),
                    channel
                ),
                upload,
                &[],
            )
            .await
    }
}

#[async_trait]
impl EntityApi for RequirementClient {
    type Entity = RequirementRecord;
    type Draft = RequirementDraft;

    async fn list(&self) -> ClientResult<Vec<RequirementRecord>> {
        self.http.get("/api/requirements").await
    }

    async fn create(&self, draft: &RequirementDraft) -> ClientResult<RequirementRecord> {
        self.http.post("/api/requirements", draft).await
    }

    /// Update keyed by requirement name; the amount-only price edit sends
    /// the full draft with the name unchanged.
    async fn update(&self, name: &str, draft: &RequirementDraft) -> ClientResult<RequirementRecord> {
        self.http
            .put(&format!("/api/requirements/{}", encode(name)), draft)
            .await
    }

    /// Unconditional delete; surfaced to users as "archive".
    async fn delete(&self, name: &str) -> ClientResult<()> {
        self.http
            .delete(&format!("/api/requirements/{}", encode(name)))
            .await
    }

    async fn import(&self, _upload: &FileUpload) -> ClientResult<ImportSummary> {
        Err(ClientError::NotSupported(
            "requirements have no bulk import endpoint".to_string(),
        ))
    }
}
