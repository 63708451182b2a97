//! Officer roster API

use async_trait::async_trait;
use urlencoding::encode;

use shared::models::{OfficerDraft, OfficerRecord};

use super::EntityApi;
use crate::types::{FileUpload, ImportSummary};
use crate::{ClientResult, HttpClient};

/// Typed client for the officer roster endpoints
#[derive(Debug, Clone)]
pub struct OfficerClient {
    http: HttpClient,
}

impl OfficerClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl EntityApi for OfficerClient {
    type Entity = OfficerRecord;
    type Draft = OfficerDraft;

    async fn list(&self) -> ClientResult<Vec<OfficerRecord>> {
        self.http.get("/api/officers").await
    }

    async fn create(&self, draft: &OfficerDraft) -> ClientResult<OfficerRecord> {
        self.http.post("/api/officers", draft).await
    }

    async fn update(&self, id: &str, draft: &OfficerDraft) -> ClientResult<OfficerRecord> {
        self.http
            .put(&format!("/api/officers/{}", encode(id)), draft)
            .await
    }

    async fn delete(&self, id: &str) -> ClientResult<()> {
        self.http.delete(&format!("/api/officers/{}", encode(id))).await
    }

    /// Bulk import from a spreadsheet; the summary is the backend's
    /// human-readable `detail` line.
    async fn import(&self, upload: &FileUpload) -> ClientResult<ImportSummary> {
        self.http
            .post_multipart("/api/officers/import", upload, &[])
            .await
    }
}
