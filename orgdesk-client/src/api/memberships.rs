//! Membership records API

use async_trait::async_trait;
use serde::Serialize;
use urlencoding::encode;

use shared::models::{MembershipDraft, MembershipRecord, VerifyAction};

use super::{EntityApi, VerificationApi};
use crate::types::{FileUpload, ImportSummary};
use crate::{ClientError, ClientResult, HttpClient};

/// Typed client for the membership record endpoints
#[derive(Debug, Clone)]
pub struct MembershipClient {
    http: HttpClient,
}

#[derive(Serialize)]
struct VerificationBody {
    action: VerifyAction,
}

impl MembershipClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl VerificationApi for MembershipClient {
    async fn set_verification(&self, id: &str, action: VerifyAction) -> ClientResult<()> {
        self.http
            .post_unit(
                &format!("/api/memberships/{}/verification", encode(id)),
                &VerificationBody { action },
            )
            .await
    }
}

#[async_trait]
impl EntityApi for MembershipClient {
    type Entity = MembershipRecord;
    type Draft = MembershipDraft;

    async fn list(&self) -> ClientResult<Vec<MembershipRecord>> {
        self.http.get("/api/memberships").await
    }

    async fn create(&self, draft: &MembershipDraft) -> ClientResult<MembershipRecord> {
        self.http.post("/api/memberships", draft).await
    }

    async fn update(&self, id: &str, draft: &MembershipDraft) -> ClientResult<MembershipRecord> {
        self.http
            .put(&format!("/api/memberships/{}", encode(id)), draft)
            .await
    }

    async fn delete(&self, id: &str) -> ClientResult<()> {
        self.http
            .delete(&format!("/api/memberships/{}", encode(id)))
            .await
    }

    async fn import(&self, _upload: &FileUpload) -> ClientResult<ImportSummary> {
        Err(ClientError::NotSupported(
            "memberships have no bulk import endpoint".to_string(),
        ))
    }
}
