//! In-memory mock backends for driving the screens in tests
//!
//! Each mock counts calls and can be primed to fail per operation or
//! per id, so tests can exercise the failure paths without a server.

#![allow(dead_code)]

use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use orgdesk_client::{
    ClientError, ClientResult, EntityApi, FileUpload, ImportSummary, QrCodeApi, VerificationApi,
};
use shared::models::{
    MemberProfile, MembershipDraft, MembershipRecord, OfficerDraft, OfficerRecord, PaymentChannel,
    QrCodeData, RequirementDraft, RequirementRecord, VerifyAction,
};

/// Route test logs through the capture writer; safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn officer(id: &str, name: &str) -> OfficerRecord {
    OfficerRecord {
        id: id.to_string(),
        full_name: Some(name.to_string()),
        email: Some(format!("{id}@example.edu")),
        password: Some("changeme".to_string()),
        student_number: Some(format!("2021-{id}")),
        year: Some("2nd Year".to_string()),
        block: Some("B".to_string()),
        position: Some("Member".to_string()),
    }
}

pub fn valid_officer_draft(name: &str) -> OfficerDraft {
    OfficerDraft {
        full_name: name.to_string(),
        email: "new@example.edu".to_string(),
        password: "hunter2".to_string(),
        student_number: "2021-999".to_string(),
        year: "1st Year".to_string(),
        block: "A".to_string(),
        position: "Secretary".to_string(),
    }
}

pub fn membership(id: &str, name: &str, block: &str, year: &str) -> MembershipRecord {
    MembershipRecord {
        id: id.to_string(),
        member_id: Some(format!("u-{id}")),
        member: Some(MemberProfile {
            full_name: Some(name.to_string()),
            block: Some(block.to_string()),
            year: Some(year.to_string()),
        }),
        requirement: Some("1st Semester Membership".to_string()),
        payment_status: Some("paid".to_string()),
        receipt_path: None,
        status: None,
        submitted_at: None,
    }
}

pub fn requirement(id: &str, name: &str, amount: rust_decimal::Decimal) -> RequirementRecord {
    RequirementRecord {
        id: id.to_string(),
        requirement: name.to_string(),
        amount: Some(amount),
        qr_codes: BTreeMap::new(),
    }
}

// ============ Officer mock ============

#[derive(Default)]
pub struct MockOfficerApi {
    pub records: Mutex<Vec<OfficerRecord>>,
    pub fail_list: Mutex<bool>,
    pub fail_deletes: Mutex<HashSet<String>>,
    pub import_summary: Mutex<Option<String>>,
    pub list_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
    pub import_calls: AtomicUsize,
}

impl MockOfficerApi {
    pub fn seeded(records: Vec<OfficerRecord>) -> Self {
        let api = Self::default();
        *api.records.lock().unwrap() = records;
        api
    }
}

#[async_trait]
impl EntityApi for MockOfficerApi {
    type Entity = OfficerRecord;
    type Draft = OfficerDraft;

    async fn list(&self) -> ClientResult<Vec<OfficerRecord>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if *self.fail_list.lock().unwrap() {
            return Err(ClientError::Internal("backend unreachable".to_string()));
        }
        Ok(self.records.lock().unwrap().clone())
    }

    async fn create(&self, draft: &OfficerDraft) -> ClientResult<OfficerRecord> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        let record = OfficerRecord {
            id: Uuid::new_v4().to_string(),
            full_name: Some(draft.full_name.clone()),
            email: Some(draft.email.clone()),
            password: Some(draft.password.clone()),
            student_number: Some(draft.student_number.clone()),
            year: Some(draft.year.clone()),
            block: Some(draft.block.clone()),
            position: Some(draft.position.clone()),
        };
        self.records.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: &str, draft: &OfficerDraft) -> ClientResult<OfficerRecord> {
        let mut records = self.records.lock().unwrap();
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| ClientError::NotFound(format!("officer {id}")))?;
        record.full_name = Some(draft.full_name.clone());
        record.email = Some(draft.email.clone());
        record.password = Some(draft.password.clone());
        record.student_number = Some(draft.student_number.clone());
        record.year = Some(draft.year.clone());
        record.block = Some(draft.block.clone());
        record.position = Some(draft.position.clone());
        Ok(record.clone())
    }

    async fn delete(&self, id: &str) -> ClientResult<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_deletes.lock().unwrap().contains(id) {
            return Err(ClientError::Internal(format!("cannot delete {id}")));
        }
        self.records.lock().unwrap().retain(|r| r.id != id);
        Ok(())
    }

    async fn import(&self, _upload: &FileUpload) -> ClientResult<ImportSummary> {
        self.import_calls.fetch_add(1, Ordering::SeqCst);
        match self.import_summary.lock().unwrap().clone() {
            Some(detail) => Ok(ImportSummary { detail }),
            None => Err(ClientError::Import {
                detail: "malformed spreadsheet".to_string(),
            }),
        }
    }
}

// ============ Membership mock ============

#[derive(Default)]
pub struct MockMembershipApi {
    pub records: Mutex<Vec<MembershipRecord>>,
    pub fail_verify: Mutex<bool>,
    pub list_calls: AtomicUsize,
    pub verify_calls: AtomicUsize,
}

impl MockMembershipApi {
    pub fn seeded(records: Vec<MembershipRecord>) -> Self {
        let api = Self::default();
        *api.records.lock().unwrap() = records;
        api
    }
}

#[async_trait]
impl EntityApi for MockMembershipApi {
    type Entity = MembershipRecord;
    type Draft = MembershipDraft;

    async fn list(&self) -> ClientResult<Vec<MembershipRecord>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.records.lock().unwrap().clone())
    }

    async fn create(&self, draft: &MembershipDraft) -> ClientResult<MembershipRecord> {
        let record = MembershipRecord {
            id: Uuid::new_v4().to_string(),
            member_id: Some(draft.member_id.clone()),
            member: None,
            requirement: Some(draft.requirement.clone()),
            payment_status: draft.payment_status.clone(),
            receipt_path: None,
            status: None,
            submitted_at: None,
        };
        self.records.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: &str, draft: &MembershipDraft) -> ClientResult<MembershipRecord> {
        let mut records = self.records.lock().unwrap();
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| ClientError::NotFound(format!("membership {id}")))?;
        record.member_id = Some(draft.member_id.clone());
        record.requirement = Some(draft.requirement.clone());
        record.payment_status = draft.payment_status.clone();
        Ok(record.clone())
    }

    async fn delete(&self, id: &str) -> ClientResult<()> {
        self.records.lock().unwrap().retain(|r| r.id != id);
        Ok(())
    }

    async fn import(&self, _upload: &FileUpload) -> ClientResult<ImportSummary> {
        Err(ClientError::NotSupported(
            "memberships have no bulk import endpoint".to_string(),
        ))
    }
}

#[async_trait]
impl VerificationApi for MockMembershipApi {
    async fn set_verification(&self, id: &str, action: VerifyAction) -> ClientResult<()> {
        self.verify_calls.fetch_add(1, Ordering::SeqCst);
        if *self.fail_verify.lock().unwrap() {
            return Err(ClientError::Internal("verification failed".to_string()));
        }
        let mut records = self.records.lock().unwrap();
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| ClientError::NotFound(format!("membership {id}")))?;
        match action {
            VerifyAction::Approve => {
                record.status = Some("approved".to_string());
                record.payment_status = Some("paid".to_string());
            }
            VerifyAction::Deny => {
                record.status = Some("denied".to_string());
                record.payment_status = Some("denied".to_string());
            }
        }
        Ok(())
    }
}

// ============ Requirement mock ============

#[derive(Default)]
pub struct MockRequirementApi {
    pub records: Mutex<Vec<RequirementRecord>>,
    pub qr_codes: Mutex<BTreeMap<PaymentChannel, String>>,
    pub delete_calls: AtomicUsize,
    pub upload_calls: AtomicUsize,
}

impl MockRequirementApi {
    pub fn seeded(records: Vec<RequirementRecord>) -> Self {
        let api = Self::default();
        *api.records.lock().unwrap() = records;
        api
    }
}

#[async_trait]
impl EntityApi for MockRequirementApi {
    type Entity = RequirementRecord;
    type Draft = RequirementDraft;

    async fn list(&self) -> ClientResult<Vec<RequirementRecord>> {
        Ok(self.records.lock().unwrap().clone())
    }

    async fn create(&self, draft: &RequirementDraft) -> ClientResult<RequirementRecord> {
        let record = RequirementRecord {
            id: Uuid::new_v4().to_string(),
            requirement: draft.requirement.clone(),
            amount: Some(draft.amount),
            qr_codes: BTreeMap::new(),
        };
        self.records.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn update(&self, name: &str, draft: &RequirementDraft) -> ClientResult<RequirementRecord> {
        let mut records = self.records.lock().unwrap();
        let record = records
            .iter_mut()
            .find(|r| r.requirement == name)
            .ok_or_else(|| ClientError::NotFound(format!("requirement {name}")))?;
        record.requirement = draft.requirement.clone();
        record.amount = Some(draft.amount);
        Ok(record.clone())
    }

    async fn delete(&self, name: &str) -> ClientResult<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.records
            .lock()
            .unwrap()
            .retain(|r| r.requirement != name);
        Ok(())
    }

    async fn import(&self, _upload: &FileUpload) -> ClientResult<ImportSummary> {
        Err(ClientError::NotSupported(
            "requirements have no bulk import endpoint".to_string(),
        ))
    }
}

#[async_trait]
impl QrCodeApi for MockRequirementApi {
    async fn qr_code(&self, channel: PaymentChannel) -> ClientResult<QrCodeData> {
        Ok(QrCodeData {
            qr_code_url: self.qr_codes.lock().unwrap().get(&channel).cloned(),
        })
    }

    async fn upload_qr_code(
        &self,
        requirement: &str,
        channel: PaymentChannel,
        _upload: &FileUpload,
    ) -> ClientResult<()> {
        self.upload_calls.fetch_add(1, Ordering::SeqCst);
        if !self
            .records
            .lock()
            .unwrap()
            .iter()
            .any(|r| r.requirement == requirement)
        {
            return Err(ClientError::NotFound(format!("requirement {requirement}")));
        }
        self.qr_codes.lock().unwrap().insert(
            channel,
            format!("/static/qr/{}.png", channel),
        );
        Ok(())
    }
}
