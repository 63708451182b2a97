//! Membership management screen
//!
//! Two collections side by side: the per-member membership records
//! (tabbed and filterable, with payment verification) and the grouped
//! requirements (price edits, archive, QR code management).

use std::sync::Arc;

use validator::Validate;

use orgdesk_client::{EntityApi, FileUpload, QrCodeApi, VerificationApi};
use shared::models::{
    EntityId, MembershipDraft, MembershipRecord, PaymentChannel, RequirementDraft,
    RequirementRecord, VerifyAction,
};

use crate::context::SessionContext;
use crate::editor::Editor;
use crate::filter::{MembershipFilter, StatusTab};
use crate::notify::NoticeQueue;
use crate::store::CollectionStore;

/// Membership and requirement management screen
pub struct MembershipScreen<M, R>
where
    M: EntityApi<Entity = MembershipRecord, Draft = MembershipDraft> + VerificationApi,
    R: EntityApi<Entity = RequirementRecord, Draft = RequirementDraft> + QrCodeApi,
{
    session: SessionContext,
    memberships: CollectionStore<M>,
    requirements: CollectionStore<R>,
    filter: MembershipFilter,
    membership_editor: Editor<MembershipDraft>,
    requirement_editor: Editor<RequirementDraft>,
    /// Requirement name awaiting archive confirmation
    pending_archive: Option<EntityId>,
    notices: NoticeQueue,
}

impl<M, R> MembershipScreen<M, R>
where
    M: EntityApi<Entity = MembershipRecord, Draft = MembershipDraft> + VerificationApi,
    R: EntityApi<Entity = RequirementRecord, Draft = RequirementDraft> + QrCodeApi,
{
    pub fn new(membership_api: Arc<M>, requirement_api: Arc<R>, session: SessionContext) -> Self {
        Self {
            session,
            memberships: CollectionStore::new(membership_api),
            requirements: CollectionStore::new(requirement_api),
            filter: MembershipFilter::default(),
            membership_editor: Editor::closed(),
            requirement_editor: Editor::closed(),
            pending_archive: None,
            notices: NoticeQueue::new(),
        }
    }

    // ============ Accessors ============

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn memberships(&self) -> &CollectionStore<M> {
        &self.memberships
    }

    pub fn requirements(&self) -> &CollectionStore<R> {
        &self.requirements
    }

    pub fn filter(&self) -> &MembershipFilter {
        &self.filter
    }

    pub fn membership_editor(&self) -> &Editor<MembershipDraft> {
        &self.membership_editor
    }

    pub fn membership_editor_mut(&mut self) -> &mut Editor<MembershipDraft> {
        &mut self.membership_editor
    }

    pub fn requirement_editor(&self) -> &Editor<RequirementDraft> {
        &self.requirement_editor
    }

    pub fn requirement_editor_mut(&mut self) -> &mut Editor<RequirementDraft> {
        &mut self.requirement_editor
    }

    pub fn pending_archive(&self) -> Option<&str> {
        self.pending_archive.as_deref()
    }

    pub fn drain_notices(&mut self) -> Vec<crate::notify::Notice> {
        self.notices.drain()
    }

    // ============ Loading ============

    /// Reload the membership records. Failures are logged only; the
    /// previous records keep displaying.
    pub async fn refresh_memberships(&mut self) {
        let _ = self.memberships.load().await;
    }

    /// Reload the grouped requirements.
    pub async fn refresh_requirements(&mut self) {
        let _ = self.requirements.load().await;
    }

    pub async fn refresh_all(&mut self) {
        self.refresh_memberships().await;
        self.refresh_requirements().await;
    }

    // ============ Tabs and filters ============

    pub fn set_tab(&mut self, tab: StatusTab) {
        self.filter.tab = tab;
    }

    pub fn set_block_filter(&mut self, block: impl Into<String>) {
        self.filter.block = block.into();
    }

    pub fn set_year_filter(&mut self, year: impl Into<String>) {
        self.filter.year = year.into();
    }

    pub fn set_requirement_filter(&mut self, requirement: impl Into<String>) {
        self.filter.requirement = requirement.into();
    }

    pub fn set_name_search(&mut self, pattern: impl Into<String>) {
        self.filter.search_name = pattern.into();
    }

    /// The membership rows matching every active filter constraint.
    pub fn visible_memberships(&self) -> Vec<&MembershipRecord> {
        self.memberships
            .records()
            .iter()
            .filter(|m| self.filter.matches(m))
            .collect()
    }

    // ============ Payment verification ============

    /// Approve or deny a payment awaiting verification, then reload.
    pub async fn verify(&mut self, id: &str, action: VerifyAction) {
        let result = self.memberships.api().set_verification(id, action).await;
        match result {
            Ok(()) => {
                tracing::info!(
                    operator = %self.session.display_name,
                    id = %id,
                    action = action.as_str(),
                    "membership verification updated"
                );
                self.refresh_memberships().await;
                self.notices
                    .info(format!("Membership {} successfully!", action.past_tense()));
            }
            Err(err) => {
                tracing::error!(id = %id, error = %err, "failed to update membership verification");
                self.notices.error("Error updating membership verification");
            }
        }
    }

    // ============ Membership editor workflow ============

    pub fn open_add_membership(&mut self) {
        self.membership_editor.open_blank(MembershipDraft::default());
    }

    pub fn open_edit_membership(&mut self, id: &str) {
        match self.memberships.get(id) {
            Some(record) => {
                let draft = MembershipDraft::from(record);
                self.membership_editor.open_edit(id, draft);
            }
            None => self.notices.error("Membership record not found."),
        }
    }

    pub fn close_membership_editor(&mut self) {
        self.membership_editor.close();
    }

    /// Submit the membership form: create or update by target presence.
    pub async fn save_membership(&mut self) {
        let Some((target, draft)) = self.membership_editor.begin_submit() else {
            return;
        };

        if let Err(err) = draft.validate() {
            self.membership_editor.submit_failed(err.to_string());
            self.notices.error("Error saving membership");
            return;
        }

        let result = match target.as_deref() {
            Some(id) => self
                .memberships
                .update(id, &draft)
                .await
                .map(|_| "Membership updated successfully!"),
            None => self
                .memberships
                .create(&draft)
                .await
                .map(|_| "Membership created successfully!"),
        };

        match result {
            Ok(message) => {
                self.membership_editor.submit_succeeded();
                self.notices.info(message);
                self.refresh_memberships().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to save membership");
                self.membership_editor.submit_failed(err.to_string());
                self.notices.error("Error saving membership");
            }
        }
    }

    // ============ Requirement editor workflow ============

    pub fn open_add_requirement(&mut self) {
        self.requirement_editor.open_blank(RequirementDraft::default());
    }

    /// Open the price editor for one requirement, keyed by name.
    pub fn open_requirement_price(&mut self, name: &str) {
        match self.requirements.get(name) {
            Some(record) => {
                let draft = RequirementDraft {
                    requirement: record.requirement.clone(),
                    amount: record.amount.unwrap_or_default(),
                };
                self.requirement_editor.open_edit(name, draft);
            }
            None => self.notices.error("Requirement not found."),
        }
    }

    pub fn close_requirement_editor(&mut self) {
        self.requirement_editor.close();
    }

    /// Submit the requirement form (new requirement, or price edit).
    pub async fn save_requirement(&mut self) {
        let Some((target, draft)) = self.requirement_editor.begin_submit() else {
            return;
        };

        if let Err(err) = draft.validate() {
            self.requirement_editor.submit_failed(err.to_string());
            self.notices.error("Error saving requirement");
            return;
        }

        let result = match target.as_deref() {
            Some(name) => self
                .requirements
                .update(name, &draft)
                .await
                .map(|_| "Requirement updated successfully!"),
            None => self
                .requirements
                .create(&draft)
                .await
                .map(|_| "Requirement added successfully!"),
        };

        match result {
            Ok(message) => {
                self.requirement_editor.submit_succeeded();
                self.notices.info(message);
                self.refresh_requirements().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to save requirement");
                self.requirement_editor.submit_failed(err.to_string());
                self.notices.error("Error saving requirement");
            }
        }
    }

    // ============ Requirement archive (confirmation-gated) ============

    /// Ask to archive a requirement; nothing is issued until confirmed.
    pub fn request_archive_requirement(&mut self, name: &str) {
        self.pending_archive = Some(name.to_string());
    }

    pub fn cancel_archive(&mut self) {
        self.pending_archive = None;
    }

    /// Execute the confirmed archive (an unconditional delete on the wire).
    pub async fn confirm_archive(&mut self) {
        let Some(name) = self.pending_archive.take() else {
            return;
        };

        let result = self.requirements.delete(&name).await;
        match result {
            Ok(()) => {
                tracing::info!(
                    operator = %self.session.display_name,
                    requirement = %name,
                    "requirement archived"
                );
                self.notices.info("Requirement archived successfully!");
                self.refresh_requirements().await;
            }
            Err(err) => {
                tracing::error!(requirement = %name, error = %err, "failed to archive requirement");
                self.notices.error("Error archiving requirement");
            }
        }
    }

    // ============ QR code management ============

    /// Fetch the published QR code url for a payment channel.
    ///
    /// Lookup failures are logged only; the preview simply shows nothing.
    pub async fn qr_code(&self, channel: PaymentChannel) -> Option<String> {
        match self.requirements.api().qr_code(channel).await {
            Ok(data) => data.qr_code_url,
            Err(err) => {
                tracing::warn!(channel = %channel, error = %err, "failed to fetch QR code");
                None
            }
        }
    }

    /// Upload a new QR code for a requirement and payment channel.
    pub async fn upload_qr(
        &mut self,
        requirement: &str,
        channel: PaymentChannel,
        upload: &FileUpload,
    ) {
        if requirement.is_empty() {
            self.notices.error("No requirement selected for QR upload.");
            return;
        }

        let result = self
            .requirements
            .api()
            .upload_qr_code(requirement, channel, upload)
            .await;
        match result {
            Ok(()) => {
                tracing::info!(
                    operator = %self.session.display_name,
                    requirement = %requirement,
                    channel = %channel,
                    "requirement QR code uploaded"
                );
                self.notices.info("Requirement QR Code uploaded successfully!");
                self.refresh_requirements().await;
            }
            Err(err) => {
                tracing::error!(requirement = %requirement, error = %err, "QR code upload failed");
                self.notices.error("Error uploading requirement QR code");
            }
        }
    }
}
