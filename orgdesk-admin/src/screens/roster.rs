//! Officer roster screen
//!
//! Fetches the officer roster, renders it unfiltered, and drives add /
//! edit / remove / bulk-remove / import. Destructive actions are gated
//! behind an explicit confirmation step.

use std::sync::Arc;

use validator::Validate;

use orgdesk_client::{EntityApi, FileUpload};
use shared::models::{EntityId, OfficerDraft, OfficerRecord};

use crate::context::SessionContext;
use crate::editor::Editor;
use crate::notify::NoticeQueue;
use crate::selection::SelectionSet;
use crate::store::CollectionStore;

/// Destructive action awaiting explicit confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingRemoval {
    One(EntityId),
    Selected(Vec<EntityId>),
}

/// Officer roster management screen
pub struct RosterScreen<A>
where
    A: EntityApi<Entity = OfficerRecord, Draft = OfficerDraft>,
{
    session: SessionContext,
    store: CollectionStore<A>,
    selection: SelectionSet,
    editor: Editor<OfficerDraft>,
    pending: Option<PendingRemoval>,
    notices: NoticeQueue,
}

impl<A> RosterScreen<A>
where
    A: EntityApi<Entity = OfficerRecord, Draft = OfficerDraft>,
{
    pub fn new(api: Arc<A>, session: SessionContext) -> Self {
        Self {
            session,
            store: CollectionStore::new(api),
            selection: SelectionSet::new(),
            editor: Editor::closed(),
            pending: None,
            notices: NoticeQueue::new(),
        }
    }

    // ============ Accessors ============

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// The roster table shows the full collection; there is no filter.
    pub fn visible(&self) -> &[OfficerRecord] {
        self.store.records()
    }

    pub fn store(&self) -> &CollectionStore<A> {
        &self.store
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn editor(&self) -> &Editor<OfficerDraft> {
        &self.editor
    }

    /// Mutable editor access for form input.
    pub fn editor_mut(&mut self) -> &mut Editor<OfficerDraft> {
        &mut self.editor
    }

    pub fn pending(&self) -> Option<&PendingRemoval> {
        self.pending.as_ref()
    }

    /// Remove and return all queued notices.
    pub fn drain_notices(&mut self) -> Vec<crate::notify::Notice> {
        self.notices.drain()
    }

    // ============ Loading ============

    /// Reload the roster. A failed load is logged and the previous
    /// records keep displaying; it is not surfaced as a blocking error.
    pub async fn refresh(&mut self) {
        if self.store.load().await.is_ok() {
            let ids = self.store.ids();
            self.selection.prune(ids.iter().map(String::as_str));
        }
    }

    // ============ Selection ============

    pub fn toggle(&mut self, id: &str, checked: bool) {
        self.selection.toggle(id, checked);
    }

    /// Header checkbox: select every fetched officer, or none.
    pub fn set_all_selected(&mut self, checked: bool) {
        if checked {
            self.selection.select_all(self.store.ids());
        } else {
            self.selection.clear();
        }
    }

    pub fn is_all_selected(&self) -> bool {
        self.selection.is_all_selected(self.store.len())
    }

    // ============ Editor workflow ============

    /// Open a blank form for a new officer.
    pub fn open_add(&mut self) {
        self.editor.open_blank(OfficerDraft::default());
    }

    /// Open the form prefilled from an existing officer.
    pub fn open_edit(&mut self, id: &str) {
        match self.store.get(id) {
            Some(record) => {
                let draft = OfficerDraft::from(record);
                self.editor.open_edit(id, draft);
            }
            None => self.notices.error("Officer is no longer in the roster."),
        }
    }

    pub fn close_editor(&mut self) {
        self.editor.close();
    }

    /// Submit the open form: create without a target id, update with one.
    pub async fn save(&mut self) {
        let Some((target, draft)) = self.editor.begin_submit() else {
            return;
        };

        if let Err(err) = draft.validate() {
            self.editor.submit_failed(err.to_string());
            self.notices.error("Error saving officer");
            return;
        }

        let result = match target.as_deref() {
            Some(id) => self
                .store
                .update(id, &draft)
                .await
                .map(|_| "Officer updated successfully!"),
            None => self
                .store
                .create(&draft)
                .await
                .map(|_| "Officer added successfully!"),
        };

        match result {
            Ok(message) => {
                tracing::info!(operator = %self.session.display_name, "officer saved");
                self.editor.submit_succeeded();
                self.notices.info(message);
                self.refresh().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to save officer");
                self.editor.submit_failed(err.to_string());
                self.notices.error("Error saving officer");
            }
        }
    }

    // ============ Removal (confirmation-gated) ============

    /// Ask to remove one officer; nothing is issued until confirmed.
    pub fn request_remove(&mut self, id: &str) {
        self.pending = Some(PendingRemoval::One(id.to_string()));
    }

    /// Ask to remove every selected officer.
    pub fn request_remove_selected(&mut self) {
        if self.selection.is_empty() {
            self.notices.info("No officers selected.");
            return;
        }
        self.pending = Some(PendingRemoval::Selected(self.selection.ids()));
    }

    pub fn cancel_pending(&mut self) {
        self.pending = None;
    }

    /// Execute the confirmed removal.
    pub async fn confirm_pending(&mut self) {
        let Some(pending) = self.pending.take() else {
            return;
        };

        match pending {
            PendingRemoval::One(id) => {
                let result = self.store.delete(&id).await;
                match result {
                    Ok(()) => {
                        tracing::info!(operator = %self.session.display_name, id = %id, "officer removed");
                        self.refresh().await;
                    }
                    Err(err) => {
                        tracing::error!(id = %id, error = %err, "failed to remove officer");
                        self.notices.error("Error removing officer");
                    }
                }
            }
            PendingRemoval::Selected(ids) => {
                let report = self.store.bulk_delete(&ids).await;
                if report.is_success() {
                    tracing::info!(
                        operator = %self.session.display_name,
                        count = report.deleted,
                        "selected officers archived"
                    );
                    self.notices.info("Selected officers archived successfully!");
                    self.selection.clear();
                } else {
                    self.notices.error("Error archiving selected officers");
                }
                // Whichever deletes succeeded remain applied; reload and
                // let pruning drop the ids that are gone.
                self.refresh().await;
            }
        }
    }

    // ============ Import ============

    /// Submit a bulk import file; `None` means no file was chosen.
    pub async fn import(&mut self, upload: Option<&FileUpload>) {
        let Some(upload) = upload else {
            self.notices.error("Please select a file to import.");
            return;
        };

        let result = self.store.import(upload).await;
        match result {
            Ok(summary) => {
                tracing::info!(operator = %self.session.display_name, "officers imported");
                self.notices.info(summary.detail);
                self.refresh().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "officer import failed");
                self.notices.error("Error importing officers");
            }
        }
    }
}
