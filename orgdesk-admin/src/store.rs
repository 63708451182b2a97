//! Collection store
//!
//! Source of truth for one view's entity collection. Every mutation is
//! followed by a full `load()` by the caller rather than local patching,
//! so no reconciliation logic lives here. A failed call never corrupts
//! the in-memory collection.

use std::sync::Arc;

use futures::future::join_all;

use orgdesk_client::{ClientError, ClientResult, EntityApi, FileUpload, ImportSummary};
use shared::models::{EntityId, Identified};

/// Outcome of a concurrent bulk delete
///
/// There is no rollback: deletes that succeeded stay applied server-side
/// even when the overall outcome is a failure.
#[derive(Debug)]
pub struct BulkDeleteReport {
    pub requested: usize,
    pub deleted: usize,
    pub failures: Vec<(EntityId, ClientError)>,
}

impl BulkDeleteReport {
    /// True when nothing was requested (nothing was sent to the backend).
    pub fn is_noop(&self) -> bool {
        self.requested == 0
    }

    pub fn is_success(&self) -> bool {
        self.requested > 0 && self.failures.is_empty()
    }
}

/// In-memory entity collection backed by one entity family's API
pub struct CollectionStore<A: EntityApi> {
    api: Arc<A>,
    entities: Vec<A::Entity>,
    has_loaded: bool,
}

impl<A: EntityApi> CollectionStore<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            entities: Vec::new(),
            has_loaded: false,
        }
    }

    /// The backing API, for family-specific operations.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// The current records, in fetch order.
    pub fn records(&self) -> &[A::Entity] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Whether at least one load has succeeded. Keeps "failed to load"
    /// distinguishable from "legitimately zero records".
    pub fn has_loaded(&self) -> bool {
        self.has_loaded
    }

    pub fn get(&self, id: &str) -> Option<&A::Entity> {
        self.entities.iter().find(|e| e.entity_id() == id)
    }

    /// Ids of the current records, in fetch order.
    pub fn ids(&self) -> Vec<EntityId> {
        self.entities.iter().map(|e| e.entity_id().to_string()).collect()
    }

    /// Replace the collection with a fresh fetch.
    ///
    /// On failure the previous records are kept and the error is returned
    /// for non-blocking surfacing.
    pub async fn load(&mut self) -> ClientResult<()> {
        match self.api.list().await {
            Ok(records) => {
                self.entities = records;
                self.has_loaded = true;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "collection load failed, keeping previous records");
                Err(err)
            }
        }
    }

    /// Submit a new entity. The collection reflects it only after the
    /// next `load()`.
    pub async fn create(&self, draft: &A::Draft) -> ClientResult<A::Entity> {
        self.api.create(draft).await
    }

    /// Update an existing entity, keyed by id.
    pub async fn update(&self, id: &str, draft: &A::Draft) -> ClientResult<A::Entity> {
        self.api.update(id, draft).await
    }

    /// Delete one entity. Idempotent from the caller's perspective.
    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.api.delete(id).await
    }

    /// Delete all of `ids` concurrently, fire-and-forget-all.
    ///
    /// An empty input short-circuits without touching the backend.
    pub async fn bulk_delete(&self, ids: &[EntityId]) -> BulkDeleteReport {
        if ids.is_empty() {
            return BulkDeleteReport {
                requested: 0,
                deleted: 0,
                failures: Vec::new(),
            };
        }

        let results = join_all(
            ids.iter()
                .map(|id| async move { (id.clone(), self.api.delete(id).await) }),
        )
        .await;

        let mut deleted = 0;
        let mut failures = Vec::new();
        for (id, result) in results {
            match result {
                Ok(()) => deleted += 1,
                Err(err) => {
                    tracing::warn!(id = %id, error = %err, "bulk delete entry failed");
                    failures.push((id, err));
                }
            }
        }

        BulkDeleteReport {
            requested: ids.len(),
            deleted,
            failures,
        }
    }

    /// Submit a bulk import file and return the backend's summary.
    pub async fn import(&self, upload: &FileUpload) -> ClientResult<ImportSummary> {
        self.api.import(upload).await
    }
}
