//! Create-or-edit form state machine
//!
//! States: `Closed -> Open(prefill) -> Submitting -> Closed`. Opening with
//! a target id means "edit"; without one means "create" - the distinction
//! is carried by id presence alone. A failed submit returns to `Open` with
//! the draft intact so user input is never lost.

use shared::models::EntityId;

/// Editor lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorPhase {
    #[default]
    Closed,
    Open,
    Submitting,
}

/// Form editor state for one draft type
#[derive(Debug, Clone)]
pub struct Editor<D> {
    phase: EditorPhase,
    target: Option<EntityId>,
    draft: Option<D>,
    error: Option<String>,
}

impl<D> Default for Editor<D> {
    fn default() -> Self {
        Self {
            phase: EditorPhase::Closed,
            target: None,
            draft: None,
            error: None,
        }
    }
}

impl<D: Clone> Editor<D> {
    pub fn closed() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> EditorPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase != EditorPhase::Closed
    }

    /// True when the editor was opened on an existing record.
    pub fn is_edit(&self) -> bool {
        self.target.is_some()
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn draft(&self) -> Option<&D> {
        self.draft.as_ref()
    }

    /// Mutable access for form input while open.
    pub fn draft_mut(&mut self) -> Option<&mut D> {
        match self.phase {
            EditorPhase::Open => self.draft.as_mut(),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Open a blank form ("create").
    pub fn open_blank(&mut self, draft: D) {
        self.phase = EditorPhase::Open;
        self.target = None;
        self.draft = Some(draft);
        self.error = None;
    }

    /// Open a prefilled form on an existing record ("edit").
    pub fn open_edit(&mut self, id: impl Into<EntityId>, draft: D) {
        self.phase = EditorPhase::Open;
        self.target = Some(id.into());
        self.draft = Some(draft);
        self.error = None;
    }

    /// Transition `Open -> Submitting` and hand back the work to do.
    ///
    /// Returns `None` unless the editor is open with a draft.
    pub fn begin_submit(&mut self) -> Option<(Option<EntityId>, D)> {
        if self.phase != EditorPhase::Open {
            return None;
        }
        let draft = self.draft.clone()?;
        self.phase = EditorPhase::Submitting;
        self.error = None;
        Some((self.target.clone(), draft))
    }

    /// Submit failed: back to `Open`, draft preserved, error attached.
    pub fn submit_failed(&mut self, message: impl Into<String>) {
        self.phase = EditorPhase::Open;
        self.error = Some(message.into());
    }

    /// Submit succeeded: close and discard the draft.
    pub fn submit_succeeded(&mut self) {
        *self = Self::default();
    }

    /// Explicit cancel from `Open` or mid-flight; discards the draft.
    pub fn close(&mut self) {
        *self = Self::default();
    }
}
