//! Screen session context
//!
//! The signed-in officer's identity is passed into each screen explicitly
//! at construction instead of being read from ambient storage.

use shared::models::EntityId;

/// Identity of the officer driving a screen
#[derive(Debug, Clone)]
pub struct SessionContext {
    /// Officer account id, when known
    pub officer_id: Option<EntityId>,
    /// Display name used in logs and notices
    pub display_name: String,
}

impl SessionContext {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            officer_id: None,
            display_name: display_name.into(),
        }
    }

    pub fn with_officer_id(mut self, id: impl Into<EntityId>) -> Self {
        self.officer_id = Some(id.into());
        self
    }
}
