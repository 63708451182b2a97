//! Membership record model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{EntityId, Identified};

/// Member profile embedded in a membership record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberProfile {
    pub full_name: Option<String>,
    pub block: Option<String>,
    pub year: Option<String>,
}

/// Membership record as returned by the membership endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MembershipRecord {
    pub id: EntityId,
    /// Linked member account id
    pub member_id: Option<EntityId>,
    /// Linked member profile; absent when the account was removed
    pub member: Option<MemberProfile>,
    /// Requirement name this record is for
    pub requirement: Option<String>,
    /// Payment status ("paid", "verifying", ...)
    pub payment_status: Option<String>,
    /// Uploaded receipt reference, if any
    pub receipt_path: Option<String>,
    /// Verification status ("processing", "approved", "denied")
    pub status: Option<String>,
    /// When the receipt was submitted for verification
    pub submitted_at: Option<DateTime<Utc>>,
}

impl Identified for MembershipRecord {
    fn entity_id(&self) -> &str {
        &self.id
    }
}

/// Create/update payload for a membership record
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct MembershipDraft {
    /// Member the record is linked to
    #[validate(length(min = 1, message = "member reference is required"))]
    pub member_id: String,
    #[validate(length(min = 1, message = "requirement is required"))]
    pub requirement: String,
    pub payment_status: Option<String>,
}

impl From<&MembershipRecord> for MembershipDraft {
    /// Prefill an editor draft from an existing record.
    fn from(record: &MembershipRecord) -> Self {
        Self {
            member_id: record.member_id.clone().unwrap_or_default(),
            requirement: record.requirement.clone().unwrap_or_default(),
            payment_status: record.payment_status.clone(),
        }
    }
}

/// Verification decision on a membership payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerifyAction {
    Approve,
    Deny,
}

impl VerifyAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerifyAction::Approve => "approve",
            VerifyAction::Deny => "deny",
        }
    }

    /// Past-tense verb for user-facing notices ("approved", "denied").
    pub fn past_tense(&self) -> &'static str {
        match self {
            VerifyAction::Approve => "approved",
            VerifyAction::Deny => "denied",
        }
    }
}
