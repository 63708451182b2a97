//! Officer roster model

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{EntityId, Identified};

/// Officer record as returned by the roster endpoints
///
/// Display fields are optional; absent fields render as a dash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfficerRecord {
    pub id: EntityId,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub student_number: Option<String>,
    pub year: Option<String>,
    pub block: Option<String>,
    pub position: Option<String>,
}

impl Identified for OfficerRecord {
    fn entity_id(&self) -> &str {
        &self.id
    }
}

/// Create/update payload for an officer
///
/// The same payload shape serves both operations; the editor form submits
/// the full field set either way.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct OfficerDraft {
    #[validate(length(min = 1, message = "full name is required"))]
    pub full_name: String,
    #[validate(email(message = "invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
    #[validate(length(min = 1, message = "student number is required"))]
    pub student_number: String,
    pub year: String,
    pub block: String,
    pub position: String,
}

impl From<&OfficerRecord> for OfficerDraft {
    /// Prefill an editor draft from an existing record.
    fn from(record: &OfficerRecord) -> Self {
        Self {
            full_name: record.full_name.clone().unwrap_or_default(),
            email: record.email.clone().unwrap_or_default(),
            password: record.password.clone().unwrap_or_default(),
            student_number: record.student_number.clone().unwrap_or_default(),
            year: record.year.clone().unwrap_or_default(),
            block: record.block.clone().unwrap_or_default(),
            position: record.position.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn draft() -> OfficerDraft {
        OfficerDraft {
            full_name: "Juan Dela Cruz".into(),
            email: "juan@example.edu".into(),
            password: "hunter2".into(),
            student_number: "2021-00123".into(),
            year: "2nd Year".into(),
            block: "B".into(),
            position: "Treasurer".into(),
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn malformed_email_rejected() {
        let mut d = draft();
        d.email = "not-an-email".into();
        assert!(d.validate().is_err());
    }

    #[test]
    fn prefill_from_sparse_record() {
        let record = OfficerRecord {
            id: "ofc-1".into(),
            full_name: Some("Maria Santos".into()),
            email: None,
            password: None,
            student_number: None,
            year: None,
            block: None,
            position: None,
        };
        let d = OfficerDraft::from(&record);
        assert_eq!(d.full_name, "Maria Santos");
        assert_eq!(d.email, "");
    }
}
