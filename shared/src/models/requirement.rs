//! Membership requirement model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use validator::Validate;

use super::{EntityId, Identified};

/// Payment channel a QR code is published for
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PaymentChannel {
    Gcash,
    Paymaya,
}

impl PaymentChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentChannel::Gcash => "gcash",
            PaymentChannel::Paymaya => "paymaya",
        }
    }
}

impl fmt::Display for PaymentChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Requirement record (one row per unique requirement)
///
/// The requirement name is the key used on the wire for updates, archive,
/// and QR uploads; `id` is display-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequirementRecord {
    pub id: EntityId,
    /// Requirement name, e.g. "1st Semester Membership"
    pub requirement: String,
    /// Price amount
    pub amount: Option<Decimal>,
    /// Published QR code urls, keyed by payment channel
    #[serde(default)]
    pub qr_codes: BTreeMap<PaymentChannel, String>,
}

impl Identified for RequirementRecord {
    /// The wire key for requirements is the requirement name.
    fn entity_id(&self) -> &str {
        &self.requirement
    }
}

/// Create/update payload for a requirement
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RequirementDraft {
    #[validate(length(min = 1, message = "requirement name is required"))]
    pub requirement: String,
    pub amount: Decimal,
}

/// QR code lookup response for one payment channel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QrCodeData {
    pub qr_code_url: Option<String>,
}
