//! Per-field filter predicates
//!
//! All constraints combine with logical AND. Predicates are pure and
//! evaluated per record on demand; no index is kept at this scale.

use shared::models::MembershipRecord;

/// Sentinel choice value meaning "no constraint on this field"
pub const CHOICE_ALL: &str = "All";

/// Exact-match dropdown constraint. `"All"` always matches.
pub fn choice_matches(choice: &str, value: Option<&str>) -> bool {
    choice == CHOICE_ALL || value == Some(choice)
}

/// Case-folded substring search. The empty pattern always matches.
pub fn search_matches(pattern: &str, value: Option<&str>) -> bool {
    if pattern.is_empty() {
        return true;
    }
    match value {
        Some(v) => v.to_lowercase().contains(&pattern.to_lowercase()),
        None => false,
    }
}

/// Status tab over the membership table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusTab {
    /// Every record
    #[default]
    All,
    /// Records awaiting payment verification
    Verifying,
}

impl StatusTab {
    /// The verifying tab matches when the payment status is "verifying"
    /// or the verification status is "processing", case-insensitive.
    pub fn matches(&self, payment_status: Option<&str>, status: Option<&str>) -> bool {
        match self {
            StatusTab::All => true,
            StatusTab::Verifying => {
                payment_status.is_some_and(|s| s.eq_ignore_ascii_case("verifying"))
                    || status.is_some_and(|s| s.eq_ignore_ascii_case("processing"))
            }
        }
    }
}

/// Combined filter state for the membership table
#[derive(Debug, Clone)]
pub struct MembershipFilter {
    pub tab: StatusTab,
    pub block: String,
    pub year: String,
    pub requirement: String,
    pub search_name: String,
}

impl Default for MembershipFilter {
    fn default() -> Self {
        Self {
            tab: StatusTab::All,
            block: CHOICE_ALL.to_string(),
            year: CHOICE_ALL.to_string(),
            requirement: CHOICE_ALL.to_string(),
            search_name: String::new(),
        }
    }
}

impl MembershipFilter {
    /// True iff every configured constraint matches the record.
    pub fn matches(&self, record: &MembershipRecord) -> bool {
        let member = record.member.as_ref();

        self.tab
            .matches(record.payment_status.as_deref(), record.status.as_deref())
            && choice_matches(&self.block, member.and_then(|m| m.block.as_deref()))
            && choice_matches(&self.year, member.and_then(|m| m.year.as_deref()))
            && choice_matches(&self.requirement, record.requirement.as_deref())
            && search_matches(
                &self.search_name,
                member.and_then(|m| m.full_name.as_deref()),
            )
    }
}
