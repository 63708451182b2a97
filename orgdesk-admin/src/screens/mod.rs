//! Admin screens
//!
//! Each screen owns its collection store(s), selection, filter, and editor
//! state, and exposes one method per user action. A frontend renders from
//! the accessors and drains the notice queue after each call.

mod membership;
mod roster;

pub use membership::MembershipScreen;
pub use roster::{PendingRemoval, RosterScreen};
