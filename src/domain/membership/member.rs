//! Member snapshot record.

use crate::domain::foundation::{CalendarDate, MemberId};
use serde::{Deserialize, Serialize};

use super::MemberStatus;

/// Snapshot of a gym member as supplied by the data store.
///
/// `joining_date` is the anchor for due-date cycles. It is immutable in the
/// store except when a reactivation event resets it; the replay engine
/// applies those resets itself while walking the history, so this field
/// always holds the member's *original* joining date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRecord {
    /// Member ID.
    pub id: MemberId,

    /// Display name, as stored.
    pub name: String,

    /// Anchor date for due-date cycles.
    pub joining_date: CalendarDate,

    /// Current standing. Informational only to the replay engine.
    pub status: MemberStatus,
}
