//! Member lifecycle history events.
//!
//! The store appends a history row for every administrative change to a
//! member. Only `member_reactivated` matters to due-date replay: when its
//! date coincides with a payment and it carries a new joining date, the
//! cycle anchor moves. Every other kind is carried for display and ignored
//! by the engine.

use crate::domain::foundation::CalendarDate;
use serde::{Deserialize, Serialize};

/// Kind of administrative change recorded in a member's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberChangeType {
    MemberReactivated,
    MemberDeactivated,
    PlanChanged,
    DetailsUpdated,
    /// Kinds this crate does not know about yet. Ignored everywhere.
    #[serde(other)]
    Unknown,
}

/// One row of a member's lifecycle history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEvent {
    /// What changed.
    pub change_type: MemberChangeType,

    /// Calendar date of the event. The store names this `created_at`;
    /// it carries day precision only.
    #[serde(rename = "created_at")]
    pub occurred_on: CalendarDate,

    /// For reactivations, the reset anchor date. Absent on other kinds
    /// and on reactivations that did not move the anchor.
    pub new_joining_date: Option<CalendarDate>,
}

impl HistoryEvent {
    /// Returns true for `member_reactivated` rows.
    pub fn is_reactivation(&self) -> bool {
        self.change_type == MemberChangeType::MemberReactivated
    }
}
