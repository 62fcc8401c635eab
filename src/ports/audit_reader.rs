//! Audit reader port (read side).
//!
//! Defines the contract for loading the records the due-date audit
//! consumes. Implementations own all storage concerns: queries, scoping to
//! one member, and timezone normalization of dates. By the time a snapshot
//! crosses this boundary every date is an unambiguous calendar day.

use crate::domain::foundation::{CalendarDate, DomainError, MemberId};
use crate::domain::membership::{HistoryEvent, MemberRecord, PaymentEvent, Plan};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Reader port for due-date audit queries.
#[async_trait]
pub trait AuditReader: Send + Sync {
    /// Lists the members in audit scope, in the order the audit table
    /// should present them.
    async fn list_member_ids(&self) -> Result<Vec<MemberId>, DomainError>;

    /// Loads everything the replay engine needs for one member.
    ///
    /// Returns `None` if the member does not exist.
    async fn load_snapshot(
        &self,
        member_id: &MemberId,
    ) -> Result<Option<MemberAuditSnapshot>, DomainError>;
}

/// Everything the audit needs for one member, read at one point in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberAuditSnapshot {
    /// The member, including the original joining date.
    pub member: MemberRecord,

    /// The member's plan, already normalized and validated.
    pub plan: Plan,

    /// Full payment history, in no particular order.
    pub payments: Vec<PaymentEvent>,

    /// Full lifecycle history, in store order.
    pub history: Vec<HistoryEvent>,

    /// The next due date the store's trigger recorded. `None` when the
    /// trigger never fired (no payments yet).
    pub recorded_next_due: Option<CalendarDate>,
}
