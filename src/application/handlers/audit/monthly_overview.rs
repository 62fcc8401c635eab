//! MonthlyOverviewHandler - Query handler for the monthly dues overview.
//!
//! Buckets each member's expected next due date into `YYYY-MM` groups for
//! the calendar screen. Runs the same replay as the audit table; the two
//! views must never disagree on a member's expected date.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::foundation::{CalendarDate, MemberId};
use crate::domain::membership::{DueDateReplayEngine, MembershipError, ReplayNote};
use crate::ports::AuditReader;

/// Query for the monthly dues overview.
#[derive(Debug, Clone, Default)]
pub struct MonthlyOverviewQuery;

/// One member inside a monthly group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyDueEntry {
    pub member_id: MemberId,
    pub member_name: String,
    pub expected_next_due: CalendarDate,
    pub note: String,
}

/// All members whose expected due date falls in one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyDueGroup {
    /// `YYYY-MM` key.
    pub month: String,
    pub entries: Vec<MonthlyDueEntry>,
}

/// Result of the monthly overview query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyOverviewResult {
    /// Groups in ascending month order. Entries within a group keep the
    /// reader's member listing order.
    pub months: Vec<MonthlyDueGroup>,

    /// Members with no expected due date (no payment history).
    pub unscheduled: Vec<MemberId>,
}

/// Handler for the monthly-aggregate view.
pub struct MonthlyOverviewHandler {
    reader: Arc<dyn AuditReader>,
}

impl MonthlyOverviewHandler {
    pub fn new(reader: Arc<dyn AuditReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        _query: MonthlyOverviewQuery,
    ) -> Result<MonthlyOverviewResult, MembershipError> {
        let member_ids = self.reader.list_member_ids().await?;

        let mut buckets: BTreeMap<String, Vec<MonthlyDueEntry>> = BTreeMap::new();
        let mut unscheduled = Vec::new();

        for member_id in member_ids {
            let Some(snapshot) = self.reader.load_snapshot(&member_id).await? else {
                warn!(%member_id, "member disappeared between listing and snapshot load");
                continue;
            };

            let outcome = DueDateReplayEngine::replay(
                snapshot.member.joining_date,
                snapshot.plan.total_months(),
                &snapshot.payments,
                &snapshot.history,
            )?;

            if outcome.note == ReplayNote::CalculationFailed {
                warn!(%member_id, "due-date replay hit the calculation-failed fallback");
            }

            match outcome.expected_next_due_date {
                Some(due) => buckets.entry(due.month_key()).or_default().push(MonthlyDueEntry {
                    member_id,
                    member_name: snapshot.member.name,
                    expected_next_due: due,
                    note: outcome.note.to_string(),
                }),
                None => unscheduled.push(member_id),
            }
        }

        let months = buckets
            .into_iter()
            .map(|(month, entries)| MonthlyDueGroup { month, entries })
            .collect();

        Ok(MonthlyOverviewResult { months, unscheduled })
    }
}
