//! BuildAuditTableHandler - Query handler for the flat audit table.
//!
//! One row per member: the trigger-recorded next due date side by side
//! with the replayed expectation, plus the justification note.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::foundation::{CalendarDate, MemberId};
use crate::domain::membership::{DueDateReplayEngine, MembershipError, ReplayNote};
use crate::ports::AuditReader;

/// Query to build the audit table.
#[derive(Debug, Clone, Default)]
pub struct BuildAuditTableQuery {
    /// When true, only rows where the recorded and expected due dates
    /// disagree are returned.
    pub only_mismatches: bool,
}

/// One member's row in the audit table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRow {
    pub member_id: MemberId,
    pub member_name: String,
    pub joining_date: CalendarDate,
    pub plan_name: String,
    pub total_months: u32,

    /// What the store's trigger recorded.
    pub recorded_next_due: Option<CalendarDate>,

    /// What the replay says it should be.
    pub expected_next_due: Option<CalendarDate>,

    /// Justification, rendered for display ("Single payment",
    /// "Reactivated 2x", ...).
    pub note: String,

    /// True when recorded and expected agree.
    pub matches: bool,
}

/// Result of building the audit table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildAuditTableResult {
    /// Rows in the reader's member listing order.
    pub rows: Vec<AuditRow>,

    /// Count of members whose recorded due date disagrees with the
    /// replay, over the full population regardless of filtering.
    pub mismatch_count: usize,
}

/// Handler for the flat audit-table view.
pub struct BuildAuditTableHandler {
    reader: Arc<dyn AuditReader>,
}

impl BuildAuditTableHandler {
    pub fn new(reader: Arc<dyn AuditReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: BuildAuditTableQuery,
    ) -> Result<BuildAuditTableResult, MembershipError> {
        let member_ids = self.reader.list_member_ids().await?;

        let mut rows = Vec::with_capacity(member_ids.len());
        let mut mismatch_count = 0;

        for member_id in member_ids {
            let Some(snapshot) = self.reader.load_snapshot(&member_id).await? else {
                // Listed but gone by the time we loaded it. The audit is a
                // point-in-time report, so a vanished member is skipped,
                // not an error.
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
                // Internal-consistency fallback. The row still renders,
                // but this must be loud in logs.
                warn!(%member_id, "due-date replay hit the calculation-failed fallback");
            }

            let matches = snapshot.recorded_next_due == outcome.expected_next_due_date;
            if !matches {
                mismatch_count += 1;
            }

            if query.only_mismatches && matches {
                continue;
            }

            rows.push(AuditRow {
                member_id,
                member_name: snapshot.member.name,
                joining_date: snapshot.member.joining_date,
                plan_name: snapshot.plan.name.clone(),
                total_months: snapshot.plan.total_months(),
                recorded_next_due: snapshot.recorded_next_due,
                expected_next_due: outcome.expected_next_due_date,
                note: outcome.note.to_string(),
                matches,
            });
        }

        Ok(BuildAuditTableResult {
            rows,
            mismatch_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainError, ErrorCode, PaymentId, PlanId, Timestamp};
    use crate::domain::membership::{MemberRecord, MemberStatus, PaymentEvent, Plan};
    use crate::ports::MemberAuditSnapshot;
    use async_trait::async_trait;
    use std::collections::HashMap;

    // ════════════════════════════════════════════════════════════════════════════
    // Mock Implementation
    // ════════════════════════════════════════════════════════════════════════════

    struct MockAuditReader {
        order: Vec<MemberId>,
        snapshots: HashMap<MemberId, MemberAuditSnapshot>,
        fail_read: bool,
    }

    impl MockAuditReader {
        fn new() -> Self {
            Self {
                order: Vec::new(),
                snapshots: HashMap::new(),
                fail_read: false,
            }
        }

        fn with_snapshot(mut self, snapshot: MemberAuditSnapshot) -> Self {
            self.order.push(snapshot.member.id);
            self.snapshots.insert(snapshot.member.id, snapshot);
            self
        }

        fn with_phantom_member(mut self) -> Self {
            // Listed, but no snapshot behind it.
            self.order.push(MemberId::new());
            self
        }

        fn failing() -> Self {
            Self {
                order: Vec::new(),
                snapshots: HashMap::new(),
                fail_read: true,
            }
        }
    }

    #[async_trait]
    impl AuditReader for MockAuditReader {
        async fn list_member_ids(&self) -> Result<Vec<MemberId>, DomainError> {
            if self.fail_read {
                return Err(DomainError::new(ErrorCode::DatabaseError, "Simulated read failure"));
            }
            Ok(self.order.clone())
        }

        async fn load_snapshot(
            &self,
            member_id: &MemberId,
        ) -> Result<Option<MemberAuditSnapshot>, DomainError> {
            Ok(self.snapshots.get(member_id).cloned())
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Test Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn date(s: &str) -> CalendarDate {
        CalendarDate::parse(s).unwrap()
    }

    fn payment(payment_date: &str, created_secs: u64) -> PaymentEvent {
        PaymentEvent {
            id: PaymentId::new(),
            payment_date: date(payment_date),
            created_at: Timestamp::from_unix_secs(created_secs),
        }
    }

    fn snapshot(
        name: &str,
        joining: &str,
        total_months: u32,
        payments: Vec<PaymentEvent>,
        recorded_next_due: Option<&str>,
    ) -> MemberAuditSnapshot {
        MemberAuditSnapshot {
            member: MemberRecord {
                id: MemberId::new(),
                name: name.to_string(),
                joining_date: date(joining),
                status: MemberStatus::Active,
            },
            plan: Plan::new(PlanId::new(), "Test plan", total_months, 0).unwrap(),
            payments,
            history: vec![],
            recorded_next_due: recorded_next_due.map(date),
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Success Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn matching_member_produces_matching_row() {
        let reader = Arc::new(MockAuditReader::new().with_snapshot(snapshot(
            "Asha Rao",
            "2024-01-15",
            1,
            vec![payment("2024-01-15", 1000)],
            Some("2024-02-15"),
        )));

        let handler = BuildAuditTableHandler::new(reader);
        let result = handler.handle(BuildAuditTableQuery::default()).await.unwrap();

        assert_eq!(result.rows.len(), 1);
        assert_eq!(result.mismatch_count, 0);

        let row = &result.rows[0];
        assert!(row.matches);
        assert_eq!(row.expected_next_due, Some(date("2024-02-15")));
        assert_eq!(row.note, "Single payment");
    }

    #[tokio::test]
    async fn drifted_trigger_value_is_flagged_as_mismatch() {
        let reader = Arc::new(MockAuditReader::new().with_snapshot(snapshot(
            "Dev Patel",
            "2024-01-31",
            1,
            vec![payment("2024-01-31", 1000)],
            // The trigger overflowed into March instead of clamping.
            Some("2024-03-02"),
        )));

        let handler = BuildAuditTableHandler::new(reader);
        let result = handler.handle(BuildAuditTableQuery::default()).await.unwrap();

        assert_eq!(result.mismatch_count, 1);
        let row = &result.rows[0];
        assert!(!row.matches);
        assert_eq!(row.expected_next_due, Some(date("2024-02-29")));
        assert_eq!(row.recorded_next_due, Some(date("2024-03-02")));
    }

    #[tokio::test]
    async fn member_without_payments_matches_null_recorded_value() {
        let reader = Arc::new(MockAuditReader::new().with_snapshot(snapshot(
            "New Member",
            "2024-06-01",
            1,
            vec![],
            None,
        )));

        let handler = BuildAuditTableHandler::new(reader);
        let result = handler.handle(BuildAuditTableQuery::default()).await.unwrap();

        let row = &result.rows[0];
        assert!(row.matches);
        assert_eq!(row.expected_next_due, None);
        assert_eq!(row.note, "No payments");
    }

    #[tokio::test]
    async fn only_mismatches_filter_hides_clean_rows_but_counts_all() {
        let reader = Arc::new(
            MockAuditReader::new()
                .with_snapshot(snapshot(
                    "Clean",
                    "2024-01-15",
                    1,
                    vec![payment("2024-01-15", 1000)],
                    Some("2024-02-15"),
                ))
                .with_snapshot(snapshot(
                    "Drifted",
                    "2024-01-15",
                    1,
                    vec![payment("2024-01-15", 1000)],
                    Some("2024-02-16"),
                )),
        );

        let handler = BuildAuditTableHandler::new(reader);
        let result = handler
            .handle(BuildAuditTableQuery { only_mismatches: true })
            .await
            .unwrap();

        assert_eq!(result.rows.len(), 1);
        assert_eq!(result.rows[0].member_name, "Drifted");
        assert_eq!(result.mismatch_count, 1);
    }

    #[tokio::test]
    async fn rows_preserve_reader_listing_order() {
        let reader = Arc::new(
            MockAuditReader::new()
                .with_snapshot(snapshot("Zoe", "2024-01-01", 1, vec![], None))
                .with_snapshot(snapshot("Adam", "2024-01-01", 1, vec![], None)),
        );

        let handler = BuildAuditTableHandler::new(reader);
        let result = handler.handle(BuildAuditTableQuery::default()).await.unwrap();

        let names: Vec<_> = result.rows.iter().map(|r| r.member_name.as_str()).collect();
        assert_eq!(names, vec!["Zoe", "Adam"]);
    }

    #[tokio::test]
    async fn vanished_member_is_skipped() {
        let reader = Arc::new(
            MockAuditReader::new()
                .with_phantom_member()
                .with_snapshot(snapshot("Present", "2024-01-01", 1, vec![], None)),
        );

        let handler = BuildAuditTableHandler::new(reader);
        let result = handler.handle(BuildAuditTableQuery::default()).await.unwrap();

        assert_eq!(result.rows.len(), 1);
        assert_eq!(result.rows[0].member_name, "Present");
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Failure Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn fails_when_reader_fails() {
        let reader = Arc::new(MockAuditReader::failing());

        let handler = BuildAuditTableHandler::new(reader);
        let result = handler.handle(BuildAuditTableQuery::default()).await;

        assert!(result.is_err());
        assert!(result.unwrap_err().is_retryable());
    }
}
